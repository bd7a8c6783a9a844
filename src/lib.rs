#![forbid(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::all))]

//! # Primer
//!
//! Small, strongly typed helpers and one delayed, fallible async computation.
//!
//! ## Features
//!
//! - **Text casing** with an optional uppercase flag
//! - **Slice helpers**: high-rating filter, order-preserving concatenation, max-by-price
//! - **Vehicles** built by composition, reporting through pluggable reporters
//! - **Value measurement** over a text-or-number sum type
//! - **Day classification** over a closed weekday enum
//! - **Delayed squaring** on the tokio timer, with shareable single-resolution tasks
//!
//! ## Quick Start
//!
//! ```rust
//! use primer::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     assert_eq!(format("shout", None), "SHOUT");
//!     assert_eq!(classify(Weekday::Sunday), DayType::Weekend);
//!
//!     let task = DelayedSquarer::new().spawn(5.0);
//!     assert_eq!(task.await, Ok(25.0));
//! }
//! ```

pub mod collections;
pub mod day;
pub mod error;
pub mod measure;
pub mod prelude;
pub mod square;
pub mod text;
pub mod vehicle;

// Re-exports
pub use collections::{concatenate, filter_high_rated, most_expensive, Product, RatableItem};
pub use day::{classify, DayType, Weekday};
pub use error::{ParseWeekdayError, SquareError};
pub use measure::{measure, Value};
pub use square::{square_delayed, DelayedSquarer, SquareService, SquareTask, TaskState, SQUARE_DELAY};
pub use text::{format, TextCase};
pub use vehicle::{Car, LogReporter, MemoryReporter, Reporter, StdoutReporter, Vehicle};

//! Convenient re-exports for common Primer types.
pub use crate::{
    collections::{
        concatenate, concatenate_owned, filter_high_rated, most_expensive, Product, RatableItem,
        HIGH_RATING_THRESHOLD,
    },
    day::{classify, DayType, Weekday},
    error::{ParseWeekdayError, SquareError},
    measure::{measure, Value},
    square::{square_delayed, DelayedSquarer, SquareService, SquareTask, TaskState, SQUARE_DELAY},
    text::{format, format_with, TextCase},
    vehicle::{Car, LogReporter, MemoryReporter, Reporter, StdoutReporter, Vehicle},
};

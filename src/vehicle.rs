//! Vehicles and the reporters their descriptions are written to.
//!
//! A [`Car`] embeds a [`Vehicle`] rather than extending it: the vehicle's description is
//! reached through delegation and the car adds its own model line.
//!
//! ```rust
//! use primer::vehicle::{Car, MemoryReporter};
//!
//! let car = Car::new("Toyota", 2020, "Corolla");
//! let reporter = MemoryReporter::new();
//! car.info(&reporter);
//! car.model_info(&reporter);
//! assert_eq!(reporter.lines(), vec!["Make: Toyota, Year: 2020", "Model: Corolla"]);
//! ```

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for descriptive lines.
pub trait Reporter: Send + Sync + fmt::Debug {
    fn report(&self, line: &str);
}

/// Reporter that logs each line through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, line: &str) {
        tracing::info!(line, "vehicle_info");
    }
}

/// Reporter that prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, line: &str) {
        // Write errors are dropped; `report` has no error channel.
        let _ = write_line(&mut std::io::stdout().lock(), line);
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

/// Reporter that keeps every line in memory. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, line: &str) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).push(line.to_owned());
    }
}

/// A vehicle's make and model year, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self { make: make.into(), year }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `Make: <make>, Year: <year>`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn info(&self, reporter: &dyn Reporter) {
        reporter.report(&self.describe());
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Make: {}, Year: {}", self.make, self.year)
    }
}

/// A vehicle with a model name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self { vehicle: Vehicle::new(make, year), model: model.into() }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn describe(&self) -> String {
        self.vehicle.describe()
    }

    /// `Model: <model>`
    pub fn describe_model(&self) -> String {
        format!("Model: {}", self.model)
    }

    pub fn info(&self, reporter: &dyn Reporter) {
        self.vehicle.info(reporter);
    }

    pub fn model_info(&self, reporter: &dyn Reporter) {
        reporter.report(&self.describe_model());
    }
}

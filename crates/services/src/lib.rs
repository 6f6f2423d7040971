#![forbid(unsafe_code)]

pub mod drill;
pub mod error;

pub use drill_core::Clock;

pub use drill::{DrillAnswer, DrillReport, DrillService};
pub use error::DrillError;

mod report;
mod service;

pub use report::DrillReport;
pub use service::{DrillAnswer, DrillService};

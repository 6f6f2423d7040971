mod problem;
mod session;
mod settings;

pub(crate) use problem::Operation;
pub use problem::{Answer, Operator, Problem, ProblemError};
pub use session::{DrillSummary, Session, SessionError, SessionStatus, SubmitOutcome};
pub use settings::{DrillSettings, MAX_QUESTIONS, OperandRanges, SettingsError};

#![forbid(unsafe_code)]

pub mod generator;
pub mod model;
pub mod time;

pub use generator::{ProblemGenerator, ProblemSource, RandomProblems, ScriptedProblems};
pub use model::{
    Answer, DrillSettings, DrillSummary, OperandRanges, Operator, Problem, ProblemError, Session,
    SessionError, SessionStatus, SettingsError, SubmitOutcome,
};
pub use time::Clock;

mod drill_vm;
mod keypad;

pub use drill_vm::{DrillEffect, DrillNotice, DrillVm, Feedback, MAX_PENDING_LEN};
pub use keypad::{DrillAction, KEYPAD, KeypadKey, action_for_key};

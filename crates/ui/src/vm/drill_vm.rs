use log::warn;

use drill_core::Answer;
use services::{DrillReport, DrillService};

use super::keypad::DrillAction;

/// Longest answer the keypad will collect.
pub const MAX_PENDING_LEN: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillEffect {
    None,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct_answer: Answer },
}

impl Feedback {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "Your answer is correct!".to_string(),
            Feedback::Incorrect { correct_answer } => {
                format!("Wrong answer! The correct answer is {correct_answer}")
            }
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

/// What to tell the learner after their last submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrillNotice {
    pub feedback: Feedback,
    /// Set when that submit finished the drill.
    pub report: Option<DrillReport>,
}

/// Drill screen state: the running drill, the answer being typed and the last notice.
pub struct DrillVm {
    drill: DrillService,
    pending: String,
    notice: Option<DrillNotice>,
}

impl DrillVm {
    #[must_use]
    pub fn new(drill: DrillService) -> Self {
        Self {
            drill,
            pending: String::new(),
            notice: None,
        }
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, action: DrillAction) -> DrillEffect {
        match action {
            DrillAction::Digit(value) => {
                if let Some(ch) = char::from_digit(u32::from(value), 10) {
                    self.push(ch);
                }
            }
            DrillAction::Decimal => {
                if !self.pending.contains('.') {
                    self.push('.');
                }
            }
            DrillAction::Clear => self.pending.clear(),
            DrillAction::Backspace => {
                self.pending.pop();
            }
            DrillAction::Submit => self.submit(),
            DrillAction::Restart => self.restart(),
            DrillAction::Exit => return DrillEffect::Exit,
        }
        DrillEffect::None
    }

    fn push(&mut self, ch: char) {
        if self.input_enabled() && self.pending.len() < MAX_PENDING_LEN {
            self.pending.push(ch);
        }
    }

    fn submit(&mut self) {
        if !self.input_enabled() {
            return;
        }
        let answer = std::mem::take(&mut self.pending);
        match self.drill.submit(&answer) {
            Ok(result) => {
                let feedback = if result.outcome.correct {
                    Feedback::Correct
                } else {
                    Feedback::Incorrect {
                        correct_answer: result.outcome.correct_answer,
                    }
                };
                self.notice = Some(DrillNotice {
                    feedback,
                    report: result.report,
                });
            }
            Err(err) => warn!("submit ignored: {err}"),
        }
    }

    fn restart(&mut self) {
        self.drill.restart();
        self.pending.clear();
        self.notice = None;
    }

    #[must_use]
    pub fn drill(&self) -> &DrillService {
        &self.drill
    }

    #[must_use]
    pub fn expression(&self) -> String {
        self.drill.current_problem().expression()
    }

    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    #[must_use]
    pub fn notice(&self) -> Option<&DrillNotice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        self.drill.session().summary().score_label()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let session = self.drill.session();
        let current = if session.is_complete() {
            session.question_count()
        } else {
            session.question_count() + 1
        };
        format!("Question {current} of {}", session.total_questions())
    }

    /// Keypad and submit are disabled once the drill is complete.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        !self.drill.is_complete()
    }
}

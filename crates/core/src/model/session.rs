use thiserror::Error;

use crate::generator::ProblemSource;
use crate::model::{Answer, Problem};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a drill needs at least one question")]
    NoQuestions,

    #[error("drill already completed")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Complete,
}

/// Result of submitting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub correct: bool,
    pub correct_answer: Answer,
    /// The problem that was answered.
    pub problem: Problem,
    /// Session status after the answer was recorded.
    pub status: SessionStatus,
}

/// Score so far, for the "Score: s/n" line and the end-of-drill message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillSummary {
    pub score: u32,
    pub answered: u32,
    pub total: u32,
}

impl DrillSummary {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}/{}", self.score, self.answered)
    }

    /// Whole-number percentage of answered questions that were correct.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.answered == 0 {
            return 0;
        }
        self.score * 100 / self.answered
    }
}

/// One run of `total_questions` problems.
///
/// The only transitions are Active --submit(last)--> Complete and
/// Complete --restart--> Active. `question_count` never exceeds
/// `total_questions`, and the session is Complete exactly when they are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: u32,
    question_count: u32,
    total_questions: u32,
    current: Problem,
    status: SessionStatus,
}

impl Session {
    /// Start a fresh session and draw its first problem.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` if `total_questions` is zero.
    pub fn start<S: ProblemSource + ?Sized>(
        total_questions: u32,
        source: &mut S,
    ) -> Result<Self, SessionError> {
        if total_questions == 0 {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self {
            score: 0,
            question_count: 0,
            total_questions,
            current: source.next_problem(),
            status: SessionStatus::Active,
        })
    }

    /// Check `user_answer` against the current problem and advance.
    ///
    /// The question count always goes up by one. A new problem is drawn only while
    /// questions remain.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session has already finished.
    pub fn submit<S: ProblemSource + ?Sized>(
        &mut self,
        user_answer: &str,
        source: &mut S,
    ) -> Result<SubmitOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        let problem = self.current;
        let correct = problem.check(user_answer);
        if correct {
            self.score += 1;
        }
        self.question_count += 1;

        if self.question_count < self.total_questions {
            self.current = source.next_problem();
        } else {
            self.status = SessionStatus::Complete;
        }

        Ok(SubmitOutcome {
            correct,
            correct_answer: problem.answer(),
            problem,
            status: self.status,
        })
    }

    /// Reset to a fresh session with the same length.
    pub fn restart<S: ProblemSource + ?Sized>(&mut self, source: &mut S) {
        self.score = 0;
        self.question_count = 0;
        self.status = SessionStatus::Active;
        self.current = source.next_problem();
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn current_problem(&self) -> &Problem {
        &self.current
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }

    #[must_use]
    pub fn summary(&self) -> DrillSummary {
        DrillSummary {
            score: self.score,
            answered: self.question_count,
            total: self.total_questions,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

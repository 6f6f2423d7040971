use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use drill_core::{
    DrillSettings, Problem, ProblemGenerator, ProblemSource, RandomProblems, Session,
    SubmitOutcome,
};

use super::report::DrillReport;
use crate::{Clock, DrillError};

/// Result of answering the current problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillAnswer {
    pub outcome: SubmitOutcome,
    /// Present when this answer finished the drill.
    pub report: Option<DrillReport>,
}

/// Runs one drill at a time: owns the session, its problem source and the clock.
///
/// The presentation layer drives it with `submit` and `restart`; nothing else
/// mutates the session.
pub struct DrillService {
    session: Session,
    source: Box<dyn ProblemSource + Send>,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl DrillService {
    /// Start a drill with random problems.
    ///
    /// A `seed` makes the problem sequence reproducible; without one the RNG is
    /// seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns `DrillError::Session` if the session cannot start.
    pub fn new(
        settings: DrillSettings,
        seed: Option<u64>,
        clock: Clock,
    ) -> Result<Self, DrillError> {
        let generator = ProblemGenerator::new(settings.ranges());
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_source(settings, Box::new(RandomProblems::new(generator, rng)), clock)
    }

    /// Start a drill that draws problems from `source`.
    ///
    /// # Errors
    ///
    /// Returns `DrillError::Session` if the session cannot start.
    pub fn with_source(
        settings: DrillSettings,
        mut source: Box<dyn ProblemSource + Send>,
        clock: Clock,
    ) -> Result<Self, DrillError> {
        let session = Session::start(settings.total_questions(), source.as_mut())?;
        info!("drill started: {} questions", settings.total_questions());
        Ok(Self {
            session,
            source,
            clock,
            started_at: clock.now(),
            completed_at: None,
        })
    }

    /// Check `answer` against the current problem and move on.
    ///
    /// # Errors
    ///
    /// Returns `DrillError::Completed` if the drill has already finished.
    pub fn submit(&mut self, answer: &str) -> Result<DrillAnswer, DrillError> {
        let outcome = self.session.submit(answer, self.source.as_mut())?;
        debug!(
            "answered {} with {answer:?}: correct={} (expected {})",
            outcome.problem.expression(),
            outcome.correct,
            outcome.correct_answer,
        );

        let report = if self.session.is_complete() {
            self.completed_at = Some(self.clock.now());
            let report = self.report();
            if let Some(report) = &report {
                info!(
                    "drill complete: {}/{} correct",
                    report.summary.score, report.summary.total
                );
            }
            report
        } else {
            None
        };

        Ok(DrillAnswer { outcome, report })
    }

    /// Throw away the current drill and start a new one with the same settings.
    pub fn restart(&mut self) {
        self.session.restart(self.source.as_mut());
        self.started_at = self.clock.now();
        self.completed_at = None;
        info!("drill restarted");
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn current_problem(&self) -> &Problem {
        self.session.current_problem()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Final report, once the drill is complete.
    #[must_use]
    pub fn report(&self) -> Option<DrillReport> {
        let completed_at = self.completed_at?;
        Some(DrillReport {
            summary: self.session.summary(),
            started_at: self.started_at,
            completed_at,
        })
    }

    /// Replace the clock; mainly for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

impl fmt::Debug for DrillService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrillService")
            .field("session", &self.session)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

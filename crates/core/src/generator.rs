use std::num::NonZeroU32;

use rand::Rng;

use crate::model::{OperandRanges, Operation, Operator, Problem};

/// Produces random problems within a set of operand ranges.
///
/// The generator itself holds no randomness; callers inject the RNG so a seeded
/// `StdRng` yields the same drill every time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemGenerator {
    ranges: OperandRanges,
}

impl ProblemGenerator {
    #[must_use]
    pub fn new(ranges: OperandRanges) -> Self {
        Self { ranges }
    }

    /// Pick an operator uniformly, then operands from that operator's range.
    ///
    /// - Addition/subtraction: operands in `0..=add_sub_max`. Subtraction puts the
    ///   larger operand first so the answer is never negative.
    /// - Multiplication/division: operands in `1..=mul_div_max`. Division answers
    ///   are rounded to two decimals.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Problem {
        let operator = Operator::ALL[rng.random_range(0..Operator::ALL.len())];

        let operation = match operator {
            Operator::Add => Operation::Add(self.add_sub_operand(rng), self.add_sub_operand(rng)),
            Operator::Subtract => {
                let a = self.add_sub_operand(rng);
                let b = self.add_sub_operand(rng);
                Operation::Subtract(a.max(b), a.min(b))
            }
            Operator::Multiply => {
                Operation::Multiply(self.mul_div_operand(rng), self.mul_div_operand(rng))
            }
            Operator::Divide => Operation::Divide(self.mul_div_operand(rng), self.divisor(rng)),
        };
        operation.solve()
    }

    fn add_sub_operand<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(0..=self.ranges.add_sub_max())
    }

    fn mul_div_operand<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.ranges.mul_div_max())
    }

    // Same distribution as `mul_div_operand`, typed so the quotient cannot divide by zero.
    fn divisor<R: Rng + ?Sized>(&self, rng: &mut R) -> NonZeroU32 {
        NonZeroU32::MIN.saturating_add(rng.random_range(0..self.ranges.mul_div_max()))
    }
}

//
// ─── PROBLEM SOURCES ──────────────────────────────────────────────────────────
//

/// Supplies the next problem of a session.
pub trait ProblemSource {
    fn next_problem(&mut self) -> Problem;
}

/// Random problems from a `ProblemGenerator` and an owned RNG.
#[derive(Debug, Clone)]
pub struct RandomProblems<R> {
    generator: ProblemGenerator,
    rng: R,
}

impl<R: Rng> RandomProblems<R> {
    #[must_use]
    pub fn new(generator: ProblemGenerator, rng: R) -> Self {
        Self { generator, rng }
    }
}

impl<R: Rng> ProblemSource for RandomProblems<R> {
    fn next_problem(&mut self) -> Problem {
        self.generator.generate(&mut self.rng)
    }
}

/// A fixed list of problems, repeated from the start once exhausted.
///
/// Useful for replaying a known drill.
#[derive(Debug, Clone)]
pub struct ScriptedProblems {
    problems: Vec<Problem>,
    next: usize,
}

impl ScriptedProblems {
    /// Returns `None` when `problems` is empty.
    #[must_use]
    pub fn new(problems: Vec<Problem>) -> Option<Self> {
        if problems.is_empty() {
            return None;
        }
        Some(Self { problems, next: 0 })
    }
}

impl ProblemSource for ScriptedProblems {
    fn next_problem(&mut self) -> Problem {
        let problem = self.problems[self.next];
        self.next = (self.next + 1) % self.problems.len();
        problem
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

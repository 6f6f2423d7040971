use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("division by zero: {dividend} ÷ 0")]
    DivisionByZero { dividend: u32 },
}

//
// ─── OPERATOR ─────────────────────────────────────────────────────────────────
//

/// The four arithmetic operations a drill can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in the order the generator indexes them.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown to the learner.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// An exact decimal answer with two fractional digits.
///
/// Stored as a count of hundredths so comparisons never go through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Answer {
    hundredths: i64,
}

impl Answer {
    #[must_use]
    pub const fn whole(value: i64) -> Self {
        Self {
            hundredths: value * 100,
        }
    }

    #[must_use]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self { hundredths }
    }

    #[must_use]
    pub const fn hundredths(self) -> i64 {
        self.hundredths
    }

    /// `dividend / divisor` rounded to two decimal places.
    ///
    /// Ties are rounded to the even hundredth (1 ÷ 8 = 0.125 becomes 0.12).
    #[must_use]
    pub fn rounded_quotient(dividend: u32, divisor: NonZeroU32) -> Self {
        let scaled = i64::from(dividend) * 100;
        let divisor = i64::from(divisor.get());
        let quotient = scaled / divisor;
        let twice_remainder = (scaled % divisor) * 2;

        let hundredths = match twice_remainder.cmp(&divisor) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
            std::cmp::Ordering::Equal => quotient + 1,
        };
        Self { hundredths }
    }

    /// Parse what the learner typed.
    ///
    /// Accepts an optional leading `-`, digits and at most one `.`. Extra fractional
    /// digits past the second are accepted only when they are zeros, so `"1.750"`
    /// matches 1.75 but `"1.755"` is rejected. Returns `None` for anything else,
    /// including the empty string.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return None;
        }

        let (kept, dropped) = frac_part.split_at(frac_part.len().min(2));
        if dropped.bytes().any(|b| b != b'0') {
            return None;
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        let mut fraction = kept
            .bytes()
            .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        if kept.len() == 1 {
            fraction *= 10;
        }

        let magnitude = whole.checked_mul(100)?.checked_add(fraction)?;
        Some(Self {
            hundredths: if negative { -magnitude } else { magnitude },
        })
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let magnitude = self.hundredths.unsigned_abs();
        let whole = magnitude / 100;
        let fraction = magnitude % 100;

        if fraction == 0 {
            write!(f, "{sign}{whole}")
        } else if fraction % 10 == 0 {
            write!(f, "{sign}{whole}.{}", fraction / 10)
        } else {
            write!(f, "{sign}{whole}.{fraction:02}")
        }
    }
}

//
// ─── OPERATION ────────────────────────────────────────────────────────────────
//

/// An operator applied to operands it accepts. A division always has a
/// non-zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Add(u32, u32),
    Subtract(u32, u32),
    Multiply(u32, u32),
    Divide(u32, NonZeroU32),
}

impl Operation {
    /// The problem for this operation, with its correct answer.
    pub(crate) fn solve(self) -> Problem {
        let (operator, operand1, operand2, answer) = match self {
            Operation::Add(a, b) => (
                Operator::Add,
                a,
                b,
                Answer::whole(i64::from(a) + i64::from(b)),
            ),
            Operation::Subtract(a, b) => (
                Operator::Subtract,
                a,
                b,
                Answer::whole(i64::from(a) - i64::from(b)),
            ),
            Operation::Multiply(a, b) => (
                Operator::Multiply,
                a,
                b,
                Answer::whole(i64::from(a) * i64::from(b)),
            ),
            Operation::Divide(a, divisor) => (
                Operator::Divide,
                a,
                divisor.get(),
                Answer::rounded_quotient(a, divisor),
            ),
        };
        Problem {
            operator,
            operand1,
            operand2,
            answer,
        }
    }
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// One generated arithmetic question and its correct answer.
///
/// Problems are replaced each round, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    operator: Operator,
    operand1: u32,
    operand2: u32,
    answer: Answer,
}

impl Problem {
    /// Build a problem and compute its answer. Operands are used in the given order.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::DivisionByZero` for a division by zero.
    pub fn new(operator: Operator, operand1: u32, operand2: u32) -> Result<Self, ProblemError> {
        let operation = match operator {
            Operator::Add => Operation::Add(operand1, operand2),
            Operator::Subtract => Operation::Subtract(operand1, operand2),
            Operator::Multiply => Operation::Multiply(operand1, operand2),
            Operator::Divide => {
                let divisor = NonZeroU32::new(operand2).ok_or(ProblemError::DivisionByZero {
                    dividend: operand1,
                })?;
                Operation::Divide(operand1, divisor)
            }
        };
        Ok(operation.solve())
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn operand1(&self) -> u32 {
        self.operand1
    }

    #[must_use]
    pub fn operand2(&self) -> u32 {
        self.operand2
    }

    #[must_use]
    pub fn answer(&self) -> Answer {
        self.answer
    }

    /// Human-readable form, e.g. `"7 ÷ 4 ="`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {} =", self.operand1, self.operator, self.operand2)
    }

    /// Returns true when `input` is exactly the correct answer.
    ///
    /// Malformed or empty input is just a wrong answer.
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        Answer::parse(input) == Some(self.answer)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

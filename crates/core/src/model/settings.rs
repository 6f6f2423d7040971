use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("total questions must be between 1 and 100 (got {0})")]
    InvalidTotalQuestions(u32),

    #[error("addition/subtraction maximum must be between 1 and 999 (got {0})")]
    InvalidAddSubMax(u32),

    #[error("multiplication/division maximum must be between 1 and 99 (got {0})")]
    InvalidMulDivMax(u32),
}

/// Upper bound for the length of a single drill.
pub const MAX_QUESTIONS: u32 = 100;
const MAX_ADD_SUB: u32 = 999;
const MAX_MUL_DIV: u32 = 99;

//
// ─── OPERAND RANGES ────────────────────────────────────────────────────────────
//

/// Inclusive upper bounds for generated operands.
///
/// Addition and subtraction draw from `0..=add_sub_max`; multiplication and
/// division draw from `1..=mul_div_max`, so a divisor is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRanges {
    add_sub_max: u32,
    mul_div_max: u32,
}

impl OperandRanges {
    pub const DEFAULT_ADD_SUB_MAX: u32 = 49;
    pub const DEFAULT_MUL_DIV_MAX: u32 = 12;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidAddSubMax` or `SettingsError::InvalidMulDivMax`
    /// when a bound is zero or unreasonably large.
    pub fn new(add_sub_max: u32, mul_div_max: u32) -> Result<Self, SettingsError> {
        if !(1..=MAX_ADD_SUB).contains(&add_sub_max) {
            return Err(SettingsError::InvalidAddSubMax(add_sub_max));
        }
        if !(1..=MAX_MUL_DIV).contains(&mul_div_max) {
            return Err(SettingsError::InvalidMulDivMax(mul_div_max));
        }
        Ok(Self {
            add_sub_max,
            mul_div_max,
        })
    }

    #[must_use]
    pub fn add_sub_max(&self) -> u32 {
        self.add_sub_max
    }

    #[must_use]
    pub fn mul_div_max(&self) -> u32 {
        self.mul_div_max
    }
}

impl Default for OperandRanges {
    fn default() -> Self {
        Self {
            add_sub_max: Self::DEFAULT_ADD_SUB_MAX,
            mul_div_max: Self::DEFAULT_MUL_DIV_MAX,
        }
    }
}

//
// ─── DRILL SETTINGS ────────────────────────────────────────────────────────────
//

/// Configuration for one drill: its length and operand ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillSettings {
    total_questions: u32,
    ranges: OperandRanges,
}

impl DrillSettings {
    pub const DEFAULT_TOTAL_QUESTIONS: u32 = 10;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidTotalQuestions` if `total_questions` is
    /// outside `1..=MAX_QUESTIONS`.
    pub fn new(total_questions: u32, ranges: OperandRanges) -> Result<Self, SettingsError> {
        if !(1..=MAX_QUESTIONS).contains(&total_questions) {
            return Err(SettingsError::InvalidTotalQuestions(total_questions));
        }
        Ok(Self {
            total_questions,
            ranges,
        })
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn ranges(&self) -> OperandRanges {
        self.ranges
    }
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            total_questions: Self::DEFAULT_TOTAL_QUESTIONS,
            ranges: OperandRanges::default(),
        }
    }
}

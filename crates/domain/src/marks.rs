//! Marks and grades.
//!
//! A result is made of three mark components with fixed maxima. Their sum is
//! the total, and the total alone decides the grade.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum total that earns a pass.
pub const PASS_THRESHOLD: u32 = 24;

/// One of the three mark components of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkField {
    Mid,
    Session,
    Final,
}

impl MarkField {
    pub const ALL: [Self; 3] = [Self::Mid, Self::Session, Self::Final];

    /// Highest mark this component accepts.
    #[must_use]
    pub fn max(self) -> u32 {
        match self {
            Self::Mid => 18,
            Self::Session => 6,
            Self::Final => 36,
        }
    }

    /// Field name used in forms and request bodies.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Mid => "mid",
            Self::Session => "session",
            Self::Final => "Final",
        }
    }

    /// Human label with its range, e.g. `Mid (0-18)`.
    #[must_use]
    pub fn label(self) -> String {
        let name = match self {
            Self::Mid => "Mid",
            Self::Session => "Session",
            Self::Final => "Final",
        };
        format!("{name} (0-{})", self.max())
    }

    /// Clamp any integer into `[0, max]`.
    #[must_use]
    pub fn clamp(self, value: i64) -> u32 {
        let clamped = value.clamp(0, i64::from(self.max()));
        u32::try_from(clamped).unwrap_or(0)
    }

    /// Interpret raw form input: leading integer or `0`, then clamped.
    #[must_use]
    pub fn parse_input(self, raw: &str) -> u32 {
        self.clamp(parse_leading_int(raw).unwrap_or(0))
    }
}

impl fmt::Display for MarkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parse the leading integer of `raw` (`"12abc"` → 12, `"-3"` → -3).
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate on absurdly long input; the value gets clamped anyway.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// The three mark components of a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marks {
    pub mid: u32,
    pub session: u32,
    #[serde(rename = "Final")]
    pub final_exam: u32,
}

impl Marks {
    /// Read one component.
    #[must_use]
    pub fn get(&self, field: MarkField) -> u32 {
        match field {
            MarkField::Mid => self.mid,
            MarkField::Session => self.session,
            MarkField::Final => self.final_exam,
        }
    }

    /// Set one component, clamping into its range.
    pub fn set(&mut self, field: MarkField, value: i64) {
        let value = field.clamp(value);
        match field {
            MarkField::Mid => self.mid = value,
            MarkField::Session => self.session = value,
            MarkField::Final => self.final_exam = value,
        }
    }

    /// Sum of the three components.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.mid + self.session + self.final_exam
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        Grade::from_total(self.total())
    }

    /// Check every component lies within its range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MarkOutOfRange`] for the first component
    /// above its maximum.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in MarkField::ALL {
            let value = self.get(field);
            if value > field.max() {
                return Err(ValidationError::MarkOutOfRange {
                    field,
                    value,
                    max: field.max(),
                });
            }
        }
        Ok(())
    }
}

/// Pass/fail outcome derived from a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Pass,
    Fail,
}

impl Grade {
    #[must_use]
    pub fn from_total(total: u32) -> Self {
        if total >= PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("Pass"),
            Self::Fail => f.write_str("Fail"),
        }
    }
}

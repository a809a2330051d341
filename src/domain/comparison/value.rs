//! Judgment values and their textual codec.
//!
//! A value is either a plain magnitude (`3`, `2.5`) or a fraction (`5/2`).
//! Fractions keep their original numerator and denominator so they render
//! back exactly as typed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

use super::ValueError;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("number pattern is valid"));

static FRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("fraction pattern is valid"));

/// A positive multiplicative judgment.
///
/// Values produced by [`JudgmentValue::parse`] always exceed 1. The only
/// way to get exactly 1 is [`JudgmentValue::neutral`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JudgmentValue {
    Number(f64),
    Fraction { numerator: u64, denominator: u64 },
}

impl JudgmentValue {
    /// Parses free-form user input.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - `Syntax` if the input is neither a number nor `n/d`
    /// - `DivisionByZero` if a fraction has denominator 0
    /// - `OutOfRange` if the resulting value is not greater than 1, or
    ///   too large to represent
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let trimmed = raw.trim();

        if let Some(caps) = FRACTION_RE.captures(trimmed) {
            let (num_text, den_text) = (&caps[1], &caps[2]);
            if den_text.bytes().all(|b| b == b'0') {
                return Err(ValueError::division_by_zero(raw));
            }
            let (Ok(numerator), Ok(denominator)) = (num_text.parse::<u64>(), den_text.parse::<u64>())
            else {
                // digit strings always parse as f64, at worst to infinity
                let magnitude = num_text.parse::<f64>().unwrap_or(f64::INFINITY)
                    / den_text.parse::<f64>().unwrap_or(f64::INFINITY);
                return Err(ValueError::out_of_range(raw, magnitude));
            };
            let value = Self::Fraction {
                numerator,
                denominator,
            };
            return value.require_above_one(raw);
        }

        if NUMBER_RE.is_match(trimmed) {
            let magnitude: f64 = trimmed.parse().map_err(|_| ValueError::syntax(raw))?;
            if !magnitude.is_finite() {
                return Err(ValueError::out_of_range(raw, magnitude));
            }
            return Self::Number(magnitude).require_above_one(raw);
        }

        Err(ValueError::syntax(raw))
    }

    fn require_above_one(self, raw: &str) -> Result<Self, ValueError> {
        let magnitude = self.magnitude();
        if magnitude > 1.0 {
            Ok(self)
        } else {
            Err(ValueError::out_of_range(raw, magnitude))
        }
    }

    /// The "equally important" value.
    pub fn neutral() -> Self {
        Self::Number(1.0)
    }

    /// A whole-number value from the judgment scale.
    pub fn integer(n: u32) -> Self {
        Self::Number(f64::from(n))
    }

    /// Numeric value of the judgment.
    pub fn magnitude(&self) -> f64 {
        match *self {
            Self::Number(n) => n,
            Self::Fraction {
                numerator,
                denominator,
            } => numerator as f64 / denominator as f64,
        }
    }

    /// Value seen from the disfavored item: `1 / magnitude`.
    pub fn reciprocal(&self) -> f64 {
        1.0 / self.magnitude()
    }

    pub fn is_neutral(&self) -> bool {
        self.magnitude() == 1.0
    }

    /// Renders the value for display.
    ///
    /// Fractions render as typed, integers without a decimal point, and
    /// anything else with two decimals.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for JudgmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fraction {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{}", n),
            Self::Number(n) => write!(f, "{:.2}", n),
        }
    }
}

/// Serialized exactly as accepted: a JSON number, or an `"n/d"` string.
impl Serialize for JudgmentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Fraction { .. } => serializer.collect_str(self),
            Self::Number(n) if n.fract() == 0.0 && n <= u64::MAX as f64 => {
                serializer.serialize_u64(n as u64)
            }
            Self::Number(n) => serializer.serialize_f64(n),
        }
    }
}

/// A labelled shortcut for a common judgment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportancePreset {
    pub value: JudgmentValue,
    pub label: &'static str,
}

const SCALE_PRESETS: [(u32, &str); 6] = [
    (2, "Slightly more important"),
    (3, "More important"),
    (4, "Fairly more important"),
    (5, "Strongly more important"),
    (7, "Very strongly more important"),
    (9, "Extremely more important"),
];

const FRACTION_PRESETS: [(u64, u64, &str); 6] = [
    (3, 2, "3/2"),
    (5, 2, "5/2"),
    (7, 2, "7/2"),
    (9, 5, "9/5"),
    (11, 5, "11/5"),
    (27, 10, "27/10"),
];

/// The integer importance scale offered as buttons.
pub fn scale_presets() -> Vec<ImportancePreset> {
    SCALE_PRESETS
        .iter()
        .map(|&(n, label)| ImportancePreset {
            value: JudgmentValue::integer(n),
            label,
        })
        .collect()
}

/// Intermediate fractions offered alongside the scale.
pub fn fraction_presets() -> Vec<ImportancePreset> {
    FRACTION_PRESETS
        .iter()
        .map(|&(numerator, denominator, label)| ImportancePreset {
            value: JudgmentValue::Fraction {
                numerator,
                denominator,
            },
            label,
        })
        .collect()
}

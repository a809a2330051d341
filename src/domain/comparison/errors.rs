//! Errors raised while building and editing comparison matrices.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// A judgment value was rejected by the codec.
///
/// Each variant carries the raw input so the caller can echo it back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("'{raw}' is not a number or a fraction like 5/2")]
    Syntax { raw: String },

    #[error("'{raw}' has a zero denominator")]
    DivisionByZero { raw: String },

    #[error("'{raw}' evaluates to {value}; a judgment must be a finite value above 1 (equality is the default)")]
    OutOfRange { raw: String, value: f64 },
}

impl ValueError {
    pub fn syntax(raw: impl Into<String>) -> Self {
        Self::Syntax { raw: raw.into() }
    }

    pub fn division_by_zero(raw: impl Into<String>) -> Self {
        Self::DivisionByZero { raw: raw.into() }
    }

    pub fn out_of_range(raw: impl Into<String>, value: f64) -> Self {
        Self::OutOfRange {
            raw: raw.into(),
            value,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax { .. } => ErrorCode::SyntaxError,
            Self::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            Self::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Errors from item sets, matrices, and traversal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonError {
    #[error("at least 2 distinct items are required, got {count}")]
    InvalidItemSet { count: usize },

    #[error("item identifiers must not be blank")]
    BlankItem,

    #[error("item '{0}' appears more than once")]
    DuplicateItem(String),

    #[error("two items share the label '{0}'")]
    DuplicateLabel(String),

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("pair index {index} is out of range ({total} pairs)")]
    PairOutOfRange { index: usize, total: usize },

    #[error("item '{item}' is not part of pair {pair_index}")]
    FavoredNotInPair { item: String, pair_index: usize },

    #[error("pair {0} has not been judged yet")]
    NotYetJudged(usize),

    #[error("pair {0} must be decided before moving on")]
    IncompleteJudgment(usize),

    #[error("cursor position {index} is out of range ({total} pairs)")]
    CursorOutOfRange { index: usize, total: usize },

    #[error("an item compared with itself is always 1")]
    DiagonalImmutable,

    #[error(transparent)]
    Value(#[from] ValueError),
}

impl ComparisonError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidItemSet { .. } | Self::BlankItem => ErrorCode::InvalidItemSet,
            Self::DuplicateItem(_) | Self::DuplicateLabel(_) => ErrorCode::DuplicateItem,
            Self::UnknownItem(_) | Self::FavoredNotInPair { .. } => ErrorCode::UnknownItem,
            Self::PairOutOfRange { .. } | Self::CursorOutOfRange { .. } => ErrorCode::UnknownPair,
            Self::NotYetJudged(_) => ErrorCode::NotYetJudged,
            Self::IncompleteJudgment(_) => ErrorCode::IncompleteJudgment,
            Self::DiagonalImmutable => ErrorCode::InvalidStateTransition,
            Self::Value(err) => err.code(),
        }
    }
}

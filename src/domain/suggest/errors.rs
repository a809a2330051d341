//! Auto-suggest errors.

use thiserror::Error;

use crate::domain::comparison::ComparisonError;
use crate::domain::foundation::ErrorCode;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuggestError {
    #[error("no scoring rule for dimension '{0}'")]
    UnsupportedDimension(String),

    #[error("no product attributes for item '{item}'")]
    MissingAttributes { item: String },

    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

impl SuggestError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedDimension(_) => ErrorCode::UnsupportedDimension,
            Self::MissingAttributes { .. } => ErrorCode::MissingAttributes,
            Self::Comparison(err) => err.code(),
        }
    }
}

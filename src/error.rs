//! Error types for scoring and weather sources.

use crate::readings::{Category, MeasurementKind};
use thiserror::Error;

/// Failures raised by the category scorers and the index aggregator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A category's bundle had no usable readings.
    #[error("no usable {category} readings")]
    MissingCategoryData { category: Category },

    /// Every category was missing, so no index can be produced.
    #[error("insufficient data: no category produced a score")]
    InsufficientData,

    /// A reading was absent where required, non-finite, out of range, or of the wrong kind.
    #[error("invalid {category} input for {kind}: {reason}")]
    InvalidInput {
        category: Category,
        kind: MeasurementKind,
        reason: String,
    },
}

impl ScoreError {
    pub(crate) fn invalid(category: Category, kind: MeasurementKind, reason: impl Into<String>) -> Self {
        ScoreError::InvalidInput {
            category,
            kind,
            reason: reason.into(),
        }
    }
}

/// Failures raised while building requests for a weather source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("location data invalid: {0:?}")]
    InvalidLocation(String),

    #[error("endpoint {0} is not available from this source")]
    UnknownEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_category_and_kind() {
        let err = ScoreError::invalid(Category::Wind, MeasurementKind::WindGust, "value is NaN");
        assert_eq!(
            err.to_string(),
            "invalid wind input for wind gust: value is NaN"
        );
    }

    #[test]
    fn test_missing_category_message() {
        let err = ScoreError::MissingCategoryData {
            category: Category::AirQuality,
        };
        assert_eq!(err.to_string(), "no usable air quality readings");
    }
}

//! Per-category scorers.
//!
//! Every scorer validates its bundle first: each present reading must be a
//! finite value inside the plausible range for its kind, and every reading
//! must belong to the scorer's category with no kind repeated.

use crate::config::TemperaturePolicy;
use crate::error::ScoreError;
use crate::readings::{Category, MeasurementKind, ObservationBundle};
use crate::scoring::ladder::{air_quality_class, precipitation_class, temperature_class, wind_class};
use crate::scoring::types::{CategoryScore, Score};
use tracing::debug;

const TEMPERATURE_KINDS: [MeasurementKind; 3] = [
    MeasurementKind::HeatIndex,
    MeasurementKind::WindChill,
    MeasurementKind::FeelsLike,
];

fn validate(bundle: &ObservationBundle, category: Category) -> Result<(), ScoreError> {
    let mut seen = Vec::with_capacity(bundle.readings.len());

    for reading in &bundle.readings {
        if reading.kind.category() != category {
            return Err(ScoreError::invalid(
                category,
                reading.kind,
                format!("reading belongs to the {} category", reading.kind.category()),
            ));
        }
        if seen.contains(&reading.kind) {
            return Err(ScoreError::invalid(category, reading.kind, "duplicate reading"));
        }
        seen.push(reading.kind);

        if let Some(value) = reading.value {
            if !value.is_finite() {
                return Err(ScoreError::invalid(
                    category,
                    reading.kind,
                    format!("value {value} is not finite"),
                ));
            }
            let range = reading.kind.plausible_range();
            if !range.contains(&value) {
                return Err(ScoreError::invalid(
                    category,
                    reading.kind,
                    format!(
                        "value {value} is outside {}..={}",
                        range.start(),
                        range.end()
                    ),
                ));
            }
        }
    }

    Ok(())
}

/// Averages the class of every present reading; absent readings are left
/// out of the divisor.
fn average_present(
    bundle: &ObservationBundle,
    category: Category,
    classify: fn(f64) -> Score,
) -> CategoryScore {
    if bundle.is_all_absent() {
        debug!(category = %category, "Bundle has no readings");
        return CategoryScore::NoData;
    }

    let (sum, present) = bundle
        .readings
        .iter()
        .filter_map(|r| r.value)
        .fold((0u128, 0usize), |(sum, n), v| {
            (sum + u128::from(classify(v).value()), n + 1)
        });

    let score = Score::from_ratio(sum, present as u128);
    debug!(
        category = %category,
        present,
        absent = bundle.readings.len() - present,
        score = score.value(),
        "Bundle scored"
    );
    CategoryScore::Scored(score)
}

/// Scores sustained wind, average speed and gust, in mph.
///
/// Returns [`CategoryScore::NoData`] when all three are absent.
pub fn score_wind(bundle: &ObservationBundle) -> Result<CategoryScore, ScoreError> {
    validate(bundle, Category::Wind)?;
    Ok(average_present(bundle, Category::Wind, wind_class))
}

/// Scores heat index, wind chill and feels-like, in °F.
///
/// Under [`TemperaturePolicy::Lenient`] absent readings are skipped and an
/// all-absent bundle is [`CategoryScore::NoData`]. Under
/// [`TemperaturePolicy::Strict`] any absent reading is invalid input.
pub fn score_temperature(
    bundle: &ObservationBundle,
    policy: TemperaturePolicy,
) -> Result<CategoryScore, ScoreError> {
    validate(bundle, Category::Temperature)?;

    if policy == TemperaturePolicy::Strict {
        for kind in TEMPERATURE_KINDS {
            let present = bundle
                .readings
                .iter()
                .any(|r| r.kind == kind && r.value.is_some());
            if !present {
                return Err(ScoreError::invalid(
                    Category::Temperature,
                    kind,
                    "reading is required",
                ));
            }
        }
    }

    Ok(average_present(bundle, Category::Temperature, temperature_class))
}

/// Scores the precipitation amount in inches. A missing amount counts as dry.
pub fn score_precipitation(bundle: &ObservationBundle) -> Result<Score, ScoreError> {
    validate(bundle, Category::Precipitation)?;

    let score = match bundle.readings.first().and_then(|r| r.value) {
        Some(inches) => precipitation_class(inches),
        None => Score::Best,
    };
    debug!(score = score.value(), "Precipitation scored");
    Ok(score)
}

/// Scores an EPA air-quality index. Returns [`CategoryScore::NoData`] when
/// the AQI is absent.
pub fn score_air_quality(bundle: &ObservationBundle) -> Result<CategoryScore, ScoreError> {
    validate(bundle, Category::AirQuality)?;

    match bundle.readings.first().and_then(|r| r.value) {
        Some(aqi) => {
            let score = air_quality_class(aqi);
            debug!(aqi, score = score.value(), "Air quality scored");
            Ok(CategoryScore::Scored(score))
        }
        None => {
            debug!("Air quality period has no AQI");
            Ok(CategoryScore::NoData)
        }
    }
}

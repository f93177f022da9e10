//! Canonical threshold ladders.
//!
//! Ladders are static and evaluated top to bottom; the first band that
//! matches wins. They take already-validated values.

use crate::scoring::types::Score;

/// Upper bounds (inclusive) on wind speed in mph.
pub const WIND_LADDER: [(f64, Score); 4] = [
    (4.0, Score::Best),
    (8.0, Score::Moderate),
    (12.0, Score::Neutral),
    (15.0, Score::Poor),
];

/// Inclusive comfort ranges in °F, narrowest first.
pub const TEMPERATURE_LADDER: [(f64, f64, Score); 4] = [
    (65.0, 75.0, Score::Best),
    (60.0, 80.0, Score::Moderate),
    (55.0, 85.0, Score::Neutral),
    (50.0, 90.0, Score::Poor),
];

/// Upper bounds (inclusive) on precipitation in inches.
pub const PRECIPITATION_LADDER: [(f64, Score); 4] = [
    (0.2, Score::Best),
    (0.5, Score::Moderate),
    (0.9, Score::Neutral),
    (1.3, Score::Poor),
];

/// EPA band minimums (exclusive), worst first. Hazardous and very unhealthy
/// both map to [`Score::Terrible`].
pub const AIR_QUALITY_LADDER: [(f64, Score); 5] = [
    (300.0, Score::Terrible),
    (200.0, Score::Terrible),
    (150.0, Score::Poor),
    (100.0, Score::Neutral),
    (50.0, Score::Moderate),
];

fn at_most(value: f64, ladder: &[(f64, Score)], otherwise: Score) -> Score {
    ladder
        .iter()
        .find(|(max, _)| value <= *max)
        .map_or(otherwise, |(_, score)| *score)
}

/// | mph     | Score |
/// |---------|-------|
/// | <= 4    | 5     |
/// | <= 8    | 4     |
/// | <= 12   | 3     |
/// | <= 15   | 2     |
/// | > 15    | 1     |
pub fn wind_class(mph: f64) -> Score {
    at_most(mph, &WIND_LADDER, Score::Terrible)
}

/// | °F        | Score |
/// |-----------|-------|
/// | 65..=75   | 5     |
/// | 60..=80   | 4     |
/// | 55..=85   | 3     |
/// | 50..=90   | 2     |
/// | otherwise | 1     |
pub fn temperature_class(fahrenheit: f64) -> Score {
    TEMPERATURE_LADDER
        .iter()
        .find(|(min, max, _)| (*min..=*max).contains(&fahrenheit))
        .map_or(Score::Terrible, |(_, _, score)| *score)
}

/// | inches  | Score |
/// |---------|-------|
/// | <= 0.2  | 5     |
/// | <= 0.5  | 4     |
/// | <= 0.9  | 3     |
/// | <= 1.3  | 2     |
/// | > 1.3   | 1     |
pub fn precipitation_class(inches: f64) -> Score {
    at_most(inches, &PRECIPITATION_LADDER, Score::Terrible)
}

/// | AQI     | Score |
/// |---------|-------|
/// | > 300   | 1     |
/// | > 200   | 1     |
/// | > 150   | 2     |
/// | > 100   | 3     |
/// | > 50    | 4     |
/// | <= 50   | 5     |
pub fn air_quality_class(aqi: f64) -> Score {
    AIR_QUALITY_LADDER
        .iter()
        .find(|(min, _)| aqi > *min)
        .map_or(Score::Best, |(_, score)| *score)
}

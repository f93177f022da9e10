//! Weather records as delivered by the weather collaborator, and their
//! projection into per-category observation bundles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

/// One weather dimension that is scored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Wind,
    Temperature,
    Precipitation,
    AirQuality,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Wind => "wind",
            Category::Temperature => "temperature",
            Category::Precipitation => "precipitation",
            Category::AirQuality => "air quality",
        })
    }
}

/// The kind of measurement a [`Reading`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Sustained wind, mph.
    Wind,
    /// Average wind speed, mph.
    WindSpeed,
    /// Gust speed, mph.
    WindGust,
    /// Heat index, °F.
    HeatIndex,
    /// Wind chill, °F.
    WindChill,
    /// Feels-like temperature, °F.
    FeelsLike,
    /// Precipitation amount, inches.
    Precipitation,
    /// EPA air-quality index.
    Aqi,
}

impl MeasurementKind {
    pub fn category(self) -> Category {
        match self {
            MeasurementKind::Wind | MeasurementKind::WindSpeed | MeasurementKind::WindGust => {
                Category::Wind
            }
            MeasurementKind::HeatIndex | MeasurementKind::WindChill | MeasurementKind::FeelsLike => {
                Category::Temperature
            }
            MeasurementKind::Precipitation => Category::Precipitation,
            MeasurementKind::Aqi => Category::AirQuality,
        }
    }

    /// Values outside this range are not physically plausible for the kind.
    pub fn plausible_range(self) -> RangeInclusive<f64> {
        match self.category() {
            Category::Wind => 0.0..=300.0,
            Category::Temperature => -130.0..=180.0,
            Category::Precipitation => 0.0..=100.0,
            Category::AirQuality => 0.0..=1000.0,
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MeasurementKind::Wind => "wind",
            MeasurementKind::WindSpeed => "wind speed",
            MeasurementKind::WindGust => "wind gust",
            MeasurementKind::HeatIndex => "heat index",
            MeasurementKind::WindChill => "wind chill",
            MeasurementKind::FeelsLike => "feels like",
            MeasurementKind::Precipitation => "precipitation",
            MeasurementKind::Aqi => "aqi",
        })
    }
}

/// A single measurement that may be absent when the sensor reported nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub kind: MeasurementKind,
    pub value: Option<f64>,
}

impl Reading {
    pub fn new(kind: MeasurementKind, value: Option<f64>) -> Self {
        Self { kind, value }
    }

    pub fn present(kind: MeasurementKind, value: f64) -> Self {
        Self::new(kind, Some(value))
    }

    pub fn absent(kind: MeasurementKind) -> Self {
        Self::new(kind, None)
    }
}

/// The readings for one category at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationBundle {
    pub readings: Vec<Reading>,
}

impl ObservationBundle {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn wind(wind: Option<f64>, speed: Option<f64>, gust: Option<f64>) -> Self {
        Self::new(vec![
            Reading::new(MeasurementKind::Wind, wind),
            Reading::new(MeasurementKind::WindSpeed, speed),
            Reading::new(MeasurementKind::WindGust, gust),
        ])
    }

    pub fn temperature(heat_index: Option<f64>, wind_chill: Option<f64>, feels_like: Option<f64>) -> Self {
        Self::new(vec![
            Reading::new(MeasurementKind::HeatIndex, heat_index),
            Reading::new(MeasurementKind::WindChill, wind_chill),
            Reading::new(MeasurementKind::FeelsLike, feels_like),
        ])
    }

    pub fn precipitation(inches: Option<f64>) -> Self {
        Self::new(vec![Reading::new(MeasurementKind::Precipitation, inches)])
    }

    pub fn air_quality(aqi: Option<f64>) -> Self {
        Self::new(vec![Reading::new(MeasurementKind::Aqi, aqi)])
    }

    /// True when no reading in the bundle carries a value.
    pub fn is_all_absent(&self) -> bool {
        self.readings.iter().all(|r| r.value.is_none())
    }
}

/// One station observation, using the collaborator's field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "windMPH")]
    pub wind_mph: Option<f64>,
    #[serde(rename = "windSpeedMPH")]
    pub wind_speed_mph: Option<f64>,
    #[serde(rename = "windGustMPH")]
    pub wind_gust_mph: Option<f64>,
    #[serde(rename = "heatindexF")]
    pub heat_index_f: Option<f64>,
    #[serde(rename = "windchillF")]
    pub wind_chill_f: Option<f64>,
    #[serde(rename = "feelslikeF")]
    pub feels_like_f: Option<f64>,
    #[serde(rename = "precipIN")]
    pub precip_in: Option<f64>,
}

impl Observation {
    pub fn wind_bundle(&self) -> ObservationBundle {
        ObservationBundle::wind(self.wind_mph, self.wind_speed_mph, self.wind_gust_mph)
    }

    pub fn temperature_bundle(&self) -> ObservationBundle {
        ObservationBundle::temperature(self.heat_index_f, self.wind_chill_f, self.feels_like_f)
    }

    pub fn precipitation_bundle(&self) -> ObservationBundle {
        ObservationBundle::precipitation(self.precip_in)
    }
}

/// One entry of an observations response; one per nearby station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub ob: Observation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityPeriod {
    pub aqi: Option<f64>,
}

impl AirQualityPeriod {
    pub fn bundle(&self) -> ObservationBundle {
        ObservationBundle::air_quality(self.aqi)
    }
}

/// One entry of an air-quality response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityResponse {
    #[serde(default)]
    pub periods: Vec<AirQualityPeriod>,
}

/// Everything a weather source returned for one location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub observations: Vec<ObservationResponse>,
    #[serde(default, rename = "airquality")]
    pub air_quality: Vec<AirQualityResponse>,
    /// Raw responses for custom endpoints, keyed by endpoint path.
    #[serde(default)]
    pub indices: HashMap<String, serde_json::Value>,
}

impl WeatherSnapshot {
    /// Air-quality bundles, one per reported period.
    pub fn air_quality_bundles(&self) -> impl Iterator<Item = ObservationBundle> + '_ {
        self.air_quality
            .iter()
            .flat_map(|resp| resp.periods.iter())
            .map(AirQualityPeriod::bundle)
    }
}

//! Weather sources.
//!
//! [`WeatherSource`] is the seam a weather-API client plugs into. Every call
//! is an explicit [`EndpointRequest`]; custom endpoints are named per request.
//! [`FileSource`] serves recorded responses from a JSON snapshot.

mod client;
mod file;
mod request;

pub use client::WeatherSource;
pub use file::FileSource;
pub use request::{Endpoint, EndpointRequest, Location};

use crate::readings::{AirQualityResponse, ObservationResponse, WeatherSnapshot};
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;

/// Path of the provider's own ball-golf index.
pub const GOLF_INDEX_ENDPOINT: &str = "indices/golf";

/// Loads the [`WeatherSnapshot`] for `location` from `source`.
#[tracing::instrument(skip(source, location), fields(location = %location))]
pub async fn fetch_snapshot<S: WeatherSource + ?Sized>(
    source: &S,
    location: &Location,
) -> Result<WeatherSnapshot> {
    source.snapshot(location).await
}

/// Requests observations and air quality for `location` and assembles them
/// into a snapshot captured now.
pub async fn snapshot_from_endpoints<S: WeatherSource + ?Sized>(
    source: &S,
    location: &Location,
) -> Result<WeatherSnapshot> {
    let observations = source
        .request(&EndpointRequest::new(Endpoint::Observations, location))
        .await?;
    let observations: Vec<ObservationResponse> =
        serde_json::from_value(observations).context("malformed observations response")?;

    let air_quality = source
        .request(&EndpointRequest::new(Endpoint::AirQuality, location))
        .await?;
    let air_quality: Vec<AirQualityResponse> =
        serde_json::from_value(air_quality).context("malformed airquality response")?;

    Ok(WeatherSnapshot {
        captured_at: Some(Utc::now()),
        observations,
        air_quality,
        ..Default::default()
    })
}

/// Requests the provider's golf index for `location`.
#[tracing::instrument(skip(source, location), fields(location = %location))]
pub async fn fetch_golf_index<S: WeatherSource + ?Sized>(
    source: &S,
    location: &Location,
) -> Result<Option<f64>> {
    let value = source
        .request(&EndpointRequest::new(
            Endpoint::Custom(GOLF_INDEX_ENDPOINT.to_string()),
            location,
        ))
        .await?;
    Ok(golf_index(&value))
}

/// Extracts `[0].indice.current.index` from an indices response.
pub fn golf_index(value: &Value) -> Option<f64> {
    value
        .get(0)?
        .get("indice")?
        .get("current")?
        .get("index")?
        .as_f64()
}

use crate::error::SourceError;
use std::fmt;

/// Where conditions are requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    postal_code: String,
}

impl Location {
    pub fn postal_code(code: &str) -> Result<Self, SourceError> {
        let code = code.trim();
        let valid = !code.is_empty()
            && code.len() <= 10
            && code.chars().any(|c| c.is_ascii_alphanumeric())
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ');
        if !valid {
            return Err(SourceError::InvalidLocation(code.to_string()));
        }
        Ok(Self {
            postal_code: code.to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.postal_code
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.postal_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Observations,
    AirQuality,
    /// Any other endpoint path, e.g. `indices/golf`.
    Custom(String),
}

impl Endpoint {
    pub fn path(&self) -> &str {
        match self {
            Endpoint::Observations => "observations",
            Endpoint::AirQuality => "airquality",
            Endpoint::Custom(path) => path,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A single request against a weather source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    pub endpoint: Endpoint,
    pub location: Location,
}

impl EndpointRequest {
    pub fn new(endpoint: Endpoint, location: &Location) -> Self {
        Self {
            endpoint,
            location: location.clone(),
        }
    }
}

//! Environment-driven configuration.
//!
//! Values are read from the process environment, which `main` first
//! populates from a `.env` file via `dotenvy`.

/// Environment variable that switches temperature scoring to [`TemperaturePolicy::Strict`].
pub const REQUIRE_TEMPERATURE_VAR: &str = "DISCGOLF_REQUIRE_TEMPERATURE";
pub const LOG_FILE_PATH_VAR: &str = "LOG_FILE_PATH";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/discgolf_index.log";

/// How absent temperature readings are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemperaturePolicy {
    /// Absent readings are excluded from the average, like wind.
    #[default]
    Lenient,
    /// Every temperature reading must be present.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringConfig {
    pub temperature_policy: TemperaturePolicy,
}

impl ScoringConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let temperature_policy = match lookup(REQUIRE_TEMPERATURE_VAR).as_deref().map(str::trim) {
            Some(v) if is_truthy(v) => TemperaturePolicy::Strict,
            _ => TemperaturePolicy::Lenient,
        };
        Self { temperature_policy }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_file_path: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_file_path: lookup(LOG_FILE_PATH_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string()),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_scoring_defaults_to_lenient() {
        let config = ScoringConfig::from_lookup(lookup(&[]));
        assert_eq!(config.temperature_policy, TemperaturePolicy::Lenient);
    }

    #[test]
    fn test_scoring_strict_when_truthy() {
        for value in ["1", "true", "YES", " on "] {
            let config = ScoringConfig::from_lookup(lookup(&[(REQUIRE_TEMPERATURE_VAR, value)]));
            assert_eq!(config.temperature_policy, TemperaturePolicy::Strict, "{value}");
        }
        let config = ScoringConfig::from_lookup(lookup(&[(REQUIRE_TEMPERATURE_VAR, "0")]));
        assert_eq!(config.temperature_policy, TemperaturePolicy::Lenient);
    }

    #[test]
    fn test_logging_path_default_and_override() {
        assert_eq!(
            LoggingConfig::from_lookup(lookup(&[])).log_file_path,
            DEFAULT_LOG_FILE_PATH
        );
        assert_eq!(
            LoggingConfig::from_lookup(lookup(&[(LOG_FILE_PATH_VAR, "/var/log/dg.log")]))
                .log_file_path,
            "/var/log/dg.log"
        );
    }
}

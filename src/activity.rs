//! Activities that turn a weather snapshot into a suitability index.

use crate::config::ScoringConfig;
use crate::error::ScoreError;
use crate::readings::WeatherSnapshot;
use crate::scoring::{
    CategoryScore, IndexReport, ScoreSets, score_air_quality, score_precipitation,
    score_temperature, score_wind,
};
use tracing::debug;

/// An outdoor activity that can be rated from current conditions.
pub trait Activity: Send + Sync {
    fn name(&self) -> &'static str;

    /// Rates `snapshot` on a 1–5 scale, 5 being the best conditions.
    fn compute_index(&self, snapshot: &WeatherSnapshot) -> Result<IndexReport, ScoreError>;
}

/// Disc golf: wind, temperature, precipitation and air quality, equally weighted.
#[derive(Debug, Clone, Default)]
pub struct DiscGolf {
    config: ScoringConfig,
}

impl DiscGolf {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores every observation and air-quality period in `snapshot`.
    pub fn score_sets(&self, snapshot: &WeatherSnapshot) -> Result<ScoreSets, ScoreError> {
        let mut sets = ScoreSets::default();

        for response in &snapshot.observations {
            let ob = &response.ob;
            sets.wind.push(score_wind(&ob.wind_bundle())?);
            sets.temperature.push(score_temperature(
                &ob.temperature_bundle(),
                self.config.temperature_policy,
            )?);
            sets.precipitation
                .push(CategoryScore::Scored(score_precipitation(&ob.precipitation_bundle())?));
        }

        for bundle in snapshot.air_quality_bundles() {
            sets.air_quality.push(score_air_quality(&bundle)?);
        }

        debug!(
            observations = snapshot.observations.len(),
            air_quality_periods = sets.air_quality.len(),
            "Snapshot scored"
        );
        Ok(sets)
    }
}

impl Activity for DiscGolf {
    fn name(&self) -> &'static str {
        "disc golf"
    }

    fn compute_index(&self, snapshot: &WeatherSnapshot) -> Result<IndexReport, ScoreError> {
        self.score_sets(snapshot)?.aggregate()
    }
}

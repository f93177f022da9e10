//! Category scoring and index aggregation.
//!
//! Each weather category is mapped onto a 1–5 [`Score`] through a fixed
//! threshold ladder, then the per-category score sets are averaged into a
//! single activity index.

pub mod aggregate;
pub mod category;
pub mod ladder;
pub mod types;
pub mod utility;

pub use aggregate::{aggregate, aggregate_report};
pub use category::{score_air_quality, score_precipitation, score_temperature, score_wind};
pub use types::{ActivityIndex, CategoryScore, CategorySummary, IndexReport, Score, ScoreSet, ScoreSets};

//! Data types shared by the scorers and the aggregator.

use crate::error::ScoreError;
use crate::readings::Category;
use crate::scoring::utility::round_half_up_ratio;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded 1–5 score. Higher is better for the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Score {
    Terrible = 1,
    Poor = 2,
    Neutral = 3,
    Moderate = 4,
    Best = 5,
}

impl Score {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Score::Terrible => "terrible",
            Score::Poor => "poor",
            Score::Neutral => "neutral",
            Score::Moderate => "moderate",
            Score::Best => "best",
        }
    }

    /// Rounds the exact mean `num / den` half up and clamps it into 1..=5.
    ///
    /// `den` must be non-zero.
    pub fn from_ratio(num: u128, den: u128) -> Score {
        match round_half_up_ratio(num, den) {
            v if v >= 5 => Score::Best,
            4 => Score::Moderate,
            3 => Score::Neutral,
            2 => Score::Poor,
            _ => Score::Terrible,
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        f64::from(score.value())
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Score::Terrible),
            2 => Ok(Score::Poor),
            3 => Ok(Score::Neutral),
            4 => Ok(Score::Moderate),
            5 => Ok(Score::Best),
            other => Err(format!("score {other} is outside 1..=5")),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The final 1–5 suitability index.
pub type ActivityIndex = Score;

/// The score of one bundle, or `NoData` when every reading in it was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Score>", into = "Option<Score>")]
pub enum CategoryScore {
    Scored(Score),
    NoData,
}

impl CategoryScore {
    pub fn score(self) -> Option<Score> {
        match self {
            CategoryScore::Scored(score) => Some(score),
            CategoryScore::NoData => None,
        }
    }

    pub fn is_no_data(self) -> bool {
        matches!(self, CategoryScore::NoData)
    }

    /// Returns the score, or [`ScoreError::MissingCategoryData`] for `NoData`.
    pub fn require(self, category: Category) -> Result<Score, ScoreError> {
        self.score()
            .ok_or(ScoreError::MissingCategoryData { category })
    }
}

impl From<Score> for CategoryScore {
    fn from(score: Score) -> Self {
        CategoryScore::Scored(score)
    }
}

impl From<Option<Score>> for CategoryScore {
    fn from(score: Option<Score>) -> Self {
        score.map_or(CategoryScore::NoData, CategoryScore::Scored)
    }
}

impl From<CategoryScore> for Option<Score> {
    fn from(score: CategoryScore) -> Self {
        score.score()
    }
}

/// Scores for every bundle supplied for one category.
pub type ScoreSet = Vec<CategoryScore>;

/// The four score sets an activity index is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSets {
    pub wind: ScoreSet,
    pub temperature: ScoreSet,
    pub precipitation: ScoreSet,
    pub air_quality: ScoreSet,
}

/// How one category contributed to an index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub scored: usize,
    pub no_data: usize,
    pub mean: Option<f64>,
    pub stddev: Option<f64>,
}

impl CategorySummary {
    pub fn contributed(&self) -> bool {
        self.mean.is_some()
    }
}

/// Explanation of one index computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexReport {
    pub schema_version: u8,
    pub algorithm_version: u8,
    pub index: ActivityIndex,
    pub categories: Vec<CategorySummary>,
    pub excluded: Vec<Category>,
}

impl IndexReport {
    pub fn summary(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|s| s.category == category)
    }
}

use crate::error::ScoreError;
use crate::readings::Category;
use crate::scoring::types::{ActivityIndex, CategoryScore, CategorySummary, IndexReport, Score, ScoreSets};
use crate::scoring::utility::{lcm, mean, stddev};
use tracing::debug;

pub const SCHEMA_VERSION: u8 = 1;
pub const ALGORITHM_VERSION: u8 = 1;

/// Reduces the four category score sets to a single index.
///
/// See [`aggregate_report`] for the averaging rules.
pub fn aggregate(
    wind: &[CategoryScore],
    temperature: &[CategoryScore],
    precipitation: &[CategoryScore],
    air_quality: &[CategoryScore],
) -> Result<ActivityIndex, ScoreError> {
    aggregate_report(wind, temperature, precipitation, air_quality).map(|report| report.index)
}

/// Reduces the four category score sets to an [`IndexReport`].
///
/// Each category is averaged over its scored entries; `NoData` entries are
/// skipped, and a category with no scored entries is excluded rather than
/// counted as zero. The contributing category means are then averaged with
/// equal weight and rounded half up. Rounding works on the exact fraction
/// of integer score sums, so a true half is never lost to float error.
///
/// # Errors
///
/// Returns [`ScoreError::InsufficientData`] when no category contributed.
pub fn aggregate_report(
    wind: &[CategoryScore],
    temperature: &[CategoryScore],
    precipitation: &[CategoryScore],
    air_quality: &[CategoryScore],
) -> Result<IndexReport, ScoreError> {
    let sets = [
        (Category::Wind, wind),
        (Category::Temperature, temperature),
        (Category::Precipitation, precipitation),
        (Category::AirQuality, air_quality),
    ];

    let mut categories = Vec::with_capacity(sets.len());
    let mut excluded = Vec::new();
    let mut category_means = Vec::with_capacity(sets.len());
    // (sum of scores, entries scored) per contributing category
    let mut totals: Vec<(u128, u128)> = Vec::with_capacity(sets.len());

    for (category, set) in sets {
        let scores: Vec<Score> = set.iter().filter_map(|s| s.score()).collect();
        let values: Vec<f64> = scores.iter().copied().map(f64::from).collect();
        let no_data = set.len() - values.len();

        if values.is_empty() {
            debug!(category = %category, entries = set.len(), "Category excluded from index");
            excluded.push(category);
            categories.push(CategorySummary {
                category,
                scored: 0,
                no_data,
                mean: None,
                stddev: None,
            });
            continue;
        }

        let sum: u128 = scores.iter().map(|s| u128::from(s.value())).sum();
        totals.push((sum, scores.len() as u128));

        let avg = mean(&values);
        category_means.push(avg);
        categories.push(CategorySummary {
            category,
            scored: values.len(),
            no_data,
            mean: Some(avg),
            stddev: Some(stddev(&values, avg)),
        });
    }

    if category_means.is_empty() {
        return Err(ScoreError::InsufficientData);
    }

    let common = totals.iter().fold(1, |acc, &(_, n)| lcm(acc, n));
    let num: u128 = totals.iter().map(|&(sum, n)| sum * (common / n)).sum();
    let den = common * totals.len() as u128;

    let overall = mean(&category_means);
    let index = Score::from_ratio(num, den);
    debug!(
        contributing = category_means.len(),
        overall,
        index = index.value(),
        "Index aggregated"
    );

    Ok(IndexReport {
        schema_version: SCHEMA_VERSION,
        algorithm_version: ALGORITHM_VERSION,
        index,
        categories,
        excluded,
    })
}

impl ScoreSets {
    pub fn aggregate(&self) -> Result<IndexReport, ScoreError> {
        aggregate_report(
            &self.wind,
            &self.temperature,
            &self.precipitation,
            &self.air_quality,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u8]) -> Vec<CategoryScore> {
        values
            .iter()
            .map(|v| CategoryScore::from(Score::try_from(*v).unwrap()))
            .collect()
    }

    #[test]
    fn test_all_terrible() {
        let index = aggregate(&set(&[1]), &set(&[1]), &set(&[1]), &set(&[1])).unwrap();
        assert_eq!(index, Score::Terrible);
    }

    #[test]
    fn test_mean_of_single_values() {
        // (1 + 3 + 3 + 4) / 4 = 2.75
        let index = aggregate(&set(&[1]), &set(&[3]), &set(&[3]), &set(&[4])).unwrap();
        assert_eq!(index, Score::Neutral);
    }

    #[test]
    fn test_mean_of_means() {
        // category means 3, 3, 2, 3
        let index = aggregate(
            &set(&[4, 2]),
            &set(&[3, 3]),
            &set(&[3, 1]),
            &set(&[4, 2]),
        )
        .unwrap();
        assert_eq!(index, Score::Neutral);
    }

    #[test]
    fn test_empty_category_is_excluded_not_zero() {
        // zero-filled would be (5 + 5 + 5 + 0) / 4 = 3.75 -> 4
        let report = aggregate_report(&set(&[5]), &[], &set(&[5]), &set(&[5])).unwrap();
        assert_eq!(report.index, Score::Best);
        assert_eq!(report.excluded, vec![Category::Temperature]);
        assert!(!report.summary(Category::Temperature).unwrap().contributed());
    }

    #[test]
    fn test_no_data_entries_are_skipped() {
        let wind = vec![CategoryScore::NoData, Score::Poor.into()];
        let air = vec![CategoryScore::NoData, CategoryScore::NoData];
        let report = aggregate_report(&wind, &set(&[2]), &set(&[2]), &air).unwrap();

        assert_eq!(report.index, Score::Poor);
        assert_eq!(report.excluded, vec![Category::AirQuality]);
        let wind_summary = report.summary(Category::Wind).unwrap();
        assert_eq!(wind_summary.scored, 1);
        assert_eq!(wind_summary.no_data, 1);
        assert_eq!(wind_summary.mean, Some(2.0));
    }

    #[test]
    fn test_rounds_half_up() {
        // (2 + 3) / 2 = 2.5
        assert_eq!(aggregate(&set(&[2]), &set(&[3]), &[], &[]), Ok(Score::Neutral));
        // (2 + 2 + 3 + 2) / 4 = 2.25
        assert_eq!(
            aggregate(&set(&[2]), &set(&[2]), &set(&[3]), &set(&[2])),
            Ok(Score::Poor)
        );
    }

    #[test]
    fn test_exact_half_across_uneven_categories() {
        // (13/3 + 9/2 + 5/3) / 3 = 3.5 exactly, which floats put just below
        let index = aggregate(&set(&[3, 5, 5]), &set(&[4, 5]), &set(&[1, 3, 1]), &[]).unwrap();
        assert_eq!(index, Score::Moderate);
    }

    #[test]
    fn test_matches_exact_rounding_for_small_sets() {
        fn sets_up_to(len: usize) -> Vec<Vec<u8>> {
            let mut out = vec![vec![]];
            let mut frontier = vec![vec![]];
            for _ in 0..len {
                let mut next = Vec::new();
                for prefix in &frontier {
                    for v in 1..=5u8 {
                        let mut grown: Vec<u8> = prefix.clone();
                        grown.push(v);
                        next.push(grown);
                    }
                }
                out.extend(next.iter().cloned());
                frontier = next;
            }
            out
        }

        // mean = total / (3 * n1 * n2 * n3); index m is correct iff
        // (2m - 1) * 3 * n1 * n2 * n3 <= 2 * total < (2m + 1) * 3 * n1 * n2 * n3
        let candidates = sets_up_to(3);
        for wind in candidates.iter().filter(|s| !s.is_empty()) {
            for temperature in candidates.iter().filter(|s| !s.is_empty()) {
                let precipitation = [1u8, 3, 1];
                let (n1, n2, n3) = (wind.len() as u64, temperature.len() as u64, 3u64);
                let s1: u64 = wind.iter().map(|&v| u64::from(v)).sum();
                let s2: u64 = temperature.iter().map(|&v| u64::from(v)).sum();
                let s3: u64 = precipitation.iter().map(|&v| u64::from(v)).sum();
                let twice_total = 2 * (s1 * n2 * n3 + s2 * n1 * n3 + s3 * n1 * n2);
                let den = 3 * n1 * n2 * n3;

                let index = aggregate(&set(wind), &set(temperature), &set(&precipitation), &[])
                    .unwrap();
                let m = u64::from(index.value());
                assert!(
                    (2 * m - 1) * den <= twice_total && twice_total < (2 * m + 1) * den,
                    "wind {wind:?} temperature {temperature:?} gave {m}"
                );
            }
        }
    }

    #[test]
    fn test_all_empty_is_insufficient_data() {
        assert_eq!(aggregate(&[], &[], &[], &[]), Err(ScoreError::InsufficientData));
        let none = vec![CategoryScore::NoData];
        assert_eq!(
            aggregate(&none, &none, &[], &none),
            Err(ScoreError::InsufficientData)
        );
    }

    #[test]
    fn test_report_carries_spread_and_versions() {
        let report = aggregate_report(&set(&[4, 2]), &[], &[], &[]).unwrap();
        let wind = report.summary(Category::Wind).unwrap();

        assert_eq!(wind.mean, Some(3.0));
        assert_eq!(wind.stddev, Some(1.0));
        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert_eq!(report.algorithm_version, ALGORITHM_VERSION);
        assert_eq!(report.categories.len(), 4);
    }

    #[test]
    fn test_score_sets_aggregate_matches_free_function() {
        let sets = ScoreSets {
            wind: set(&[5]),
            temperature: set(&[4]),
            precipitation: set(&[5]),
            air_quality: set(&[3]),
        };
        assert_eq!(
            sets.aggregate().map(|r| r.index),
            aggregate(&sets.wind, &sets.temperature, &sets.precipitation, &sets.air_quality)
        );
    }
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Rounds `num / den` to the nearest integer, exact halves going up.
///
/// Works on integers so a true half such as 7/2 is never seen as 3.4999….
/// `den` must be non-zero.
pub fn round_half_up_ratio(num: u128, den: u128) -> u128 {
    (2 * num + den) / (2 * den)
}

pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; both arguments must be non-zero.
pub fn lcm(a: u128, b: u128) -> u128 {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_and_stddev() {
        let values = [4.0, 2.0];
        let avg = mean(&values);
        assert_eq!(avg, 3.0);
        assert_eq!(stddev(&values, avg), 1.0);
        assert_eq!(stddev(&[], 0.0), 0.0);
    }

    #[test]
    fn test_round_half_up_ratio_both_sides_of_half() {
        assert_eq!(round_half_up_ratio(5, 2), 3);
        assert_eq!(round_half_up_ratio(7, 2), 4);
        assert_eq!(round_half_up_ratio(9, 4), 2);
        assert_eq!(round_half_up_ratio(11, 4), 3);
        assert_eq!(round_half_up_ratio(13, 3), 4);
        assert_eq!(round_half_up_ratio(3, 1), 3);
    }

    #[test]
    fn test_lcm_and_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(lcm(3, 2), 6);
        assert_eq!(lcm(lcm(3, 2), 3), 6);
        assert_eq!(lcm(1, 1), 1);
    }
}

//! Weighted coverage scoring

/// Weighted skill-match percentage in [0, 100], rounded to one decimal.
///
/// Partial matches count at `partial_weight` of a full match. No job
/// skills means vacuous full coverage. Many-to-one claiming can push the
/// weighted numerator past the total; the clamp caps the result at 100.
pub fn match_percentage(
    matched_count: usize,
    partial_count: usize,
    total_job_skills: usize,
    partial_weight: f32,
) -> f32 {
    if total_job_skills == 0 {
        return 100.0;
    }

    let weighted = matched_count as f32 + partial_weight * partial_count as f32;
    let percentage = 100.0 * weighted / total_job_skills as f32;

    (round_one_decimal(percentage)).min(100.0)
}

fn round_one_decimal(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_job_skills_is_full_coverage() {
        assert_eq!(match_percentage(0, 0, 0, 0.5), 100.0);
        assert_eq!(match_percentage(7, 3, 0, 0.5), 100.0);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(match_percentage(0, 0, 4, 0.5), 0.0);
        assert_eq!(match_percentage(4, 0, 4, 0.5), 100.0);
    }

    #[test]
    fn test_partial_weighting() {
        // 1 matched + 0.5 * 2 partial over 4 = 50%
        assert_eq!(match_percentage(1, 2, 4, 0.5), 50.0);
        // weight 0 ignores partials entirely
        assert_eq!(match_percentage(1, 2, 4, 0.0), 25.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // 2/3 -> 66.666... -> 66.7
        assert_eq!(match_percentage(2, 0, 3, 0.5), 66.7);
        // 1/3 -> 33.333... -> 33.3
        assert_eq!(match_percentage(1, 0, 3, 0.5), 33.3);
    }

    #[test]
    fn test_clamped_at_100() {
        // Many-to-one claiming can exceed the total
        assert_eq!(match_percentage(5, 0, 3, 0.5), 100.0);
    }
}

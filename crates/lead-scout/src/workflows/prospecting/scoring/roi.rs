use super::super::domain::RoiEstimate;

/// Score at which a site is treated as having no further uplift to sell.
const TARGET_SCORE: f64 = 85.0;

/// Projects traffic, conversion, and lead uplift from the current score.
///
/// Lead uplift is not capped, so very low scores project more than 100%.
pub fn estimate_roi(score: u8) -> RoiEstimate {
    let potential = (TARGET_SCORE - f64::from(score)).max(0.0);
    let pct = |factor: f64| (potential * factor).round() as u32;

    RoiEstimate {
        traffic_increase_pct: pct(0.8),
        conversion_increase_pct: pct(0.6),
        lead_increase_pct: pct(1.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_at_or_above_target_project_nothing() {
        for score in [85, 92, 100] {
            let roi = estimate_roi(score);
            assert_eq!(roi.traffic_increase_pct, 0);
            assert_eq!(roi.conversion_increase_pct, 0);
            assert_eq!(roi.lead_increase_pct, 0);
        }
    }

    #[test]
    fn zero_score_projects_lead_uplift_above_one_hundred_percent() {
        let roi = estimate_roi(0);
        assert_eq!(roi.traffic_increase(), "68%");
        assert_eq!(roi.conversion_increase(), "51%");
        assert_eq!(roi.lead_increase(), "102%");
    }

    #[test]
    fn mid_range_scores_round_each_projection() {
        // potential 25 -> 20 / 15 / 30
        let roi = estimate_roi(60);
        assert_eq!(
            (
                roi.traffic_increase_pct,
                roi.conversion_increase_pct,
                roi.lead_increase_pct
            ),
            (20, 15, 30)
        );

        // potential 33 -> 26.4 / 19.8 / 39.6
        let roi = estimate_roi(52);
        assert_eq!(
            (
                roi.traffic_increase_pct,
                roi.conversion_increase_pct,
                roi.lead_increase_pct
            ),
            (26, 20, 40)
        );
    }
}

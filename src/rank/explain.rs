use crate::types::dataset::{Criterion, Platform, MAX_SCORE};
use crate::types::ranking::{ScoreContribution, Weights};

/// Per-criterion breakdown of a platform's weighted score.
///
/// # Panics
///
/// Panics on the same score/criteria length mismatch as [`super::rank`].
pub fn explain<'a>(
    platform: &'a Platform,
    criteria: &'a [Criterion],
    weights: &Weights,
    score_labels: &'a [String],
) -> Vec<ScoreContribution<'a>> {
    assert_eq!(
        platform.scores.len(),
        criteria.len(),
        "platform {} has {} scores for {} criteria",
        platform.id,
        platform.scores.len(),
        criteria.len()
    );

    criteria
        .iter()
        .enumerate()
        .map(|(index, criterion)| {
            let score = platform.scores[index];
            let weight = weights.effective(criterion);
            ScoreContribution {
                criterion,
                score,
                label: score_labels
                    .get(usize::from(score))
                    .map(String::as_str)
                    .unwrap_or(""),
                weight,
                contribution: u64::from(score) * u64::from(weight),
                max: u64::from(MAX_SCORE) * u64::from(weight),
                rationale: platform
                    .rationales
                    .get(index)
                    .map(String::as_str)
                    .unwrap_or(""),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::rank;
    use crate::rank::tests::{criterion, platform};

    fn labels() -> Vec<String> {
        ["None", "Partial", "Good", "Excellent"]
            .iter()
            .map(|label| label.to_string())
            .collect()
    }

    #[test]
    fn contributions_sum_to_weighted_score() {
        let criteria = vec![criterion(1, 3, 5), criterion(2, 2, 5), criterion(3, 0, 5)];
        let platforms = vec![platform("alpha", &[2, 3, 1])];
        let mut weights = Weights::new();
        weights.set(&criteria[2], 4).expect("weight within range");
        let score_labels = labels();

        let rows = explain(&platforms[0], &criteria, &weights, &score_labels);
        let ranked = rank(&platforms, &criteria, &weights);

        let total: u64 = rows.iter().map(|row| row.contribution).sum();
        let max: u64 = rows.iter().map(|row| row.max).sum();
        assert_eq!(total, ranked[0].weighted_score);
        assert_eq!(max, ranked[0].max_possible);
        assert_eq!(rows[1].label, "Excellent");
        assert_eq!(rows[2].weight, 4);
        assert_eq!(rows[0].rationale, "scored 2");
    }
}

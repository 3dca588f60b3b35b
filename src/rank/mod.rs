pub mod category;
pub mod explain;

use crate::types::dataset::{Criterion, Platform, MAX_SCORE};
use crate::types::ranking::{RankedPlatform, Weights};

/// Rank `platforms` by weighted score under `weights`, tracking how far each
/// platform moved from its rank under default weights.
///
/// Scores are joined to `criteria` by position. Ties keep input order.
///
/// # Panics
///
/// Panics if a platform's score vector length differs from the criteria count.
/// Loaded datasets are checked for this in [`crate::dataset::validate`].
pub fn rank<'a>(
    platforms: &'a [Platform],
    criteria: &[Criterion],
    weights: &Weights,
) -> Vec<RankedPlatform<'a>> {
    let totals = platforms
        .iter()
        .map(|platform| weighted_totals(platform, criteria, |criterion| weights.effective(criterion)))
        .collect::<Vec<_>>();
    let default_totals = platforms
        .iter()
        .map(|platform| weighted_totals(platform, criteria, |criterion| criterion.default_weight))
        .collect::<Vec<_>>();

    let order = descending_order(&totals);
    let default_ranks = ranks_by_index(&descending_order(&default_totals));

    let ranked = order
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let (weighted_score, max_possible) = totals[index];
            let rank = position + 1;
            let default_rank = default_ranks[index];
            RankedPlatform {
                platform: &platforms[index],
                weighted_score,
                max_possible,
                percentage: percentage(weighted_score, max_possible),
                rank,
                default_rank,
                rank_delta: default_rank as i64 - rank as i64,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        platforms = ranked.len(),
        criteria = criteria.len(),
        "ranked platforms"
    );
    ranked
}

/// `(weighted score, maximum possible)` for one platform.
fn weighted_totals(
    platform: &Platform,
    criteria: &[Criterion],
    weight_of: impl Fn(&Criterion) -> u32,
) -> (u64, u64) {
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
        .zip(&platform.scores)
        .fold((0, 0), |(score, max), (criterion, &value)| {
            let weight = u64::from(weight_of(criterion));
            (
                score + u64::from(value) * weight,
                max + u64::from(MAX_SCORE) * weight,
            )
        })
}

fn percentage(weighted_score: u64, max_possible: u64) -> f64 {
    if max_possible == 0 {
        return 0.0;
    }
    weighted_score as f64 / max_possible as f64 * 100.0
}

/// Input indices ordered by descending weighted score; `sort_by` is stable.
fn descending_order(totals: &[(u64, u64)]) -> Vec<usize> {
    let mut order = (0..totals.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| totals[b].0.cmp(&totals[a].0));
    order
}

/// 1-based rank for each input index.
fn ranks_by_index(order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

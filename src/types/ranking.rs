use super::dataset::{Criterion, Platform};
use crate::error::{Result, ScorecardError};
use serde::Serialize;
use std::collections::BTreeMap;

/// User-adjusted criterion weights. Criteria without an entry use their
/// default weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Weights(BTreeMap<u32, u32>);

impl Weights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every criterion pinned to its default weight.
    pub fn defaults(criteria: &[Criterion]) -> Self {
        Self(
            criteria
                .iter()
                .map(|criterion| (criterion.id, criterion.default_weight))
                .collect(),
        )
    }

    pub fn effective(&self, criterion: &Criterion) -> u32 {
        self.0
            .get(&criterion.id)
            .copied()
            .unwrap_or(criterion.default_weight)
    }

    pub fn set(&mut self, criterion: &Criterion, weight: u32) -> Result<()> {
        if weight > criterion.max_weight {
            return Err(ScorecardError::WeightOutOfRange {
                criterion: criterion.id,
                weight,
                max: criterion.max_weight,
            });
        }
        self.0.insert(criterion.id, weight);
        Ok(())
    }

    pub fn total(&self, criteria: &[Criterion]) -> u64 {
        criteria
            .iter()
            .map(|criterion| u64::from(self.effective(criterion)))
            .sum()
    }

    pub fn has_changes(&self, criteria: &[Criterion]) -> bool {
        !self.changed(criteria).is_empty()
    }

    /// `(criterion, default, current)` for every criterion whose effective
    /// weight differs from its default.
    pub fn changed<'a>(&self, criteria: &'a [Criterion]) -> Vec<(&'a Criterion, u32, u32)> {
        criteria
            .iter()
            .filter_map(|criterion| {
                let current = self.effective(criterion);
                (current != criterion.default_weight)
                    .then_some((criterion, criterion.default_weight, current))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlatform<'a> {
    #[serde(flatten)]
    pub platform: &'a Platform,
    pub weighted_score: u64,
    pub max_possible: u64,
    pub percentage: f64,
    pub rank: usize,
    pub default_rank: usize,
    /// Positive when the platform moved up relative to default weights.
    pub rank_delta: i64,
}

/// One criterion's share of a platform's weighted score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreContribution<'a> {
    pub criterion: &'a Criterion,
    pub score: u8,
    pub label: &'a str,
    pub weight: u32,
    pub contribution: u64,
    pub max: u64,
    pub rationale: &'a str,
}

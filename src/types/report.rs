use super::dataset::{Category, CategoryStyle, Criterion};
use super::pricing::{PricingData, PricingInputs};
use super::ranking::{RankedPlatform, ScoreContribution};
use crate::pricing::inputs::SliderViolation;
use crate::pricing::overrides::EffectiveQuote;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMeta<'a> {
    pub path: String,
    pub fingerprint: &'a str,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightChange<'a> {
    pub criterion_id: u32,
    pub short_label: &'a str,
    pub default_weight: u32,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation<'a> {
    pub platform_id: &'a str,
    pub platform_name: &'a str,
    pub rows: Vec<ScoreContribution<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport<'a> {
    pub dataset: DatasetMeta<'a>,
    pub total_weight: u64,
    pub default_total_weight: u64,
    pub changed_weights: Vec<WeightChange<'a>>,
    pub rankings: Vec<RankedPlatform<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation<'a>>,
}

#[derive(Debug, Clone)]
pub struct PricingReport<'r, 'a> {
    pub dataset: DatasetMeta<'a>,
    pub inputs: PricingInputs,
    pub show_all_tiers: bool,
    pub pricing: &'a PricingData,
    pub quotes: Vec<EffectiveQuote<'r, 'a>>,
    pub slider_warnings: Vec<SliderViolation>,
}

impl PricingReport<'_, '_> {
    pub fn has_warnings(&self) -> bool {
        !self.slider_warnings.is_empty() || self.quotes.iter().any(|quote| quote.needs_sales_quote())
    }
}

#[derive(Debug, Clone)]
pub struct CriteriaReport<'a> {
    pub groups: Vec<(Category, Vec<&'a Criterion>)>,
    pub styles: &'a IndexMap<Category, CategoryStyle>,
}

impl CriteriaReport<'_> {
    pub fn label(&self, category: Category) -> &str {
        self.styles
            .get(&category)
            .map(|style| style.label.as_str())
            .unwrap_or(category.as_str())
    }
}

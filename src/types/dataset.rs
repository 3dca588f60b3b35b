use super::pricing::PricingData;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Highest score a platform can receive on a single criterion.
pub const MAX_SCORE: u8 = 3;

/// Importance bucket of a criterion. Declaration order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Critical,
    High,
    Medium,
    Low,
    Nice,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Critical,
        Category::High,
        Category::Medium,
        Category::Low,
        Category::Nice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Critical => "critical",
            Category::High => "high",
            Category::Medium => "medium",
            Category::Low => "low",
            Category::Nice => "nice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub id: u32,
    pub name: String,
    #[serde(rename = "short")]
    pub short_label: String,
    pub category: Category,
    pub default_weight: u32,
    pub max_weight: u32,
    #[serde(default)]
    pub description: String,
}

/// A comparable product. `scores` and `rationales` are joined to the criteria
/// list by position, not by criterion id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub url: String,
    /// Opaque display key resolved to an asset by the view layer.
    #[serde(rename = "icon")]
    pub icon_key: String,
    pub color: String,
    pub scores: Vec<u8>,
    pub rationales: Vec<String>,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub label: String,
    pub color: String,
}

/// The externally supplied evaluation document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalData {
    pub criteria: Vec<Criterion>,
    pub platforms: Vec<Platform>,
    pub score_labels: Vec<String>,
    #[serde(default)]
    pub categories: IndexMap<Category, CategoryStyle>,
    pub pricing: PricingData,
}

impl EvalData {
    pub fn platform(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|platform| platform.id == id)
    }

    pub fn criterion(&self, id: u32) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order_follows_importance() {
        let mut shuffled = vec![Category::Nice, Category::Critical, Category::Low, Category::High];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Critical, Category::High, Category::Low, Category::Nice]
        );
    }

    #[test]
    fn criterion_parses_camel_case_fields() {
        let criterion: Criterion = serde_json::from_str(
            r#"{"id": 7, "name": "Drift detection", "short": "Drift",
                "category": "high", "defaultWeight": 2, "maxWeight": 5,
                "description": "Detects out-of-band changes"}"#,
        )
        .expect("criterion should parse");

        assert_eq!(criterion.short_label, "Drift");
        assert_eq!(criterion.category, Category::High);
        assert_eq!(criterion.default_weight, 2);
        assert_eq!(criterion.max_weight, 5);
    }
}

use crate::error::{Result, ScorecardError};
use crate::types::dataset::{EvalData, MAX_SCORE};
use crate::types::pricing::{Dimension, PricingTier};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A validated evaluation document plus the digest of its source bytes.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub path: PathBuf,
    pub fingerprint: String,
    pub data: EvalData,
}

pub fn load(path: &Path) -> Result<LoadedDataset> {
    if !path.is_file() {
        return Err(ScorecardError::DatasetNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let data = parse(&bytes)?;
    tracing::info!(
        path = %path.display(),
        criteria = data.criteria.len(),
        platforms = data.platforms.len(),
        "loaded dataset"
    );
    Ok(LoadedDataset {
        path: path.to_path_buf(),
        fingerprint: fingerprint(&bytes),
        data,
    })
}

pub fn parse(bytes: &[u8]) -> Result<EvalData> {
    let data: EvalData = serde_json::from_slice(bytes)?;
    validate(&data)?;
    Ok(data)
}

/// SHA-256 hex digest identifying a dataset snapshot.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

/// `path` itself when it is a file, otherwise every `*.json` file below it.
pub fn discover(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(ScorecardError::DatasetNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|file| file.extension().is_some_and(|ext| ext == "json"))
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

/// Check the cross-references and ranges the ranking and pricing code rely on.
pub fn validate(data: &EvalData) -> Result<()> {
    if data.platforms.is_empty() {
        return Err(contract("platforms cannot be empty"));
    }

    let mut criterion_ids = HashSet::new();
    for criterion in &data.criteria {
        if !criterion_ids.insert(criterion.id) {
            return Err(contract(format!("duplicate criterion id {}", criterion.id)));
        }
        if criterion.max_weight < criterion.default_weight {
            return Err(contract(format!(
                "criterion {} has maxWeight {} below defaultWeight {}",
                criterion.id, criterion.max_weight, criterion.default_weight
            )));
        }
    }

    if data.score_labels.len() != usize::from(MAX_SCORE) + 1 {
        return Err(contract(format!(
            "scoreLabels must have {} entries (found {})",
            usize::from(MAX_SCORE) + 1,
            data.score_labels.len()
        )));
    }

    let mut platform_ids = HashSet::new();
    for platform in &data.platforms {
        if !platform_ids.insert(platform.id.as_str()) {
            return Err(contract(format!("duplicate platform id {}", platform.id)));
        }
        if platform.scores.len() != data.criteria.len() {
            return Err(contract(format!(
                "platform {} has {} scores for {} criteria",
                platform.id,
                platform.scores.len(),
                data.criteria.len()
            )));
        }
        if platform.rationales.len() != data.criteria.len() {
            return Err(contract(format!(
                "platform {} has {} rationales for {} criteria",
                platform.id,
                platform.rationales.len(),
                data.criteria.len()
            )));
        }
        if let Some(score) = platform.scores.iter().find(|&&score| score > MAX_SCORE) {
            return Err(contract(format!(
                "platform {} has score {} outside 0..={}",
                platform.id, score, MAX_SCORE
            )));
        }
    }

    let mut priced = data.pricing.platforms.iter().collect::<Vec<_>>();
    priced.sort_by(|a, b| a.0.cmp(b.0));
    for (platform_id, entry) in priced {
        if !platform_ids.contains(platform_id.as_str()) {
            return Err(ScorecardError::UnknownPlatform(platform_id.clone()));
        }
        if entry.tiers.is_empty() {
            return Err(contract(format!("pricing for {platform_id} has no tiers")));
        }
        let mut tier_names = HashSet::new();
        for tier in &entry.tiers {
            if !tier_names.insert(tier.name.as_str()) {
                return Err(contract(format!(
                    "pricing for {platform_id} repeats tier {}",
                    tier.name
                )));
            }
            validate_rates(platform_id, tier)?;
        }
    }

    for (dimension, slider) in &data.pricing.sliders {
        if slider.min > slider.max || !(slider.min..=slider.max).contains(&slider.default) {
            return Err(contract(format!(
                "slider {dimension} default {} outside {}..={}",
                slider.default, slider.min, slider.max
            )));
        }
    }

    Ok(())
}

fn validate_rates(platform_id: &str, tier: &PricingTier) -> Result<()> {
    let rates = std::iter::once(("basePrice", tier.base_price)).chain(
        Dimension::ALL
            .iter()
            .map(|&dimension| (rate_key(dimension), tier.rate(dimension))),
    );
    for (key, value) in rates {
        if !value.is_finite() || value < 0.0 {
            return Err(contract(format!(
                "pricing for {platform_id} tier {} has invalid {key} {value}",
                tier.name
            )));
        }
    }
    Ok(())
}

fn rate_key(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Users => "perUser",
        Dimension::Resources => "perResource",
        Dimension::Runs => "perRun",
    }
}

fn contract(message: impl Into<String>) -> ScorecardError {
    ScorecardError::DataContract(message.into())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    pub(crate) const SAMPLE: &str = r##"{
      "criteria": [
        {"id": 1, "name": "Policy as code", "short": "Policy", "category": "critical",
         "defaultWeight": 3, "maxWeight": 5, "description": "OPA policies"},
        {"id": 2, "name": "Drift detection", "short": "Drift", "category": "medium",
         "defaultWeight": 1, "maxWeight": 3, "description": "Scheduled drift checks"}
      ],
      "platforms": [
        {"id": "alpha", "name": "Alpha", "url": "https://alpha.example", "icon": "Rocket",
         "color": "#4B6BFF", "scores": [3, 1], "rationales": ["Native OPA", "Manual"],
         "tagline": "Fast"},
        {"id": "beta", "name": "Beta", "url": "https://beta.example", "icon": "Leaf",
         "color": "#00B389", "scores": [2, 3], "rationales": ["Partial", "Built in"],
         "tagline": "Green"}
      ],
      "scoreLabels": ["None", "Basic", "Good", "Excellent"],
      "categories": {"critical": {"label": "Critical", "color": "red"},
                     "medium": {"label": "Medium", "color": "amber"}},
      "pricing": {
        "platforms": {
          "alpha": {"model": "per-user", "description": "Seats", "tiers": [
            {"name": "Free", "basePrice": 0, "includedUsers": 2, "includedResources": null,
             "includedRuns": null, "perUser": 0, "perResource": 0, "perRun": 0,
             "maxUsers": 2, "maxResources": null, "maxRuns": null, "estimated": false,
             "features": {"sso": false}, "notes": ""},
            {"name": "Team", "basePrice": 50, "includedUsers": 5, "includedResources": null,
             "includedRuns": null, "perUser": 10, "perResource": 0, "perRun": 0,
             "maxUsers": null, "maxResources": null, "maxRuns": null, "estimated": false,
             "features": {"sso": true}, "notes": ""}
          ]}
        },
        "featureLabels": {"sso": "SSO"},
        "sliders": {
          "users": {"min": 1, "max": 100, "default": 5, "step": 1, "label": "Users", "unit": ""},
          "resources": {"min": 0, "max": 5000, "default": 100, "step": 50, "label": "Resources", "unit": "res"},
          "runs": {"min": 0, "max": 10000, "default": 500, "step": 100, "label": "Runs", "unit": "/mo"}
        }
      }
    }"##;

    fn sample() -> EvalData {
        serde_json::from_str(SAMPLE).expect("sample should parse")
    }

    #[test]
    fn sample_dataset_is_valid() {
        let data = parse(SAMPLE.as_bytes()).expect("sample should validate");
        assert_eq!(data.criteria.len(), 2);
        assert_eq!(data.pricing.sliders.len(), 3);
        assert_eq!(data.pricing.feature_label("sso"), "SSO");
        assert_eq!(data.pricing.feature_label("audit"), "audit");
        assert_eq!(data.platforms[0].color, "#4B6BFF");
        assert_eq!(data.platforms[1].color, "#00B389");
    }

    #[test]
    fn fingerprint_is_lowercase_sha256_hex() {
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            fingerprint(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn rejects_score_length_mismatch() {
        let mut data = sample();
        data.platforms[1].scores.pop();
        assert!(matches!(
            validate(&data),
            Err(ScorecardError::DataContract(message)) if message.contains("1 scores for 2 criteria")
        ));
    }

    #[test]
    fn rejects_rationale_length_mismatch() {
        let mut data = sample();
        data.platforms[0].rationales.push("extra".to_string());
        assert!(validate(&data).is_err());
    }

    #[test]
    fn rejects_out_of_range_score() {
        let mut data = sample();
        data.platforms[0].scores[1] = 4;
        assert!(matches!(
            validate(&data),
            Err(ScorecardError::DataContract(message)) if message.contains("score 4")
        ));
    }

    #[test]
    fn rejects_default_weight_above_maximum() {
        let mut data = sample();
        data.criteria[1].default_weight = 4;
        assert!(validate(&data).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut data = sample();
        data.platforms[1].id = "alpha".to_string();
        assert!(validate(&data).is_err());

        let mut data = sample();
        data.criteria[1].id = 1;
        assert!(validate(&data).is_err());
    }

    #[test]
    fn rejects_pricing_for_unknown_platform() {
        let mut data = sample();
        let entry = data.pricing.platforms["alpha"].clone();
        data.pricing.platforms.insert("ghost".to_string(), entry);
        assert!(matches!(
            validate(&data),
            Err(ScorecardError::UnknownPlatform(id)) if id == "ghost"
        ));
    }

    #[test]
    fn rejects_empty_or_repeated_tiers() {
        let mut data = sample();
        if let Some(entry) = data.pricing.platforms.get_mut("alpha") {
            entry.tiers.clear();
        }
        assert!(validate(&data).is_err());

        let mut data = sample();
        if let Some(entry) = data.pricing.platforms.get_mut("alpha") {
            entry.tiers[1].name = "Free".to_string();
        }
        assert!(validate(&data).is_err());
    }

    #[test]
    fn rejects_negative_or_non_finite_rates() {
        let mut data = sample();
        if let Some(entry) = data.pricing.platforms.get_mut("alpha") {
            entry.tiers[1].per_user = -1.0;
        }
        assert!(validate(&data).is_err());

        let mut data = sample();
        if let Some(entry) = data.pricing.platforms.get_mut("alpha") {
            entry.tiers[0].base_price = f64::NAN;
        }
        assert!(validate(&data).is_err());
    }

    #[test]
    fn rejects_slider_default_outside_range() {
        let mut data = sample();
        if let Some(slider) = data.pricing.sliders.get_mut(&Dimension::Users) {
            slider.default = 0;
        }
        assert!(validate(&data).is_err());
    }

    #[test]
    fn rejects_wrong_score_label_count() {
        let mut data = sample();
        data.score_labels.pop();
        assert!(validate(&data).is_err());
    }

    #[test]
    fn load_reports_missing_file_and_fingerprints_content() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load(&missing),
            Err(ScorecardError::DatasetNotFound(_))
        ));

        let path = dir.path().join("evaluation.json");
        fs::write(&path, SAMPLE).expect("dataset should write");
        let loaded = load(&path).expect("dataset should load");
        assert_eq!(loaded.fingerprint.len(), 64);
        assert_eq!(loaded.fingerprint, fingerprint(SAMPLE.as_bytes()));
    }

    #[test]
    fn discover_lists_json_files_recursively() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("archive")).expect("nested dir should create");
        fs::write(dir.path().join("b.json"), "{}").expect("file should write");
        fs::write(dir.path().join("archive/a.json"), "{}").expect("file should write");
        fs::write(dir.path().join("notes.txt"), "skip").expect("file should write");

        let files = discover(dir.path()).expect("discover should succeed");
        let names = files
            .iter()
            .map(|file| {
                file.strip_prefix(dir.path())
                    .expect("file should be under root")
                    .to_path_buf()
            })
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![PathBuf::from("archive/a.json"), PathBuf::from("b.json")]
        );
    }
}

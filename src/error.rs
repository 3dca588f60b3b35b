use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("dataset contract violation: {0}")]
    DataContract(String),

    #[error("unknown criterion id: {0}")]
    UnknownCriterion(u32),

    #[error("unknown platform id: {0}")]
    UnknownPlatform(String),

    #[error("unknown tier {tier:?} for platform {platform}")]
    UnknownTier { platform: String, tier: String },

    #[error("weight {weight} for criterion {criterion} exceeds maximum {max}")]
    WeightOutOfRange { criterion: u32, weight: u32, max: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;

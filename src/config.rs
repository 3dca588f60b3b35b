use crate::error::{Result, ScorecardError};
use crate::types::config::ScorecardConfig;
use std::path::{Path, PathBuf};
use toml::map::{Entry, Map};
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "scorecard.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".scorecard/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/scorecard/config.toml";

/// Config sources, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Global,
    Project,
    Local,
}

impl Layer {
    fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Project => "project",
            Self::Local => "local",
        }
    }
}

pub fn load_config(root: &Path) -> Result<Option<ScorecardConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// The project file gates the other layers: without `scorecard.toml` in
/// `root` no config applies, even if a global file exists.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScorecardConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.is_file() {
        return Ok(None);
    }

    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let layers = [
        (Layer::Global, global_path),
        (Layer::Project, Some(project_path.as_path())),
        (Layer::Local, Some(local_path.as_path())),
    ];

    let mut merged = Map::new();
    for (layer, path) in layers {
        let Some(path) = path.filter(|path| path.is_file()) else {
            continue;
        };
        overlay(&mut merged, read_layer(layer, path)?);
        tracing::debug!(layer = layer.as_str(), path = %path.display(), "applied config layer");
    }

    let cfg: ScorecardConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| ScorecardError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(layer: Layer, path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        ScorecardError::ConfigParse(format!(
            "{} config {}: {}",
            layer.as_str(),
            path.display(),
            e
        ))
    })
}

/// Tables merge key by key; any other value in `top` replaces the one below.
fn overlay(base: &mut Map<String, Value>, top: Map<String, Value>) {
    for (key, value) in top {
        match base.entry(key) {
            Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (Value::Table(lower), Value::Table(upper)) => overlay(lower, upper),
                (current, value) => *current = value,
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Thresholds applied by the validator. Defaults match the published SKILL.md
/// rules; a config file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub name_max_chars: usize,
    pub description_max_chars: usize,
    pub description_min_chars: usize, // below this only warns
    pub compatibility_max_chars: usize,
    pub body_max_lines: usize, // above this only warns
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            name_max_chars: 64,
            description_max_chars: 1024,
            description_min_chars: 50,
            compatibility_max_chars: 500,
            body_max_lines: 500,
        }
    }
}

/// Thresholds from `explicit` when given, defaults otherwise. No config file
/// is looked up implicitly, so a bare run always applies the default rules.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ValidatorConfig> {
    match explicit {
        Some(path) => load_from(path),
        None => Ok(ValidatorConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<ValidatorConfig> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: ValidatorConfig =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

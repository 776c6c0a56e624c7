//! One validation run over a skill directory.
//!
//! Only three structural problems stop a run early: a missing `SKILL.md`,
//! content that does not open with `---`, and a header that is never closed.
//! Everything else is collected so a single report lists every problem.

pub mod checks;
pub mod report;

pub use report::{Diagnostic, Diagnostics, Level, Outcome};

use crate::config::ValidatorConfig;
use crate::header::{self, HeaderParser};
use crate::skills;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub struct Validator {
    config: ValidatorConfig,
    parser: Box<dyn HeaderParser>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_parser(config, header::default_parser())
    }

    pub fn with_parser(config: ValidatorConfig, parser: Box<dyn HeaderParser>) -> Self {
        Self { config, parser }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate the skill directory at `skill_dir`. The error arm is reserved
    /// for an existing SKILL.md that cannot be read.
    pub fn validate(&self, skill_dir: &Path) -> Result<Outcome> {
        let skill_md = skill_dir.join(skills::SKILL_FILE);
        debug!(path = %skill_md.display(), parser = self.parser.name(), "validating skill");
        if !skill_md.exists() {
            return Ok(Outcome::short_circuit(format!(
                "{} not found",
                skills::SKILL_FILE
            )));
        }
        let content = fs::read_to_string(&skill_md)
            .with_context(|| format!("reading {}", skill_md.display()))?;
        Ok(self.validate_content(&content, &dir_name(skill_dir)))
    }

    /// Checks over already-loaded content; `dir_name` is what the `name` field
    /// is compared against.
    pub fn validate_content(&self, content: &str, dir_name: &str) -> Outcome {
        let fm = match skills::split_frontmatter(content) {
            Ok(fm) => fm,
            Err(err) => {
                debug!(%err, "frontmatter structure rejected");
                return Outcome::short_circuit(err.to_string());
            }
        };

        let mut diags = Diagnostics::default();
        if let Some(note) = self.parser.fallback_note() {
            warn!("{note}");
            diags.warning(note);
        }

        match self.parser.parse(fm.header) {
            Ok(header) => {
                debug!(keys = header.len(), "header parsed");
                diags.extend(checks::unknown_keys(&header));
                diags.extend(checks::required_keys(&header));
                diags.extend(checks::check_name(&header, dir_name, &self.config));
                diags.extend(checks::check_description(&header, &self.config));
                diags.extend(checks::check_compatibility(&header, &self.config));
            }
            Err(err) => {
                debug!(%err, "header parse failed; skipping field checks");
                diags.error(err.to_string());
            }
        }

        diags.push(checks::check_body(fm.body, &self.config));
        let outcome = diags.finish();
        debug!(valid = outcome.valid, "validation finished");
        outcome
    }
}

/// Validate with default thresholds and the best available parser, returning
/// the verdict and the printable report.
pub fn validate_skill(skill_dir: impl AsRef<Path>) -> Result<(bool, String)> {
    let outcome = Validator::default().validate(skill_dir.as_ref())?;
    Ok((outcome.valid, outcome.report()))
}

/// Final path component; `.` and `..` fall back to the resolved directory.
fn dir_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

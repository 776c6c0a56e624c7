//! Validator for Claude Skills `SKILL.md` descriptors.
//!
//! A skill directory holds a `SKILL.md` that opens with a `---` delimited
//! YAML header followed by free-form markdown. [`validate_skill`] checks the
//! header against the allowed field set and per-field rules, checks the body
//! size, and returns a verdict plus a human-readable report.

pub mod config;
pub mod header;
pub mod skills;
pub mod validate;

pub use config::ValidatorConfig;
pub use header::{default_parser, Header, HeaderError, HeaderParser, HeaderValue};
pub use validate::{validate_skill, Diagnostic, Level, Outcome, Validator};

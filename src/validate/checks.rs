use super::report::Diagnostic;
use crate::config::ValidatorConfig;
use crate::header::{Header, HeaderValue};
use crate::skills;
use regex::Regex;
use std::sync::LazyLock;

/// Keys a SKILL.md header may carry, sorted. `allowed-tools` and `metadata`
/// are accepted without any checks on their contents.
pub const ALLOWED_KEYS: [&str; 6] = [
    "allowed-tools",
    "compatibility",
    "description",
    "license",
    "metadata",
    "name",
];

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid regex"));

pub fn unknown_keys(header: &Header) -> Vec<Diagnostic> {
    let unexpected: Vec<&str> = header
        .keys()
        .filter(|k| !ALLOWED_KEYS.contains(k))
        .collect();
    if unexpected.is_empty() {
        return vec![];
    }
    vec![Diagnostic::error(format!(
        "Unexpected key(s) in frontmatter: {}. Allowed: {}",
        unexpected.join(", "),
        ALLOWED_KEYS.join(", ")
    ))]
}

pub fn required_keys(header: &Header) -> Vec<Diagnostic> {
    ["name", "description"]
        .into_iter()
        .filter(|key| !header.contains(key))
        .map(|key| Diagnostic::error(format!("Missing '{key}' in frontmatter")))
        .collect()
}

pub fn check_name(header: &Header, dir_name: &str, cfg: &ValidatorConfig) -> Vec<Diagnostic> {
    let mut out = vec![];
    let name = match header.get("name") {
        None => return out,
        Some(HeaderValue::String(s)) => s.trim(),
        Some(other) => {
            out.push(Diagnostic::error(format!(
                "Name must be a string, got {}",
                other.type_name()
            )));
            return out;
        }
    };
    if name.is_empty() {
        return out;
    }

    if !KEBAB_CASE.is_match(name) {
        out.push(Diagnostic::error(format!(
            "Name '{name}' should be kebab-case (lowercase letters, digits, hyphens only)"
        )));
    }
    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        out.push(Diagnostic::error(format!(
            "Name '{name}' cannot start/end with hyphen or contain consecutive hyphens"
        )));
    }
    let len = name.chars().count();
    if len > cfg.name_max_chars {
        out.push(Diagnostic::error(format!(
            "Name is too long ({len} chars). Maximum: {}",
            cfg.name_max_chars
        )));
    }
    if name != dir_name {
        out.push(Diagnostic::warning(format!(
            "Name '{name}' does not match directory name '{dir_name}'"
        )));
    }
    out
}

pub fn check_description(header: &Header, cfg: &ValidatorConfig) -> Vec<Diagnostic> {
    let mut out = vec![];
    let description = match header.get("description") {
        None => return out,
        Some(HeaderValue::String(s)) => s.trim(),
        Some(other) => {
            out.push(Diagnostic::error(format!(
                "Description must be a string, got {}",
                other.type_name()
            )));
            return out;
        }
    };
    if description.is_empty() {
        return out;
    }

    if description.contains(['<', '>']) {
        out.push(Diagnostic::error(
            "Description cannot contain angle brackets (< or >)",
        ));
    }
    let len = description.chars().count();
    if len > cfg.description_max_chars {
        out.push(Diagnostic::error(format!(
            "Description is too long ({len} chars). Maximum: {}",
            cfg.description_max_chars
        )));
    }
    // "[TODO" is covered by the plain substring.
    if description.contains("TODO") {
        out.push(Diagnostic::warning(
            "Description contains TODO placeholder, update before use",
        ));
    }
    if len < cfg.description_min_chars {
        out.push(Diagnostic::warning(
            "Description is very short, consider adding trigger keywords",
        ));
    }
    out
}

pub fn check_compatibility(header: &Header, cfg: &ValidatorConfig) -> Vec<Diagnostic> {
    match header.get("compatibility") {
        None => vec![],
        Some(HeaderValue::String(s)) => {
            let len = s.chars().count();
            if len > cfg.compatibility_max_chars {
                vec![Diagnostic::error(format!(
                    "Compatibility is too long ({len} chars). Maximum: {}",
                    cfg.compatibility_max_chars
                ))]
            } else {
                vec![]
            }
        }
        Some(other) => vec![Diagnostic::error(format!(
            "Compatibility must be a string, got {}",
            other.type_name()
        ))],
    }
}

/// Never an error: an oversized body only warns.
pub fn check_body(body: &str, cfg: &ValidatorConfig) -> Diagnostic {
    let count = skills::count_body_lines(body);
    if count > cfg.body_max_lines {
        Diagnostic::warning(format!(
            "{} body is {count} lines (recommended max: {})",
            skills::SKILL_FILE,
            cfg.body_max_lines
        ))
    } else {
        Diagnostic::success(format!(
            "{} body: {count} lines (within {}-line limit)",
            skills::SKILL_FILE,
            cfg.body_max_lines
        ))
    }
}

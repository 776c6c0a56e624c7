//! Header parsing for SKILL.md front-matter.
//!
//! Two parsers sit behind [`HeaderParser`]: a full YAML parser (feature
//! `yaml`, on by default) and a line-based `key: value` parser that is used
//! when YAML support is not compiled in. The line parser only ever produces
//! string values; nested mappings and lists are out of its reach.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<HeaderValue>),
    Mapping(BTreeMap<String, HeaderValue>),
}

impl HeaderValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            HeaderValue::Null => "null",
            HeaderValue::Bool(_) => "boolean",
            HeaderValue::Integer(_) => "integer",
            HeaderValue::Float(_) => "float",
            HeaderValue::String(_) => "string",
            HeaderValue::Sequence(_) => "sequence",
            HeaderValue::Mapping(_) => "mapping",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    fields: BTreeMap<String, HeaderValue>,
}

impl Header {
    pub fn insert(&mut self, key: impl Into<String>, value: HeaderValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, HeaderValue)> for Header {
    fn from_iter<T: IntoIterator<Item = (String, HeaderValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
    #[error("Frontmatter must be a YAML dictionary")]
    NotMapping,
}

pub trait HeaderParser {
    fn name(&self) -> &'static str;

    fn parse(&self, text: &str) -> Result<Header, HeaderError>;

    /// Warning to surface when this parser is a degraded stand-in.
    fn fallback_note(&self) -> Option<String> {
        None
    }
}

/// Best parser compiled into this build.
#[cfg(feature = "yaml")]
pub fn default_parser() -> Box<dyn HeaderParser> {
    Box::new(YamlHeaderParser)
}

#[cfg(not(feature = "yaml"))]
pub fn default_parser() -> Box<dyn HeaderParser> {
    Box::new(LineHeaderParser)
}

#[cfg(feature = "yaml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlHeaderParser;

#[cfg(feature = "yaml")]
impl HeaderParser for YamlHeaderParser {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn parse(&self, text: &str) -> Result<Header, HeaderError> {
        let parsed: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| HeaderError::InvalidYaml(e.to_string()))?;
        match convert_yaml(parsed) {
            HeaderValue::Mapping(map) => Ok(map.into_iter().collect()),
            _ => Err(HeaderError::NotMapping),
        }
    }
}

#[cfg(feature = "yaml")]
fn convert_yaml(value: serde_yaml::Value) -> HeaderValue {
    use serde_yaml::Value;
    match value {
        Value::Null => HeaderValue::Null,
        Value::Bool(b) => HeaderValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => HeaderValue::Integer(i),
            None => HeaderValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => HeaderValue::String(s),
        Value::Sequence(items) => {
            HeaderValue::Sequence(items.into_iter().map(convert_yaml).collect())
        }
        Value::Mapping(map) => HeaderValue::Mapping(
            map.into_iter()
                .map(|(k, v)| (yaml_key(k), convert_yaml(v)))
                .collect(),
        ),
        Value::Tagged(tagged) => convert_yaml(tagged.value),
    }
}

#[cfg(feature = "yaml")]
fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;
    match key {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// `key: value` per line, split on the first colon. Blank lines, `#`
/// comments and lines without a colon are skipped; a later duplicate key
/// replaces an earlier one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineHeaderParser;

impl HeaderParser for LineHeaderParser {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn parse(&self, text: &str) -> Result<Header, HeaderError> {
        let mut header = Header::default();
        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            header.insert(
                key.trim(),
                HeaderValue::String(strip_quotes(value.trim()).to_string()),
            );
        }
        Ok(header)
    }

    fn fallback_note(&self) -> Option<String> {
        Some("YAML support not compiled in, using basic parser".to_string())
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// File name every skill directory must carry at its top level.
pub const SKILL_FILE: &str = "SKILL.md";

pub const DELIMITER: &str = "---";

// Leading --- YAML --- block; tolerate CRLF. At least one header line is
// required, so `---\n---` is unterminated, and the closing delimiter has to
// sit on its own line.
static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^---\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|$)").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("No YAML frontmatter found")]
    Missing,
    #[error("Invalid frontmatter format")]
    Unterminated,
}

/// A descriptor split into its header text and body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    pub header: &'a str,
    pub body: &'a str,
}

pub fn split_frontmatter(text: &str) -> Result<Frontmatter<'_>, FrontmatterError> {
    if !text.starts_with(DELIMITER) {
        return Err(FrontmatterError::Missing);
    }
    let captures = FRONTMATTER
        .captures(text)
        .ok_or(FrontmatterError::Unterminated)?;
    let block = captures.get(0).ok_or(FrontmatterError::Unterminated)?;
    let header = captures.get(1).ok_or(FrontmatterError::Unterminated)?;
    Ok(Frontmatter {
        header: header.as_str(),
        body: &text[block.end()..],
    })
}

/// Number of lines in a body once surrounding whitespace is dropped. An empty
/// body still counts as a single line.
pub fn count_body_lines(body: &str) -> usize {
    body.trim().split('\n').count()
}

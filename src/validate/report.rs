use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn marker(self) -> &'static str {
        match self {
            Level::Success => "✅ ",
            Level::Warning => "⚠️  ",
            Level::Error => "❌ ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level.marker(), self.message)
    }
}

/// Diagnostics gathered over one run, in emission order.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    has_error: bool,
}

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.level == Level::Error {
            self.has_error = true;
        }
        self.items.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for d in diagnostics {
            self.push(d);
        }
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.push(Diagnostic::error(msg));
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.push(Diagnostic::warning(msg));
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn finish(self) -> Outcome {
        let valid = !self.has_error;
        let mut diagnostics = self.items;
        if valid {
            diagnostics.insert(0, Diagnostic::success("Skill is valid!"));
        }
        Outcome { valid, diagnostics }
    }
}

/// Verdict plus the diagnostics that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    /// Outcome for a failure that stops validation before any other check.
    pub fn short_circuit(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            diagnostics: vec![Diagnostic::error(message)],
        }
    }

    pub fn report(&self) -> String {
        self.diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.level == Level::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
    }
}

//! Core types for lint failures and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Category tag attached to a failure, consumed by downstream reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Stylistic finding.
    Style,
    /// Internal failure of the rule itself (e.g., bad configuration).
    Internal,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Style => write!(f, "style"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location from span information.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A lint failure reported by a rule.
///
/// Ownership transfers to the engine as soon as a rule returns, so the
/// offending node is captured as a resolved [`Location`] rather than an AST
/// borrow. File-scoped failures point at the start of the file with a span
/// covering its full contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Failure {
    /// Rule code (e.g., "DL001").
    pub code: String,
    /// Rule name (e.g., "max-public-structs").
    pub rule: String,
    /// Severity of this failure.
    pub severity: Severity,
    /// Category consumed by downstream reporters.
    pub category: Category,
    /// Confidence in the finding, in `[0, 1]`.
    pub confidence: f64,
    /// Location of the offending node.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

/// Code reported for failures that originate inside a rule rather than in the
/// linted source (e.g., invalid rule configuration).
pub const INTERNAL_FAILURE_CODE: &str = "DL000";

impl Failure {
    /// Creates a new failure with category `style` and confidence 1.0.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            category: Category::Style,
            confidence: 1.0,
            location,
            message: message.into(),
        }
    }

    /// Creates an internal failure naming the rule that could not run.
    ///
    /// Used when a rule's configuration is invalid: the failure is reported
    /// against the file being processed instead of crashing or retrying.
    #[must_use]
    pub fn internal(
        rule: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: INTERNAL_FAILURE_CODE.to_string(),
            rule: rule.into(),
            severity: Severity::Error,
            category: Category::Internal,
            confidence: 1.0,
            location,
            message: message.into(),
        }
    }

    /// Overrides the confidence score.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Failure to a miette Diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct FailureDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Failure> for FailureDiagnostic {
    fn from(failure: &Failure) -> Self {
        Self {
            message: format!("[{}] {}", failure.code, failure.message),
            span: SourceSpan::from((failure.location.offset, failure.location.length)),
            label_message: format!("{} ({})", failure.rule, failure.category),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All failures found.
    pub failures: Vec<Failure>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.failures.iter().any(|f| f.severity == Severity::Error)
    }

    /// Checks if any failures meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_failures_at(&self, severity: Severity) -> bool {
        self.failures.iter().any(|f| f.severity >= severity)
    }

    /// Counts failures by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .failures
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warnings = self
            .failures
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();
        let infos = self
            .failures
            .iter()
            .filter(|f| f.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Adds failures from another result.
    pub fn extend(&mut self, other: Self) {
        self.failures.extend(other.failures);
        self.files_checked += other.files_checked;
    }
}

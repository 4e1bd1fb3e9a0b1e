//! Diagnostics module for placement problems
//!
//! The engine never fails on malformed motion data; it degrades to a
//! default instead. The marks collected here let developer tooling see
//! where that happened. Directional tuples are the first customer.

pub mod tuples;

use serde::{Deserialize, Serialize};

use crate::models::ArrowColor;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A diagnostic mark about one arrow's placement
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DiagnosticMark {
    /// Arrow the mark refers to, if any
    pub color: Option<ArrowColor>,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "degenerate_tuples", "invalid_motion")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    pub fn new(
        color: Option<ArrowColor>,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            color,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Collection of diagnostic marks for one placement run
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        self.marks.extend(marks);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks of the given kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> + 'a {
        self.marks.iter().filter(move |m| m.kind == kind)
    }
}

// ============================================================
// Layer 3 — Naming Axes and Artifact Names
// ============================================================
// Every chart file follows one naming convention:
//
//   <token>_<token>_..._<token><pattern>.pdf
//
// e.g. tokens ["natality", "total", "ldq", "C2"] with the
// pattern "_quarter_ES" give
//
//   natality_total_ldq_C2_quarter_ES.pdf
//
// The tokens come from small ordered lists (NamingAxis);
// the pattern is fixed per call site inside a layout.
// All layouts build names through ArtifactName::from_tokens
// so the convention lives in exactly one place.

use std::path::{Path, PathBuf};

/// File extension of every chart artifact
pub const ARTIFACT_EXTENSION: &str = "pdf";

// ─── NamingAxis ──────────────────────────────────────────────────────────────
/// An ordered, immutable list of tokens (prefixes, suffixes, state codes…).
/// Iteration order is the order combinations are emitted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingAxis {
    tokens: Vec<String>,
}

impl NamingAxis {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ─── ArtifactName ────────────────────────────────────────────────────────────
/// The deterministic name of one expected chart file.
/// Only its existence is ever checked — contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName {
    /// File name without the ".pdf" extension
    stem: String,
}

impl ArtifactName {
    /// Join `tokens` with '_' and append the fixed `pattern`.
    ///
    /// Example:
    ///   ArtifactName::from_tokens(&["lbw", "teen", "ldq", "C1"], "_quarter_ES")
    ///     → "lbw_teen_ldq_C1_quarter_ES.pdf"
    pub fn from_tokens(tokens: &[&str], pattern: &str) -> Self {
        let mut stem = tokens.join("_");
        stem.push_str(pattern);
        Self { stem }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The relative name used inside \includegraphics{...}
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, ARTIFACT_EXTENSION)
    }

    /// Human-readable caption text: underscores become spaces
    /// so LaTeX does not treat them as subscripts.
    pub fn caption(&self) -> String {
        self.stem.replace('_', " ")
    }

    /// Full path of this artifact inside `dir`
    pub fn resolve(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

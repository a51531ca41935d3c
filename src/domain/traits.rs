// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The layouts never touch the filesystem directly. They ask
// these traits instead, so the same layout code runs against
// the real disk (infra::local_fs::LocalFs) or an in-memory
// fake in unit tests.
//
//   ArtifactProbe  → "does this chart exist right now?"
//   ArtifactCopier → byte-for-byte copy of one chart
//   ReportSink     → write one finished document

use anyhow::Result;
use std::path::Path;

// ─── ArtifactProbe ────────────────────────────────────────────────────────────
/// Checks whether an expected chart file exists.
///
/// A missing file is the normal case and returns Ok(false).
/// Any other failure (permission denied, unreadable directory)
/// is an error and aborts the run.
pub trait ArtifactProbe {
    fn exists(&self, path: &Path) -> Result<bool>;
}

// ─── ArtifactCopier ───────────────────────────────────────────────────────────
/// Copies one chart file, returning the number of bytes copied.
/// A source that vanished since it was probed is an error.
pub trait ArtifactCopier {
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;
}

// ─── ReportSink ───────────────────────────────────────────────────────────────
/// Persists a fully rendered document.
/// Implementations must write all of `text` or nothing.
pub trait ReportSink {
    fn write(&self, path: &Path, text: &str) -> Result<()>;
}

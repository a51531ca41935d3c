// ============================================================
// Layer 6 — Local Filesystem Adapter
// ============================================================
// Real-disk implementation of the three domain traits.
//
// Existence checks use fs::metadata instead of Path::is_file
// because is_file() reports "false" for permission errors as
// well as for missing files. Here only NotFound means
// "missing"; any other error aborts the run.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::domain::traits::{ArtifactCopier, ArtifactProbe, ReportSink};

/// Stateless handle on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Fail unless `dir` exists and is a directory
    pub fn require_dir(&self, dir: &Path) -> Result<()> {
        let meta = fs::metadata(dir)
            .with_context(|| format!("Cannot open directory '{}'", dir.display()))?;
        if !meta.is_dir() {
            anyhow::bail!("'{}' is not a directory", dir.display());
        }
        Ok(())
    }
}

impl ArtifactProbe for LocalFs {
    fn exists(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Cannot check '{}'", path.display())),
        }
    }
}

impl ArtifactCopier for LocalFs {
    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        fs::copy(from, to).with_context(|| {
            format!("Cannot copy '{}' to '{}'", from.display(), to.display())
        })
    }
}

impl ReportSink for LocalFs {
    /// Write `text` to a uniquely named temp file in the same directory,
    /// flush it, then rename it over `path` so readers never see a
    /// half-written report. On any error the temp file is removed when
    /// it is dropped.
    fn write(&self, path: &Path, text: &str) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::Builder::new()
            .prefix(".es-texgen-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .with_context(|| format!("Cannot create temp file in '{}'", dir.display()))?;

        tmp.write_all(text.as_bytes())
            .with_context(|| format!("Cannot write '{}'", tmp.path().display()))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("Cannot flush '{}'", tmp.path().display()))?;
        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("Cannot move report into '{}'", path.display()))?;
        Ok(())
    }
}

/// Canonical form of `dir`, for comparing directories reached
/// through symlinks or relative paths.
pub fn canonical_dir(dir: &Path) -> Result<PathBuf> {
    fs::canonicalize(dir).with_context(|| format!("Cannot resolve '{}'", dir.display()))
}

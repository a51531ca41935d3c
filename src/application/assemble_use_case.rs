// ============================================================
// Layer 2 — AssembleUseCase
// ============================================================
// Runs one report generation end to end:
//
//   Step 1: Validate the config                    (Layer 2)
//   Step 2: Check graph / source directories exist (Layer 6)
//   Step 3: For each output target of the layout:
//             a. assemble the Document             (Layer 4)
//             b. render it fully in memory
//             c. write it atomically               (Layer 6)
//
// A missing directory, an unreadable path or a failed copy
// aborts the run. A missing chart is not an error — the
// layout emits a placeholder instead.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::application::report_config::ReportConfig;
use crate::domain::traits::ReportSink;
use crate::infra::local_fs::{canonical_dir, LocalFs};
use crate::layouts;

pub struct AssembleUseCase {
    config: ReportConfig,
    fs:     LocalFs,
}

impl AssembleUseCase {
    pub fn new(config: ReportConfig) -> Self {
        Self { config, fs: LocalFs::new() }
    }

    /// Generate every document of the configured layout.
    /// Returns the paths written, in order.
    pub fn execute(&self) -> Result<Vec<PathBuf>> {
        let cfg = &self.config;

        // ── Step 1: Validate ─────────────────────────────────────────────────
        cfg.validate()?;

        // ── Step 2: Directories must already exist ───────────────────────────
        let graph_dir = cfg.graph_dir();
        self.fs
            .require_dir(&graph_dir)
            .with_context(|| format!("No graph directory for date '{}'", cfg.date))?;
        if cfg.layout.needs_source_dir() {
            if let Some(source_dir) = &cfg.source_dir {
                self.fs.require_dir(source_dir)?;
                // fs::copy onto itself truncates the chart
                if canonical_dir(source_dir)? == canonical_dir(&graph_dir)? {
                    bail!(
                        "source directory '{}' resolves to the graph directory '{}'",
                        source_dir.display(),
                        graph_dir.display()
                    );
                }
            }
        }

        tracing::info!("Assembling {} report(s) in '{}'", cfg.layout, graph_dir.display());

        // ── Step 3: Assemble and write each target ───────────────────────────
        let input   = cfg.layout_input(&graph_dir);
        let targets = cfg.layout.targets(&cfg.date, &cfg.post_periods);
        let mut written = Vec::with_capacity(targets.len());

        for target in &targets {
            let doc    = layouts::assemble(cfg.layout, target, &input, &self.fs, &self.fs)?;
            let charts = doc.included().count();
            if charts == 0 {
                tracing::warn!("No charts found for '{}'", target.file_name);
            }

            let path = graph_dir.join(&target.file_name);
            self.fs.write(&path, &doc.render())?;
            tracing::info!("Wrote '{}' ({} charts)", path.display(), charts);

            written.push(path);
        }

        Ok(written)
    }
}

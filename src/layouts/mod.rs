// ============================================================
// Layer 4 — Layouts (Report Assembly)
// ============================================================
// Each layout walks the naming axes in a fixed nested order
// and turns every existence check into document fragments:
//
//   for prefix in prefixes            ← outer axis
//     for suffix in suffixes          ← inner axis
//       (for state in drop_states)    ← innermost, drop-states only
//         build ArtifactName
//             │
//             ▼
//         ArtifactProbe::exists
//             │
//        ┌────┴─────┐
//        ▼          ▼
//     Include   Placeholder / nothing
//
// Each existence is checked once, and the answer decides what
// is emitted. No chart is referenced unless it existed when
// it was checked.

/// C2 quarter chart plus one chart per dropped state
pub mod drop_states;

/// Any-birth-order vs second-plus-birth-order comparison pages
pub mod birth_order;

/// One document per balanced-panel post-period count
pub mod balanced_panel;

/// Copy charts from a source directory, then reference them
pub mod utilization_copy;

use anyhow::{anyhow, Result};
use std::path::Path;

use crate::domain::{
    document::Document,
    layout::{Layout, ReportTarget},
    naming::{ArtifactName, NamingAxis},
    traits::{ArtifactCopier, ArtifactProbe},
};

// ─── Shared LaTeX lines ──────────────────────────────────────────────────────
pub const PREAMBLE: &[&str] = &[
    r"\documentclass[11pt]{article}",
    r"\usepackage{geometry}",
    r"\geometry{letterpaper}",
    r"\usepackage{graphicx}",
    r"\usepackage{float}",
    r"\pagestyle{empty}",
    r"\begin{document}",
];

pub const END_DOCUMENT: &str = r"\end{document}";
pub const BEGIN_FIGURE: &str = r"\begin{figure}[H]";
pub const END_FIGURE:   &str = r"\end{figure}";
pub const NEW_PAGE:     &str = r"\newpage";

/// Blank filler line used after a missing-chart message
pub const LINE_BREAK: &str = r" \\ ";

/// Everything a layout needs to know about one run.
/// Borrowed from the ReportConfig by the application layer.
#[derive(Debug, Clone)]
pub struct LayoutInput<'a> {
    /// Directory the charts are probed in and the report is written to
    pub graph_dir: &'a Path,

    /// Second directory read by the copy layout
    pub source_dir: Option<&'a Path>,

    pub prefixes:    NamingAxis,
    pub suffixes:    NamingAxis,
    pub drop_states: NamingAxis,

    /// "ldq" or "fdq"
    pub quarter_kind: &'a str,
}

/// Build the Document for one output target of `layout`.
pub fn assemble(
    layout: Layout,
    target: &ReportTarget,
    input:  &LayoutInput<'_>,
    probe:  &dyn ArtifactProbe,
    copier: &dyn ArtifactCopier,
) -> Result<Document> {
    match layout {
        Layout::DropStates => drop_states::assemble(input, probe),
        Layout::BirthOrder => birth_order::assemble(input, probe),
        Layout::BalancedPanel => {
            let post_period = target.post_period.ok_or_else(|| {
                anyhow!("balanced-panel target '{}' has no post-period", target.file_name)
            })?;
            balanced_panel::assemble(input, post_period, probe)
        }
        Layout::UtilizationCopy => utilization_copy::assemble(input, probe, copier),
    }
}

/// Probe `name` inside `dir`, logging the outcome
fn exists_in(probe: &dyn ArtifactProbe, dir: &Path, name: &ArtifactName) -> Result<bool> {
    let found = probe.exists(&name.resolve(dir))?;
    tracing::debug!("{} {}", if found { "found" } else { "missing" }, name.file_name());
    Ok(found)
}

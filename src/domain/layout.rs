// ============================================================
// Layer 3 — Layouts and Report Targets
// ============================================================
// Reports come in several near-identical variants.
// Each one is kept here as a distinct, named layout rather
// than merged into a single "correct" behaviour:
//
//   DropStates      — C2 quarter chart, then one chart per
//                     dropped state
//   BirthOrder      — any-birth-order vs second-plus pages
//   BalancedPanel   — one document per post-period count
//   UtilizationCopy — copy charts from a source directory,
//                     then reference the copies
//
// A layout also decides which output files a run produces
// (ReportTarget). Most layouts produce one file; the
// balanced-panel layout produces one per post-period.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    DropStates,
    BirthOrder,
    BalancedPanel,
    UtilizationCopy,
}

impl Layout {
    /// Only the copy layout reads from a second directory
    pub fn needs_source_dir(&self) -> bool {
        matches!(self, Layout::UtilizationCopy)
    }

    /// Output files for one run, in the order they are written
    pub fn targets(&self, date: &str, post_periods: &[u32]) -> Vec<ReportTarget> {
        match self {
            Layout::DropStates => vec![ReportTarget::single(format!(
                "ES_graphs_dropstates_{date}.tex"
            ))],
            Layout::BirthOrder => vec![ReportTarget::single(format!(
                "event_study_graphs_{date}.tex"
            ))],
            Layout::BalancedPanel => post_periods
                .iter()
                .map(|&n| ReportTarget {
                    file_name:   format!("event_study_graphs_balanced_{n}post.tex"),
                    post_period: Some(n),
                })
                .collect(),
            Layout::UtilizationCopy => vec![ReportTarget::single(format!(
                "event_study_graphs_copied_{date}.tex"
            ))],
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::DropStates      => "drop-states",
            Layout::BirthOrder      => "birth-order",
            Layout::BalancedPanel   => "balanced-panel",
            Layout::UtilizationCopy => "utilization-copy",
        };
        f.write_str(name)
    }
}

/// One output document of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    /// File name inside the graph directory
    pub file_name: String,

    /// Balanced-panel post-period count this document covers
    pub post_period: Option<u32>,
}

impl ReportTarget {
    fn single(file_name: String) -> Self {
        Self { file_name, post_period: None }
    }
}

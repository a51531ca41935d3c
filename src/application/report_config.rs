// ============================================================
// Layer 2 — Report Configuration
// ============================================================
// All values that vary between runs, in one explicit struct:
// directories, the date token, token lists and the layout.
// Serialisable so it can be kept in a JSON file
// (see infra::config_store) and edited between runs.
//
// The defaults are the token lists the charts are named with.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{layout::Layout, naming::NamingAxis};
use crate::layouts::LayoutInput;

/// States dropped one at a time in the robustness charts
pub const DEFAULT_DROP_STATES: [&str; 20] = [
    "CA", "CO", "DE", "DC", "GA", "ID", "IL", "IN", "IA", "LA",
    "MD", "MT", "NM", "NY", "OK", "RI", "SC", "TX", "WA", "WY",
];

/// Largest balanced-panel post-period count
pub const MAX_POST_PERIODS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Holds one subdirectory per date token
    pub root_dir: PathBuf,

    /// Names the graph subdirectory and the output file.
    /// Used verbatim.
    pub date: String,

    pub layout: Layout,

    /// Outer naming axis (dataset)
    pub prefixes: Vec<String>,

    /// Inner naming axis (population)
    pub suffixes: Vec<String>,

    /// Quarter definition token, "ldq" or "fdq"
    pub quarter_kind: String,

    pub drop_states: Vec<String>,

    /// Balanced-panel post-period counts, one document each
    pub post_periods: Vec<u32>,

    /// Where the utilization-copy layout copies charts from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            root_dir:     PathBuf::from("graphs/event_studies"),
            date:         String::new(),
            layout:       Layout::BirthOrder,
            prefixes:     vec!["natality".into(), "lbw".into()],
            suffixes:     vec![
                "total".into(),
                "unmarried".into(),
                "teen".into(),
                "hsorless".into(),
            ],
            quarter_kind: "ldq".into(),
            drop_states:  DEFAULT_DROP_STATES.iter().map(|s| s.to_string()).collect(),
            post_periods: (0..=MAX_POST_PERIODS).collect(),
            source_dir:   None,
        }
    }
}

impl ReportConfig {
    /// Defaults with the root directory each layout's charts live under
    pub fn for_layout(layout: Layout) -> Self {
        let root_dir = match layout {
            Layout::DropStates      => "graphs/exploratory_graphs",
            Layout::BirthOrder      => "graphs/event_studies",
            Layout::BalancedPanel   => "graphs/event_studies/balanced_panel",
            Layout::UtilizationCopy => "graphs/event_studies",
        };
        Self {
            root_dir: PathBuf::from(root_dir),
            layout,
            ..Self::default()
        }
    }

    /// root_dir/<date>: probed for charts, receives the report
    pub fn graph_dir(&self) -> PathBuf {
        self.root_dir.join(&self.date)
    }

    /// Reject configurations no layout run can succeed with.
    pub fn validate(&self) -> Result<()> {
        if self.prefixes.is_empty() || self.suffixes.is_empty() {
            bail!("at least one prefix and one suffix are required");
        }
        if self.quarter_kind.is_empty() {
            bail!("quarter_kind must not be empty");
        }
        if self.layout == Layout::BalancedPanel && self.post_periods.is_empty() {
            bail!("the balanced-panel layout needs at least one post-period");
        }
        if self.layout.needs_source_dir() {
            match &self.source_dir {
                None => bail!("the {} layout needs a source directory", self.layout),
                // fs::copy onto itself would truncate the chart
                Some(src) if *src == self.graph_dir() => {
                    bail!("source directory '{}' is the graph directory", src.display())
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Borrow the pieces a layout needs
    pub fn layout_input<'a>(&'a self, graph_dir: &'a Path) -> LayoutInput<'a> {
        LayoutInput {
            graph_dir,
            source_dir:   self.source_dir.as_deref(),
            prefixes:     NamingAxis::new(self.prefixes.iter().cloned()),
            suffixes:     NamingAxis::new(self.suffixes.iter().cloned()),
            drop_states:  NamingAxis::new(self.drop_states.iter().cloned()),
            quarter_kind: &self.quarter_kind,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_chart_naming() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.prefixes, vec!["natality", "lbw"]);
        assert_eq!(cfg.suffixes, vec!["total", "unmarried", "teen", "hsorless"]);
        assert_eq!(cfg.quarter_kind, "ldq");
        assert_eq!(cfg.drop_states.len(), 20);
        assert_eq!(cfg.post_periods, (0..=10).collect::<Vec<u32>>());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_graph_dir_appends_date_verbatim() {
        let mut cfg = ReportConfig::for_layout(Layout::DropStates);
        cfg.date = "19 Sep 2018".into();
        assert_eq!(cfg.graph_dir(), PathBuf::from("graphs/exploratory_graphs/19 Sep 2018"));
    }

    #[test]
    fn test_copy_layout_requires_distinct_source_dir() {
        let mut cfg = ReportConfig::for_layout(Layout::UtilizationCopy);
        cfg.date = "d".into();
        assert!(cfg.validate().is_err());

        cfg.source_dir = Some(cfg.graph_dir());
        assert!(cfg.validate().is_err());

        cfg.source_dir = Some(PathBuf::from("elsewhere"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_axes_rejected() {
        let mut cfg = ReportConfig::default();
        cfg.suffixes.clear();
        assert!(cfg.validate().is_err());

        let mut cfg = ReportConfig::for_layout(Layout::BalancedPanel);
        cfg.post_periods.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_layout_input_borrows_config() {
        let cfg   = ReportConfig::default();
        let dir   = PathBuf::from("/g");
        let input = cfg.layout_input(&dir);
        assert_eq!(input.graph_dir, Path::new("/g"));
        assert_eq!(input.prefixes.len(), 2);
        assert_eq!(input.drop_states.iter().next(), Some("CA"));
        assert_eq!(input.source_dir, None);
    }
}

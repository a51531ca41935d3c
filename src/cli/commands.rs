// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines `generate` and `init-config` and their flags.
//
// Precedence when building a ReportConfig for `generate`:
//   layout defaults  <  --config JSON file  <  explicit flags
//
// Repeatable list flags (--prefix, --suffix, --drop-state,
// --post-period) replace the whole list when given at least once.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::report_config::ReportConfig;
use crate::domain::layout::Layout;
use crate::infra::config_store;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the graph directory and write the LaTeX report(s)
    Generate(GenerateArgs),

    /// Write a default report config as JSON
    InitConfig(InitConfigArgs),
}

/// Mirrors domain::layout::Layout so the domain never sees clap
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    DropStates,
    BirthOrder,
    BalancedPanel,
    UtilizationCopy,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::DropStates      => Layout::DropStates,
            LayoutArg::BirthOrder      => Layout::BirthOrder,
            LayoutArg::BalancedPanel   => Layout::BalancedPanel,
            LayoutArg::UtilizationCopy => Layout::UtilizationCopy,
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Which document layout to produce (default: birth-order)
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Date token naming the graph subdirectory; prompted for if absent
    #[arg(long)]
    pub date: Option<String>,

    /// JSON report config (see `init-config`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding one subdirectory per date
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// Directory charts are copied from (utilization-copy only)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Quarter definition token, e.g. ldq or fdq
    #[arg(long)]
    pub quarter_kind: Option<String>,

    /// Outer naming axis token (repeatable)
    #[arg(long = "prefix")]
    pub prefixes: Vec<String>,

    /// Inner naming axis token (repeatable)
    #[arg(long = "suffix")]
    pub suffixes: Vec<String>,

    /// State code dropped in robustness charts (repeatable)
    #[arg(long = "drop-state")]
    pub drop_states: Vec<String>,

    /// Balanced-panel post-period count (repeatable, 0-10)
    #[arg(long = "post-period", value_parser = clap::value_parser!(u32).range(0..=10))]
    pub post_periods: Vec<u32>,
}

impl GenerateArgs {
    /// Build the ReportConfig for this run from defaults, file and flags.
    pub fn resolve_config(self) -> Result<ReportConfig> {
        let mut cfg = match &self.config {
            Some(path) => config_store::load(path)?,
            None => ReportConfig::for_layout(
                self.layout.map(Layout::from).unwrap_or(Layout::BirthOrder),
            ),
        };

        if let Some(layout) = self.layout {
            cfg.layout = layout.into();
        }
        if let Some(date) = self.date {
            cfg.date = date;
        }
        if let Some(root_dir) = self.root_dir {
            cfg.root_dir = root_dir;
        }
        if let Some(source_dir) = self.source_dir {
            cfg.source_dir = Some(source_dir);
        }
        if let Some(quarter_kind) = self.quarter_kind {
            cfg.quarter_kind = quarter_kind;
        }
        if !self.prefixes.is_empty() {
            cfg.prefixes = self.prefixes;
        }
        if !self.suffixes.is_empty() {
            cfg.suffixes = self.suffixes;
        }
        if !self.drop_states.is_empty() {
            cfg.drop_states = self.drop_states;
        }
        if !self.post_periods.is_empty() {
            cfg.post_periods = self.post_periods;
        }

        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the JSON file
    #[arg(long, default_value = "report.json")]
    pub out: PathBuf,

    /// Layout whose defaults to write
    #[arg(long, value_enum, default_value = "birth-order")]
    pub layout: LayoutArg,
}

// ============================================================
// Layer 6 — Report Config Store
// ============================================================
// Saves and loads a ReportConfig as pretty-printed JSON.
//
// A config file replaces the constants that used to be edited
// by hand before every run (date, token lists, directories).
// Missing fields fall back to ReportConfig::for_layout(<layout
// named in the file>), the same defaults `generate --layout`
// uses without a file, so a file may hold just what differs:
//
//   {
//     "root_dir": "graphs/exploratory_graphs",
//     "date": "19 Sep 2018",
//     "layout": "drop-states"
//   }

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::{fs, path::Path};

use crate::application::report_config::ReportConfig;

/// Write `cfg` to `path` as JSON, creating parent directories.
pub fn save(path: &Path, cfg: &ReportConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved report config to '{}'", path.display());
    Ok(())
}

/// Read a ReportConfig back from `path`.
pub fn load(path: &Path) -> Result<ReportConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let invalid = || format!("Invalid report config in '{}'", path.display());

    let file: Value = serde_json::from_str(&json).with_context(invalid)?;
    let Some(fields) = file.as_object() else {
        bail!("{}: expected a JSON object", invalid());
    };

    let layout = match fields.get("layout") {
        Some(layout) => serde_json::from_value(layout.clone()).with_context(invalid)?,
        None => ReportConfig::default().layout,
    };

    // Layout defaults first, then every field the file sets
    let mut merged = serde_json::to_value(ReportConfig::for_layout(layout))?;
    if let Value::Object(base) = &mut merged {
        for (key, value) in fields {
            base.insert(key.clone(), value.clone());
        }
    }

    serde_json::from_value(merged).with_context(invalid)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::Layout;
    use std::path::PathBuf;

    #[test]
    fn test_save_then_load_keeps_every_field() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        let mut cfg = ReportConfig::for_layout(Layout::UtilizationCopy);
        cfg.date        = "10062017".into();
        cfg.source_dir  = Some(PathBuf::from("/charts/raw"));
        cfg.drop_states = vec!["NY".into()];

        save(&path, &cfg).unwrap();
        assert_eq!(load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, r#"{ "date": "19 Sep 2018", "layout": "drop-states" }"#).unwrap();

        let cfg = load(&path).unwrap();
        assert_eq!(cfg.date, "19 Sep 2018");
        assert_eq!(cfg.layout, Layout::DropStates);
        assert_eq!(cfg.root_dir, PathBuf::from("graphs/exploratory_graphs"));
        assert_eq!(cfg.prefixes, ReportConfig::default().prefixes);
        assert_eq!(cfg.post_periods.len(), 11);
    }

    #[test]
    fn test_partial_file_takes_layout_root_unless_set() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        fs::write(&path, r#"{ "layout": "balanced-panel" }"#).unwrap();
        assert_eq!(
            load(&path).unwrap(),
            ReportConfig::for_layout(Layout::BalancedPanel)
        );

        fs::write(&path, r#"{ "layout": "balanced-panel", "root_dir": "/charts" }"#).unwrap();
        assert_eq!(load(&path).unwrap().root_dir, PathBuf::from("/charts"));
    }

    #[test]
    fn test_non_object_file_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err  = load(&path).unwrap_err();
        assert!(format!("{err}").contains("absent.json"));
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "layout": "monthly" }"#).unwrap();
        assert!(load(&path).is_err());
    }
}

// ============================================================
// Layer 4 — Utilization Copy Layout
// ============================================================
// The charts for this report are rendered into a separate
// source directory. Each expected chart that exists there is
// copied byte-for-byte into the graph directory first and
// only then referenced, so the .tex file and every chart it
// names end up side by side:
//
//   source_dir/larc_utilization_quarterly_ES.pdf
//       │  ArtifactCopier::copy
//       ▼
//   graph_dir/larc_utilization_quarterly_ES.pdf  ← \includegraphics
//
// Order: the utilization chart, then for each prefix every
// suffix's C2 and C1 quarter charts, with a page break after
// each prefix. A failed copy aborts the whole run.

use anyhow::{anyhow, Result};
use std::path::Path;

use super::{exists_in, LayoutInput, BEGIN_FIGURE, END_DOCUMENT, END_FIGURE, NEW_PAGE, PREAMBLE};
use crate::domain::{
    document::Document,
    naming::ArtifactName,
    traits::{ArtifactCopier, ArtifactProbe},
};

const BIRTH_ORDERS: [&str; 2] = ["C2", "C1"];

pub fn assemble(
    input:  &LayoutInput<'_>,
    probe:  &dyn ArtifactProbe,
    copier: &dyn ArtifactCopier,
) -> Result<Document> {
    let source_dir = input
        .source_dir
        .ok_or_else(|| anyhow!("the utilization-copy layout needs a source directory"))?;

    let mut doc = Document::new(PREAMBLE, &[END_DOCUMENT]);

    let utilization = ArtifactName::from_tokens(&["larc", "utilization", "quarterly"], "_ES");
    copy_and_reference(&mut doc, utilization, source_dir, input.graph_dir, probe, copier)?;
    doc.markup(NEW_PAGE);

    for prefix in input.prefixes.iter() {
        for suffix in input.suffixes.iter() {
            for birth_order in BIRTH_ORDERS {
                let chart = ArtifactName::from_tokens(
                    &[prefix, suffix, input.quarter_kind, birth_order],
                    "_quarter_ES",
                );
                copy_and_reference(&mut doc, chart, source_dir, input.graph_dir, probe, copier)?;
            }
        }
        doc.markup(NEW_PAGE);
    }

    Ok(doc)
}

/// Copy `name` from `source_dir` into `dest_dir` and emit a figure for it,
/// or a one-line note when it is not in `source_dir`.
fn copy_and_reference(
    doc:        &mut Document,
    name:       ArtifactName,
    source_dir: &Path,
    dest_dir:   &Path,
    probe:      &dyn ArtifactProbe,
    copier:     &dyn ArtifactCopier,
) -> Result<()> {
    if !exists_in(probe, source_dir, &name)? {
        doc.placeholder(format!("no graph for {}", name.stem()));
        return Ok(());
    }

    let bytes = copier.copy(&name.resolve(source_dir), &name.resolve(dest_dir))?;
    tracing::debug!("Copied {} ({} bytes)", name.file_name(), bytes);

    doc.markup(BEGIN_FIGURE);
    let caption = name.caption();
    doc.include(name);
    doc.markup(format!(r"    \caption{{{caption}}}"));
    doc.markup(END_FIGURE);
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::domain::naming::NamingAxis;
    use std::path::PathBuf;

    #[test]
    fn test_requires_source_dir() {
        let dir    = Path::new("/g");
        let result = assemble(&input(dir, None), &FakeProbe::default(), &RecordingCopier::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_copies_before_referencing() {
        let dest   = Path::new("/g");
        let source = Path::new("/src");
        let probe  = FakeProbe::with(source, &["larc_utilization_quarterly_ES.pdf"]);
        let copier = RecordingCopier::default();

        let doc = assemble(&input(dest, Some(source)), &probe, &copier).unwrap();

        assert_eq!(
            *copier.copies.borrow(),
            vec![(
                PathBuf::from("/src/larc_utilization_quarterly_ES.pdf"),
                PathBuf::from("/g/larc_utilization_quarterly_ES.pdf"),
            )]
        );
        assert_eq!(included(&doc), vec!["larc_utilization_quarterly_ES.pdf"]);
        assert!(doc.render().contains(r"    \caption{larc utilization quarterly ES}"));
    }

    #[test]
    fn test_missing_source_chart_gets_note_and_no_copy() {
        let dest   = Path::new("/g");
        let source = Path::new("/src");
        let copier = RecordingCopier::default();

        let mut input = input(dest, Some(source));
        input.prefixes = NamingAxis::new(["lbw"]);
        input.suffixes = NamingAxis::new(["teen"]);

        let doc   = assemble(&input, &FakeProbe::default(), &copier).unwrap();
        let lines: Vec<String> = doc.body().iter().map(|f| f.render()).collect();

        assert!(copier.copies.borrow().is_empty());
        assert_eq!(
            lines,
            vec![
                "no graph for larc_utilization_quarterly_ES",
                NEW_PAGE,
                "no graph for lbw_teen_ldq_C2_quarter_ES",
                "no graph for lbw_teen_ldq_C1_quarter_ES",
                NEW_PAGE,
            ]
        );
    }

    #[test]
    fn test_probes_source_not_destination() {
        let dest   = Path::new("/g");
        let source = Path::new("/src");
        let probe  = FakeProbe::with(dest, &["larc_utilization_quarterly_ES.pdf"]);
        let doc    = assemble(&input(dest, Some(source)), &probe, &RecordingCopier::default()).unwrap();
        assert_eq!(doc.included().count(), 0);
        assert!(probe.log.borrow().iter().all(|p| p.starts_with(source)));
    }
}

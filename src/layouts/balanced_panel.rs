// ============================================================
// Layer 4 — Balanced-Panel Layout
// ============================================================
// Balanced-panel charts carry the post-period count in their
// name, so one document is produced per count:
//
//   larc_utilization_quarterly_ES_<n>postperiods.pdf
//   <prefix>_<suffix>_<q>_C2_quarter_ES_<n>postperiods.pdf  (2nd child)
//   <prefix>_<suffix>_<q>_C1_quarter_ES_<n>postperiods.pdf  (1st child / unknown)
//
// A prefix × suffix figure is emitted only when at least one
// of its C2 / C1 charts exists; the missing half gets a note.

use anyhow::Result;

use super::{exists_in, LayoutInput, BEGIN_FIGURE, END_DOCUMENT, END_FIGURE, LINE_BREAK, PREAMBLE};
use crate::domain::{document::Document, naming::ArtifactName, traits::ArtifactProbe};

pub fn assemble(
    input:       &LayoutInput<'_>,
    post_period: u32,
    probe:       &dyn ArtifactProbe,
) -> Result<Document> {
    let mut doc = Document::new(PREAMBLE, &[END_DOCUMENT]);
    let periods = format!("_{post_period}postperiods");

    let utilization = ArtifactName::from_tokens(&["larc", "utilization", "quarterly", "ES"], &periods);
    if exists_in(probe, input.graph_dir, &utilization)? {
        doc.markup(BEGIN_FIGURE);
        doc.include(utilization);
        doc.markup(END_FIGURE);
    }

    let pattern = format!("_quarter_ES{periods}");

    for prefix in input.prefixes.iter() {
        for suffix in input.suffixes.iter() {
            let second = ArtifactName::from_tokens(&[prefix, suffix, input.quarter_kind, "C2"], &pattern);
            let first  = ArtifactName::from_tokens(&[prefix, suffix, input.quarter_kind, "C1"], &pattern);

            let has_second = exists_in(probe, input.graph_dir, &second)?;
            let has_first  = exists_in(probe, input.graph_dir, &first)?;
            if !has_second && !has_first {
                continue;
            }

            doc.markup(BEGIN_FIGURE);

            if has_second {
                doc.include(second);
            } else {
                doc.placeholder(format!("no quarterly 2nd child graph for {prefix}_{suffix}"));
                doc.placeholder(LINE_BREAK);
                doc.placeholder(LINE_BREAK);
                doc.placeholder(LINE_BREAK);
            }

            if has_first {
                doc.include(first);
            } else {
                doc.placeholder(format!("no quarterly 1st child/unknown graph for {prefix} {suffix}"));
            }

            doc.markup(END_FIGURE);
        }
    }

    Ok(doc)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_figure_when_neither_birth_order_exists() {
        let dir   = Path::new("/g");
        // Wrong post-period: must not count for period 2
        let probe = FakeProbe::with(dir, &["natality_total_ldq_C2_quarter_ES_3postperiods.pdf"]);
        let doc   = assemble(&input(dir, None), 2, &probe).unwrap();
        assert!(doc.body().is_empty());
    }

    #[test]
    fn test_missing_first_child_gets_note() {
        let dir   = Path::new("/g");
        let probe = FakeProbe::with(dir, &["lbw_teen_ldq_C2_quarter_ES_0postperiods.pdf"]);
        let doc   = assemble(&input(dir, None), 0, &probe).unwrap();
        let lines: Vec<String> = doc.body().iter().map(|f| f.render()).collect();
        assert_eq!(
            lines,
            vec![
                BEGIN_FIGURE.to_string(),
                r"    \includegraphics[width=\textwidth]{lbw_teen_ldq_C2_quarter_ES_0postperiods.pdf}".to_string(),
                "no quarterly 1st child/unknown graph for lbw teen".to_string(),
                END_FIGURE.to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_second_child_gets_note_and_filler() {
        let dir   = Path::new("/g");
        let probe = FakeProbe::with(dir, &["natality_hsorless_ldq_C1_quarter_ES_7postperiods.pdf"]);
        let doc   = assemble(&input(dir, None), 7, &probe).unwrap();
        let lines: Vec<String> = doc.body().iter().map(|f| f.render()).collect();
        assert_eq!(lines[1], "no quarterly 2nd child graph for natality_hsorless");
        assert_eq!(&lines[2..5], &[LINE_BREAK, LINE_BREAK, LINE_BREAK]);
        assert_eq!(included(&doc), vec!["natality_hsorless_ldq_C1_quarter_ES_7postperiods.pdf"]);
    }

    #[test]
    fn test_utilization_figure_comes_first() {
        let dir   = Path::new("/g");
        let probe = FakeProbe::with(
            dir,
            &[
                "natality_total_ldq_C1_quarter_ES_10postperiods.pdf",
                "larc_utilization_quarterly_ES_10postperiods.pdf",
            ],
        );
        let doc = assemble(&input(dir, None), 10, &probe).unwrap();
        assert_eq!(
            included(&doc),
            vec![
                "larc_utilization_quarterly_ES_10postperiods.pdf",
                "natality_total_ldq_C1_quarter_ES_10postperiods.pdf",
            ]
        );
    }
}

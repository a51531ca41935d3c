// ============================================================
// Layer 4 — Drop-States Layout
// ============================================================
// For every prefix × suffix whose all-states C2 quarter chart
// exists, emit that chart followed by every "dropping state X"
// variant that exists, in drop-list order:
//
//   EVENT STUDY INCLUDING ALL STATES:
//     natality_total_ldq_C2_quarter_ES.pdf
//   \newpage
//   EVENT STUDIES DROPPING INDIVIDUAL STATES:
//     natality_total_ldq_C2_quarter_ES_noCA.pdf
//     natality_total_ldq_C2_quarter_ES_noTX.pdf
//     ...
//   \newpage
//
// Pairs without the all-states chart are skipped entirely,
// so their drop-state variants are never probed.

use anyhow::Result;

use super::{exists_in, LayoutInput, END_DOCUMENT, NEW_PAGE, PREAMBLE};
use crate::domain::{document::Document, naming::ArtifactName, traits::ArtifactProbe};

const ALL_STATES_HEADING: &str = r"\textbf{EVENT STUDY INCLUDING ALL STATES:}";
const DROPPED_HEADING:    &str = r"\textbf{EVENT STUDIES DROPPING INDIVIDUAL STATES:}";

pub fn assemble(input: &LayoutInput<'_>, probe: &dyn ArtifactProbe) -> Result<Document> {
    let mut header = PREAMBLE.to_vec();
    header.push(r" \begin{center}");
    let mut doc = Document::new(&header, &[r"\end{center}", END_DOCUMENT]);

    for prefix in input.prefixes.iter() {
        for suffix in input.suffixes.iter() {
            let tokens = [prefix, suffix, input.quarter_kind, "C2"];

            let all_states = ArtifactName::from_tokens(&tokens, "_quarter_ES");
            if !exists_in(probe, input.graph_dir, &all_states)? {
                continue;
            }

            doc.markup(ALL_STATES_HEADING);
            doc.include(all_states);
            doc.markup(NEW_PAGE);
            doc.markup(DROPPED_HEADING);

            for state in input.drop_states.iter() {
                let dropped = ArtifactName::from_tokens(&tokens, &format!("_quarter_ES_no{state}"));
                if exists_in(probe, input.graph_dir, &dropped)? {
                    doc.include(dropped);
                }
            }

            doc.markup(NEW_PAGE);
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
    fn test_all_states_chart_without_drop_variants() {
        let dir   = Path::new("/g");
        let probe = FakeProbe::with(dir, &["natality_total_ldq_C2_quarter_ES.pdf"]);
        let doc   = assemble(&input(dir, None), &probe).unwrap();

        assert_eq!(included(&doc), vec!["natality_total_ldq_C2_quarter_ES.pdf"]);

        // The per-state heading is still emitted, followed directly by \newpage
        let text = doc.render();
        assert!(text.contains(&format!("{DROPPED_HEADING}\n{NEW_PAGE}\n")));
    }

    #[test]
    fn test_drop_variants_follow_drop_list_order() {
        let dir   = Path::new("/g");
        let probe = FakeProbe::with(
            dir,
            &[
                "lbw_teen_ldq_C2_quarter_ES.pdf",
                "lbw_teen_ldq_C2_quarter_ES_noWY.pdf",
                "lbw_teen_ldq_C2_quarter_ES_noCA.pdf",
            ],
        );
        let doc = assemble(&input(dir, None), &probe).unwrap();
        assert_eq!(
            included(&doc),
            vec![
                "lbw_teen_ldq_C2_quarter_ES.pdf",
                "lbw_teen_ldq_C2_quarter_ES_noCA.pdf",
                "lbw_teen_ldq_C2_quarter_ES_noWY.pdf",
            ]
        );
    }

    #[test]
    fn test_drop_variant_ignored_without_all_states_chart() {
        let dir   = Path::new("/g");
        let probe = FakeProbe::with(dir, &["natality_teen_ldq_C2_quarter_ES_noCA.pdf"]);
        let doc   = assemble(&input(dir, None), &probe).unwrap();
        assert!(doc.body().is_empty());
    }

    #[test]
    fn test_wrapped_in_center_environment() {
        let dir  = Path::new("/g");
        let doc  = assemble(&input(dir, None), &FakeProbe::default()).unwrap();
        let text = doc.render();
        assert!(text.contains("\\begin{document}\n \\begin{center}\n"));
        assert!(text.ends_with("\\end{center}\n\\end{document}\n"));
    }

    #[test]
    fn test_probe_order_is_outer_axis_major() {
        let dir   = Path::new("/g");
        let probe = FakeProbe::default();
        assemble(&input(dir, None), &probe).unwrap();

        let probed: Vec<String> = probe
            .log
            .borrow()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(probed.len(), 8);
        assert_eq!(probed[0], "natality_total_ldq_C2_quarter_ES.pdf");
        assert_eq!(probed[1], "natality_unmarried_ldq_C2_quarter_ES.pdf");
        assert_eq!(probed[4], "lbw_total_ldq_C2_quarter_ES.pdf");
        assert_eq!(probed[7], "lbw_hsorless_ldq_C2_quarter_ES.pdf");
    }
}

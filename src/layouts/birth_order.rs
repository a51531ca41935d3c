// ============================================================
// Layer 4 — Birth-Order Comparison Layout
// ============================================================
// Pages are meant to be read two at a time. For every
// prefix × suffix pair:
//
//   1. Any birth order:   month chart (top) + quarter chart
//                         (bottom) in one figure, or a
//                         "(No month graph)" note.
//   2. Second-plus order: C2 month + C2 quarter charts in one
//                         figure when at least one exists,
//                         each missing half replaced by a
//                         small-cells note; otherwise a page
//                         break and a one-line note.
//
// Not every dataset has monthly charts (e.g. hsorless), and
// second-plus charts are often suppressed for small cells,
// so every chart is probed before it is referenced.

use anyhow::Result;

use super::{
    exists_in, LayoutInput, BEGIN_FIGURE, END_DOCUMENT, END_FIGURE, LINE_BREAK, NEW_PAGE, PREAMBLE,
};
use crate::domain::{document::Document, naming::ArtifactName, traits::ArtifactProbe};

const INTRO: &str = "This page intentionally blank. Compare the following pages two pages at a \
time. First page is for any birth order, second page      is for second or greater birth \
order. The two page comparison will allow to compare across  birth order for the same birth \
type     (total births, premature, low birthweight) and same population (all, black, \
hispanic, teen, unmarried).";

const NO_MONTH:                &str = r"    \textbf{(No month graph) \\}";
const NO_QUARTER:              &str = r"    \textbf{(No quarter graph) \\}";
const NO_MONTH_SMALL_CELLS:    &str = r"    \textbf{(No month graph because of small cells) \\}";
const NO_QUARTER_SMALL_CELLS:  &str = r"    \textbf{(No quarter graph because of small cells) \\}";
const NO_SECOND_PLUS:          &str = "No month or quarter graphs due to small cells.";

pub fn assemble(input: &LayoutInput<'_>, probe: &dyn ArtifactProbe) -> Result<Document> {
    let mut doc = Document::new(PREAMBLE, &[END_DOCUMENT]);
    doc.markup(INTRO);

    for prefix in input.prefixes.iter() {
        for suffix in input.suffixes.iter() {
            any_birth_order(&mut doc, input, probe, prefix, suffix)?;
            second_plus_birth_order(&mut doc, input, probe, prefix, suffix)?;
        }
    }

    Ok(doc)
}

fn any_birth_order(
    doc:    &mut Document,
    input:  &LayoutInput<'_>,
    probe:  &dyn ArtifactProbe,
    prefix: &str,
    suffix: &str,
) -> Result<()> {
    let month = ArtifactName::from_tokens(&[prefix, suffix], "_month_ES");
    if !exists_in(probe, input.graph_dir, &month)? {
        doc.placeholder(NO_MONTH);
        doc.placeholder(LINE_BREAK);
        doc.placeholder(LINE_BREAK);
        return Ok(());
    }

    let quarter = ArtifactName::from_tokens(&[prefix, suffix, input.quarter_kind], "_quarter_ES");

    doc.markup(BEGIN_FIGURE);
    doc.include(month);
    let caption = if exists_in(probe, input.graph_dir, &quarter)? {
        doc.include(quarter);
        format!("{prefix}_{suffix}_month (top) and {prefix}_{suffix}_quarter (bottom), all birth orders")
    } else {
        doc.placeholder(NO_QUARTER);
        format!("{prefix}_{suffix}_month (top), all birth orders")
    };
    doc.markup(format!(r"    \caption{{{}}}", caption.replace('_', " ")));
    doc.markup(END_FIGURE);
    Ok(())
}

fn second_plus_birth_order(
    doc:    &mut Document,
    input:  &LayoutInput<'_>,
    probe:  &dyn ArtifactProbe,
    prefix: &str,
    suffix: &str,
) -> Result<()> {
    let month   = ArtifactName::from_tokens(&[prefix, suffix, "C2"], "_month_ES");
    let quarter = ArtifactName::from_tokens(&[prefix, suffix, input.quarter_kind, "C2"], "_quarter_ES");

    let has_month   = exists_in(probe, input.graph_dir, &month)?;
    let has_quarter = exists_in(probe, input.graph_dir, &quarter)?;

    if !has_month && !has_quarter {
        doc.markup(NEW_PAGE);
        doc.placeholder(NO_SECOND_PLUS);
        return Ok(());
    }

    let mut caption = String::new();
    doc.markup(BEGIN_FIGURE);

    if has_month {
        doc.include(month);
        caption = format!("{caption} {prefix} {suffix} month (top)");
    } else {
        doc.placeholder(NO_MONTH_SMALL_CELLS);
        doc.placeholder(LINE_BREAK);
        doc.placeholder(LINE_BREAK);
    }

    if has_quarter {
        doc.include(quarter);
        caption = format!("{caption} {prefix} {suffix} quarter (bottom)");
    } else {
        doc.placeholder(NO_QUARTER_SMALL_CELLS);
        doc.placeholder(LINE_BREAK);
        doc.placeholder(LINE_BREAK);
    }

    doc.markup(format!(
        r"    \caption{{{}, second plus birth order}}",
        caption.replace('_', " ")
    ));
    doc.markup(END_FIGURE);
    Ok(())
}

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates one report run:
//
//   ReportConfig → validate → check directories
//       → for each ReportTarget: assemble layout → write
//
// Rules for this layer:
//   - No LaTeX wording here (that's Layer 4, layouts)
//   - No printing or prompting (that's Layer 1, cli)
//   - No direct file I/O (that's Layer 6, infra)
//   - Only workflow coordination

// Everything that varies between runs
pub mod report_config;

// The report assembly workflow
pub mod assemble_use_case;

// ============================================================
// Layer 3 — Document Domain Types
// ============================================================
// A generated report is a flat list of text lines.
// Each line is one Fragment:
//
//   Markup      — a literal LaTeX instruction
//                 (\begin{figure}[H], \newpage, \caption{...})
//   Include     — a reference to a chart that existed
//                 when it was checked
//   Placeholder — text shown in place of a missing chart
//
// The Document keeps the fixed header and footer apart from
// the body so every render starts and ends the same way,
// however many charts were found.

use crate::domain::naming::ArtifactName;

/// One line of the generated LaTeX document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Markup(String),
    Include(ArtifactName),
    Placeholder(String),
}

impl Fragment {
    /// The exact text written to the output file for this line
    pub fn render(&self) -> String {
        match self {
            Fragment::Markup(line) | Fragment::Placeholder(line) => line.clone(),
            Fragment::Include(name) => {
                format!(r"    \includegraphics[width=\textwidth]{{{}}}", name.file_name())
            }
        }
    }
}

/// A complete report: header, body fragments in emission order, footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    header: Vec<Fragment>,
    body:   Vec<Fragment>,
    footer: Vec<Fragment>,
}

impl Document {
    /// Start a document with fixed header and footer lines.
    /// The footer is only emitted by render(), after the body.
    pub fn new(header: &[&str], footer: &[&str]) -> Self {
        let to_markup = |lines: &[&str]| {
            lines
                .iter()
                .map(|l| Fragment::Markup((*l).to_string()))
                .collect::<Vec<_>>()
        };
        Self {
            header: to_markup(header),
            body:   Vec::new(),
            footer: to_markup(footer),
        }
    }

    pub fn markup(&mut self, line: impl Into<String>) {
        self.body.push(Fragment::Markup(line.into()));
    }

    pub fn include(&mut self, name: ArtifactName) {
        self.body.push(Fragment::Include(name));
    }

    pub fn placeholder(&mut self, line: impl Into<String>) {
        self.body.push(Fragment::Placeholder(line.into()));
    }

    /// Body fragments in the order they were emitted
    #[cfg(test)]
    pub fn body(&self) -> &[Fragment] {
        &self.body
    }

    /// Every chart this document references, in order
    pub fn included(&self) -> impl Iterator<Item = &ArtifactName> {
        self.body.iter().filter_map(|f| match f {
            Fragment::Include(name) => Some(name),
            _ => None,
        })
    }

    /// Render the whole document as text, one fragment per line,
    /// every line (including the last) terminated by '\n'.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for fragment in self.header.iter().chain(&self.body).chain(&self.footer) {
            out.push_str(&fragment.render());
            out.push('\n');
        }
        out
    }
}

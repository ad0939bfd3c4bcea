use serde::{Deserialize, Serialize};

/// One aligned line of the hukamnama: a Gurmukhi verse line paired with
/// the English sentence(s) assigned to it.
///
/// `gurmukhi` is never empty in an emitted pair. `translation` may be
/// empty when the English text has fewer units than the Gurmukhi;
/// the source script is authoritative for line count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinePair {
    pub gurmukhi: String,
    pub translation: String,
}

impl LinePair {
    pub fn new(gurmukhi: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            gurmukhi: gurmukhi.into(),
            translation: translation.into(),
        }
    }
}

/// A complete hukamnama transcript: header fields plus the ordered,
/// line-aligned bilingual text.
///
/// Built fresh per acquisition; nothing is retained between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Date header as shown on the page (e.g., "14 September 2025").
    pub date: String,
    /// Ang (page) reference of the Guru Granth Sahib.
    pub ang: String,
    /// Title line of the hukamnama card (raag and author attribution).
    pub title: String,
    /// Aligned lines, in document order.
    pub lines: Vec<LinePair>,
}

impl Transcript {
    /// Number of aligned lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines that received a non-empty translation.
    pub fn translated_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| !l.translation.is_empty())
            .count()
    }

    /// Render an interleaved plain-text view: header, then each Gurmukhi
    /// line followed by its translation (when present), blank-line
    /// separated. Written alongside the JSON as a human convenience.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&self.title);
            out.push('\n');
        }
        if !self.date.is_empty() {
            out.push_str(&self.date);
            out.push('\n');
        }
        if !self.ang.is_empty() {
            out.push_str(&self.ang);
            out.push('\n');
        }
        for pair in &self.lines {
            out.push('\n');
            out.push_str(&pair.gurmukhi);
            out.push('\n');
            if !pair.translation.is_empty() {
                out.push_str(&pair.translation);
                out.push('\n');
            }
        }
        out
    }
}

use serde::{Deserialize, Serialize};

/// Raw hukamnama fields extracted from the page, before any alignment.
///
/// These are exactly the strings the alignment engine consumes: header
/// text plus the two bilingual blobs, whitespace and all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHukamnama {
    /// Title line of the Gurmukhi card (raag and author attribution).
    pub title: String,
    /// Date header as shown on the page.
    pub date_text: String,
    /// Ang (page) reference line.
    pub ang_text: String,
    /// Full Gurmukhi text blob, verse markers included.
    pub gurmukhi_raw: String,
    /// Full English translation blob, numeric markers included.
    pub english_raw: String,
}

/// Provenance information about the acquisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub url: String,
    pub site: String,
    pub fetched_at: String,
}

/// A complete acquired hukamnama before alignment into a Transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquiredHukamnama {
    pub source: SourceInfo,
    pub raw: RawHukamnama,
}

impl AcquiredHukamnama {
    /// Generate a source.md provenance file.
    pub fn source_md(&self) -> String {
        format!(
            "# Source\n\n\
             - **Site:** {}\n\
             - **URL:** {}\n\
             - **Fetched:** {}\n\
             - **Date header:** {}\n\
             - **Title:** {}\n",
            self.source.site,
            self.source.url,
            self.source.fetched_at,
            self.raw.date_text,
            self.raw.title,
        )
    }
}

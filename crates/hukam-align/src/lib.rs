//! Bilingual alignment engine for hukamnama text.
//!
//! Turns two raw text blobs (Gurmukhi and English, each carrying stanza
//! and verse markers) into a verse-by-verse, sentence-aligned transcript.
//! The whole pipeline is pure and total: any two strings produce a
//! (possibly empty) line list, never an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use hukam_acquire::types::{AcquiredHukamnama, RawHukamnama};
use hukam_model::{LinePair, Transcript};

pub mod distribute;
pub mod normalize;
pub mod stanza;

use stanza::Script;

/// Align a raw Gurmukhi blob with a raw English blob.
///
/// Normalizes both, splits both into stanzas, pairs stanzas
/// positionally (a missing stanza on either side is treated as empty),
/// distributes sentences onto verse lines per pair, and concatenates
/// in stanza order.
pub fn align(gurmukhi_raw: &str, english_raw: &str) -> Vec<LinePair> {
    let gurmukhi = normalize::normalize(gurmukhi_raw);
    let english = normalize::normalize(english_raw);

    let gurmukhi_stanzas = stanza::split_stanzas(&gurmukhi, Script::Gurmukhi);
    let english_stanzas = stanza::split_stanzas(&english, Script::English);

    let count = gurmukhi_stanzas.len().max(english_stanzas.len());
    let mut lines = Vec::new();
    for i in 0..count {
        let source = gurmukhi_stanzas.get(i).map(String::as_str).unwrap_or("");
        let translation = english_stanzas.get(i).map(String::as_str).unwrap_or("");
        lines.extend(distribute::distribute(source, translation));
    }
    lines
}

/// Build a full transcript from acquired raw fields.
pub fn build_transcript(raw: &RawHukamnama) -> Transcript {
    let lines = align(&raw.gurmukhi_raw, &raw.english_raw);
    tracing::debug!(lines = lines.len(), "Aligned hukamnama lines");

    Transcript {
        date: raw.date_text.clone(),
        ang: raw.ang_text.clone(),
        title: raw.title.clone(),
        lines,
    }
}

/// Align an acquisition directory into a transcript JSON file.
///
/// Reads `hukamnama.json` from the input directory, builds the
/// transcript, and writes it as JSON plus an interleaved `.txt`
/// rendering next to it.
pub fn parse(input_dir: &str, output_file: &str) -> Result<()> {
    let path = Path::new(input_dir).join("hukamnama.json");
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let acquired: AcquiredHukamnama =
        serde_json::from_str(&text).context("Failed to parse hukamnama.json")?;

    let transcript = build_transcript(&acquired.raw);

    let json = serde_json::to_string_pretty(&transcript)?;
    fs::write(output_file, &json)?;

    let txt_path = Path::new(output_file).with_extension("txt");
    fs::write(&txt_path, transcript.plain_text())?;

    tracing::info!(
        path = %output_file,
        lines = transcript.line_count(),
        translated = transcript.translated_count(),
        "Wrote transcript"
    );

    Ok(())
}

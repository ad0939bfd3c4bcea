use crate::types::AcquiredHukamnama;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Write all acquisition output files to the given directory.
///
/// Creates the directory if it doesn't exist, then writes:
/// - `hukamnama.json` — structured raw fields (aligner input, source of truth)
/// - `gurmukhi.txt` — human convenience
/// - `english.txt` — human convenience
/// - `source.md` — provenance info
pub fn write_acquired(acquired: &AcquiredHukamnama, output_dir: &str) -> Result<()> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(acquired)?;
    fs::write(dir.join("hukamnama.json"), &json)?;
    tracing::info!(path = %dir.join("hukamnama.json").display(), "Wrote hukamnama JSON");

    fs::write(dir.join("gurmukhi.txt"), &acquired.raw.gurmukhi_raw)?;
    tracing::info!(
        path = %dir.join("gurmukhi.txt").display(),
        bytes = acquired.raw.gurmukhi_raw.len(),
        "Wrote Gurmukhi text"
    );

    fs::write(dir.join("english.txt"), &acquired.raw.english_raw)?;
    tracing::info!(
        path = %dir.join("english.txt").display(),
        bytes = acquired.raw.english_raw.len(),
        "Wrote English text"
    );

    fs::write(dir.join("source.md"), acquired.source_md())?;
    tracing::info!(path = %dir.join("source.md").display(), "Wrote source provenance");

    Ok(())
}

/// Cache raw HTML to the output directory for archival/debugging.
///
/// Keeps the original page around so extraction can be re-examined
/// without re-fetching.
pub fn cache_html(output_dir: &str, filename: &str, html: &str) -> Result<()> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, html)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Cached raw HTML");
    Ok(())
}

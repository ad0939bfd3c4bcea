use anyhow::Result;
use hukam_model::Transcript;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("transcript has no lines")]
    EmptyTranscript,

    #[error("line {0} has an empty gurmukhi field")]
    EmptyGurmukhiLine(usize),

    #[error("line {0} still contains a stanza marker: {1}")]
    UnconsumedMarker(usize, String),
}

/// Validate a transcript JSON file.
pub fn validate(file_path: &str) -> Result<Vec<ValidationError>> {
    let contents = std::fs::read_to_string(file_path)?;
    let transcript: Transcript = serde_json::from_str(&contents)?;

    let errors = validate_transcript(&transcript);
    if errors.is_empty() {
        tracing::info!(lines = transcript.line_count(), "Transcript is valid");
    }
    Ok(errors)
}

/// Check a transcript against the aligner's output invariants.
///
/// The gurmukhi side of every emitted pair must be non-empty, and no
/// line should carry a leftover numbered marker the splitter missed.
/// Header fields are required; a markerless page can legitimately yield
/// a single-stanza transcript, so line counts are not bounded.
pub fn validate_transcript(transcript: &Transcript) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if transcript.date.is_empty() {
        errors.push(ValidationError::MissingField("date"));
    }
    if transcript.ang.is_empty() {
        errors.push(ValidationError::MissingField("ang"));
    }
    if transcript.title.is_empty() {
        errors.push(ValidationError::MissingField("title"));
    }

    if transcript.lines.is_empty() {
        errors.push(ValidationError::EmptyTranscript);
    }

    for (index, line) in transcript.lines.iter().enumerate() {
        if line.gurmukhi.is_empty() {
            errors.push(ValidationError::EmptyGurmukhiLine(index));
        } else if line.gurmukhi.contains('॥') {
            errors.push(ValidationError::UnconsumedMarker(
                index,
                line.gurmukhi.clone(),
            ));
        }
        if line.translation.contains("||") {
            errors.push(ValidationError::UnconsumedMarker(
                index,
                line.translation.clone(),
            ));
        }
    }

    if !errors.is_empty() {
        for e in &errors {
            tracing::warn!("{e}");
        }
    }

    errors
}

use unicode_normalization::UnicodeNormalization;

/// Normalize Unicode text to NFC form and trim the ends.
///
/// Gurmukhi vowel signs and nasalization marks can arrive decomposed
/// from HTML extraction; NFC gives the aligner one consistent
/// representation to match markers against.
pub fn normalize_text(input: &str) -> String {
    input.nfc().collect::<String>().trim().to_string()
}

// Stanza splitting on verse-end and refrain markers.
//
// Gurbani text marks stanza boundaries with numbered verse-end glyphs
// ("॥੧॥", "॥੧॥੨॥") and the refrain marker "॥ ਰਹਾਉ ॥"; the English
// rendering uses "||1||", "||1||2||", and "||Pause||". Each recognized
// marker is replaced with a sentinel before splitting, so overlapping
// patterns can't split twice.

use regex::Regex;

/// Which marker family to split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Gurmukhi,
    English,
}

/// Internal boundary placeholder; U+001E is the ASCII record separator
/// and cannot occur in page text.
const SENTINEL: &str = "\u{1E}";

// Most-specific pattern first. Numbered verse-end markers chain at the
// end of a shabad (stanza count, shabad count, cumulative count:
// "॥੨॥੯॥੧੩੮॥"), so the numbered pattern repeats to swallow the whole
// chain as one boundary. The bare trailing forms ("ਰਹਾਉ ॥", "Pause ||")
// catch the refrain whose leading glyph was already consumed by an
// adjacent numbered marker.
const GURMUKHI_MARKERS: [&str; 3] = [
    r"॥(?:\s*[0-9\u{0A66}-\u{0A6F}]+\s*॥)+",
    r"॥\s*ਰਹਾਉ\s*॥",
    r"ਰਹਾਉ\s*॥",
];

const ENGLISH_MARKERS: [&str; 3] = [
    r"\|\|(?:\s*[0-9]+\s*\|\|)+",
    r"(?i)\|\|\s*pause\s*\|\|",
    r"(?i)\bpause\s*\|\|",
];

/// Segment a normalized blob into an ordered sequence of stanzas.
///
/// Markers are replaced in priority order with a sentinel, the text is
/// split on the sentinel, and pieces are trimmed with empties dropped.
/// A blob with no markers at all comes back as a single stanza; no
/// content is ever dropped for lack of a boundary.
pub fn split_stanzas(text: &str, script: Script) -> Vec<String> {
    let patterns = match script {
        Script::Gurmukhi => &GURMUKHI_MARKERS,
        Script::English => &ENGLISH_MARKERS,
    };

    let mut marked = text.to_string();
    for pattern in patterns {
        let re = Regex::new(pattern).expect("valid marker pattern");
        marked = re.replace_all(&marked, SENTINEL).into_owned();
    }

    marked
        .split(SENTINEL)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gurmukhi(text: &str) -> Vec<String> {
        split_stanzas(text, Script::Gurmukhi)
    }

    fn english(text: &str) -> Vec<String> {
        split_stanzas(text, Script::English)
    }

    #[test]
    fn test_numbered_markers_gurmukhi() {
        let stanzas = gurmukhi("ਪਹਿਲਾ ਬੰਦ ॥੧॥ ਦੂਜਾ ਬੰਦ ॥੨॥ ਤੀਜਾ ਬੰਦ ॥੩॥");
        assert_eq!(stanzas, vec!["ਪਹਿਲਾ ਬੰਦ", "ਦੂਜਾ ਬੰਦ", "ਤੀਜਾ ਬੰਦ"]);
    }

    #[test]
    fn test_ascii_digits_accepted() {
        let stanzas = gurmukhi("ਇਕ ॥1॥ ਦੋ ॥2॥");
        assert_eq!(stanzas, vec!["ਇਕ", "ਦੋ"]);
    }

    #[test]
    fn test_double_numbered_marker_is_one_boundary() {
        // Final verse of a shabad: "॥੪॥੯॥" ends both the stanza and the
        // shabad count. Must collapse to a single boundary.
        let stanzas = gurmukhi("ਆਖਰੀ ਬੰਦ ॥੪॥੯॥ ਪਿੱਛੋਂ");
        assert_eq!(stanzas, vec!["ਆਖਰੀ ਬੰਦ", "ਪਿੱਛੋਂ"]);
    }

    #[test]
    fn test_count_chain_is_one_boundary() {
        // Shabad endings stack stanza, shabad, and cumulative counts;
        // the whole chain is a single boundary and no digit fragment
        // may survive as content.
        let stanzas = gurmukhi("ਆਖਰੀ ਤੁਕ ॥੨॥੯॥੧੩੮॥");
        assert_eq!(stanzas, vec!["ਆਖਰੀ ਤੁਕ"]);

        let stanzas = gurmukhi("ਤੁਕ ॥੪॥੭॥੨॥੫੮॥ ਅਗਲਾ");
        assert_eq!(stanzas, vec!["ਤੁਕ", "ਅਗਲਾ"]);
    }

    #[test]
    fn test_count_chain_english() {
        let stanzas = english("Says Nanak, the last verse. ||2||9||138||");
        assert_eq!(stanzas, vec!["Says Nanak, the last verse."]);
    }

    #[test]
    fn test_refrain_marker() {
        let stanzas = gurmukhi("ਪਹਿਲੀ ਤੁਕ ॥ ਰਹਾਉ ॥ ਅਗਲਾ ਬੰਦ ॥੨॥");
        assert_eq!(stanzas, vec!["ਪਹਿਲੀ ਤੁਕ", "ਅਗਲਾ ਬੰਦ"]);
    }

    #[test]
    fn test_refrain_after_numbered_marker_shares_glyph() {
        // "॥੧॥ ਰਹਾਉ ॥": the numbered marker consumes the shared "॥",
        // leaving "ਰਹਾਉ ॥" for the bare trailing pattern.
        let stanzas = gurmukhi("ਮਨ ਰੇ ॥੧॥ ਰਹਾਉ ॥ ਅਗਲਾ ॥੨॥");
        assert_eq!(stanzas, vec!["ਮਨ ਰੇ", "ਅਗਲਾ"]);
    }

    #[test]
    fn test_no_markers_single_stanza() {
        let stanzas = gurmukhi("ਕੋਈ ਨਿਸ਼ਾਨ ਨਹੀਂ");
        assert_eq!(stanzas, vec!["ਕੋਈ ਨਿਸ਼ਾਨ ਨਹੀਂ"]);
    }

    #[test]
    fn test_empty_blob_no_stanzas() {
        assert!(gurmukhi("").is_empty());
        assert!(gurmukhi("॥੧॥").is_empty());
    }

    #[test]
    fn test_interior_verse_glyphs_kept() {
        // Bare "॥" between verse lines is not a stanza boundary
        let stanzas = gurmukhi("ਇਕ ॥ ਦੋ ॥੧॥ ਤਿੰਨ ॥ ਚਾਰ ॥੨॥");
        assert_eq!(stanzas, vec!["ਇਕ ॥ ਦੋ", "ਤਿੰਨ ॥ ਚਾਰ"]);
    }

    #[test]
    fn test_numbered_markers_english() {
        let stanzas = english("First stanza. ||1|| Second stanza. ||2||");
        assert_eq!(stanzas, vec!["First stanza.", "Second stanza."]);
    }

    #[test]
    fn test_double_numbered_marker_english() {
        let stanzas = english("Last stanza. ||4||9|| Afterword.");
        assert_eq!(stanzas, vec!["Last stanza.", "Afterword."]);
    }

    #[test]
    fn test_pause_marker_case_insensitive() {
        let stanzas = english("Refrain text. ||PAUSE|| Next. ||2||");
        assert_eq!(stanzas, vec!["Refrain text.", "Next."]);

        let stanzas = english("Refrain text. ||pause|| Next. ||2||");
        assert_eq!(stanzas, vec!["Refrain text.", "Next."]);
    }

    #[test]
    fn test_bare_pause_after_numbered_marker() {
        let stanzas = english("O my mind. ||1|| Pause || Next stanza. ||2||");
        assert_eq!(stanzas, vec!["O my mind.", "Next stanza."]);
    }

    #[test]
    fn test_document_order_preserved() {
        let stanzas = english("c. ||1|| a. ||2|| b. ||3||");
        assert_eq!(stanzas, vec!["c.", "a.", "b."]);
    }
}

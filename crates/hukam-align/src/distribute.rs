// Sentence-to-verse-line distribution within one stanza pair.
//
// The Gurmukhi stanza is authoritative: one output pair per verse line,
// always. The English stanza is cut into sentences and dealt onto the
// verse lines in order, padding with empty strings when short and
// packing earliest lines first when long.

use hukam_model::LinePair;
use regex::Regex;

/// Map one English stanza onto the verse lines of one Gurmukhi stanza.
///
/// Policy by verse-line count:
/// - one line: the whole stanza, unsplit, becomes its translation
///   (sentence-splitting would fragment a refrain's single thought);
/// - sentences ≤ lines: one sentence per line, in order, tail lines
///   left untranslated;
/// - sentences > lines: each line gets `floor(S/L)` sentences and the
///   first `S mod L` lines get one extra, consumed strictly in order.
pub fn distribute(source_stanza: &str, translation_stanza: &str) -> Vec<LinePair> {
    let lines = verse_lines(source_stanza);
    if lines.is_empty() {
        return Vec::new();
    }

    let translation = translation_stanza.trim();

    if lines.len() == 1 {
        return vec![LinePair::new(lines.into_iter().next().unwrap_or_default(), translation)];
    }

    let per_line = spread(sentences(translation), lines.len());
    lines
        .into_iter()
        .zip(per_line)
        .map(|(gurmukhi, translation)| LinePair::new(gurmukhi, translation))
        .collect()
}

/// Split a Gurmukhi stanza on the verse-end glyph into trimmed,
/// non-empty verse lines.
pub fn verse_lines(stanza: &str) -> Vec<String> {
    stanza
        .split('॥')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split an English stanza into sentences: maximal runs of non-terminal
/// characters followed by terminal punctuation. A non-empty stanza with
/// no terminal punctuation at all is one sentence.
pub fn sentences(stanza: &str) -> Vec<String> {
    let re = Regex::new(r"[^.?!]+[.?!]+").expect("valid sentence pattern");

    let found: Vec<String> = re
        .find_iter(stanza)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if found.is_empty() {
        let whole = stanza.trim();
        if whole.is_empty() {
            Vec::new()
        } else {
            vec![whole.to_string()]
        }
    } else {
        found
    }
}

/// Deal `sentences` onto `line_count` slots in order.
///
/// Under-supply pads the tail with empty strings; over-supply gives the
/// earliest `S mod L` slots one extra sentence, joined by single spaces.
fn spread(sentences: Vec<String>, line_count: usize) -> Vec<String> {
    if sentences.len() <= line_count {
        let mut out = sentences;
        out.resize(line_count, String::new());
        return out;
    }

    let base = sentences.len() / line_count;
    let extra = sentences.len() % line_count;

    let mut out = Vec::with_capacity(line_count);
    let mut remaining = sentences.into_iter();
    for slot in 0..line_count {
        let take = if slot < extra { base + 1 } else { base };
        let chunk: Vec<String> = remaining.by_ref().take(take).collect();
        out.push(chunk.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_lines() {
        assert_eq!(verse_lines("ਇਕ ॥ ਦੋ ॥"), vec!["ਇਕ", "ਦੋ"]);
        assert_eq!(verse_lines("ਇਕੱਲੀ ਤੁਕ"), vec!["ਇਕੱਲੀ ਤੁਕ"]);
        assert!(verse_lines("").is_empty());
        assert!(verse_lines(" ॥ ॥ ").is_empty());
    }

    #[test]
    fn test_sentences() {
        assert_eq!(
            sentences("One. Two? Three!"),
            vec!["One.", "Two?", "Three!"]
        );
        // Run of terminal punctuation stays with its sentence
        assert_eq!(sentences("Really?! Yes."), vec!["Really?!", "Yes."]);
        // No terminal punctuation: whole stanza is one sentence
        assert_eq!(sentences("no punctuation here"), vec!["no punctuation here"]);
        assert!(sentences("").is_empty());
        assert!(sentences("   ").is_empty());
    }

    #[test]
    fn test_single_verse_line_gets_whole_stanza() {
        let pairs = distribute("ਮਨ ਰੇ ਸਾਚਾ ਸਿਮਰਿ", "Pause meaning here. With two sentences.");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].gurmukhi, "ਮਨ ਰੇ ਸਾਚਾ ਸਿਮਰਿ");
        // Unsplit, even though it contains two sentences
        assert_eq!(pairs[0].translation, "Pause meaning here. With two sentences.");
    }

    #[test]
    fn test_positional_with_padding() {
        let pairs = distribute("ਇਕ ॥ ਦੋ ॥ ਤਿੰਨ ॥", "One. Two.");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].translation, "One.");
        assert_eq!(pairs[1].translation, "Two.");
        assert_eq!(pairs[2].translation, "");
    }

    #[test]
    fn test_surplus_goes_to_earliest_lines() {
        // Two verse lines, three sentences: first line absorbs the extra
        let pairs = distribute("ਇਕ ॥ ਦੋ ॥", "One. Two. Three.");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].translation, "One. Two.");
        assert_eq!(pairs[1].translation, "Three.");
    }

    #[test]
    fn test_even_distribution_counts() {
        // 7 sentences over 3 lines: 3, 2, 2
        let pairs = distribute(
            "ਇਕ ॥ ਦੋ ॥ ਤਿੰਨ ॥",
            "S1. S2. S3. S4. S5. S6. S7.",
        );
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].translation, "S1. S2. S3.");
        assert_eq!(pairs[1].translation, "S4. S5.");
        assert_eq!(pairs[2].translation, "S6. S7.");

        // All sentences accounted for, consumed in order
        let rejoined: Vec<String> = pairs.iter().map(|p| p.translation.clone()).collect();
        assert_eq!(rejoined.join(" "), "S1. S2. S3. S4. S5. S6. S7.");
    }

    #[test]
    fn test_empty_source_emits_nothing() {
        assert!(distribute("", "Orphan translation.").is_empty());
        assert!(distribute(" ॥ ", "Orphan translation.").is_empty());
    }

    #[test]
    fn test_empty_translation_pads_all() {
        let pairs = distribute("ਇਕ ॥ ਦੋ ॥", "");
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.translation.is_empty()));
    }

    #[test]
    fn test_unpunctuated_translation_multiline() {
        // Whole stanza is one sentence; it lands on the first line
        let pairs = distribute("ਇਕ ॥ ਦੋ ॥", "no terminal punctuation");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].translation, "no terminal punctuation");
        assert_eq!(pairs[1].translation, "");
    }

    #[test]
    fn test_pair_count_matches_verse_lines() {
        for (source, translation) in [
            ("ਇਕ ॥ ਦੋ ॥ ਤਿੰਨ ॥ ਚਾਰ", "A. B. C. D. E. F. G. H. I."),
            ("ਇਕ ॥ ਦੋ", ""),
            ("ਇਕ", "Lots. Of. Sentences. Here."),
        ] {
            let expected = verse_lines(source).len();
            assert_eq!(distribute(source, translation).len(), expected);
        }
    }
}

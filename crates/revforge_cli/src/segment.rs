//! Sentence segmentation for raw input text.
//!
//! Deliberately simple: collapse whitespace, split on terminator runs
//! (`.` `!` `?`), and treat unterminated text as a single sentence. The
//! engine only needs an ordered list of non-empty strings.

use std::sync::OnceLock;

use regex::Regex;

fn terminated() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[^.!?]*[.!?]+["')\]]*"#).expect("sentence regex"))
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

pub fn split_into_sentences(text: &str) -> Vec<String> {
    let collapsed = whitespace().replace_all(text.trim(), " ");
    if collapsed.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut consumed = 0;
    for m in terminated().find_iter(&collapsed) {
        let s = m.as_str().trim();
        if !s.is_empty() {
            sentences.push(s.to_string());
        }
        consumed = m.end();
    }

    // A trailing fragment without a terminator still counts.
    let rest = collapsed[consumed..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_sentence_terminators() {
        let out = split_into_sentences("Alpha. Beta! Gamma?");
        assert_eq!(out, vec!["Alpha.", "Beta!", "Gamma?"]);
    }

    #[test]
    fn collapses_internal_whitespace() {
        let out = split_into_sentences("One   sentence.\n\nAnother\tsentence.");
        assert_eq!(out, vec!["One sentence.", "Another sentence."]);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        let out = split_into_sentences("no punctuation at all");
        assert_eq!(out, vec!["no punctuation at all"]);
    }

    #[test]
    fn trailing_fragment_is_kept() {
        let out = split_into_sentences("Done. And then");
        assert_eq!(out, vec!["Done.", "And then"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_into_sentences("").is_empty());
        assert!(split_into_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn closing_quotes_stay_with_their_sentence() {
        let out = split_into_sentences(r#"He said "stop." Then left."#);
        assert_eq!(out, vec![r#"He said "stop.""#, "Then left."]);
    }
}

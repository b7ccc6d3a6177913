//! Detection of a new question arriving while a flow is active.

use super::normalizer::normalize;
use super::tables::NewQuestionMarkers;

/// Returns true if the raw utterance reads as a new question.
///
/// A new question ends in `?` or starts with an interrogative or imperative
/// lead word ("why", "how", "explain", ...).
pub fn looks_like_new_question(markers: &NewQuestionMarkers, raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.ends_with('?') {
        return true;
    }
    markers.lead_words.matches_at_start(&normalize(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lexicon::KeywordTables;

    fn is_question(raw: &str) -> bool {
        let tables = KeywordTables::embedded().unwrap();
        looks_like_new_question(&tables.new_question, raw)
    }

    #[test]
    fn trailing_question_mark_is_a_question() {
        assert!(is_question("my boss again?"));
        assert!(is_question("What is Isfet?  "));
    }

    #[test]
    fn lead_word_without_question_mark_is_a_question() {
        assert!(is_question("Explain isfet"));
        assert!(is_question("why does this keep happening"));
    }

    #[test]
    fn lead_word_must_be_a_whole_word() {
        assert!(!is_question("whatever, fine"));
        assert!(!is_question("island life"));
    }

    #[test]
    fn plain_statements_are_not_questions() {
        assert!(!is_question("I was just watching"));
        assert!(!is_question("tight"));
        assert!(!is_question(""));
    }
}

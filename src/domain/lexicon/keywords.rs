//! Keyword and keyword-set matching.
//!
//! A keyword matches a whole word or phrase in normalized text. A trailing
//! `*` turns it into a prefix match, so `argu*` matches "argue", "argued"
//! and "arguing" but not "bargue". Word boundaries are any non-alphanumeric
//! character, which lets "husband" match inside "husband's".

use std::collections::HashSet;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One entry of a keyword set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Keyword {
    stem: String,
    prefix: bool,
}

impl Keyword {
    /// Parses a keyword, honouring the trailing `*` prefix marker.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().to_lowercase();
        match trimmed.strip_suffix('*') {
            Some(stem) => Self {
                stem: stem.trim_end().to_string(),
                prefix: true,
            },
            None => Self {
                stem: trimmed,
                prefix: false,
            },
        }
    }

    /// The text matched, without the `*` marker.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Returns true if this keyword matches by prefix.
    pub fn is_prefix(&self) -> bool {
        self.prefix
    }

    /// Byte ranges of every boundary-respecting occurrence in `text`.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        if self.stem.is_empty() {
            return Vec::new();
        }
        text.match_indices(self.stem.as_str())
            .filter(|(start, m)| {
                let end = start + m.len();
                let before_ok = text[..*start]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !is_word_char(c));
                let after_ok = self.prefix
                    || text[end..].chars().next().map_or(true, |c| !is_word_char(c));
                before_ok && after_ok
            })
            .map(|(start, m)| start..start + m.len())
            .collect()
    }

    /// Returns true if the keyword occurs anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        !self.spans(text).is_empty()
    }

    /// Returns true if `text` begins with this keyword.
    pub fn matches_at_start(&self, text: &str) -> bool {
        self.spans(text).first().is_some_and(|span| span.start == 0)
    }
}

impl From<String> for Keyword {
    fn from(raw: String) -> Self {
        Keyword::new(&raw)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        if keyword.prefix {
            format!("{}*", keyword.stem)
        } else {
            keyword.stem
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// An unordered set of keywords tested by membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<Keyword>);

impl KeywordSet {
    /// Builds a set from raw keyword strings.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(words.into_iter().map(|w| Keyword::new(w.as_ref())).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.0.iter()
    }

    /// Returns true if any keyword occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|k| k.matches(text))
    }

    /// Returns the first keyword (in set order) that occurs in `text`.
    pub fn first_match(&self, text: &str) -> Option<&Keyword> {
        self.0.iter().find(|k| k.matches(text))
    }

    /// Returns true if `text` begins with any keyword.
    pub fn matches_at_start(&self, text: &str) -> bool {
        self.0.iter().any(|k| k.matches_at_start(text))
    }

    /// Counts distinct mentions in `text`.
    ///
    /// Overlapping matches merge into one mention, so "mother-in-law" is one
    /// mention even when both `mother` and `in-law*` are in the set. The same
    /// word mentioned twice counts once.
    pub fn count_mentions(&self, text: &str) -> usize {
        let mut spans: Vec<Range<usize>> = self.0.iter().flat_map(|k| k.spans(text)).collect();
        spans.sort_by_key(|s| (s.start, std::cmp::Reverse(s.end)));

        let mut merged: Vec<Range<usize>> = Vec::new();
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start < last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }

        merged
            .into_iter()
            .map(|span| &text[span])
            .collect::<HashSet<_>>()
            .len()
    }
}

//! Lexical classification of utterances into domains.

use std::sync::Arc;

use super::keywords::{Keyword, KeywordSet};
use super::normalizer::normalize;
use super::pattern::classify_pattern;
use super::question::looks_like_new_question;
use super::tables::KeywordTables;
use crate::domain::foundation::{Domain, Pattern};

/// Classifies utterances for the dialogue machine.
pub trait UtteranceClassifier: Send + Sync {
    /// Classify normalized text into a domain.
    fn classify(&self, normalized: &str) -> Domain;

    /// Tag normalized relationship text with an interpersonal pattern.
    fn classify_pattern(&self, normalized: &str) -> Pattern;

    /// Decide whether a raw utterance is a new question rather than an answer.
    fn is_new_question(&self, raw: &str) -> bool;
}

/// Deterministic keyword classifier (default implementation).
///
/// Definition queries are recognized first: a definition prefix, any
/// glossary term, or an app-identity phrase. Otherwise the domain keyword
/// sets are tried in table order and the first hit wins; no hit falls back
/// to [`Domain::Daily`] so every utterance gets a flow.
#[derive(Debug, Clone)]
pub struct LexicalClassifier {
    tables: Arc<KeywordTables>,
    glossary_terms: KeywordSet,
    app_name: Option<Keyword>,
}

impl LexicalClassifier {
    /// Creates a classifier over `tables`.
    ///
    /// `glossary_terms` match on word boundaries like any other keyword;
    /// `app_name` counts as an app-identity phrase.
    pub fn new<I, S>(tables: Arc<KeywordTables>, glossary_terms: I, app_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let app_name = normalize(app_name);
        Self {
            tables,
            glossary_terms: KeywordSet::from_words(
                glossary_terms.into_iter().map(|t| normalize(t.as_ref())),
            ),
            app_name: (!app_name.is_empty()).then(|| Keyword::new(&app_name)),
        }
    }

    /// Returns true if the text asks for a definition or about the app.
    pub fn is_definition_query(&self, normalized: &str) -> bool {
        let markers = &self.tables.definition;
        markers.prefixes.matches_at_start(normalized)
            || self.glossary_terms.matches(normalized)
            || self.mentions_app_identity(normalized)
    }

    /// Returns true if the text names the app or asks what it is.
    pub fn mentions_app_identity(&self, normalized: &str) -> bool {
        self.tables.definition.app_identity.matches(normalized)
            || self.app_name.as_ref().is_some_and(|name| name.matches(normalized))
    }

    /// Returns the first domain in priority order whose keywords occur in
    /// the text, with the keyword that matched.
    pub fn domain_match(&self, normalized: &str) -> Option<(Domain, &Keyword)> {
        self.tables
            .domains
            .iter()
            .find_map(|entry| entry.keywords.first_match(normalized).map(|k| (entry.domain, k)))
    }
}

impl UtteranceClassifier for LexicalClassifier {
    fn classify(&self, normalized: &str) -> Domain {
        if self.is_definition_query(normalized) {
            tracing::debug!("Classified as definition query");
            return Domain::Definition;
        }

        match self.domain_match(normalized) {
            Some((domain, keyword)) => {
                tracing::debug!(domain = domain.key(), keyword = keyword.stem(), "Classified utterance");
                domain
            }
            None => {
                tracing::debug!("No domain keyword matched, falling back to daily");
                Domain::Daily
            }
        }
    }

    fn classify_pattern(&self, normalized: &str) -> Pattern {
        classify_pattern(&self.tables.patterns, normalized)
    }

    fn is_new_question(&self, raw: &str) -> bool {
        looks_like_new_question(&self.tables.new_question, raw)
    }
}

//! Definition responder answering "what is X" outside the flows.

use super::entries::{GlossaryEntry, GLOSSARY};
use crate::domain::lexicon::{normalize, Keyword, KeywordSet};

/// Name and tagline the engine presents itself with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub name: String,
    pub tagline: String,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            name: "Way of the Feather".to_string(),
            tagline: "Ask a real-life question. We'll slow it down first.".to_string(),
        }
    }
}

/// Answers definition queries from the static glossary.
///
/// Lookup order: app-identity phrases, then glossary keys in table order,
/// then the generic app description. Never fails.
#[derive(Debug, Clone)]
pub struct DefinitionResponder {
    app: AppIdentity,
    identity_phrases: KeywordSet,
    app_name_key: Option<Keyword>,
}

impl DefinitionResponder {
    pub fn new(app: AppIdentity, identity_phrases: KeywordSet) -> Self {
        let name = normalize(&app.name);
        let app_name_key = (!name.is_empty()).then(|| Keyword::new(&name));
        Self {
            app,
            identity_phrases,
            app_name_key,
        }
    }

    /// Every glossary key, for the classifier's definition check.
    pub fn terms() -> impl Iterator<Item = &'static str> {
        GLOSSARY.iter().flat_map(|entry| entry.keys.iter().copied())
    }

    /// Finds the first entry with a key occurring as a word in `normalized`.
    pub fn lookup(normalized: &str) -> Option<&'static GlossaryEntry> {
        GLOSSARY
            .iter()
            .find(|entry| entry.keys.iter().any(|key| Keyword::new(key).matches(normalized)))
    }

    /// Answers a normalized definition query.
    pub fn answer_definition(&self, normalized: &str) -> String {
        if self.asks_about_app(normalized) {
            return self.about();
        }
        match Self::lookup(normalized) {
            Some(entry) => entry.definition.to_string(),
            None => self.description(),
        }
    }

    /// Text returned when the user asks what the app is.
    pub fn about(&self) -> String {
        format!(
            "I'm {}. {} Tell me what is going on, answer a few quick questions, \
             and I'll lay out three options, mark the most balanced one, and suggest one tiny move.",
            self.app.name, self.app.tagline
        )
    }

    /// Generic description used when no glossary term matches.
    pub fn description(&self) -> String {
        let names: Vec<&str> = GLOSSARY.iter().map(|entry| entry.name).collect();
        format!(
            "{} helps you think through a real-life situation: describe it, answer a few quick questions, \
             and get three options with the most balanced one marked. Words I can explain: {}.",
            self.app.name,
            names.join(", ")
        )
    }

    fn asks_about_app(&self, normalized: &str) -> bool {
        self.identity_phrases.matches(normalized)
            || self.app_name_key.as_ref().is_some_and(|name| name.matches(normalized))
    }
}

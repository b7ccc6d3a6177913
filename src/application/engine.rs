//! The in-process engine a host talks to.

use std::sync::Arc;

use super::error::EngineError;
use crate::config::EngineConfig;
use crate::domain::dialogue::{
    ChoiceButton, DialogueEvent, DialogueMachine, Session, TranscriptEntry,
};
use crate::domain::flow::FlowTable;
use crate::domain::foundation::Domain;
use crate::domain::glossary::{AppIdentity, DefinitionResponder};
use crate::domain::lexicon::{Keyword, KeywordTables, LexicalClassifier, UtteranceClassifier};
use crate::domain::recommendation::Synthesizer;

/// Owns the session and applies each turn through the dialogue machine.
///
/// Hosts call [`submit_utterance`](Self::submit_utterance) for typed text,
/// render [`current_choices`](Self::current_choices) as buttons and call
/// [`select_choice`](Self::select_choice) when one is pressed.
#[derive(Debug)]
pub struct DialogueEngine {
    machine: DialogueMachine,
    session: Session,
}

impl DialogueEngine {
    /// Builds an engine from default configuration and the built-in tables.
    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::from_config(&EngineConfig::default())
    }

    /// Builds an engine with the keyword classifier.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or an unusable keyword table file.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let tables = match &config.lexicon.keyword_table {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading keyword table override");
                Arc::new(KeywordTables::from_path(path)?)
            }
            None => KeywordTables::embedded()?,
        };
        warn_shadowed_keywords(&tables);

        let classifier =
            LexicalClassifier::new(Arc::clone(&tables), DefinitionResponder::terms(), &config.app.name);
        Self::assemble(config, &tables, Box::new(classifier))
    }

    /// Builds an engine around a host-supplied classifier.
    ///
    /// The embedded keyword table still supplies the app-identity phrases
    /// for definition answers.
    pub fn with_classifier(
        config: &EngineConfig,
        classifier: Box<dyn UtteranceClassifier>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let tables = KeywordTables::embedded()?;
        Self::assemble(config, &tables, classifier)
    }

    fn assemble(
        config: &EngineConfig,
        tables: &KeywordTables,
        classifier: Box<dyn UtteranceClassifier>,
    ) -> Result<Self, EngineError> {
        let flows = FlowTable::standard();
        flows.validate()?;

        let app = AppIdentity {
            name: config.app.name.clone(),
            tagline: config.app.tagline.clone(),
        };
        let responder = DefinitionResponder::new(app, tables.definition.app_identity.clone());
        let synthesizer = Synthesizer::new(flows.clone(), config.features.cost_projection);
        let machine = DialogueMachine::new(
            classifier,
            responder,
            flows,
            synthesizer,
            config.features.fresh_start_notice,
        );

        Ok(Self {
            machine,
            session: Session::new(),
        })
    }

    /// Handles typed text and returns the new transcript lines.
    pub fn submit_utterance(&mut self, text: &str) -> Vec<TranscriptEntry> {
        self.apply(DialogueEvent::Utterance(text.to_string()))
    }

    /// Buttons for the step awaiting an answer; empty when idle.
    pub fn current_choices(&self) -> Vec<ChoiceButton> {
        self.machine.choices(&self.session)
    }

    /// Handles a pressed button. Unknown ids return no lines and change nothing.
    pub fn select_choice(&mut self, id: &str) -> Vec<TranscriptEntry> {
        self.apply(DialogueEvent::Choice(id.to_string()))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn classify(&self, text: &str) -> Domain {
        self.machine.classify(text)
    }

    pub fn answer_definition(&self, text: &str) -> String {
        self.machine.answer_definition(text)
    }

    fn apply(&mut self, event: DialogueEvent) -> Vec<TranscriptEntry> {
        let session = std::mem::take(&mut self.session);
        let reduction = self.machine.reduce(session, event);
        self.session = reduction.session;
        reduction.entries
    }
}

/// Domain keywords containing a glossary term can never classify, because
/// the definition check runs first.
fn warn_shadowed_keywords(tables: &KeywordTables) {
    for entry in &tables.domains {
        for keyword in entry.keywords.iter() {
            if let Some(term) =
                DefinitionResponder::terms().find(|t| Keyword::new(t).matches(keyword.stem()))
            {
                tracing::warn!(
                    domain = entry.domain.key(),
                    keyword = keyword.stem(),
                    term,
                    "Domain keyword is shadowed by a glossary term"
                );
            }
        }
    }
}

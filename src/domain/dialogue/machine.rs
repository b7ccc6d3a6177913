//! Generic dialogue state machine interpreting the flow table.
//!
//! Every turn is a pure reduction: the machine takes the current
//! [`Session`] and an event and returns the next session together with the
//! transcript lines to show. The machine itself holds no conversation state.

use super::messages::{pattern_line, ABSORBED, FRESH_START};
use super::session::Session;
use super::transcript::{ChoiceButton, TranscriptEntry};
use crate::domain::flow::{FlowTable, SlotKey, Step, NONE};
use crate::domain::foundation::{Domain, SessionStatus};
use crate::domain::glossary::DefinitionResponder;
use crate::domain::lexicon::{normalize, UtteranceClassifier};
use crate::domain::recommendation::Synthesizer;

/// Input for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueEvent {
    /// Free text typed by the user.
    Utterance(String),
    /// A choice button pressed, by id.
    Choice(String),
}

/// Output of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub session: Session,
    pub entries: Vec<TranscriptEntry>,
}

impl Reduction {
    fn unchanged(session: Session) -> Self {
        Self {
            session,
            entries: Vec::new(),
        }
    }
}

/// Interprets flows for any domain.
pub struct DialogueMachine {
    classifier: Box<dyn UtteranceClassifier>,
    responder: DefinitionResponder,
    flows: FlowTable,
    synthesizer: Synthesizer,
    fresh_start_notice: bool,
}

impl DialogueMachine {
    pub fn new(
        classifier: Box<dyn UtteranceClassifier>,
        responder: DefinitionResponder,
        flows: FlowTable,
        synthesizer: Synthesizer,
        fresh_start_notice: bool,
    ) -> Self {
        Self {
            classifier,
            responder,
            flows,
            synthesizer,
            fresh_start_notice,
        }
    }

    /// Classifies raw text without touching any session.
    pub fn classify(&self, raw: &str) -> Domain {
        self.classifier.classify(&normalize(raw))
    }

    /// Answers a definition query without touching any session.
    pub fn answer_definition(&self, raw: &str) -> String {
        self.responder.answer_definition(&normalize(raw))
    }

    /// Applies one event to a session.
    pub fn reduce(&self, session: Session, event: DialogueEvent) -> Reduction {
        match event {
            DialogueEvent::Utterance(text) => self.on_utterance(session, &text),
            DialogueEvent::Choice(id) => self.on_choice(session, &id),
        }
    }

    /// Choice buttons for the step the session is waiting on.
    pub fn choices(&self, session: &Session) -> Vec<ChoiceButton> {
        self.current_step(session)
            .map(|step| step.choices.iter().map(ChoiceButton::from).collect())
            .unwrap_or_default()
    }

    fn current_step<'a>(&'a self, session: &Session) -> Option<&'a Step> {
        if !session.status.awaits_choice() {
            return None;
        }
        self.flows.get(session.domain?)?.step(session.step?)
    }

    fn on_utterance(&self, session: Session, raw: &str) -> Reduction {
        if raw.trim().is_empty() {
            return Reduction::unchanged(session);
        }

        let mut entries = vec![TranscriptEntry::user(raw)];

        if !session.status.is_interruptible() {
            let session = self.start(session, raw, &mut entries);
            return Reduction { session, entries };
        }

        let normalized = normalize(raw);
        if let Some(step) = self.current_step(&session) {
            if let Some(choice) = step.typed_choice(&normalized) {
                tracing::debug!(session_id = %session.id, choice = choice.id, "Typed text matched a choice");
                let session = self.apply_choice(session, step, choice.id, &mut entries);
                return Reduction { session, entries };
            }
        }

        if self.classifier.is_new_question(raw) {
            tracing::info!(
                session_id = %session.id,
                domain = ?session.domain,
                step = session.step.unwrap_or_default(),
                "New question interrupted the flow"
            );
            let mut session = session;
            session.reset();
            if self.fresh_start_notice {
                entries.push(TranscriptEntry::system(FRESH_START));
            }
            let session = self.start(session, raw, &mut entries);
            return Reduction { session, entries };
        }

        tracing::debug!(session_id = %session.id, "Absorbed free text mid-flow");
        entries.push(TranscriptEntry::system(ABSORBED));
        Reduction { session, entries }
    }

    fn on_choice(&self, session: Session, id: &str) -> Reduction {
        let Some(step) = self.current_step(&session) else {
            tracing::debug!(session_id = %session.id, choice = id, "No step awaiting a choice");
            return Reduction::unchanged(session);
        };
        let Some(choice) = step.choice(id) else {
            tracing::debug!(session_id = %session.id, choice = id, "Ignored unknown choice");
            return Reduction::unchanged(session);
        };

        let mut entries = vec![TranscriptEntry::user(choice.label)];
        let session = self.apply_choice(session, step, choice.id, &mut entries);
        Reduction { session, entries }
    }

    /// Classifies the utterance and either answers a definition or starts a flow.
    fn start(&self, mut session: Session, raw: &str, entries: &mut Vec<TranscriptEntry>) -> Session {
        let normalized = normalize(raw);
        let domain = self.classifier.classify(&normalized);

        if domain == Domain::Definition {
            tracing::debug!(session_id = %session.id, "Answering definition query");
            entries.push(TranscriptEntry::system(
                self.responder.answer_definition(&normalized),
            ));
            return session;
        }

        let Some((flow, first)) = self
            .flows
            .get(domain)
            .and_then(|flow| flow.first_step().map(|step| (flow, step)))
        else {
            tracing::warn!(domain = domain.key(), "No flow for classified domain");
            entries.push(TranscriptEntry::system(self.responder.description()));
            return session;
        };

        let mut intro = flow.intro.to_string();
        if flow.derived.contains(&SlotKey::Pattern) {
            let pattern = self.classifier.classify_pattern(&normalized);
            tracing::debug!(session_id = %session.id, pattern = %pattern, "Tagged relationship pattern");
            session
                .slots
                .insert(SlotKey::Pattern, pattern.slot_value().to_string());
            if let Some(line) = pattern_line(pattern) {
                intro.push(' ');
                intro.push_str(&line);
            }
        }

        session.domain = Some(domain);
        session.step = Some(first.id);
        session.utterance = Some(raw.to_string());
        session.set_status(SessionStatus::Collecting);

        tracing::info!(session_id = %session.id, domain = domain.key(), "Flow started");
        entries.push(TranscriptEntry::system(intro));
        entries.push(TranscriptEntry::system(first.prompt));
        session
    }

    /// Records an answer, then asks the next question or finishes the flow.
    fn apply_choice(
        &self,
        mut session: Session,
        step: &Step,
        value: &str,
        entries: &mut Vec<TranscriptEntry>,
    ) -> Session {
        let Some(flow) = session.domain.and_then(|d| self.flows.get(d)) else {
            return session;
        };

        session.slots.insert(step.slot, value.to_string());
        let advance = flow.advance(step.id, value);
        for skipped in &advance.skipped {
            tracing::debug!(session_id = %session.id, step = skipped.id, "Skipped step");
            session.slots.insert(skipped.slot, NONE.to_string());
        }

        if let Some(next) = advance.next {
            tracing::debug!(session_id = %session.id, from = step.id, to = next.id, "Advanced step");
            session.step = Some(next.id);
            session.set_status(SessionStatus::Collecting);
            entries.push(TranscriptEntry::system(next.prompt));
            return session;
        }

        session.set_status(SessionStatus::Complete);
        let missing: Vec<SlotKey> = flow
            .required_slots()
            .filter(|slot| !session.slots.contains_key(slot))
            .collect();
        if !missing.is_empty() {
            tracing::warn!(session_id = %session.id, missing = ?missing, "Flow finished with empty slots");
        }

        if let Some(rec) = self.synthesizer.synthesize(flow.domain, &session.slots) {
            tracing::info!(
                session_id = %session.id,
                domain = flow.domain.key(),
                best = %rec.best,
                rule = rec.decided_by.unwrap_or("default"),
                "Flow complete"
            );
            entries.push(TranscriptEntry::system(rec.text));
        }

        session.reset();
        session
    }
}

impl std::fmt::Debug for DialogueMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueMachine")
            .field("flows", &self.flows)
            .field("fresh_start_notice", &self.fresh_start_notice)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::Speaker;
    use crate::domain::foundation::Pattern;
    use crate::domain::glossary::AppIdentity;
    use crate::domain::lexicon::{KeywordTables, LexicalClassifier};

    fn machine_with(fresh_start_notice: bool) -> DialogueMachine {
        let tables = KeywordTables::embedded().unwrap();
        let app = AppIdentity::default();
        let responder = DefinitionResponder::new(app.clone(), tables.definition.app_identity.clone());
        let classifier = LexicalClassifier::new(tables, DefinitionResponder::terms(), &app.name);
        DialogueMachine::new(
            Box::new(classifier),
            responder,
            FlowTable::standard(),
            Synthesizer::new(FlowTable::standard(), true),
            fresh_start_notice,
        )
    }

    fn machine() -> DialogueMachine {
        machine_with(true)
    }

    fn say(m: &DialogueMachine, session: Session, text: &str) -> Reduction {
        m.reduce(session, DialogueEvent::Utterance(text.to_string()))
    }

    fn pick(m: &DialogueMachine, session: Session, id: &str) -> Reduction {
        m.reduce(session, DialogueEvent::Choice(id.to_string()))
    }

    fn choice_ids(m: &DialogueMachine, session: &Session) -> Vec<String> {
        m.choices(session).into_iter().map(|c| c.id).collect()
    }

    mod starting {
        use super::*;

        #[test]
        fn relationship_utterance_starts_flow_with_pattern() {
            let m = machine();
            let r = say(&m, Session::new(), "My mother and husband argued at breakfast");

            assert_eq!(r.session.status, SessionStatus::Collecting);
            assert_eq!(r.session.domain, Some(Domain::Relationship));
            assert_eq!(r.session.step, Some("time"));
            assert_eq!(
                r.session.slots.get(&SlotKey::Pattern).map(String::as_str),
                Some(Pattern::Triangle.slot_value())
            );
            assert_eq!(r.entries[0].speaker, Speaker::User);
            assert!(r.entries[1].text.contains("triangle"));
            assert_eq!(r.entries[2].text, "When did this happen?");
        }

        #[test]
        fn definition_query_answers_and_stays_idle() {
            let m = machine();
            let r = say(&m, Session::new(), "What is Ma'at?");
            assert!(r.session.is_idle());
            assert!(r.entries[1].text.starts_with("Ma'at is"));
            assert!(m.choices(&r.session).is_empty());
        }

        #[test]
        fn blank_utterance_is_ignored() {
            let m = machine();
            let session = Session::new();
            let r = say(&m, session.clone(), "   ");
            assert!(r.entries.is_empty());
            assert_eq!(r.session, session);
        }

        #[test]
        fn non_relationship_flow_has_no_pattern_slot() {
            let m = machine();
            let r = say(&m, Session::new(), "I can't focus at work");
            assert_eq!(r.session.domain, Some(Domain::Work));
            assert!(!r.session.slots.contains_key(&SlotKey::Pattern));
        }
    }

    mod answering {
        use super::*;

        #[test]
        fn valid_choice_advances() {
            let m = machine();
            let r = say(&m, Session::new(), "I can't focus at work");
            let r = pick(&m, r.session, "too_much");
            assert_eq!(r.session.step, Some("timing"));
            assert_eq!(r.entries[0], TranscriptEntry::user("Too much on my plate"));
            assert_eq!(r.entries[1].text, "How urgent is it?");
        }

        #[test]
        fn unknown_choice_is_a_no_op() {
            let m = machine();
            let r = say(&m, Session::new(), "I can't focus at work");
            let before = r.session.clone();
            let r = pick(&m, r.session, "not_a_choice");
            assert!(r.entries.is_empty());
            assert_eq!(r.session, before);
        }

        #[test]
        fn choice_while_idle_is_a_no_op() {
            let m = machine();
            let r = pick(&m, Session::new(), "today");
            assert!(r.entries.is_empty());
            assert!(r.session.is_idle());
        }

        #[test]
        fn typed_label_counts_as_choice() {
            let m = machine();
            let r = say(&m, Session::new(), "I can't focus at work");
            let r = say(&m, r.session, "Too much on my plate");
            assert_eq!(r.session.slots.get(&SlotKey::Scope).map(String::as_str), Some("too_much"));
            assert_eq!(r.session.step, Some("timing"));
        }

        #[test]
        fn no_body_signal_fills_quality_with_none() {
            let m = machine();
            let mut s = say(&m, Session::new(), "I can't focus at work").session;
            for id in ["too_much", "today", "none"] {
                s = pick(&m, s, id).session;
            }
            assert_eq!(s.step, Some("goal"));
            assert_eq!(s.slots.get(&SlotKey::BodyQuality).map(String::as_str), Some(NONE));
        }

        #[test]
        fn last_answer_emits_recommendation_and_resets() {
            let m = machine();
            let start = say(&m, Session::new(), "I can't focus at work").session;
            let first_id = start.id;
            let mut s = start;
            for id in ["too_much", "today", "none"] {
                s = pick(&m, s, id).session;
            }
            let r = pick(&m, s, "clarity");

            assert!(r.session.is_idle());
            assert!(r.session.slots.is_empty());
            assert_ne!(r.session.id, first_id);
            let text = &r.entries.last().unwrap().text;
            assert!(text.contains("Option A: Shrink the load (most balanced)"));
            assert!(m.choices(&r.session).is_empty());
        }
    }

    mod interruptions {
        use super::*;

        #[test]
        fn free_text_is_absorbed_and_choices_kept() {
            let m = machine();
            let s = say(&m, Session::new(), "My mother and husband argued at breakfast").session;
            let before = choice_ids(&m, &s);
            let r = say(&m, s.clone(), "it was really loud");

            assert_eq!(r.session, s);
            assert_eq!(choice_ids(&m, &r.session), before);
            assert_eq!(r.entries.last().unwrap().text, ABSORBED);
        }

        #[test]
        fn new_question_restarts_and_reclassifies() {
            let m = machine();
            let mut s = say(&m, Session::new(), "My mother and husband argued at breakfast").session;
            s = pick(&m, s, "today").session;
            let r = say(&m, s, "What is Isfet?");

            assert!(r.session.is_idle());
            assert!(r.session.slots.is_empty());
            assert_eq!(r.entries[1].text, FRESH_START);
            assert!(r.entries[2].text.starts_with("Isfet is"));
        }

        #[test]
        fn new_question_can_start_another_flow() {
            let m = machine();
            let s = say(&m, Session::new(), "I can't focus at work").session;
            let r = say(&m, s, "Why does my back pain keep coming back?");
            assert_eq!(r.session.domain, Some(Domain::Health));
            assert_eq!(r.session.step, Some("health_concern"));
        }

        #[test]
        fn notice_can_be_disabled() {
            let m = machine_with(false);
            let s = say(&m, Session::new(), "I can't focus at work").session;
            let r = say(&m, s, "What is Isfet?");
            assert!(r.entries.iter().all(|e| e.text != FRESH_START));
        }

        #[test]
        fn typed_id_is_taken_as_choice() {
            let m = machine();
            let mut s = say(&m, Session::new(), "I can't focus at work").session;
            s = pick(&m, s, "too_much").session;
            let r = say(&m, s, "This week");
            assert_eq!(r.session.step, Some("body_location"));
            assert_eq!(r.entries.len(), 2);
        }
    }
}

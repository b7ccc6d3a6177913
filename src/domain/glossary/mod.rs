//! Glossary module.
//!
//! Static definitions for the words the app uses, and the responder that
//! answers definition queries without touching the dialogue flows.

mod entries;
mod responder;

pub use entries::{GlossaryEntry, GLOSSARY};
pub use responder::{AppIdentity, DefinitionResponder};

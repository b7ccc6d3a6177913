//! Versioned keyword tables driving classification.
//!
//! The default table ships inside the binary (`keywords.yaml`) and can be
//! replaced by a file at startup. Every list is priority ordered.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::errors::LexiconError;
use super::keywords::KeywordSet;
use crate::domain::foundation::{Domain, Pattern};

/// The table format version this build understands.
pub const SUPPORTED_TABLE_VERSION: u32 = 1;

const EMBEDDED_TABLE: &str = include_str!("keywords.yaml");

static EMBEDDED: Lazy<Option<Arc<KeywordTables>>> =
    Lazy::new(|| KeywordTables::from_yaml_str(EMBEDDED_TABLE).ok().map(Arc::new));

/// All keyword data used by the lexical and pattern classifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTables {
    pub version: u32,
    pub definition: DefinitionMarkers,
    /// Domain keyword sets in priority order.
    pub domains: Vec<DomainKeywords>,
    pub patterns: PatternMarkers,
    pub new_question: NewQuestionMarkers,
}

/// Markers that turn an utterance into a definition query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionMarkers {
    pub prefixes: KeywordSet,
    pub app_identity: KeywordSet,
}

/// One entry of the domain priority list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainKeywords {
    pub domain: Domain,
    pub keywords: KeywordSet,
}

/// Relationship-pattern markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMarkers {
    pub triangle: TriangleMarkers,
    /// Checked after the triangle, first match wins.
    pub ordered: Vec<PatternKeywords>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleMarkers {
    pub roles: KeywordSet,
    pub connectors: KeywordSet,
    pub phrases: KeywordSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternKeywords {
    pub pattern: Pattern,
    pub keywords: KeywordSet,
}

/// Markers of a new question arriving mid-flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestionMarkers {
    pub lead_words: KeywordSet,
}

impl KeywordTables {
    /// Returns the table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded YAML is broken, which the test suite
    /// rules out. The parse is cached; a broken table is reparsed to
    /// surface the real error.
    pub fn embedded() -> Result<Arc<KeywordTables>, LexiconError> {
        match EMBEDDED.as_ref() {
            Some(tables) => Ok(Arc::clone(tables)),
            None => Self::from_yaml_str(EMBEDDED_TABLE).map(Arc::new),
        }
    }

    /// Parses and validates a table from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LexiconError> {
        let tables: KeywordTables = serde_yaml::from_str(yaml)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Reads, parses and validates a table file.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Checks version, non-empty sets and the shape of the domain order.
    pub fn validate(&self) -> Result<(), LexiconError> {
        if self.version != SUPPORTED_TABLE_VERSION {
            return Err(LexiconError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_TABLE_VERSION,
            });
        }

        non_empty(&self.definition.prefixes, "definition.prefixes")?;
        non_empty(&self.new_question.lead_words, "new_question.lead_words")?;
        non_empty(&self.patterns.triangle.roles, "patterns.triangle.roles")?;
        non_empty(&self.patterns.triangle.connectors, "patterns.triangle.connectors")?;

        let mut seen = HashSet::new();
        for entry in &self.domains {
            if !entry.domain.has_flow() {
                return Err(LexiconError::NotAFlowDomain(entry.domain));
            }
            if !seen.insert(entry.domain) {
                return Err(LexiconError::DuplicateDomain(entry.domain));
            }
            non_empty(&entry.keywords, &format!("domains.{}", entry.domain.key()))?;
        }

        for entry in &self.patterns.ordered {
            non_empty(
                &entry.keywords,
                &format!("patterns.{}", entry.pattern.slot_value()),
            )?;
        }

        Ok(())
    }

    /// Returns the domain keyword sets in priority order.
    pub fn domain_order(&self) -> impl Iterator<Item = Domain> + '_ {
        self.domains.iter().map(|d| d.domain)
    }
}

fn non_empty(set: &KeywordSet, name: &str) -> Result<(), LexiconError> {
    if set.is_empty() {
        Err(LexiconError::EmptyKeywordSet(name.to_string()))
    } else {
        Ok(())
    }
}

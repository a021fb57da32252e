//! Candidates in presidential-style polls

use std::hash::{Hash, Hasher};
use std::sync::{PoisonError, RwLock};

use serde::{Serialize, Serializer};

/// Display attributes of a candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateAttributes {
    /// Abbreviation
    pub abbreviation: Option<String>,
    /// Full name
    pub name: Option<String>,
    /// Romanized name, for names in a non-Latin script
    pub romanized_name: Option<String>,
}

impl CandidateAttributes {
    /// Overwrite every attribute that `other` provides
    pub fn merge(&mut self, other: Self) {
        if other.abbreviation.is_some() {
            self.abbreviation = other.abbreviation;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.romanized_name.is_some() {
            self.romanized_name = other.romanized_name;
        }
    }
}

/// A candidate, identified by id
#[derive(Debug)]
pub struct Candidate {
    id: String,
    attributes: RwLock<CandidateAttributes>,
}

impl Candidate {
    /// Create a candidate without attributes
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: RwLock::new(CandidateAttributes::default()),
        }
    }

    /// The stable identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// A snapshot of the current attributes
    #[must_use]
    pub fn attributes(&self) -> CandidateAttributes {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrite the attributes given in `update`, keeping the others
    pub fn update(&self, update: CandidateAttributes) {
        self.attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(update);
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Serialize for Candidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

//! Electoral lists and combinations of electoral lists
//!
//! An electoral list is identified by its id. Its display attributes can be
//! filled in later, by any line that defines the list, so they sit behind a
//! lock while the identity stays immutable. Equality, ordering and hashing
//! only look at the id.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};
use std::sync::{PoisonError, RwLock};

use serde::{Serialize, Serializer};

/// Display attributes of an electoral list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElectoralListAttributes {
    /// Abbreviation, e.g. "SPD"
    pub abbreviation: Option<String>,
    /// Romanized abbreviation, for lists in a non-Latin script
    pub romanized_abbreviation: Option<String>,
    /// Name to use when no name exists for a language
    pub default_name: Option<String>,
    /// Names by lower-case language code
    pub names: BTreeMap<String, String>,
    /// Romanized names by lower-case language code
    pub romanized_names: BTreeMap<String, String>,
}

impl ElectoralListAttributes {
    /// Overwrite every attribute that `other` provides
    pub fn merge(&mut self, other: Self) {
        if other.abbreviation.is_some() {
            self.abbreviation = other.abbreviation;
        }
        if other.romanized_abbreviation.is_some() {
            self.romanized_abbreviation = other.romanized_abbreviation;
        }
        if other.default_name.is_some() {
            self.default_name = other.default_name;
        }
        self.names.extend(other.names);
        self.romanized_names.extend(other.romanized_names);
    }
}

/// A party or coalition that polls report results for
#[derive(Debug)]
pub struct ElectoralList {
    id: String,
    attributes: RwLock<ElectoralListAttributes>,
}

impl ElectoralList {
    /// Create an electoral list without attributes
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: RwLock::new(ElectoralListAttributes::default()),
        }
    }

    /// The stable identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// A snapshot of the current attributes
    #[must_use]
    pub fn attributes(&self) -> ElectoralListAttributes {
        self.attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrite the attributes given in `update`, keeping the others
    pub fn update(&self, update: ElectoralListAttributes) {
        self.attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(update);
    }

    /// The abbreviation, if known
    #[must_use]
    pub fn abbreviation(&self) -> Option<String> {
        self.attributes().abbreviation
    }

    /// The name in a language, falling back to the default name
    #[must_use]
    pub fn name(&self, language_code: &str) -> Option<String> {
        let attributes = self.attributes();
        attributes
            .names
            .get(language_code)
            .cloned()
            .or(attributes.default_name)
    }
}

impl PartialEq for ElectoralList {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElectoralList {}

impl PartialOrd for ElectoralList {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ElectoralList {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for ElectoralList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Serialize for ElectoralList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

/// Several electoral lists reported as one result
///
/// The key is the sorted ids joined with `+`, so the same set of ids always
/// gives the same key whatever order they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElectoralListCombination {
    key: String,
    ids: BTreeSet<String>,
}

impl ElectoralListCombination {
    /// Create the combination of a set of ids
    #[must_use]
    pub fn new(ids: BTreeSet<String>) -> Self {
        Self {
            key: Self::key_of(&ids),
            ids,
        }
    }

    /// The canonical key of a set of ids
    #[must_use]
    pub fn key_of(ids: &BTreeSet<String>) -> String {
        ids.iter().map(String::as_str).collect::<Vec<_>>().join("+")
    }

    /// The canonical key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The ids of the electoral lists in the combination
    #[must_use]
    pub const fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }
}

//! Entity registries
//!
//! A registry maps an id to the one shared instance of an entity. Lookups
//! create the entity on first use, under a single write lock, so two threads
//! asking for the same id always get the same instance.
//!
//! Registries are owned by the caller and passed into the parser. A fresh
//! [`Registries`] (or [`Registries::clear`]) gives an isolated parse.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use crate::core::models::{Candidate, ElectoralList, ElectoralListCombination};

/// Get-or-create store for one kind of entity
#[derive(Debug)]
pub struct Registry<T> {
    entries: RwLock<HashMap<String, Arc<T>>>,
    create: fn(&str) -> T,
}

impl<T> Registry<T> {
    /// Create an empty registry building new entities with `create`
    #[must_use]
    pub fn new(create: fn(&str) -> T) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            create,
        }
    }

    /// The entity for an id, created if it doesn't exist yet
    pub fn get(&self, id: &str) -> Arc<T> {
        if let Some(existing) = self.find(id) {
            return existing;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            entries
                .entry(id.to_string())
                .or_insert_with(|| Arc::new((self.create)(id))),
        )
    }

    /// The entities for a set of ids, each created if needed
    pub fn get_all<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Vec<Arc<T>> {
        ids.into_iter().map(|id| self.get(id)).collect()
    }

    /// The entity for an id, without creating it
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Arc<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Whether an entity exists for an id
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Number of entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the registry holds no entities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted ids of all entities
    #[must_use]
    pub fn ids(&self) -> BTreeSet<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Forget all entities
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// The registries a parse resolves entities against
#[derive(Debug)]
pub struct Registries {
    /// Electoral lists by id
    pub electoral_lists: Registry<ElectoralList>,
    /// Candidates by id
    pub candidates: Registry<Candidate>,
    /// Combinations of electoral lists by canonical key
    pub combinations: Registry<ElectoralListCombination>,
}

impl Default for Registries {
    fn default() -> Self {
        Self::new()
    }
}

impl Registries {
    /// Create empty registries
    #[must_use]
    pub fn new() -> Self {
        Self {
            electoral_lists: Registry::new(|id| ElectoralList::new(id)),
            candidates: Registry::new(|id| Candidate::new(id)),
            combinations: Registry::new(|key| {
                ElectoralListCombination::new(key.split('+').map(ToString::to_string).collect())
            }),
        }
    }

    /// The electoral list for an id
    pub fn electoral_list(&self, id: &str) -> Arc<ElectoralList> {
        self.electoral_lists.get(id)
    }

    /// The electoral lists for a set of ids
    pub fn electoral_list_set<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> BTreeSet<Arc<ElectoralList>> {
        self.electoral_lists.get_all(ids).into_iter().collect()
    }

    /// The candidate for an id
    pub fn candidate(&self, id: &str) -> Arc<Candidate> {
        self.candidates.get(id)
    }

    /// The combination of a set of electoral list ids, whatever their order
    pub fn combination<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Arc<ElectoralListCombination> {
        let ids: BTreeSet<String> = ids.into_iter().map(ToString::to_string).collect();
        self.combinations.get(&ElectoralListCombination::key_of(&ids))
    }

    /// The electoral list ids of a combination key
    #[must_use]
    pub fn combination_ids(&self, key: &str) -> Option<BTreeSet<String>> {
        self.combinations
            .find(key)
            .map(|combination| combination.ids().clone())
    }

    /// Forget every entity in every registry
    pub fn clear(&self) {
        self.electoral_lists.clear();
        self.candidates.clear();
        self.combinations.clear();
    }
}

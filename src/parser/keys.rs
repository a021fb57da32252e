//! Result key resolution
//!
//! Result pairs name what they report on by key (`A`, `A+B`). A key is either
//! declared on an electoral list or candidate line of the same file, or, when
//! nothing is declared, taken as an electoral list id directly.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::KeyResolution;
use crate::core::models::{Candidate, ElectoralList, ElectoralListSet, Warning, WarningKind};
use crate::core::registry::Registries;

/// What a result key set stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultTarget {
    /// One or more electoral lists reported together
    ElectoralLists(ElectoralListSet),
    /// A single candidate
    Candidate(Arc<Candidate>),
}

/// Maps result keys of one file to electoral lists and candidates
#[derive(Debug)]
pub struct KeyResolver<'a> {
    registries: &'a Registries,
    electoral_lists: HashMap<String, Arc<ElectoralList>>,
    candidates: HashMap<String, Arc<Candidate>>,
    mode: KeyResolution,
}

impl<'a> KeyResolver<'a> {
    /// Create a resolver without declared keys
    #[must_use]
    pub fn new(registries: &'a Registries, mode: KeyResolution) -> Self {
        Self {
            registries,
            electoral_lists: HashMap::new(),
            candidates: HashMap::new(),
            mode,
        }
    }

    /// Declare the key of an electoral list
    pub fn declare_electoral_list(&mut self, key: impl Into<String>, list: Arc<ElectoralList>) {
        self.electoral_lists.insert(key.into(), list);
    }

    /// Declare the key of a candidate
    pub fn declare_candidate(&mut self, key: impl Into<String>, candidate: Arc<Candidate>) {
        self.candidates.insert(key.into(), candidate);
    }

    /// Whether any key was declared
    #[must_use]
    pub fn has_declarations(&self) -> bool {
        !self.electoral_lists.is_empty() || !self.candidates.is_empty()
    }

    /// The resolution mode in effect, with `Auto` settled
    #[must_use]
    pub fn effective_mode(&self) -> KeyResolution {
        match self.mode {
            KeyResolution::Auto if self.has_declarations() => KeyResolution::Declared,
            KeyResolution::Auto => KeyResolution::Registry,
            mode => mode,
        }
    }

    /// Resolve the keys of one result pair
    ///
    /// Every unknown key yields a warning, and the pair resolves to nothing.
    pub fn resolve(&self, keys: &[String], line_number: usize) -> Result<ResultTarget, Vec<Warning>> {
        if self.effective_mode() == KeyResolution::Registry {
            let ids = keys.iter().map(String::as_str);
            if keys.len() > 1 {
                self.registries.combination(ids.clone());
            }
            return Ok(ResultTarget::ElectoralLists(
                self.registries.electoral_list_set(ids),
            ));
        }
        if let [key] = keys {
            if let Some(candidate) = self.candidates.get(key) {
                return Ok(ResultTarget::Candidate(Arc::clone(candidate)));
            }
        }
        let mut lists = ElectoralListSet::new();
        let mut warnings = Vec::new();
        for key in keys {
            match self.electoral_lists.get(key) {
                Some(list) => {
                    lists.insert(Arc::clone(list));
                },
                None => warnings.push(Warning::new(
                    line_number,
                    WarningKind::UnknownElectoralListKey { key: key.clone() },
                )),
            }
        }
        if !warnings.is_empty() {
            return Err(warnings);
        }
        if lists.len() > 1 {
            self.registries.combination(lists.iter().map(|list| list.id()));
        }
        Ok(ResultTarget::ElectoralLists(lists))
    }
}

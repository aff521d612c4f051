//! Construct-once cache of the reference dictionary and per-mode matchers.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::dictionary::AtomTypeDictionary;
use crate::error::DictionaryError;
use crate::matcher::{AtomTypeMatcher, MatchMode};

/// Hands out shared matchers, loading the dictionary on first use.
///
/// A registry is an ordinary value: build one at startup and pass it by
/// reference to whatever needs typing. Every matcher it returns for a given
/// mode is the same instance.
pub struct MatcherRegistry {
    dictionary: OnceCell<Arc<AtomTypeDictionary>>,
    matchers: RwLock<HashMap<MatchMode, Arc<AtomTypeMatcher>>>,
}

impl MatcherRegistry {
    /// Registry over the dictionary shipped with the crate.
    pub fn new() -> Self {
        MatcherRegistry {
            dictionary: OnceCell::new(),
            matchers: RwLock::new(HashMap::new()),
        }
    }

    /// Registry over an already built dictionary.
    pub fn with_dictionary(dictionary: AtomTypeDictionary) -> Self {
        MatcherRegistry {
            dictionary: OnceCell::from(Arc::new(dictionary)),
            matchers: RwLock::new(HashMap::new()),
        }
    }

    /// The shared dictionary, loaded on the first call.
    pub fn dictionary(&self) -> Result<Arc<AtomTypeDictionary>, DictionaryError> {
        self.dictionary
            .get_or_try_init(|| AtomTypeDictionary::embedded().map(Arc::new))
            .cloned()
    }

    /// The shared matcher for `mode`.
    pub fn matcher(&self, mode: MatchMode) -> Result<Arc<AtomTypeMatcher>, DictionaryError> {
        if let Some(m) = self.matchers.read().get(&mode) {
            return Ok(Arc::clone(m));
        }
        let dictionary = self.dictionary()?;
        let mut matchers = self.matchers.write();
        let m = matchers.entry(mode).or_insert_with(|| {
            tracing::debug!(?mode, "building atom type matcher");
            Arc::new(AtomTypeMatcher::new(dictionary, mode))
        });
        Ok(Arc::clone(m))
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatcherRegistry")
            .field("dictionary_loaded", &self.dictionary.get().is_some())
            .field("matchers", &self.matchers.read().len())
            .finish()
    }
}

//! I18nStore — synchronous, path-routed message lookup.
//!
//! Handlers are registered per path pattern (Trie matching with `+`/`#`)
//! and translate a path for the current locale:
//!
//! ```ignore
//! let i18n = I18nStore::new("fr");
//! i18n.handle("error/#", Arc::new(ErrorStrings::new()));
//! i18n.get("error/courses/fetch"); // "Une erreur est survenue lors du chargement des cours."
//! ```

use std::sync::{Arc, RwLock};

use crate::trie::Trie;

/// A translation handler, registered per path pattern.
pub trait I18nHandler: Send + Sync + 'static {
    fn translate(&self, path: &str, locale: &str) -> Option<String>;
}

impl<F> I18nHandler for F
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync + 'static,
{
    fn translate(&self, path: &str, locale: &str) -> Option<String> {
        (self)(path, locale)
    }
}

/// Path-routed translation store with a switchable locale.
pub struct I18nStore {
    trie: Trie<Arc<dyn I18nHandler>>,
    locale: RwLock<String>,
}

impl I18nStore {
    pub fn new(locale: &str) -> Self {
        Self {
            trie: Trie::new(),
            locale: RwLock::new(locale.to_string()),
        }
    }

    /// Register a handler for `pattern`. Earlier registrations win when
    /// several patterns match.
    pub fn handle(&self, pattern: &str, handler: Arc<dyn I18nHandler>) {
        self.trie.insert(pattern, handler);
    }

    /// Translate `path` for the current locale, or `None` if no handler
    /// produces a text.
    pub fn lookup(&self, path: &str) -> Option<String> {
        let locale = self.locale();
        self.trie
            .match_topic(path)
            .iter()
            .find_map(|handler| handler.translate(path, &locale))
    }

    /// Translate `path`, echoing the path itself when nothing matches.
    pub fn get(&self, path: &str) -> String {
        self.lookup(path).unwrap_or_else(|| path.to_string())
    }

    pub fn set_locale(&self, locale: &str) {
        *self.locale.write().unwrap_or_else(|e| e.into_inner()) = locale.to_string();
    }

    pub fn locale(&self) -> String {
        self.locale.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

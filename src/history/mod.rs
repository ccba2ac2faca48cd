//! The lookup history data model.
//!
//! An [`Entry`] is one input request plus one [`Response`] per target
//! language. Entries are built by the pipeline, then shared read-only
//! between the output channel and the [`History`] kept for the final file
//! write.

use std::sync::Arc;

use serde::Serialize;

/// Translations for one target language.
///
/// `translations` is never empty: when neither capability produced a usable
/// result it holds the single sentinel `"no translation"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Target language code.
    pub lang: String,
    /// Translation texts in the order the resolver returned them.
    pub translations: Vec<String>,
}

/// One resolved request with its per-language responses.
///
/// Responses are in the order the target languages were configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The trimmed input line this entry was created from.
    pub request: String,
    /// One response per configured target language.
    pub responses: Vec<Response>,
}

/// All entries produced during one run, in publication order.
///
/// Append-only while the pipeline runs; optionally sorted once at shutdown
/// before the bulk file write.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Arc<Entry>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Called only by the pipeline.
    pub fn push(&mut self, entry: Arc<Entry>) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    /// Sorts entries by request text, lexicographically and case-sensitively.
    ///
    /// `sort_by` is stable, so entries with equal requests keep their
    /// original publication order.
    pub fn sort_by_request(&mut self) {
        self.entries.sort_by(|a, b| a.request.cmp(&b.request));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(request: &str, lang: &str, translations: &[&str]) -> Arc<Entry> {
        Arc::new(Entry {
            request: request.to_string(),
            responses: vec![Response {
                lang: lang.to_string(),
                translations: translations.iter().map(ToString::to_string).collect(),
            }],
        })
    }

    #[test]
    fn test_push_preserves_order() {
        let mut history = History::new();
        history.push(entry("zebra", "de", &["Zebra"]));
        history.push(entry("ant", "de", &["Ameise"]));

        let requests: Vec<_> = history.entries().iter().map(|e| e.request.as_str()).collect();
        assert_eq!(requests, ["zebra", "ant"]);
    }

    #[test]
    fn test_sort_by_request_is_lexicographic_and_case_sensitive() {
        let mut history = History::new();
        history.push(entry("dog", "de", &["Hund"]));
        history.push(entry("Cat", "de", &["Katze"]));
        history.push(entry("ant", "de", &["Ameise"]));
        history.sort_by_request();

        let requests: Vec<_> = history.entries().iter().map(|e| e.request.as_str()).collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(requests, ["Cat", "ant", "dog"]);
    }

    #[test]
    fn test_sort_by_request_is_stable_on_ties() {
        let first = entry("dog", "de", &["Hund"]);
        let second = entry("dog", "fr", &["chien"]);
        let mut history = History::new();
        history.push(Arc::clone(&first));
        history.push(Arc::clone(&second));
        history.sort_by_request();

        assert!(Arc::ptr_eq(&history.entries()[0], &first));
        assert!(Arc::ptr_eq(&history.entries()[1], &second));
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }
}

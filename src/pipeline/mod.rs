//! The streaming producer: reads requests, resolves them, publishes entries.
//!
//! One pipeline run is a single scan of the input source. Entries are
//! published on a bounded channel in input order; the channel's capacity is
//! deliberately small so the producer never runs ahead of the consumer.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{Dictionary, Translator};
use crate::history::{Entry, History, Response};
use crate::input::LineReader;
use crate::lookup::Resolver;
use crate::shutdown::ShutdownSignal;

/// Output channel capacity. One slot keeps back-pressure tight, matching a
/// hand-off between producer and consumer.
pub const CHANNEL_CAPACITY: usize = 1;

/// The producer half of the lookup cycle.
pub struct Pipeline<D, T> {
    resolver: Resolver<D, T>,
    to_langs: Vec<String>,
}

impl<D: Dictionary, T: Translator> Pipeline<D, T> {
    pub fn new(resolver: Resolver<D, T>, to_langs: Vec<String>) -> Self {
        Self { resolver, to_langs }
    }

    /// Runs the lookup cycle until the input ends, cancellation is
    /// requested, or the consumer goes away.
    ///
    /// Cancellation is checked once per input line, never mid-lookup: an
    /// entry whose lookups have started always completes and is published.
    /// The returned [`History`] holds exactly the published entries, in
    /// publication order. Dropping the sender on return closes the channel.
    pub async fn run(
        self,
        mut lines: LineReader,
        tx: mpsc::Sender<Arc<Entry>>,
        mut signal: ShutdownSignal,
    ) -> History {
        let mut history = History::new();

        loop {
            if signal.is_triggered() {
                break;
            }
            // Cancellation also wakes a read blocked on interactive stdin.
            // A read failure ends the stream the same way EOF does.
            let line = tokio::select! {
                () = signal.triggered() => break,
                read = lines.next_line() => match read {
                    Ok(Some(line)) => line,
                    _ => break,
                },
            };
            let request = line.trim();
            if request.is_empty() {
                continue;
            }

            let mut responses = Vec::with_capacity(self.to_langs.len());
            for lang in &self.to_langs {
                let translations = self.resolver.resolve(request, lang).await;
                responses.push(Response {
                    lang: lang.clone(),
                    translations,
                });
            }

            let entry = Arc::new(Entry {
                request: request.to_string(),
                responses,
            });
            // Publish before historizing: History holds exactly the entries
            // the consumer was offered.
            if tx.send(Arc::clone(&entry)).await.is_err() {
                break;
            }
            history.push(entry);
        }

        history
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use anyhow::Result;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::api::{Definition, MockDictionary, MockTranslator};
    use crate::lookup::NO_TRANSLATION;
    use crate::shutdown::{self, ShutdownController};

    fn source(contents: &str) -> (NamedTempFile, String) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        (file, path)
    }

    fn mock_pipeline(to_langs: &[&str]) -> Pipeline<MockDictionary, MockTranslator> {
        Pipeline::new(
            Resolver::new(MockDictionary, MockTranslator, "en".to_string()),
            to_langs.iter().map(ToString::to_string).collect(),
        )
    }

    async fn run_to_end<D, T>(
        pipeline: Pipeline<D, T>,
        lines: LineReader,
        signal: ShutdownSignal,
    ) -> (Vec<Arc<Entry>>, History)
    where
        D: Dictionary + Send + Sync + 'static,
        T: Translator + Send + Sync + 'static,
    {
        let (tx, mut rx) = mpsc::channel(CHANNEL_CAPACITY);
        let producer = tokio::spawn(pipeline.run(lines, tx, signal));

        let mut published = Vec::new();
        while let Some(entry) = rx.recv().await {
            published.push(entry);
        }
        let history = producer.await.unwrap();
        (published, history)
    }

    #[tokio::test]
    async fn test_lookup_cycle_end_to_end() {
        let (_guard, path) = source("\tdog\n\tblack dog\n\t\n\tcat\n");
        let lines = LineReader::open(&path).await.unwrap();
        let (_controller, signal) = shutdown::channel();

        let (published, history) = run_to_end(mock_pipeline(&["de"]), lines, signal).await;

        assert_eq!(published.len(), 3);
        assert_eq!(history.len(), 3);

        let entries = history.entries();
        assert_eq!(entries[0].request, "dog");
        assert_eq!(
            entries[0].responses[0].translations,
            ["Hund", "Rüde", "geiler Bock"]
        );
        assert_eq!(entries[1].request, "black dog");
        assert_eq!(entries[1].responses[0].translations, ["schwarzer Hund"]);
        assert_eq!(entries[2].request, "cat");
        assert_eq!(entries[2].responses[0].translations, [NO_TRANSLATION]);
        for entry in entries {
            assert_eq!(entry.responses[0].lang, "de");
        }
    }

    #[tokio::test]
    async fn test_responses_follow_target_language_order() {
        let (_guard, path) = source("dog\n");
        let lines = LineReader::open(&path).await.unwrap();
        let (_controller, signal) = shutdown::channel();

        let (published, _history) = run_to_end(mock_pipeline(&["de", "fr"]), lines, signal).await;

        let langs: Vec<_> = published[0]
            .responses
            .iter()
            .map(|response| response.lang.as_str())
            .collect();
        assert_eq!(langs, ["de", "fr"]);
        // The dictionary only knows en-de; the fr response is the sentinel.
        assert_eq!(published[0].responses[1].translations, [NO_TRANSLATION]);
    }

    #[tokio::test]
    async fn test_blank_lines_produce_nothing() {
        let (_guard, path) = source("\n   \n\t\n");
        let lines = LineReader::open(&path).await.unwrap();
        let (_controller, signal) = shutdown::channel();

        let (published, history) = run_to_end(mock_pipeline(&["de"]), lines, signal).await;

        assert!(published.is_empty());
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_cancellation_before_any_input() {
        let (_guard, path) = source("dog\ncat\n");
        let lines = LineReader::open(&path).await.unwrap();
        let (controller, signal) = shutdown::channel();
        controller.trigger();

        let (published, history) = run_to_end(mock_pipeline(&["de"]), lines, signal).await;

        assert!(published.is_empty());
        assert!(history.is_empty());
    }

    /// Dictionary that requests cancellation when it sees a marker word.
    /// Lets the test pin down exactly how many entries were in flight.
    struct CancellingDictionary {
        controller: std::sync::Arc<ShutdownController>,
        cancel_on: &'static str,
    }

    impl Dictionary for CancellingDictionary {
        async fn lookup(&self, _lang_pair: &str, text: &str) -> Result<Vec<Definition>> {
            if text == self.cancel_on {
                self.controller.trigger();
            }
            anyhow::bail!("no entry")
        }
    }

    #[tokio::test]
    async fn test_cancellation_mid_run_keeps_published_prefix() {
        let (_guard, path) = source("ant\nbee\ncat\n");
        let lines = LineReader::open(&path).await.unwrap();
        let (controller, signal) = shutdown::channel();

        let dictionary = CancellingDictionary {
            controller: std::sync::Arc::new(controller),
            cancel_on: "bee",
        };
        let pipeline = Pipeline::new(
            Resolver::new(dictionary, MockTranslator, "en".to_string()),
            vec!["de".to_string()],
        );

        let (published, history) = run_to_end(pipeline, lines, signal).await;

        // The in-flight entry ("bee") completes; "cat" is never read.
        let requests: Vec<_> = published.iter().map(|e| e.request.as_str()).collect();
        assert_eq!(requests, ["ant", "bee"]);
        assert_eq!(history.len(), 2);
    }
}

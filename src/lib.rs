//! # lu - Streaming Dictionary Lookup CLI
//!
//! `lu` is a command-line tool that looks words and phrases up in a bilingual
//! dictionary and falls back to machine translation when the dictionary has
//! no entry. Requests are streamed line by line from arguments, a file, or
//! stdin; results are printed to the terminal or collected into a plain-text
//! or HTML file.
//!
//! ## Features
//!
//! - **Two-tier lookup**: Exact dictionary definitions first, machine
//!   translation as a fallback
//! - **Multiple target languages**: Repeat `--to` to translate into several
//!   languages at once
//! - **Streaming pipeline**: Requests are resolved as they are read, with a
//!   cancellable producer/consumer cycle behind the scenes
//! - **File output**: Append results to a text or HTML file, optionally
//!   sorted by request
//!
//! ## Quick Start
//!
//! ```bash
//! # Look up a phrase given as arguments
//! lu -f en -t de black dog
//!
//! # Stream requests from a file into an HTML report
//! lu -f en -t de -t fr -i words.txt -o report.html
//!
//! # Interactive: type requests, Ctrl+C to finish
//! lu -f en -t de
//!
//! # List the languages the translation service supports
//! lu languages
//! ```
//!
//! ## Configuration
//!
//! API keys and defaults come from the environment:
//!
//! ```bash
//! export LU_YANDEX_DICTIONARY_API_KEY="..."
//! export LU_YANDEX_TRANSLATE_API_KEY="..."
//! export LU_DEFAULT_FROM_LANG="en"
//! export LU_DEFAULT_TO_LANGS="de:fr"
//! ```

/// Dictionary and translator capabilities: traits, remote clients, mocks.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Run configuration resolved from CLI options and the environment.
pub mod config;

/// Entries, responses and the run-scoped lookup history.
pub mod history;

/// Line-oriented input from arguments, files and stdin.
pub mod input;

/// The lookup resolver: dictionary first, translation fallback.
pub mod lookup;

/// The streaming producer pipeline.
pub mod pipeline;

/// Template-based rendering of entries to text and HTML.
pub mod render;

/// Cooperative shutdown on interrupt signals.
pub mod shutdown;

/// The consumer side: per-entry display and progress reporting.
pub mod sink;

/// Terminal UI components (spinner, colors).
pub mod ui;

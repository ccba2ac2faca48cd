//! Subcommand implementations.

/// Language listing command handler.
pub mod languages;

/// The default lookup command handler.
pub mod lookup;

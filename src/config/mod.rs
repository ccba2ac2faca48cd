//! Run configuration: CLI options merged over environment defaults.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. `LU_DEFAULT_FROM_LANG` / `LU_DEFAULT_TO_LANGS` environment variables
//!
//! The resolved [`RunConfig`] is immutable once the pipeline starts.

use anyhow::{Result, bail};

/// Environment variable holding the default source language.
pub const FROM_LANG_VAR: &str = "LU_DEFAULT_FROM_LANG";

/// Environment variable holding the default target languages,
/// colon-separated (e.g. `de:fr`).
pub const TO_LANGS_VAR: &str = "LU_DEFAULT_TO_LANGS";

/// CLI overrides; these take precedence over environment defaults.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language code override.
    pub from: Option<String>,
    /// Target language codes, in the order given on the command line.
    pub to: Vec<String>,
    /// Source file path.
    pub input: Option<String>,
    /// Destination file path.
    pub output: Option<String>,
    /// Sort history by request before the bulk write.
    pub sort: bool,
}

/// Defaults read from the environment once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvDefaults {
    pub from_lang: Option<String>,
    /// Colon-separated target language list.
    pub to_langs: Option<String>,
}

impl EnvDefaults {
    pub fn from_env() -> Self {
        Self {
            from_lang: non_empty_var(FROM_LANG_VAR),
            to_langs: non_empty_var(TO_LANGS_VAR),
        }
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Language to translate from.
    pub from_lang: String,
    /// Languages to translate into; never empty, order is significant.
    pub to_langs: Vec<String>,
    /// Source file, when requests come from a file.
    pub src_path: Option<String>,
    /// Destination file, when results accumulate into a file.
    pub dst_path: Option<String>,
    /// Whether to sort history by request text at shutdown.
    pub sort: bool,
}

/// Resolves configuration by merging CLI options with environment defaults.
///
/// # Errors
///
/// Returns an error if the translation direction is incomplete or if the
/// source and destination name the same file.
pub fn resolve_config(options: &ResolveOptions, env: &EnvDefaults) -> Result<RunConfig> {
    let from_lang = options
        .from
        .clone()
        .or_else(|| env.from_lang.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'from' (source language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: lu --from <lang>\n  \
                 - Environment variable: {FROM_LANG_VAR}"
            )
        })?;

    let to_langs = if options.to.is_empty() {
        env.to_langs.as_deref().map(split_langs).unwrap_or_default()
    } else {
        options.to.clone()
    };
    if to_langs.is_empty() {
        bail!(
            "Missing required configuration: 'to' (target language)\n\n\
             Please provide it via:\n  \
             - CLI option: lu --to <lang> (repeatable)\n  \
             - Environment variable: {TO_LANGS_VAR} (colon-separated)"
        );
    }

    if let (Some(src), Some(dst)) = (&options.input, &options.output)
        && src == dst
    {
        bail!("Source and destination must be different files");
    }

    Ok(RunConfig {
        from_lang,
        to_langs,
        src_path: options.input.clone(),
        dst_path: options.output.clone(),
        sort: options.sort,
    })
}

fn split_langs(raw: &str) -> Vec<String> {
    raw.split(':')
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_split_langs_colon_separated() {
        assert_eq!(split_langs("sp:fr"), ["sp", "fr"]);
        assert_eq!(split_langs("de"), ["de"]);
        assert!(split_langs("").is_empty());
        assert_eq!(split_langs("de::fr"), ["de", "fr"]);
    }

    #[test]
    #[serial]
    fn test_env_defaults_from_env() {
        unsafe {
            std::env::set_var(FROM_LANG_VAR, "en");
            std::env::set_var(TO_LANGS_VAR, "sp:fr");
        }

        let env = EnvDefaults::from_env();
        assert_eq!(env.from_lang.as_deref(), Some("en"));
        assert_eq!(env.to_langs.as_deref(), Some("sp:fr"));

        unsafe {
            std::env::remove_var(FROM_LANG_VAR);
            std::env::remove_var(TO_LANGS_VAR);
        }
    }

    #[test]
    #[serial]
    fn test_env_defaults_treat_empty_as_unset() {
        unsafe {
            std::env::set_var(FROM_LANG_VAR, "");
            std::env::remove_var(TO_LANGS_VAR);
        }

        let env = EnvDefaults::from_env();
        assert!(env.from_lang.is_none());
        assert!(env.to_langs.is_none());

        unsafe { std::env::remove_var(FROM_LANG_VAR) };
    }
}

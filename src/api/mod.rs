//! Lookup capabilities: the dictionary and translator contracts plus their
//! remote and mock implementations.
//!
//! The pipeline and resolver are written against the [`Dictionary`] and
//! [`Translator`] traits so the remote Yandex clients and the offline mocks
//! are interchangeable. Which pair is used is decided once at startup by
//! [`clients_from_env`].

use std::collections::HashMap;
use std::future::Future;

use anyhow::{Context, Result};
use serde::Deserialize;

mod dictionary;
mod mock;
mod translate;

pub use dictionary::YandexDictionary;
pub use mock::{MockDictionary, MockTranslator};
pub use translate::YandexTranslator;

/// Environment variable holding the dictionary service API key.
pub const DICTIONARY_KEY_VAR: &str = "LU_YANDEX_DICTIONARY_API_KEY";

/// Environment variable holding the translation service API key.
pub const TRANSLATE_KEY_VAR: &str = "LU_YANDEX_TRANSLATE_API_KEY";

/// When set to `1`, both capabilities are served by the built-in mocks.
pub const MOCK_MODE_VAR: &str = "LU_TEST";

/// One dictionary definition: a headword and its translation texts in
/// service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub text: String,
    pub translations: Vec<String>,
}

/// Exact-match bilingual definition lookup.
pub trait Dictionary {
    /// Looks `text` up for a `"from-to"` language pair.
    ///
    /// An error means the service was unreachable or has no entry; the
    /// resolver treats both the same way.
    fn lookup(
        &self,
        lang_pair: &str,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Definition>>> + Send;
}

/// Best-effort machine translation, plus the supported-languages listing.
pub trait Translator {
    /// Translates `text` into `lang`.
    fn translate(&self, lang: &str, text: &str) -> impl Future<Output = Result<String>> + Send;

    /// Returns the supported languages as a code-to-name map, with names in
    /// the `ui` language.
    fn languages(&self, ui: &str) -> impl Future<Output = Result<HashMap<String, String>>> + Send;
}

/// The dictionary capability selected at startup.
pub enum DictionaryClient {
    Yandex(YandexDictionary),
    Mock(MockDictionary),
}

impl Dictionary for DictionaryClient {
    async fn lookup(&self, lang_pair: &str, text: &str) -> Result<Vec<Definition>> {
        match self {
            Self::Yandex(client) => client.lookup(lang_pair, text).await,
            Self::Mock(client) => client.lookup(lang_pair, text).await,
        }
    }
}

/// The translator capability selected at startup.
pub enum TranslatorClient {
    Yandex(YandexTranslator),
    Mock(MockTranslator),
}

impl Translator for TranslatorClient {
    async fn translate(&self, lang: &str, text: &str) -> Result<String> {
        match self {
            Self::Yandex(client) => client.translate(lang, text).await,
            Self::Mock(client) => client.translate(lang, text).await,
        }
    }

    async fn languages(&self, ui: &str) -> Result<HashMap<String, String>> {
        match self {
            Self::Yandex(client) => client.languages(ui).await,
            Self::Mock(client) => client.languages(ui).await,
        }
    }
}

/// Builds the capability pair from the environment.
///
/// With `LU_TEST=1` the offline mocks are returned and no API keys are
/// needed. Otherwise both key variables are required; a missing one is a
/// fatal setup error.
pub fn clients_from_env() -> Result<(DictionaryClient, TranslatorClient)> {
    if std::env::var(MOCK_MODE_VAR).as_deref() == Ok("1") {
        return Ok((
            DictionaryClient::Mock(MockDictionary),
            TranslatorClient::Mock(MockTranslator),
        ));
    }

    let dictionary_key = required_env(DICTIONARY_KEY_VAR)?;
    let translate_key = required_env(TRANSLATE_KEY_VAR)?;

    Ok((
        DictionaryClient::Yandex(YandexDictionary::new(dictionary_key)),
        TranslatorClient::Yandex(YandexTranslator::new(translate_key)),
    ))
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .with_context(|| {
            format!(
                "The required environment variable {name} is not set\n\n\
                 Get an API key at https://yandex.com/dev/ and export it:\n  \
                 export {name}=\"your-api-key\""
            )
        })
}

/// Error payload both Yandex services return alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ServiceError {
    message: String,
}

/// Extracts the service's own error message from a response body, falling
/// back to the raw body when it is not the usual JSON payload.
pub(crate) fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ServiceError>(body)
        .map_or_else(|_| body.to_string(), |parsed| parsed.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_message_json_payload() {
        let body = r#"{"code":401,"message":"API key is invalid"}"#;
        assert_eq!(service_error_message(body), "API key is invalid");
    }

    #[test]
    fn test_service_error_message_plain_body() {
        assert_eq!(service_error_message("gateway timeout"), "gateway timeout");
    }
}

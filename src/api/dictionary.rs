//! Remote client for the Yandex Dictionary JSON API.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use super::{Definition, Dictionary, service_error_message};

const LOOKUP_URL: &str = "https://dictionary.yandex.net/api/v1/dicservice.json/lookup";

/// Wire format of a lookup response: definitions with nested translations.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    def: Vec<WireDefinition>,
}

#[derive(Debug, Deserialize)]
struct WireDefinition {
    text: String,
    #[serde(default)]
    tr: Vec<WireTranslation>,
}

#[derive(Debug, Deserialize)]
struct WireTranslation {
    text: String,
}

/// Client for the Yandex Dictionary service.
pub struct YandexDictionary {
    client: Client,
    api_key: String,
}

impl YandexDictionary {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

impl Dictionary for YandexDictionary {
    async fn lookup(&self, lang_pair: &str, text: &str) -> Result<Vec<Definition>> {
        let response = self
            .client
            .get(LOOKUP_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("lang", lang_pair),
                ("text", text),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to reach dictionary service at {LOOKUP_URL}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Dictionary lookup failed with status {status}: {}",
                service_error_message(&body)
            );
        }

        let parsed: LookupResponse = response
            .json()
            .await
            .context("Failed to parse dictionary response")?;

        Ok(parsed
            .def
            .into_iter()
            .map(|definition| Definition {
                text: definition.text,
                translations: definition.tr.into_iter().map(|tr| tr.text).collect(),
            })
            .collect())
    }
}

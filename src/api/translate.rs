//! Remote client for the Yandex Translate JSON API.

use std::collections::HashMap;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use super::{Translator, service_error_message};

const TRANSLATE_URL: &str = "https://translate.yandex.net/api/v1.5/tr.json/translate";
const GET_LANGS_URL: &str = "https://translate.yandex.net/api/v1.5/tr.json/getLangs";

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    text: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    #[serde(default)]
    langs: HashMap<String, String>,
}

/// Client for the Yandex Translate service.
pub struct YandexTranslator {
    client: Client,
    api_key: String,
}

impl YandexTranslator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    async fn check(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!(
            "{what} failed with status {status}: {}",
            service_error_message(&body)
        );
    }
}

impl Translator for YandexTranslator {
    async fn translate(&self, lang: &str, text: &str) -> Result<String> {
        let response = self
            .client
            .get(TRANSLATE_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("lang", lang),
                ("text", text),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to reach translation service at {TRANSLATE_URL}"))?;
        let response = Self::check(response, "Translation").await?;

        let parsed: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        parsed
            .text
            .into_iter()
            .next()
            .context("Translation service returned an empty result")
    }

    async fn languages(&self, ui: &str) -> Result<HashMap<String, String>> {
        let response = self
            .client
            .get(GET_LANGS_URL)
            .query(&[("key", self.api_key.as_str()), ("ui", ui)])
            .send()
            .await
            .with_context(|| format!("Failed to reach translation service at {GET_LANGS_URL}"))?;
        let response = Self::check(response, "Language listing").await?;

        let parsed: LanguagesResponse = response
            .json()
            .await
            .context("Failed to parse language listing response")?;

        if parsed.langs.is_empty() {
            anyhow::bail!("Translation service returned no languages for UI language '{ui}'");
        }
        Ok(parsed.langs)
    }
}

//! The lookup resolver: dictionary first, machine translation as fallback.

use anyhow::Result;

use crate::api::{Dictionary, Translator};

/// The canonical placeholder when neither capability yields a usable result.
pub const NO_TRANSLATION: &str = "no translation";

/// Resolves one request into translations for one target language.
///
/// Remote failures never escape: every error from either capability is
/// absorbed into the fallback chain, and the worst case is the single
/// [`NO_TRANSLATION`] sentinel.
pub struct Resolver<D, T> {
    dictionary: D,
    translator: T,
    from_lang: String,
}

impl<D: Dictionary, T: Translator> Resolver<D, T> {
    pub fn new(dictionary: D, translator: T, from_lang: String) -> Self {
        Self {
            dictionary,
            translator,
            from_lang,
        }
    }

    /// Looks `request` up for `target_lang`.
    ///
    /// Dictionary definitions win: all their translation texts are returned
    /// flattened in service order, duplicates included. A failed or empty
    /// dictionary result falls back to machine translation; a translation
    /// that fails or merely echoes the request yields the sentinel.
    pub async fn resolve(&self, request: &str, target_lang: &str) -> Vec<String> {
        let lang_pair = format!("{}-{}", self.from_lang, target_lang);

        if let Ok(definitions) = self.dictionary.lookup(&lang_pair, request).await {
            let translations: Vec<String> = definitions
                .into_iter()
                .flat_map(|definition| definition.translations)
                .collect();
            if !translations.is_empty() {
                return translations;
            }
        }

        match self.translator.translate(target_lang, request).await {
            Ok(translated) if translated != request => vec![translated],
            _ => vec![NO_TRANSLATION.to_string()],
        }
    }
}

/// Formats the translation service's supported languages as sorted
/// `"code: name"` lines.
pub async fn supported_languages<T: Translator>(translator: &T, ui: &str) -> Result<Vec<String>> {
    let langs = translator.languages(ui).await?;
    let mut formatted: Vec<String> = langs
        .into_iter()
        .map(|(code, name)| format!("{code}: {name}"))
        .collect();
    formatted.sort_unstable();
    Ok(formatted)
}

//! Offline mock capabilities, used by the test suite and by `LU_TEST=1`.

use std::collections::HashMap;

use anyhow::Result;

use super::{Definition, Dictionary, Translator};

/// Dictionary mock: knows `dog` for `en-de`, fails everything else.
pub struct MockDictionary;

impl Dictionary for MockDictionary {
    async fn lookup(&self, lang_pair: &str, text: &str) -> Result<Vec<Definition>> {
        if text == "dog" && lang_pair == "en-de" {
            return Ok(vec![
                Definition {
                    text: "dog".to_string(),
                    translations: vec!["Hund".to_string(), "Rüde".to_string()],
                },
                Definition {
                    text: "dog".to_string(),
                    translations: vec!["geiler Bock".to_string()],
                },
            ]);
        }
        anyhow::bail!("no entry")
    }
}

/// Translator mock: knows `black dog` into `de` and the `en` UI language,
/// fails everything else.
pub struct MockTranslator;

impl Translator for MockTranslator {
    async fn translate(&self, lang: &str, text: &str) -> Result<String> {
        if text == "black dog" && lang == "de" {
            return Ok("schwarzer Hund".to_string());
        }
        anyhow::bail!("no translation")
    }

    async fn languages(&self, ui: &str) -> Result<HashMap<String, String>> {
        if ui == "en" {
            return Ok(HashMap::from([
                ("en".to_string(), "english".to_string()),
                ("de".to_string(), "german".to_string()),
                ("it".to_string(), "italian".to_string()),
            ]));
        }
        anyhow::bail!("wrong lang")
    }
}

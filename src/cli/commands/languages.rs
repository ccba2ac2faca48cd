//! Language listing command handler.

use anyhow::Result;

use crate::api;
use crate::lookup;
use crate::ui::{Spinner, Style};

/// Prints the translation service's supported languages, sorted by code.
pub async fn run_languages(ui: &str) -> Result<()> {
    let (_dictionary, translator) = api::clients_from_env()?;

    let spinner = Spinner::new("Fetching supported languages...");
    let result = lookup::supported_languages(&translator, ui).await;
    spinner.stop();
    let langs = result?;

    println!("{}", Style::header("Supported languages:"));
    for lang in langs {
        println!("  {lang}");
    }
    Ok(())
}

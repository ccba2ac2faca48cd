//! The default command: stream requests through the lookup pipeline.

use std::fs::{File, OpenOptions};
use std::io::Write as _;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::api;
use crate::config::{self, EnvDefaults, ResolveOptions, RunConfig};
use crate::history::History;
use crate::input::LineReader;
use crate::lookup::Resolver;
use crate::pipeline::{CHANNEL_CAPACITY, Pipeline};
use crate::render::{OutputFormat, Renderer};
use crate::shutdown;
use crate::sink::EntrySink;

pub struct LookupOptions {
    pub words: Vec<String>,
    pub from: Option<String>,
    pub to: Vec<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub sort: bool,
}

/// Runs one lookup session: producer task, interrupt listener, and the
/// consumer loop on this task, then the final history flush.
pub async fn run_lookup(options: LookupOptions) -> Result<()> {
    let config = config::resolve_config(
        &ResolveOptions {
            from: options.from.clone(),
            to: options.to.clone(),
            input: options.input.clone(),
            output: options.output.clone(),
            sort: options.sort,
        },
        &EnvDefaults::from_env(),
    )?;

    let (dictionary, translator) = api::clients_from_env()?;

    // Inline arguments beat the source file; the source file beats stdin.
    let lines = if options.words.is_empty() {
        match config.src_path.as_deref() {
            Some(path) => LineReader::open(path).await?,
            None => LineReader::stdin(),
        }
    } else {
        LineReader::from_args(&options.words)
    };
    let reading_from_file = options.words.is_empty() && config.src_path.is_some();

    let dst_file = match config.dst_path.as_deref() {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open destination file: {path}"))?,
        ),
        None => None,
    };

    let sink = EntrySink::new(reading_from_file, dst_file.is_some())?;

    let (controller, signal) = shutdown::channel();
    tokio::spawn(shutdown::listen_for_interrupt(controller));

    let pipeline = Pipeline::new(
        Resolver::new(dictionary, translator, config.from_lang.clone()),
        config.to_langs.clone(),
    );
    let (tx, mut rx) = mpsc::channel(CHANNEL_CAPACITY);
    let producer = tokio::spawn(pipeline.run(lines, tx, signal));

    let mut stdout = std::io::stdout();
    let mut sequence = 0;
    while let Some(entry) = rx.recv().await {
        sequence += 1;
        sink.emit(&mut stdout, &entry, sequence)?;
    }

    // The channel is closed; the producer is done and hands over history.
    let history = producer.await.context("Lookup pipeline task failed")?;

    if let Some(file) = dst_file {
        write_history(file, history, &config)?;
    }

    Ok(())
}

/// Appends the rendered history to the destination file.
fn write_history(mut file: File, mut history: History, config: &RunConfig) -> Result<()> {
    if history.is_empty() {
        return Ok(());
    }
    if config.sort {
        history.sort_by_request();
    }

    let format = config
        .dst_path
        .as_deref()
        .map_or(OutputFormat::Text, OutputFormat::from_path);
    let rendered = Renderer::new(format)?.render_list(history.entries())?;

    file.write_all(rendered.as_bytes())
        .context("Failed to write destination file")?;
    Ok(())
}

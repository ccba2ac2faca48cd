use std::io::Cursor;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// One line-oriented request source: inline arguments joined by spaces, a
/// named file, or stdin.
///
/// Reading is async so the pipeline suspends on input instead of blocking
/// the runtime while waiting for the user to type.
pub struct LineReader {
    lines: Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>,
}

impl LineReader {
    /// A source yielding the command-line words as a single request line.
    pub fn from_args(words: &[String]) -> Self {
        Self::from_reader(Box::new(Cursor::new(words.join(" ").into_bytes())))
    }

    /// A source reading the named file line by line.
    pub async fn open(path: &str) -> Result<Self> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open source file: {path}"))?;
        Ok(Self::from_reader(Box::new(file)))
    }

    /// A source reading stdin line by line.
    pub fn stdin() -> Self {
        Self::from_reader(Box::new(tokio::io::stdin()))
    }

    fn from_reader(reader: Box<dyn AsyncRead + Send + Unpin>) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// The next line, or `None` at end of input.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

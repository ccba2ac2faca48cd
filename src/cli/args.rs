use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lu")]
#[command(about = "Dictionary lookup and translation CLI")]
#[command(version)]
pub struct Args {
    /// Request to look up; without it requests are read line by line from
    /// --input or stdin
    pub words: Vec<String>,

    /// Source language code (falls back to LU_DEFAULT_FROM_LANG)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code, repeatable (falls back to LU_DEFAULT_TO_LANGS)
    #[arg(short = 't', long = "to")]
    pub to: Vec<String>,

    /// Source file name
    #[arg(short = 'i', long = "input")]
    pub input: Option<String>,

    /// Destination file name; results are appended, .html selects HTML output
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Sort results alphabetically by request in the destination file
    #[arg(short = 's', long)]
    pub sort: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the languages the translation service supports
    Languages {
        /// UI language the language names are shown in
        #[arg(long, default_value = "en")]
        ui: String,
    },
}

use std::process;

use clap::Parser;

use lu_cli::cli::commands::{languages, lookup};
use lu_cli::cli::{Args, Command};
use lu_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match args.command {
        Some(Command::Languages { ui }) => languages::run_languages(&ui).await,
        None => {
            let options = lookup::LookupOptions {
                words: args.words,
                from: args.from,
                to: args.to,
                input: args.input,
                output: args.output,
                sort: args.sort,
            };
            lookup::run_lookup(options).await
        }
    };

    // Explicit exit: a stdin read parked on the blocking pool must not
    // stall runtime shutdown.
    match result {
        Ok(()) => process::exit(exitcode::OK),
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            process::exit(exitcode::SOFTWARE);
        }
    }
}

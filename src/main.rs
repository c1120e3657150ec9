//! Interactive read-print loop.
//!
//! Reads one top-level form per entered line and prints it back in canonical form.
//! A line with an unclosed string keeps reading further lines until the string closes.
//!
//! ```ignore
//! RUST_LOG=mal_reader=debug mal-reader --prompt "> "
//! ```

use std::path::PathBuf;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult};
use rustyline::Editor;

use mal_reader::repl::is_complete;

#[derive(Parser, Debug)]
#[command(version, about = "Read Lisp forms and print them back")]
struct Args {
    /// Prompt shown before each line.
    #[arg(long, default_value = "user> ")]
    prompt: String,

    /// File to load and save line history in.
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Don't load or save history.
    #[arg(long, conflicts_with = "history")]
    no_history: bool,
}

/// Line-editor hooks: keep reading while a string is open.
struct ReaderHelper;

impl rustyline::completion::Completer for ReaderHelper {
    type Candidate = String;
}

impl rustyline::hint::Hinter for ReaderHelper {
    type Hint = String;
}

impl rustyline::highlight::Highlighter for ReaderHelper {}

impl rustyline::validate::Validator for ReaderHelper {
    fn validate(
        &self,
        ctx: &mut ValidationContext<'_>,
    ) -> Result<ValidationResult, ReadlineError> {
        if is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

impl rustyline::Helper for ReaderHelper {}

/// Default location for history: the user's data directory.
///
/// History is a nice-to-have; any failure here just means no history.
fn default_history_path() -> Option<PathBuf> {
    let data_dir = dirs::data_dir()?.join("mal-reader");
    std::fs::create_dir_all(&data_dir).ok()?;
    Some(data_dir.join("history"))
}

fn main() -> rustyline::Result<()> {
    // Logs go to stderr, configured by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let history_path = if args.no_history {
        None
    } else {
        args.history.or_else(default_history_path)
    };

    let mut rl: Editor<ReaderHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReaderHelper));
    if let Some(path) = &history_path {
        if let Err(e) = rl.load_history(path) {
            tracing::debug!("no history loaded from {}: {e}", path.display());
        }
    }

    loop {
        match rl.readline(&args.prompt) {
            Ok(line) => {
                if mal_reader::repl::is_blank(&line) {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                println!("{}", mal_reader::rep(&line));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &history_path {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("could not save history to {}: {e}", path.display());
        }
    }
    Ok(())
}

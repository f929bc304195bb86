//! Rolodex CLI — Redis-inspired CLI for the Rolodex contact book.
//!
//! Three modes:
//! - **Shell mode**: `rolodex [flags] COMMAND` — single command, exit
//! - **REPL mode**: `rolodex [flags]` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "add Ann 111 a@x.com '1 St'" | rolodex` —
//!   line-by-line from stdin
//!
//! One process owns one backing file for its lifetime. The file is not
//! locked, so two rolodex processes pointed at the same file can race;
//! don't do that.

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use rolodex_store::ContactBook;

use commands::build_cli;
use format::{format_error, format_invalid, format_not_found, format_output, OutputMode};
use parse::{matches_to_action, BookCommand, CliAction};
use state::{Output, SessionState};

fn main() {
    init_tracing();

    let cli = build_cli();
    let matches = cli.get_matches();

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    // Open the contact book
    let book = match open_book(&matches) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut state = SessionState::new(book);

    // Dispatch mode
    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let exit_code = run_shell_mode(&matches, &mut state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        // REPL mode
        repl::run_repl(&mut state, output_mode);
    } else {
        // Pipe mode
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn open_book(matches: &clap::ArgMatches) -> Result<ContactBook, String> {
    let path = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or("contacts.json");

    let book =
        ContactBook::open(path).map_err(|e| format!("Failed to open contact book: {}", e))?;
    tracing::debug!(path, count = book.len(), "opened contact book");
    Ok(book)
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches) {
        Ok(CliAction::Execute(cmd)) => {
            if execute_action(cmd, state, mode) {
                0
            } else {
                1
            }
        }
        Ok(CliAction::Meta(_)) => {
            eprintln!("(error) Meta-commands are only available in REPL mode");
            1
        }
        Err(e) => {
            eprintln!("{}", format_invalid(&e, mode));
            1
        }
    }
}

/// Execute a parsed book command. Returns true on success, false on error.
///
/// A failed update/delete lookup is reported here as "contact not found";
/// the book itself only reports it as a boolean.
pub(crate) fn execute_action(cmd: BookCommand, state: &mut SessionState, mode: OutputMode) -> bool {
    let target = match &cmd {
        BookCommand::Update { old_name, .. } => Some(old_name.clone()),
        BookCommand::Delete { name } => Some(name.clone()),
        _ => None,
    };

    match state.execute(cmd) {
        Ok(Output::Bool(false)) => {
            eprintln!("{}", format_not_found(&target.unwrap_or_default(), mode));
            false
        }
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

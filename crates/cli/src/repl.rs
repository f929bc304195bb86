//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::commands::build_repl_cmd;
use crate::execute_action;
use crate::format::OutputMode;
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let helper = RolodexHelper::new();
    let mut rl: Editor<RolodexHelper, DefaultHistory> = Editor::with_config(config).unwrap();
    rl.set_helper(Some(helper));

    // Load history
    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                // Check meta-commands first
                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help { command } => {
                            print_help(command.as_deref());
                        }
                    }
                    continue;
                }

                // Tokenize with shlex (respects quotes)
                let tokens = match shlex::split(trimmed) {
                    Some(t) => t,
                    None => {
                        eprintln!("(error) Invalid quoting");
                        continue;
                    }
                };

                if tokens.is_empty() {
                    continue;
                }

                // Parse via clap
                let cmd = build_repl_cmd();
                let matches = match cmd.try_get_matches_from(tokens) {
                    Ok(m) => m,
                    Err(e) => {
                        // clap error — show help text
                        eprintln!("{}", e);
                        continue;
                    }
                };

                match matches_to_action(&matches) {
                    Ok(CliAction::Execute(cmd)) => {
                        execute_action(cmd, state, mode);
                    }
                    Ok(CliAction::Meta(_)) => {
                        // Meta-commands were handled before reaching clap
                    }
                    Err(e) => {
                        eprintln!("{}", crate::format::format_invalid(&e, mode));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — just show new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D — exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = match shlex::split(trimmed) {
            Some(t) => t,
            None => {
                eprintln!("(error) Invalid quoting: {}", trimmed);
                exit_code = 1;
                continue;
            }
        };

        if tokens.is_empty() {
            continue;
        }

        let cmd = build_repl_cmd();
        let matches = match cmd.try_get_matches_from(tokens) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{}", e);
                exit_code = 1;
                continue;
            }
        };

        match matches_to_action(&matches) {
            Ok(CliAction::Execute(cmd)) => {
                if !execute_action(cmd, state, mode) {
                    exit_code = 1;
                }
            }
            Ok(CliAction::Meta(_)) => {}
            Err(e) => {
                eprintln!("{}", crate::format::format_invalid(&e, mode));
                exit_code = 1;
            }
        }
    }

    exit_code
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.rolodex_history", h))
}

fn print_help(command: Option<&str>) {
    if let Some(cmd) = command {
        // Show help for a specific command
        let cli = build_repl_cmd();
        match cli.try_get_matches_from(vec![cmd, "--help"]) {
            Ok(_) => {}
            Err(e) => println!("{}", e),
        }
    } else {
        println!("Available commands:");
        println!("  add NAME PHONE EMAIL ADDRESS            Add a contact");
        println!("  update OLD_NAME NAME PHONE EMAIL ADDR   Replace the first contact named OLD_NAME");
        println!("  del NAME                                Delete the first contact named NAME");
        println!("  show NAME                               Show the first contact named NAME");
        println!("  list                                    List all contacts");
        println!("  search [QUERY]                          Case-insensitive name search");
        println!();
        println!("Meta-commands:");
        println!("  help [command]         Show help");
        println!("  quit / exit            Exit REPL");
        println!("  clear                  Clear screen");
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Known top-level commands for TAB completion.
const TOP_LEVEL_COMMANDS: &[&str] = &[
    "add", "update", "del", "delete", "show", "list", "search", "help", "quit", "exit", "clear",
];

struct RolodexHelper;

impl RolodexHelper {
    fn new() -> Self {
        Self
    }
}

impl Helper for RolodexHelper {}
impl Validator for RolodexHelper {}
impl Highlighter for RolodexHelper {}
impl Hinter for RolodexHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for RolodexHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(' ');

        if parts.is_empty() || (parts.len() == 1 && !trailing_space) {
            // Completing the command word
            let prefix = parts.first().copied().unwrap_or("");
            let start = pos - prefix.len();
            let candidates: Vec<Pair> = TOP_LEVEL_COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(prefix))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            Ok((start, candidates))
        } else {
            // Arguments are free text (names, numbers), nothing to complete
            Ok((pos, vec![]))
        }
    }
}

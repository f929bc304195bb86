//! Clap command tree definition.
//!
//! Builds the full `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`).

use clap::{Arg, Command};

/// Build the complete CLI command tree.
///
/// This is shared between shell mode and REPL mode.
pub fn build_cli() -> Command {
    Command::new("rolodex")
        .about("Redis-inspired CLI for the Rolodex contact book")
        .subcommand_required(false)
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .help("Backing file path (default: contacts.json)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (no type prefixes, tab-separated fields)")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_add())
        .subcommand(build_update())
        .subcommand(build_del())
        .subcommand(build_show())
        .subcommand(build_list())
        .subcommand(build_search())
}

/// Build a command tree for REPL mode (no global flags).
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(build_add())
        .subcommand(build_update())
        .subcommand(build_del())
        .subcommand(build_show())
        .subcommand(build_list())
        .subcommand(build_search())
}

fn build_add() -> Command {
    Command::new("add")
        .about("Add a contact (appends, duplicates allowed)")
        .arg(Arg::new("name").required(true).help("Contact name"))
        .arg(Arg::new("phone").required(true).help("Phone number"))
        .arg(Arg::new("email").required(true).help("Email address"))
        .arg(Arg::new("address").required(true).help("Postal address"))
}

fn build_update() -> Command {
    Command::new("update")
        .about("Replace the first contact with the given name")
        .arg(
            Arg::new("old-name")
                .required(true)
                .value_name("OLD_NAME")
                .help("Name of the contact to replace (exact match)"),
        )
        .arg(Arg::new("name").required(true).help("New contact name"))
        .arg(Arg::new("phone").required(true).help("New phone number"))
        .arg(Arg::new("email").required(true).help("New email address"))
        .arg(Arg::new("address").required(true).help("New postal address"))
}

fn build_del() -> Command {
    Command::new("del")
        .alias("delete")
        .about("Delete the first contact with the given name")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Name of the contact to delete (exact match)"),
        )
}

fn build_show() -> Command {
    Command::new("show")
        .about("Show the first contact with the given name")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Name of the contact to show (exact match)"),
        )
}

fn build_list() -> Command {
    Command::new("list").about("List all contacts in insertion order")
}

fn build_search() -> Command {
    Command::new("search")
        .about("Search contacts by name (case-insensitive substring)")
        .arg(
            Arg::new("query")
                .value_name("QUERY")
                .help("Substring to match; omit to list every contact"),
        )
}

//! ArgMatches → BookCommand/MetaCommand conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Standard commands → `CliAction::Execute(BookCommand)`
//! - REPL meta-commands → `CliAction::Meta`
//!
//! Field presence validation lives here, on the presentation side of the
//! boundary: a submission with any empty field is rejected before the book
//! is touched. The book itself performs no validation.

use clap::ArgMatches;
use rolodex_core::Contact;

/// The result of parsing user input.
#[allow(dead_code)]
pub enum CliAction {
    /// A standard command to execute against the book.
    Execute(BookCommand),
    /// A REPL-only meta-command.
    Meta(MetaCommand),
}

/// One operation against the contact book.
///
/// Update and delete address their target by name, never by display
/// position; a selection in any front end must resolve to a name before it
/// gets this far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookCommand {
    /// Append a contact.
    Add {
        /// The contact to append.
        contact: Contact,
    },
    /// Replace the first contact named `old_name`.
    Update {
        /// Name of the contact to replace (exact match).
        old_name: String,
        /// The replacement record.
        contact: Contact,
    },
    /// Remove the first contact named `name`.
    Delete {
        /// Name of the contact to remove (exact match).
        name: String,
    },
    /// Look up the first contact named `name`.
    Show {
        /// Name of the contact to show (exact match).
        name: String,
    },
    /// List every contact in insertion order.
    List,
    /// Case-insensitive substring search over names.
    Search {
        /// Substring to match; empty matches everything.
        query: String,
    },
}

/// REPL meta-commands.
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
    Clear,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None`
/// otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => {
            let command = parts.next().map(|s| s.trim().to_string());
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "add" => {
            let contact = contact_from_fields(sub_matches)?;
            Ok(CliAction::Execute(BookCommand::Add { contact }))
        }
        "update" => {
            let old_name = required_string(sub_matches, "old-name");
            let contact = contact_from_fields(sub_matches)?;
            Ok(CliAction::Execute(BookCommand::Update { old_name, contact }))
        }
        "del" => {
            let name = required_string(sub_matches, "name");
            Ok(CliAction::Execute(BookCommand::Delete { name }))
        }
        "show" => {
            let name = required_string(sub_matches, "name");
            Ok(CliAction::Execute(BookCommand::Show { name }))
        }
        "list" => Ok(CliAction::Execute(BookCommand::List)),
        "search" => {
            let query = sub_matches
                .get_one::<String>("query")
                .cloned()
                .unwrap_or_default();
            Ok(CliAction::Execute(BookCommand::Search { query }))
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Assemble a contact from the four field arguments, rejecting empty
/// fields.
///
/// Presence is the only check: whitespace-only values pass, and no format
/// validation is applied to phone or email.
fn contact_from_fields(matches: &ArgMatches) -> Result<Contact, String> {
    let name = required_string(matches, "name");
    let phone = required_string(matches, "phone");
    let email = required_string(matches, "email");
    let address = required_string(matches, "address");

    if name.is_empty() || phone.is_empty() || email.is_empty() || address.is_empty() {
        return Err("all fields must be filled".to_string());
    }

    Ok(Contact::new(name, phone, email, address))
}

/// Fetch an argument clap has already marked required.
fn required_string(matches: &ArgMatches, id: &str) -> String {
    matches
        .get_one::<String>(id)
        .cloned()
        .unwrap_or_default()
}

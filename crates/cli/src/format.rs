//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default on TTY): Redis-style, e.g. `OK`, `(nil)`,
//!   pipe-separated contact lines
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): Tab-separated fields, no prefixes

use rolodex_core::{Contact, Error};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Format the not-found report for a failed update/delete target.
pub fn format_not_found(name: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("contact not found: {}", name)
        }))
        .unwrap_or_else(|_| String::from("{\"error\": \"contact not found\"}")),
        OutputMode::Raw => format!("contact not found: {}", name),
        OutputMode::Human => format!("(error) contact not found: {}", name),
    }
}

/// Format a validation failure from the parse layer.
pub fn format_invalid(reason: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": reason
        }))
        .unwrap_or_else(|_| String::from("{\"error\": \"invalid input\"}")),
        OutputMode::Raw => reason.to_string(),
        OutputMode::Human => format!("(error) {}", reason),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Bool(_) => "OK".to_string(),
        Output::Maybe(None) => "(nil)".to_string(),
        Output::Maybe(Some(contact)) => contact.to_string(),
        Output::Contacts(contacts) => {
            if contacts.is_empty() {
                "(empty list)".to_string()
            } else {
                contacts
                    .iter()
                    .map(Contact::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }
}

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Unit | Output::Bool(_) => serde_json::json!({"ok": true}),
        Output::Maybe(None) => serde_json::Value::Null,
        Output::Maybe(Some(contact)) => serde_json::json!(contact),
        Output::Contacts(contacts) => serde_json::json!(contacts),
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "null".to_string())
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Unit | Output::Bool(_) => String::new(),
        Output::Maybe(None) => String::new(),
        Output::Maybe(Some(contact)) => raw_line(contact),
        Output::Contacts(contacts) => contacts
            .iter()
            .map(raw_line)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn raw_line(contact: &Contact) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        contact.name, contact.phone, contact.email, contact.address
    )
}

//! Session wrapper around the contact book.
//!
//! Holds the open `ContactBook` and executes parsed commands against it.
//! Every command runs to completion synchronously on the caller's thread;
//! there is no background work and nothing to cancel.

use rolodex_core::Result;
use rolodex_store::{Contact, ContactBook};

use crate::parse::BookCommand;

/// Successful command execution results.
///
/// Each [`BookCommand`] variant maps to exactly one `Output` variant:
/// `Add` → `Unit`, `Update`/`Delete` → `Bool` (true if the name matched),
/// `Show` → `Maybe`, `List`/`Search` → `Contacts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// No return value (add).
    Unit,
    /// Whether update/delete found its target.
    Bool(bool),
    /// Optional contact (show may not find a match).
    Maybe(Option<Contact>),
    /// Ordered list of contacts (list, search).
    Contacts(Vec<Contact>),
}

/// Wraps the open book and executes commands.
pub struct SessionState {
    book: ContactBook,
}

impl SessionState {
    /// Create a new SessionState from an open book.
    pub fn new(book: ContactBook) -> Self {
        Self { book }
    }

    /// Execute a command against the book.
    pub fn execute(&mut self, cmd: BookCommand) -> Result<Output> {
        match cmd {
            BookCommand::Add { contact } => {
                self.book.add(contact)?;
                Ok(Output::Unit)
            }
            BookCommand::Update { old_name, contact } => {
                let replaced = self.book.update(&old_name, contact)?;
                Ok(Output::Bool(replaced))
            }
            BookCommand::Delete { name } => {
                let removed = self.book.delete(&name)?;
                Ok(Output::Bool(removed))
            }
            BookCommand::Show { name } => {
                let found = self
                    .book
                    .contacts()
                    .iter()
                    .find(|c| c.name == name)
                    .cloned();
                Ok(Output::Maybe(found))
            }
            BookCommand::List => Ok(Output::Contacts(self.book.contacts().to_vec())),
            BookCommand::Search { query } => {
                let hits = self.book.search(&query).into_iter().cloned().collect();
                Ok(Output::Contacts(hits))
            }
        }
    }

    /// Generate the REPL prompt string.
    pub fn prompt(&self) -> String {
        format!("rolodex:{}> ", self.book.path().display())
    }
}

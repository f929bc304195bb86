//! The contact record type
//!
//! A `Contact` is a plain value holding four text fields. The persisted
//! representation is a JSON object with exactly these four string keys;
//! `deny_unknown_fields` rejects anything else so a file with the wrong
//! shape fails loading instead of being silently reinterpreted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact record.
///
/// The `name` field is the lookup key. Equality on it is case-sensitive
/// (update/delete), search treats it as a case-insensitive substring
/// target. `phone`, `email`, and `address` are opaque strings; no format
/// validation is performed on any field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Display name, used as the lookup key.
    pub name: String,
    /// Phone number (opaque text).
    pub phone: String,
    /// Email address (opaque text).
    pub email: String,
    /// Postal address (opaque text).
    pub address: String,
}

impl Contact {
    /// Create a contact from the four field values.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Contact {
    /// Renders the list-display form: `name | phone | email | address`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.name, self.phone, self.email, self.address
        )
    }
}

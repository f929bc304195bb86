//! Whole-file persistence of the contact array
//!
//! The on-disk format is the one bit-exact contract of the system: a JSON
//! array at the top level, each element an object with exactly four
//! string-valued keys (`name`, `phone`, `email`, `address`). Array order is
//! list order. No wrapping metadata, no version field.
//!
//! Reads and writes go through plain `fs` calls with no file lock and no
//! temp-file swap. A crash mid-write can leave a truncated file behind;
//! recovery from that is out of scope, the next load reports it as
//! malformed.

use std::fs;
use std::io;
use std::path::Path;

use rolodex_core::{Contact, Error, Result};
use tracing::debug;

/// Read the full contact array from `path`.
///
/// A missing file is not an error: it means the book has never been saved,
/// and loading yields an empty list. Any other read failure, invalid JSON,
/// or a JSON document that is not an array of four-string-field objects is
/// fatal to the load; no partial data is recovered.
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no backing file, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let contacts: Vec<Contact> = serde_json::from_str(&text).map_err(|e| Error::Malformed {
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), count = contacts.len(), "loaded contacts");
    Ok(contacts)
}

/// Serialize `contacts` and overwrite `path` with the result.
///
/// The file is rewritten in its entirety on every call.
pub fn store_contacts(path: &Path, contacts: &[Contact]) -> Result<()> {
    let text = serde_json::to_string(contacts).map_err(|e| Error::Serialization {
        reason: e.to_string(),
    })?;

    fs::write(path, text)?;
    debug!(path = %path.display(), count = contacts.len(), "wrote contacts");
    Ok(())
}

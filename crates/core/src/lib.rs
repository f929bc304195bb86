//! Core types for Rolodex
//!
//! This crate defines the foundational types used throughout the system:
//! - Contact: A single contact record (name, phone, email, address)
//! - Error: Error type hierarchy
//!
//! The `name` field doubles as the lookup key: update and delete match it
//! exactly, search matches it as a case-insensitive substring.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod error;

pub use contact::Contact;
pub use error::{Error, Result};

//! Concurrent hotel room registry with bulk loading from text sources.
//!
//! Data comes from two files: a line-oriented attribute vocabulary and a
//! CSV room listing. [`Hotel`] holds the merged result behind a single
//! read/write lock and answers per-room queries without handing out
//! references into its storage.

pub mod attributes;
pub mod error;
pub mod hotel;
pub mod rooms;

pub use attributes::parse_attributes;
pub use error::{RegistryError, Result};
pub use hotel::{Hotel, LoadMode};
pub use rooms::parse_rooms;

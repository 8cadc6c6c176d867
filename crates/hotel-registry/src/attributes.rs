//! Attribute vocabulary loader.
//!
//! The vocabulary file is line-oriented: one attribute per line, where the
//! attribute is the first whitespace-separated token. Blank lines and lines
//! starting with `#` are skipped. Tokens are collected in file order and
//! duplicates are kept as-is.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hotel_model::Attribute;

use crate::error::{RegistryError, Result};

/// Parses the attribute vocabulary at `path`.
pub fn parse_attributes(path: &Path) -> Result<Vec<Attribute>> {
    let file = File::open(path).map_err(|source| RegistryError::open(path, source))?;
    let reader = BufReader::new(file);

    let mut attributes = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| RegistryError::read(path, source))?;
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if token.starts_with('#') {
            continue;
        }
        attributes.push(Attribute::new(token));
    }

    tracing::debug!(
        path = %path.display(),
        count = attributes.len(),
        "loaded attribute vocabulary"
    );
    Ok(attributes)
}

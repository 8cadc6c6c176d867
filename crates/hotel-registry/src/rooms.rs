//! Room record loader.
//!
//! Room files are CSV with a header row, which is always skipped. Each data
//! row holds the four ordered room fields. Failures at the CSV layer abort
//! the load in every mode; failures validating an individual record abort
//! only under [`LoadMode::Strict`] and are logged and skipped under
//! [`LoadMode::Permissive`]. When two rows share a room number the later
//! row wins.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use hotel_model::{Attribute, Room, RoomNumber};

use crate::error::{RegistryError, Result};
use crate::hotel::LoadMode;

/// Parses the room records at `path` into a map keyed by room number.
pub fn parse_rooms(
    path: &Path,
    vocabulary: &[Attribute],
    mode: LoadMode,
) -> Result<BTreeMap<RoomNumber, Room>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| {
            let message = source.to_string();
            match source.into_kind() {
                csv::ErrorKind::Io(io_source) => RegistryError::open(path, io_source),
                _ => RegistryError::Csv {
                    path: path.to_path_buf(),
                    message,
                },
            }
        })?;

    let mut rooms = BTreeMap::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| RegistryError::Csv {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;
        let fields: Vec<&str> = record.iter().collect();

        match Room::from_record(&fields, vocabulary) {
            Ok(room) => {
                if rooms.insert(room.id(), room).is_some() {
                    tracing::debug!(path = %path.display(), row, "replaced duplicate room number");
                }
            }
            Err(source) => match mode {
                LoadMode::Strict => {
                    return Err(RegistryError::Record {
                        path: path.to_path_buf(),
                        row,
                        source,
                    });
                }
                LoadMode::Permissive => {
                    tracing::warn!(
                        path = %path.display(),
                        row,
                        error = %source,
                        "skipping invalid room record"
                    );
                }
            },
        }
    }

    tracing::debug!(path = %path.display(), count = rooms.len(), "loaded room records");
    Ok(rooms)
}

//! The hotel registry: a concurrent view over rooms and their vocabulary.
//!
//! A [`Hotel`] owns its rooms and attribute vocabulary behind a single
//! read/write lock. Bulk loads parse files entirely outside the lock and
//! merge the parsed result under a short exclusive section, so readers are
//! never blocked on file I/O and a failed load leaves the registry exactly
//! as it was.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hotel_model::{Attribute, Room, RoomNumber, RoomState};

use crate::attributes::parse_attributes;
use crate::error::Result;
use crate::rooms::parse_rooms;

/// How a room load reacts to records that fail validation.
///
/// Read-level failures (unreadable file, malformed CSV) abort the load in
/// both modes; the mode only governs well-formed records with bad fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Abort the whole load on the first invalid record.
    Strict,
    /// Log and skip invalid records, keeping the rest.
    Permissive,
}

#[derive(Debug, Default)]
struct HotelInner {
    rooms: BTreeMap<RoomNumber, Room>,
    attributes: Vec<Attribute>,
}

/// A registry of rooms and the attribute vocabulary they draw from.
#[derive(Debug, Default)]
pub struct Hotel {
    inner: RwLock<HotelInner>,
}

impl Hotel {
    /// Returns an empty registry with no rooms and no vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an attribute file and a room file in one step.
    ///
    /// The vocabulary is loaded first so room parsing can check against it.
    /// If either load fails no registry is produced.
    pub fn from_data(
        attribute_path: &Path,
        room_path: &Path,
        mode: LoadMode,
    ) -> Result<Self> {
        let hotel = Self::new();
        hotel.load_attributes(attribute_path)?;
        hotel.load_rooms(room_path, mode)?;
        Ok(hotel)
    }

    /// Loads the attribute vocabulary at `path`, appending to the current
    /// vocabulary. Returns how many attributes the file contributed.
    ///
    /// On error the registry is unchanged.
    pub fn load_attributes(&self, path: &Path) -> Result<usize> {
        let attributes = parse_attributes(path)?;
        let count = attributes.len();
        self.write().attributes.extend(attributes);
        tracing::debug!(path = %path.display(), count, "merged attribute vocabulary");
        Ok(count)
    }

    /// Loads the room records at `path`, merging them into the registry.
    /// Rooms with numbers already present are replaced. Returns how many
    /// rooms the file contributed.
    ///
    /// Parsing happens outside the lock against a snapshot of the current
    /// vocabulary. On error the registry is unchanged. Concurrent loads on
    /// the same registry each merge atomically, but their relative order is
    /// unspecified.
    pub fn load_rooms(&self, path: &Path, mode: LoadMode) -> Result<usize> {
        let vocabulary = self.read().attributes.clone();
        let rooms = parse_rooms(path, &vocabulary, mode)?;
        let count = rooms.len();
        self.write().rooms.extend(rooms);
        tracing::debug!(path = %path.display(), count, "merged room records");
        Ok(count)
    }

    /// Returns the number of rooms currently registered.
    pub fn room_count(&self) -> usize {
        self.read().rooms.len()
    }

    /// Returns a snapshot of the attribute vocabulary in load order.
    pub fn attributes(&self) -> Vec<Attribute> {
        self.read().attributes.clone()
    }

    /// Returns whether a room with this number is registered.
    pub fn contains(&self, id: RoomNumber) -> bool {
        self.read().rooms.contains_key(&id)
    }

    /// Returns the registered room numbers in ascending order.
    pub fn room_numbers(&self) -> Vec<RoomNumber> {
        self.read().rooms.keys().copied().collect()
    }

    /// Returns whether the room has every attribute in `attrs`, or `None`
    /// if no such room is registered.
    pub fn room_satisfies(&self, id: RoomNumber, attrs: &[Attribute]) -> Option<bool> {
        self.read().rooms.get(&id).map(|room| room.satisfies(attrs))
    }

    /// Adds an attribute to a room. Returns whether the room exists; adding
    /// an attribute the room already has is a no-op.
    pub fn add_room_attribute(&self, id: RoomNumber, attr: Attribute) -> bool {
        match self.read().rooms.get(&id) {
            Some(room) => {
                room.add_attribute(attr);
                true
            }
            None => false,
        }
    }

    /// Returns the price of a room, if registered.
    pub fn room_price(&self, id: RoomNumber) -> Option<u64> {
        self.read().rooms.get(&id).map(Room::price)
    }

    /// Returns the state of a room, if registered.
    pub fn room_state(&self, id: RoomNumber) -> Option<RoomState> {
        self.read().rooms.get(&id).map(Room::state)
    }

    /// Returns a snapshot of a room's attribute set, if registered.
    pub fn room_attributes(&self, id: RoomNumber) -> Option<BTreeSet<Attribute>> {
        self.read().rooms.get(&id).map(Room::attributes)
    }

    // A poisoned lock means another thread panicked mid-operation; the data
    // is still structurally sound, so loads and reads continue on it.
    fn read(&self) -> RwLockReadGuard<'_, HotelInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HotelInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

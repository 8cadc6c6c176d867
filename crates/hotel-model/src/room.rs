//! Rooms and their identifiers, states, and attribute sets.
//!
//! A [`Room`] carries an immutable room number, a price, a current state,
//! and a set of attributes. The attribute set is guarded by a per-room
//! read/write lock so membership tests can run concurrently with each other
//! while additions serialize against everything else. Price and state are
//! plain fields; mutating them requires `&mut Room`, which the borrow
//! checker already serializes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Number of fields in a room record.
const RECORD_FIELDS: usize = 4;

// Field positions within a record.
const FIELD_ID: usize = 0;
const FIELD_PRICE: usize = 1;
const FIELD_STATE: usize = 2;
const FIELD_ATTRIBUTES: usize = 3;

/// The ID (room number) of a room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RoomNumber(u32);

impl RoomNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A property that a room can have, e.g. `"sea-view"` or `"smoking"`.
///
/// The tag text is stored verbatim; no trimming or case folding is applied.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Attribute(String);

impl Attribute {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The current state of a room.
///
/// Any state may be reassigned to any other; no transition rules are
/// enforced at this layer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomState {
    Occupied,
    Unavailable,
    #[default]
    Free,
}

impl RoomState {
    /// Returns the record literal for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Occupied => "OCCUPIED",
            Self::Unavailable => "UNAVAILABLE",
            Self::Free => "FREE",
        }
    }
}

impl FromStr for RoomState {
    type Err = RecordError;

    /// Accepts exactly the record literals; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OCCUPIED" => Ok(Self::Occupied),
            "UNAVAILABLE" => Ok(Self::Unavailable),
            "FREE" => Ok(Self::Free),
            _ => Err(RecordError::UnknownState {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room in a hotel: room number, price, current state, and attribute set.
#[derive(Debug)]
pub struct Room {
    id: RoomNumber,
    price: u64,
    state: RoomState,
    attrs: RwLock<BTreeSet<Attribute>>,
}

impl Room {
    /// Returns a `Room` with the given room number, zero price, the default
    /// state, and an empty attribute set.
    pub fn new(id: RoomNumber) -> Self {
        Self {
            id,
            price: 0,
            state: RoomState::default(),
            attrs: RwLock::new(BTreeSet::new()),
        }
    }

    /// Parses a `Room` from an ordered record of four fields: id, price,
    /// state, and a comma-joined attribute list.
    ///
    /// Attribute segments are kept verbatim: whitespace is not trimmed and
    /// empty segments become empty tags. Attributes absent from
    /// `vocabulary` are accepted; they are only reported at debug level.
    pub fn from_record(record: &[&str], vocabulary: &[Attribute]) -> Result<Self, RecordError> {
        if record.len() != RECORD_FIELDS {
            return Err(RecordError::FieldCount {
                expected: RECORD_FIELDS,
                found: record.len(),
            });
        }
        let id = record[FIELD_ID]
            .parse::<u32>()
            .map_err(|source| RecordError::InvalidId {
                value: record[FIELD_ID].to_string(),
                source,
            })?;
        let price = record[FIELD_PRICE]
            .parse::<u64>()
            .map_err(|source| RecordError::InvalidPrice {
                value: record[FIELD_PRICE].to_string(),
                source,
            })?;
        let state = record[FIELD_STATE].parse::<RoomState>()?;

        let mut attrs = BTreeSet::new();
        for tag in record[FIELD_ATTRIBUTES].split(',') {
            let attr = Attribute::new(tag);
            if !vocabulary.contains(&attr) {
                tracing::debug!(room = id, attribute = tag, "attribute not in vocabulary");
            }
            attrs.insert(attr);
        }

        Ok(Self {
            id: RoomNumber::new(id),
            price,
            state,
            attrs: RwLock::new(attrs),
        })
    }

    /// Returns the room number.
    // Identity is immutable, so no lock is taken.
    pub fn id(&self) -> RoomNumber {
        self.id
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn state(&self) -> RoomState {
        self.state
    }

    pub fn set_price(&mut self, price: u64) {
        self.price = price;
    }

    pub fn set_state(&mut self, state: RoomState) {
        self.state = state;
    }

    /// Adds `attr` to the room's attribute set. Adding an attribute that is
    /// already present is a no-op.
    pub fn add_attribute(&self, attr: Attribute) {
        if let Ok(mut attrs) = self.attrs.write() {
            attrs.insert(attr);
        }
    }

    /// Returns whether the room has every attribute in `attrs`.
    ///
    /// An empty `attrs` is vacuously satisfied. Concurrent `satisfies`
    /// calls share the read lock; [`Room::add_attribute`] excludes them.
    pub fn satisfies(&self, attrs: &[Attribute]) -> bool {
        self.attrs
            .read()
            .map(|set| attrs.iter().all(|attr| set.contains(attr)))
            .unwrap_or(false)
    }

    /// Returns a snapshot of the room's attribute set.
    pub fn attributes(&self) -> BTreeSet<Attribute> {
        self.attrs.read().map(|set| set.clone()).unwrap_or_default()
    }
}

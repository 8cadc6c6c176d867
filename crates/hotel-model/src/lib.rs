//! Hotel inventory data model: validated dates, rooms, and attributes.

pub mod date;
pub mod error;
pub mod room;

pub use date::{Date, INVALID_MONTH, is_leap_year, month_name};
pub use error::{DateError, RecordError};
pub use room::{Attribute, Room, RoomNumber, RoomState};

//! Value objects - immutable types that represent domain concepts

mod clock;
mod email;
mod table_pool;
mod time_slot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use email::{normalize_email, validate_email_address};
pub use table_pool::{
    BookingPolicy, TablePool, DEFAULT_DURATION_MINUTES, DEFAULT_MAX_PARTY_SIZE,
    DEFAULT_TABLE_COUNT,
};
pub use time_slot::{
    format_date, format_time, parse_date, parse_time_slot, parse_time_slot_value,
    OccupancyWindow, DATE_FORMAT, TIME_FORMAT, TIME_SLOT_FORMAT,
};

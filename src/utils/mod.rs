pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;
pub mod time;
pub mod tz;

pub use formatting::describe_time_unit;

//! Domain models: farm events, their form-facing view model, executables
//! and device hardware.

pub mod device;
pub mod executable;
pub mod farm_event;
pub mod patch;
pub mod time_unit;
pub mod view_model;

pub type RowId = i64;

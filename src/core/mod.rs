//! Business logic.
//!
//! `projector`, `recombine` and `session` form the farm-event edit engine;
//! the remaining modules implement the CLI commands on top of it.

pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
pub mod lookup;
pub mod projector;
pub mod recombine;
pub mod schedule;
pub mod seed;
pub mod session;

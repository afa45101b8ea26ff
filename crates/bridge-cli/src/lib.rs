//! Bridge CLI - Command line tools for relay-drone bridge planning.
//!
//! This crate provides:
//! - plan_bridge: compute a bridge plan offline and print it

pub mod fleet;
pub mod report;

pub use fleet::{load_fleet, parse_fleet};
pub use report::render_table;

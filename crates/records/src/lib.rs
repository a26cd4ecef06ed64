//! Record lookup for the datakit utilities.
//!
//! This crate handles:
//! - Linear search over statically typed records (`Identified`)
//! - Linear search over dynamic JSON records with a configurable id field

pub mod finder;

pub use finder::{find_record, find_record_index, RecordFinder};

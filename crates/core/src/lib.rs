//! Core types for the datakit utilities.
//!
//! This crate provides shared types used across all other crates:
//! - Dynamic records and the `Identified` trait
//! - Common error types

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

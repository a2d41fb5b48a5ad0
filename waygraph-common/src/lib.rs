//! Common utilities for the waygraph toolkit

pub mod error;

pub use error::{suggest_travel_mode, Error, Result, TRAVEL_MODES};

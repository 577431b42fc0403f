//! The tools module provides helpers shared across the preprocessor.
//!
//! - cli: command line interface and option validation.
//! - freq_count: byte frequency count used by the inverse transform.
//!
pub mod cli;
pub mod freq_count;

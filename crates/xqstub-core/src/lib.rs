#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared utilities for xqstub.
//!
//! - [`utils`]: identifier case conversion used when deriving target names
//! - [`Colors`]: ANSI palette for terminal output

mod colors;
pub mod utils;


pub use colors::Colors;

//! Common utilities for the adacheck accessibility checker.
//!
//! This crate provides shared infrastructure used by the command-line front end:
//! - **Warning System** - colored, deduplicated terminal output for parser
//!   recoveries and other non-fatal conditions

pub mod warning;

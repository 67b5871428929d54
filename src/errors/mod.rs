//! Error types for the command-line driver.
//!
//! Scanning never fails, so these only cover the outer surface:
//!
//! - Unreadable input files
//! - Malformed command-line arguments
//! - Error names and suggestions for display

pub mod errors;

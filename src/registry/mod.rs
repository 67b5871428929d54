//! Identifier registry for scanned source.
//!
//! The lexer records every non-reserved name it classifies here. The
//! registry deduplicates names and keeps:
//!
//! - A sequence number assigned in first-encounter order
//! - The position of the first occurrence
//! - Every occurrence, in scan order
//!
//! Reporting reads it through `snapshot`, ordered by name.

pub mod registry;

#[cfg(test)]
mod tests;

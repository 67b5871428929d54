//! Plain-text reports over a finished scan.
//!
//! Renders the numbered token listing, the identifier table and the
//! per-category summary. Nothing here feeds back into scanning.

pub mod report;

#[cfg(test)]
mod tests;

#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Once};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod registry;
pub mod report;
pub mod sample;

/// Location of a character in the scanned source.
///
/// `row` and `column` are 1-based; `offset` is the byte index into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            row: 1,
            column: 1,
        }
    }

    pub fn row_column(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for scanner diagnostics.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lexscan=debug` or `RUST_LOG=lexscan=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

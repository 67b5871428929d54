use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

/// Failure of the command-line driver.
///
/// Scanning itself cannot fail; only reading arguments and input can.
#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnreadableSource { .. } => "UnreadableSource",
            ErrorImpl::UnexpectedArgument { .. } => "UnexpectedArgument",
            ErrorImpl::TooManyInputs { .. } => "TooManyInputs",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnreadableSource { path, .. } => ErrorTip::Suggestion(format!(
                "Could not read `{}`, does the file exist?",
                path.display()
            )),
            ErrorImpl::UnexpectedArgument { argument } => ErrorTip::Suggestion(format!(
                "Unknown option `{}`, usage: lexscan [--quiet] [FILE]",
                argument
            )),
            ErrorImpl::TooManyInputs { received } => ErrorTip::Suggestion(format!(
                "Expected at most 1 input file, received {}",
                received
            )),
        }
    }

    pub fn inner(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.internal_error)
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("failed to read source file {path:?}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unexpected argument: {argument:?}")]
    UnexpectedArgument { argument: String },
    #[error("too many input files: received {received:?}")]
    TooManyInputs { received: usize },
}

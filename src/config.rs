//! Command-line configuration for the `lexscan` driver.
//!
//! ```text
//! lexscan [--quiet | -q] [FILE]
//! ```
//!
//! Without `FILE` the bundled sample program is scanned. Log verbosity comes
//! from `RUST_LOG`, not from arguments.

use std::{fs::read_to_string, path::PathBuf};

use crate::{
    errors::errors::{Error, ErrorImpl},
    sample::SAMPLE_PROGRAM,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    Sample,
    File(PathBuf),
}

impl SourceInput {
    pub fn name(&self) -> String {
        match self {
            SourceInput::Sample => String::from("<sample>"),
            SourceInput::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String, Error> {
        match self {
            SourceInput::Sample => Ok(String::from(SAMPLE_PROGRAM)),
            SourceInput::File(path) => read_to_string(path).map_err(|source| {
                Error::new(ErrorImpl::UnreadableSource {
                    path: path.clone(),
                    source,
                })
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: SourceInput,
    /// Print the source text before the report
    pub echo_source: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: SourceInput::Sample,
            echo_source: true,
        }
    }
}

impl RunConfig {
    /// Builds the configuration from arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<RunConfig, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut inputs: Vec<String> = vec![];

        for arg in args {
            match arg.as_str() {
                "--quiet" | "-q" => config.echo_source = false,
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(ErrorImpl::UnexpectedArgument { argument: arg }.into());
                }
                _ => inputs.push(arg),
            }
        }

        if inputs.len() > 1 {
            return Err(ErrorImpl::TooManyInputs {
                received: inputs.len(),
            }
            .into());
        }

        if let Some(path) = inputs.pop() {
            config.input = SourceInput::File(PathBuf::from(path));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{RunConfig, SourceInput};
    use crate::{errors::errors::ErrorImpl, sample::SAMPLE_PROGRAM};
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_uses_sample() {
        let config = RunConfig::from_args(args(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.input.read().unwrap(), SAMPLE_PROGRAM);
        assert_eq!(config.input.name(), "<sample>");
    }

    #[test]
    fn test_file_and_quiet() {
        let config = RunConfig::from_args(args(&["-q", "prog.txt"])).unwrap();
        assert_eq!(config.input, SourceInput::File(PathBuf::from("prog.txt")));
        assert!(!config.echo_source);

        let config = RunConfig::from_args(args(&["prog.txt", "--quiet"])).unwrap();
        assert!(!config.echo_source);
    }

    #[test]
    fn test_unknown_flag() {
        let error = RunConfig::from_args(args(&["--verbose"])).unwrap_err();
        assert_eq!(error.get_error_name(), "UnexpectedArgument");
    }

    #[test]
    fn test_too_many_inputs() {
        let error = RunConfig::from_args(args(&["a.txt", "b.txt"])).unwrap_err();
        assert!(matches!(error.inner(), ErrorImpl::TooManyInputs { received: 2 }));
    }

    #[test]
    fn test_missing_file() {
        let input = SourceInput::File(PathBuf::from("definitely/not/here.src"));
        let error = input.read().unwrap_err();
        assert_eq!(error.get_error_name(), "UnreadableSource");
    }
}

//! Configuration management

mod cli;

pub use cli::Cli;

use crate::types::ListCopyError;
use std::path::PathBuf;

/// Operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the valid entries of the source file
    List,

    /// Copy the valid entries into `destination`
    Copy { destination: PathBuf },
}

/// Global configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text file with one path per line
    pub source: PathBuf,

    /// What to do with the entries
    pub mode: Mode,
}

impl Config {
    /// Configuration for list mode
    pub fn list(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            mode: Mode::List,
        }
    }

    /// Configuration for copy mode
    pub fn copy(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            mode: Mode::Copy {
                destination: destination.into(),
            },
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = ListCopyError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        match (cli.list, cli.copy.as_deref()) {
            (Some(source), None) => Ok(Config::list(source)),
            (None, Some([source, destination])) => Ok(Config::copy(source, destination)),
            (None, Some(values)) => Err(ListCopyError::Config(format!(
                "--copy takes SOURCE_FILE and DIRECTORY, got {} value(s)",
                values.len()
            ))),
            (Some(_), Some(_)) => Err(ListCopyError::Config(
                "--list and --copy cannot be used together".to_string(),
            )),
            (None, None) => Err(ListCopyError::Config(
                "No operation given; use --list or --copy".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(list: Option<&str>, copy: Option<&[&str]>) -> Cli {
        Cli {
            list: list.map(PathBuf::from),
            copy: copy.map(|values| values.iter().map(PathBuf::from).collect()),
        }
    }

    #[test]
    fn test_list_mode() {
        let config = Config::try_from(cli(Some("paths.txt"), None)).expect("list config");
        assert_eq!(config, Config::list("paths.txt"));
    }

    #[test]
    fn test_copy_mode() {
        let config =
            Config::try_from(cli(None, Some(&["paths.txt", "out"]))).expect("copy config");
        assert_eq!(config.source, PathBuf::from("paths.txt"));
        assert_eq!(
            config.mode,
            Mode::Copy {
                destination: PathBuf::from("out")
            }
        );
    }

    #[test]
    fn test_missing_operation_is_config_error() {
        let result = Config::try_from(cli(None, None));
        assert!(matches!(result, Err(ListCopyError::Config(_))));
    }

    #[test]
    fn test_wrong_copy_arity_is_config_error() {
        let result = Config::try_from(cli(None, Some(&["only-one"])));
        assert!(matches!(result, Err(ListCopyError::Config(_))));
    }
}

//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Copy any valid paths listed in SOURCE_FILE into a destination directory.
#[derive(Parser, Debug)]
#[command(
    name = "lcp",
    version,
    about = "Copies any valid files listed on separate lines of a source file into a destination directory.",
    after_help = "Blank lines and paths that do not exist are ignored.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// List all valid files in the source file
    #[arg(short, long, value_name = "SOURCE_FILE", conflicts_with = "copy")]
    pub list: Option<PathBuf>,

    /// Copy all files listed in SOURCE_FILE to DIRECTORY
    #[arg(short, long, num_args = 2, value_names = ["SOURCE_FILE", "DIRECTORY"])]
    pub copy: Option<Vec<PathBuf>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["lcp", "--list", "paths.txt"]).expect("parse --list");
        assert_eq!(cli.list, Some(PathBuf::from("paths.txt")));
        assert!(cli.copy.is_none());
    }

    #[test]
    fn test_parse_copy_short() {
        let cli = Cli::try_parse_from(["lcp", "-c", "paths.txt", "out"]).expect("parse -c");
        assert_eq!(
            cli.copy,
            Some(vec![PathBuf::from("paths.txt"), PathBuf::from("out")])
        );
    }

    #[test]
    fn test_copy_requires_two_values() {
        assert!(Cli::try_parse_from(["lcp", "--copy", "paths.txt"]).is_err());
    }

    #[test]
    fn test_list_and_copy_conflict() {
        let result =
            Cli::try_parse_from(["lcp", "-l", "paths.txt", "-c", "paths.txt", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

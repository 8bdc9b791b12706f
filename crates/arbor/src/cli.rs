//! Command-line options.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::app::arbor_home;

/// Terminal file-tree viewer that remembers the projects you open.
#[derive(Debug, Parser)]
#[command(name = "arbor", version, about, long_about = None)]
pub struct Cli {
    /// Directory to open on startup.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory holding the database and the log file (default: ~/.arbor).
    #[arg(long, env = "ARBOR_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, default_value_t = Level::INFO, value_name = "LEVEL")]
    pub log_level: Level,
}

impl Cli {
    /// Returns the effective arbor home directory.
    pub fn home_dir(&self) -> PathBuf {
        self.home.clone().unwrap_or_else(arbor_home)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        // Arrange & Act & Assert
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reads_path_home_and_level() {
        // Arrange
        let args = ["arbor", "--home", "/tmp/arbor-home", "--log-level", "debug", "src"];

        // Act
        let cli = Cli::try_parse_from(args).expect("failed to parse args");

        // Assert
        assert_eq!(cli.path, Some(PathBuf::from("src")));
        assert_eq!(cli.home_dir(), PathBuf::from("/tmp/arbor-home"));
        assert_eq!(cli.log_level, Level::DEBUG);
    }

    #[test]
    fn test_parse_rejects_unknown_log_level() {
        // Arrange
        let args = ["arbor", "--log-level", "loud"];

        // Act
        let result = Cli::try_parse_from(args);

        // Assert
        assert!(result.is_err());
    }
}

//! CLI commands using clap

use crate::domain::services::{DEFAULT_CFB_TARGET, DEFAULT_ZIP_TARGET, SortDirection};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hdrcheck - File header checker
///
/// Detects the real format of every file in a directory from its magic
/// bytes, compares it with the extension and files it under OK/,
/// Mismatch/ or Corrupted/.
#[derive(Parser)]
#[command(name = "hdrcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sort files by comparing their header with their extension", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check every file of a directory and move it into its bucket
    Check {
        /// Directory to check (not recursive)
        dir: PathBuf,

        /// Report file (default: check_results.txt next to the executable)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// JSON file with extra signatures
        #[arg(short, long)]
        signatures: Option<PathBuf>,

        /// Classify and report without moving files
        #[arg(long)]
        dry_run: bool,

        /// Log and skip files that cannot be opened or moved instead of aborting
        #[arg(long)]
        keep_going: bool,

        /// Format assumed for ZIP containers no signature identifies
        #[arg(long, default_value = DEFAULT_ZIP_TARGET)]
        zip_fallback: String,

        /// Format assumed for compound-binary containers no signature identifies
        #[arg(long, default_value = DEFAULT_CFB_TARGET)]
        cfb_fallback: String,

        /// Leave unidentified containers as Unknown
        #[arg(long, conflicts_with_all = ["zip_fallback", "cfb_fallback"])]
        no_fallback: bool,

        /// Order of the printed results, by file name
        #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
        sort: SortOrder,
    },

    /// List the signatures and fallback rules in use
    ListSignatures {
        /// JSON file with extra signatures
        #[arg(short, long)]
        signatures: Option<PathBuf>,
    },
}

/// Sort order for the result listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Ascending,
            SortOrder::Desc => SortDirection::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_defaults() {
        let cli = Cli::parse_from(["hdrcheck", "check", "/data"]);
        match cli.command {
            Commands::Check {
                dir,
                zip_fallback,
                cfb_fallback,
                sort,
                dry_run,
                ..
            } => {
                assert_eq!(dir, PathBuf::from("/data"));
                assert_eq!(zip_fallback, "XLSX");
                assert_eq!(cfb_fallback, "HWP");
                assert_eq!(sort, SortOrder::Asc);
                assert!(!dry_run);
            }
            Commands::ListSignatures { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn no_fallback_conflicts_with_targets() {
        let parsed = Cli::try_parse_from([
            "hdrcheck",
            "check",
            "/data",
            "--no-fallback",
            "--zip-fallback",
            "DOCX",
        ]);
        assert!(parsed.is_err());
    }
}

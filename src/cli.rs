use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::render::DisplayMode;

/// Duscope - shows the most informative entries of a du report
#[derive(Parser, Debug)]
#[command(name = "duscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to report on
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Number of output lines, excluding the total row
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub lines: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub format: Option<DisplayMode>,

    /// Label of the final total row
    #[arg(long, value_name = "LABEL")]
    pub total_label: Option<String>,

    /// Don't cross filesystem boundaries
    #[arg(short = 'x', long)]
    pub one_file_system: bool,

    /// Report apparent byte sizes instead of block usage (GNU du only)
    #[arg(long)]
    pub apparent_size: bool,

    /// Usage reporter binary to run
    #[arg(long, value_name = "BIN")]
    pub du_command: Option<String>,

    /// Over-acquisition factor for the candidate pool
    #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub scan_factor: Option<usize>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

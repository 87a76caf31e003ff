use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doccards")]
#[command(about = "Document cards in the terminal", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to a config file (or set DOCCARDS_CONFIG env var)
    #[arg(long, value_name = "FILE", env = "DOCCARDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory downloads are written to
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Start without the seeded cards
    #[arg(long)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the initial card collection as JSON
    Seed,
    /// Print the size label a card would show for each file
    Size {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

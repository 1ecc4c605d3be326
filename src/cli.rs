use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "md-book")]
#[command(about = "A CLI tool for flattening a tree of linked notes into a markdown book")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an index of chapters into a flattened book directory
    Convert(ConvertArgs),

    /// Parse an index and report its chapters without converting
    Inspect(InspectArgs),

    /// Delete the markdown files left in an output directory
    Clean(CleanArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Index file holding the ordered chapter list
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Directory receiving README.md, the chapter files and attachments
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Write a JSON report of the produced files
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Index file holding the ordered chapter list
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Write the chapter summary to a JSON file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Show each chapter's source and target paths
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Output directory to strip of markdown files
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,
}

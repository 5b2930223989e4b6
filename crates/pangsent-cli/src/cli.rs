use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pangsent")]
#[command(
    author,
    version,
    about = "Pangasinan/English feedback sentiment analyzer"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        default_value = "pangsent.yaml",
        env = "PANGSENT_CONFIG"
    )]
    pub config: String,

    /// Disable the translator and the remote model
    #[arg(long, global = true)]
    pub offline: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single piece of feedback
    Analyze {
        /// Feedback text
        text: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read feedback from stdin, one line at a time
    Interactive,

    /// Label every pending record of a JSON-lines feedback file
    Batch {
        /// Input file, one `{"id", "text", "sentiment"}` object per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output file receiving one update per analyzed record
        #[arg(short, long)]
        output: PathBuf,

        /// Records analyzed at the same time
        #[arg(long, default_value = "4", value_parser = parse_concurrency)]
        concurrency: usize,
    },
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

//! CLI entry point for the `gwalk` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_walk::cli::{commands, init_logging};
use graph_walk::WalkError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "gwalk — depth-first queries over JSON adjacency-map graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print reachable words shorter than a length threshold
    ShortWords {
        /// Path to the JSON adjacency map
        file: PathBuf,
        /// Starting vertex
        #[arg(long)]
        start: String,
        /// Exclusive upper bound on word length
        #[arg(long, allow_negative_numbers = true)]
        max_len: i64,
    },
    /// Print the longest reachable word
    Longest {
        /// Path to the JSON adjacency map
        file: PathBuf,
        /// Starting vertex
        #[arg(long)]
        start: String,
    },
    /// Print reachable vertices that list themselves as a neighbor
    SelfLoops {
        /// Path to the JSON adjacency map
        file: PathBuf,
        /// Starting vertex
        #[arg(long)]
        start: String,
    },
    /// Decide whether one airport can be reached from another
    CanReach {
        /// Path to the JSON route map
        file: PathBuf,
        /// Origin airport code
        #[arg(long)]
        from: String,
        /// Destination airport code
        #[arg(long)]
        to: String,
    },
    /// Print keys that cannot be reached from a starting vertex
    Unreachable {
        /// Path to the JSON adjacency map
        file: PathBuf,
        /// Starting vertex
        #[arg(long)]
        start: String,
    },
    /// Print every reachable vertex in depth-first order
    Walk {
        /// Path to the JSON adjacency map
        file: PathBuf,
        /// Starting vertex
        #[arg(long)]
        start: String,
    },
    /// Display summary counts for a graph file
    Info {
        /// Path to the JSON adjacency map
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::ShortWords {
            file,
            start,
            max_len,
        } => commands::cmd_short_words(&file, &start, max_len, json, &mut out),
        Commands::Longest { file, start } => commands::cmd_longest(&file, &start, json, &mut out),
        Commands::SelfLoops { file, start } => {
            commands::cmd_self_loops(&file, &start, json, &mut out)
        }
        Commands::CanReach { file, from, to } => {
            commands::cmd_can_reach(&file, &from, &to, json, &mut out)
        }
        Commands::Unreachable { file, start } => {
            commands::cmd_unreachable(&file, &start, json, &mut out)
        }
        Commands::Walk { file, start } => commands::cmd_walk(&file, &start, json, &mut out),
        Commands::Info { file } => commands::cmd_info(&file, json, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            WalkError::Io(_) => 1,
            WalkError::Json(_) => 2,
            _ => 5,
        };
        process::exit(code);
    }
}

use clap::Parser;
use degrees_core::{SearchConfig, Strategy};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "large";

#[derive(Parser, Debug, Clone)]
#[command(name = "degrees")]
#[command(about = "Find the degrees of separation between two actors")]
pub struct Args {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(value_name = "DIRECTORY", default_value = DEFAULT_DATA_DIR)]
    pub directory: PathBuf,

    /// Search strategy: bfs (shortest path) or dfs
    #[arg(short, long, value_name = "STRATEGY", default_value = "bfs", value_parser = parse_strategy)]
    pub strategy: Strategy,

    /// Give up after expanding this many people
    #[arg(short = 'x', long, value_name = "COUNT")]
    pub max_expansions: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the degree count
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.strategy, self.max_expansions)
    }
}

fn parse_strategy(value: &str) -> Result<Strategy, String> {
    match value.to_lowercase().as_str() {
        "bfs" | "dfs" => Ok(Strategy::from(value)),
        _ => Err(format!("unknown strategy '{}', expected bfs or dfs", value)),
    }
}

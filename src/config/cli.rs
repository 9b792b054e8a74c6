use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "calc-ticker")]
#[command(about = "Prints the sum of two integers at a fixed interval")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Left operand (default: 5)
    #[arg(long, allow_hyphen_values = true)]
    pub lhs: Option<i32>,

    /// Right operand (default: 3)
    #[arg(long, allow_hyphen_values = true)]
    pub rhs: Option<i32>,

    /// Delay between iterations in milliseconds (default: 1000)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Stop after this many iterations; 0 runs forever
    #[arg(short = 'n', long)]
    pub max_iterations: Option<u64>,

    /// Report format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,
}

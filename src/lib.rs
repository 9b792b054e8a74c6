pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::ConsoleSink;
pub use config::{TickerConfig, TomlConfig};
pub use core::{machine::CalculationMachine, ticker::TickerEngine};
pub use domain::model::{OutputFormat, RunSummary, SumReport};
pub use utils::error::{Result, TickerError};

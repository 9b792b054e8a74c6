#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_LHS: i32 = 5;
pub const DEFAULT_RHS: i32 = 3;
pub const DEFAULT_INTERVAL_MS: u64 = 1000;
pub const MAX_INTERVAL_MS: u64 = 86_400_000;

/// Settings after layering defaults, the TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerConfig {
    pub lhs: i32,
    pub rhs: i32,
    pub interval_ms: u64,
    pub max_iterations: u64,
    pub format: OutputFormat,
    pub monitor: bool,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            lhs: DEFAULT_LHS,
            rhs: DEFAULT_RHS,
            interval_ms: DEFAULT_INTERVAL_MS,
            max_iterations: 0,
            format: OutputFormat::Text,
            monitor: false,
            log_level: None,
            verbose: false,
        }
    }
}

impl TickerConfig {
    /// Fails only on an unknown `output.format`; ranges are checked by `validate`.
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let defaults = Self::default();
        let format = match &file.output.format {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };

        Ok(Self {
            lhs: file.calculation.lhs.unwrap_or(defaults.lhs),
            rhs: file.calculation.rhs.unwrap_or(defaults.rhs),
            interval_ms: file.schedule.interval_ms.unwrap_or(defaults.interval_ms),
            max_iterations: file.schedule.max_iterations.unwrap_or(defaults.max_iterations),
            format,
            monitor: file.monitoring.enabled,
            log_level: file.monitoring.log_level.clone(),
            verbose: false,
        })
    }

    /// 命令列參數覆蓋檔案設定
    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Result<Self> {
        if let Some(lhs) = cli.lhs {
            self.lhs = lhs;
        }
        if let Some(rhs) = cli.rhs {
            self.rhs = rhs;
        }
        if let Some(interval_ms) = cli.interval_ms {
            self.interval_ms = interval_ms;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.max_iterations = max_iterations;
        }
        if let Some(format) = &cli.format {
            self.format = format.parse()?;
        }
        self.monitor |= cli.monitor;
        self.verbose = cli.verbose;
        Ok(self)
    }

    /// Loads the file named by `--config` (if any) and layers the flags on top.
    #[cfg(feature = "cli")]
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let config = Self::from_toml(&file)?.apply_cli(cli)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TickerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("schedule.interval_ms", self.interval_ms, 1, MAX_INTERVAL_MS)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("monitoring.log_level", level)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TickerConfig {
    fn lhs(&self) -> i32 {
        self.lhs
    }

    fn rhs(&self) -> i32 {
        self.rhs
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn max_iterations(&self) -> Option<u64> {
        (self.max_iterations > 0).then_some(self.max_iterations)
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

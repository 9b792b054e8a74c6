use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::TickerError;

/// One computed sum, produced once per loop iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumReport {
    pub iteration: u64,
    pub lhs: i32,
    pub rhs: i32,
    pub sum: i32,
    pub timestamp: DateTime<Utc>,
}

impl SumReport {
    pub fn line(&self) -> String {
        format!("Sum of {} and {} = {}", self.lhs, self.rhs, self.sum)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALUES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TickerError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::VALUES.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    pub elapsed: std::time::Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_matches_console_format() {
        let report = SumReport {
            iteration: 1,
            lhs: 5,
            rhs: 3,
            sum: 8,
            timestamp: Utc::now(),
        };
        assert_eq!(report.line(), "Sum of 5 and 3 = 8");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}

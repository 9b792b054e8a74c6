use crate::utils::error::{Result, TickerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub calculation: CalculationConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationConfig {
    pub lhs: Option<i32>,
    pub rhs: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    pub interval_ms: Option<u64>,
    /// 0 表示無限執行
    pub max_iterations: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TickerError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TICKER_LHS})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TickerError::ConfigParseError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[calculation]
lhs = 40
rhs = 2

[schedule]
interval_ms = 250
max_iterations = 4

[output]
format = "json"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.calculation.lhs, Some(40));
        assert_eq!(config.calculation.rhs, Some(2));
        assert_eq!(config.schedule.interval_ms, Some(250));
        assert_eq!(config.schedule.max_iterations, Some(4));
        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert!(config.monitoring.enabled);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CALC_TICKER_TEST_LHS", "11");

        let toml_content = r#"
[calculation]
lhs = ${CALC_TICKER_TEST_LHS}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.calculation.lhs, Some(11));

        std::env::remove_var("CALC_TICKER_TEST_LHS");
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let result = TomlConfig::from_toml_str("[source]\nendpoint = \"x\"\n");
        assert!(matches!(result, Err(TickerError::ConfigParseError { .. })));
    }

    #[test]
    fn test_misspelled_key_is_rejected() {
        // `interval` 不是合法欄位，不能被靜默忽略
        let result = TomlConfig::from_toml_str("[schedule]\ninterval = 250\n");
        match result {
            Err(TickerError::ConfigParseError { message, .. }) => {
                assert!(message.contains("interval"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }

        assert!(TomlConfig::from_toml_str("[calculation]\nleft = 1\n").is_err());
        assert!(TomlConfig::from_toml_str("[output]\nfmt = \"json\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[monitoring]\nenable = true\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[schedule]\ninterval_ms = 500\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.schedule.interval_ms, Some(500));
    }
}

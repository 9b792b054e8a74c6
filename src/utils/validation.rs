use crate::utils::error::{Result, TickerError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TickerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(TickerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_log_level(field_name: &str, value: &str) -> Result<()> {
    validate_one_of(field_name, value, &LOG_LEVELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("schedule.interval_ms", 1000u64, 1, 86_400_000).is_ok());
        assert!(validate_range("schedule.interval_ms", 0u64, 1, 86_400_000).is_err());
        assert!(validate_range("schedule.interval_ms", 86_400_001u64, 1, 86_400_000).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "JSON", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("monitoring.log_level", "warn").is_ok());
        assert!(validate_log_level("monitoring.log_level", "loud").is_err());
    }
}

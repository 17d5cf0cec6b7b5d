use std::collections::HashSet;

use crate::ConfigResult;

/// Trait for configuration validation
pub trait ConfigValidator {
    fn validate(&self) -> ConfigResult<()>;
}

/// General validation utilities
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field_name: &str) -> ConfigResult<()> {
        if value.trim().is_empty() {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} cannot be empty"
            )));
        }
        Ok(())
    }

    /// Validate that a signed value is strictly positive
    pub fn validate_positive(value: i32, field_name: &str) -> ConfigResult<()> {
        if value <= 0 {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must be greater than 0"
            )));
        }
        Ok(())
    }

    /// Validate that a tick interval is reasonable
    pub fn validate_interval_ms(interval_ms: u64, field_name: &str) -> ConfigResult<()> {
        if interval_ms == 0 {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must be greater than 0"
            )));
        }
        if interval_ms > 60_000 {
            return Err(crate::ConfigError::Validation(format!(
                "{field_name} must be less than or equal to 60000"
            )));
        }
        Ok(())
    }

    /// Validate that a list of ids has no duplicates
    pub fn validate_unique_ids(ids: &[i32], field_name: &str) -> ConfigResult<()> {
        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            if !seen.insert(*id) {
                return Err(crate::ConfigError::Validation(format!(
                    "{field_name} contains duplicate id {id}"
                )));
            }
        }
        Ok(())
    }

    /// Validate that a value is one of the accepted options
    pub fn validate_one_of(value: &str, options: &[&str], field_name: &str) -> ConfigResult<()> {
        if !options.contains(&value) {
            return Err(crate::ConfigError::Validation(format!(
                "Invalid {field_name}: {value}. Valid options: {options:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(ValidationUtils::validate_not_empty("test", "field").is_ok());
        assert!(ValidationUtils::validate_not_empty("  test  ", "field").is_ok());
        assert!(ValidationUtils::validate_not_empty("", "field").is_err());
        assert!(ValidationUtils::validate_not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(ValidationUtils::validate_positive(1, "range").is_ok());
        assert!(ValidationUtils::validate_positive(0, "range").is_err());
        assert!(ValidationUtils::validate_positive(-3, "range").is_err());
    }

    #[test]
    fn test_validate_interval_ms() {
        assert!(ValidationUtils::validate_interval_ms(1, "tick").is_ok());
        assert!(ValidationUtils::validate_interval_ms(60_000, "tick").is_ok());
        assert!(ValidationUtils::validate_interval_ms(0, "tick").is_err());
        assert!(ValidationUtils::validate_interval_ms(60_001, "tick").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(ValidationUtils::validate_unique_ids(&[], "elevators").is_ok());
        assert!(ValidationUtils::validate_unique_ids(&[1, 2, 3], "elevators").is_ok());
        let err = ValidationUtils::validate_unique_ids(&[1, 2, 1], "elevators").unwrap_err();
        assert!(err.to_string().contains("duplicate id 1"));
    }

    #[test]
    fn test_validate_one_of() {
        let options = ["directional", "closest"];
        assert!(ValidationUtils::validate_one_of("closest", &options, "strategy").is_ok());
        assert!(ValidationUtils::validate_one_of("random", &options, "strategy").is_err());
    }
}

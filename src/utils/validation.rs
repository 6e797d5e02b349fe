use crate::utils::error::{EvolutionError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EvolutionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();

    if !allowed_set.contains(value.to_lowercase().as_str()) {
        return Err(EvolutionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| EvolutionError::MissingConfigError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("strategy", "linear").is_ok());
        assert!(validate_non_empty_string("strategy", "").is_err());
        assert!(validate_non_empty_string("strategy", "   ").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let allowed = ["linear", "accelerated"];
        assert!(validate_one_of("strategy", "linear", &allowed).is_ok());
        assert!(validate_one_of("strategy", "Accelerated", &allowed).is_ok());
        assert!(validate_one_of("strategy", "quantum", &allowed).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        let missing: Option<String> = None;
        assert!(validate_required_field("field", &present).is_ok());
        assert!(validate_required_field("field", &missing).is_err());
    }
}

use crate::utils::error::{ApiError, Result};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Coerce a JSON value into an integer. Numeric strings are parsed and float
/// values truncate toward zero; anything else is a validation failure.
pub fn coerce_int(field_name: &str, value: Option<&Value>) -> Result<i64> {
    let value = value.ok_or_else(|| ApiError::Validation {
        field: field_name.to_string(),
        reason: "field is required".to_string(),
    })?;

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i64)
            } else {
                Err(ApiError::Validation {
                    field: field_name.to_string(),
                    reason: format!("Cannot convert {} to an integer", n),
                })
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| ApiError::Validation {
            field: field_name.to_string(),
            reason: format!("Cannot convert '{}' to an integer", s),
        }),
        other => Err(ApiError::Validation {
            field: field_name.to_string(),
            reason: format!("Expected an integer, got {}", other),
        }),
    }
}

pub fn validate_range(field_name: &str, value: i64, min: i64, max: i64) -> Result<i64> {
    if value < min || value > max {
        return Err(ApiError::Validation {
            field: field_name.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(value)
}

pub fn validate_non_empty_string(field_name: &str, value: Option<&str>) -> Result<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(ApiError::Validation {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        }),
        None => Err(ApiError::Validation {
            field: field_name.to_string(),
            reason: "field is required".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int("age", Some(&json!(12))).unwrap(), 12);
        assert_eq!(coerce_int("age", Some(&json!("12"))).unwrap(), 12);
        assert_eq!(coerce_int("age", Some(&json!(" 12 "))).unwrap(), 12);
        assert_eq!(coerce_int("age", Some(&json!(12.7))).unwrap(), 12);
        assert!(coerce_int("age", Some(&json!("twelve"))).is_err());
        assert!(coerce_int("age", Some(&json!("12.5"))).is_err());
        assert!(coerce_int("age", Some(&json!(null))).is_err());
        assert!(coerce_int("age", Some(&json!([1, 2]))).is_err());
        assert!(coerce_int("age", None).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("age", 8, 8, 18).is_ok());
        assert!(validate_range("age", 18, 8, 18).is_ok());
        assert!(validate_range("age", 7, 8, 18).is_err());
        assert!(validate_range("age", 19, 8, 18).is_err());
        assert!(validate_range("time", 0, 0, 23).is_ok());
        assert!(validate_range("time", 24, 0, 23).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert_eq!(
            validate_non_empty_string("name", Some("Amy")).unwrap(),
            "Amy"
        );
        assert!(validate_non_empty_string("name", Some("")).is_err());
        assert!(validate_non_empty_string("name", Some("   ")).is_err());
        assert!(validate_non_empty_string("name", None).is_err());
    }
}

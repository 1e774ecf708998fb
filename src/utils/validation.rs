use crate::utils::error::{AnniversaryError, Result};
use chrono::NaiveDate;
use lettre::message::Mailbox;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AnniversaryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnniversaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AnniversaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 解析 ISO 日期 (YYYY-MM-DD)
pub fn validate_iso_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|e| {
        AnniversaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected an ISO date (YYYY-MM-DD): {}", e),
        }
    })
}

pub fn validate_mailbox(field_name: &str, value: &str) -> Result<Mailbox> {
    value
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| AnniversaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid email address: {}", e),
        })
}

pub fn validate_topic_arn(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    // arn:aws:sns:<region>:<account>:<topic>
    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() < 6 || parts[0] != "arn" || parts[2] != "sns" {
        return Err(AnniversaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected an SNS topic ARN like arn:aws:sns:<region>:<account>:<topic>"
                .to_string(),
        });
    }
    Ok(())
}

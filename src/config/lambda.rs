use crate::config::toml_config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub config_path: String,
    pub topic_arn: Option<String>,
    pub region: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self {
            config_path: env::var("ANNIVERSARY_CONFIG")
                .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
            topic_arn: env::var("SNS_TOPIC_ARN").ok().filter(|v| !v.trim().is_empty()),
            region: env::var("AWS_REGION").ok().filter(|v| !v.trim().is_empty()),
        }
    }

    /// SNS_TOPIC_ARN 優先於設定檔的 [sns].topic_arn
    pub fn resolve_topic_arn(&self, app_config: &AppConfig) -> Result<String> {
        match &self.topic_arn {
            Some(topic_arn) => {
                validation::validate_topic_arn("SNS_TOPIC_ARN", topic_arn)?;
                Ok(topic_arn.trim().to_string())
            }
            None => Ok(app_config.topic_arn()?.to_string()),
        }
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("ANNIVERSARY_CONFIG", &self.config_path)?;

        if let Some(region) = &self.region {
            validate_aws_region("AWS_REGION", region)?;
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    use crate::utils::error::AnniversaryError;

    validation::validate_non_empty_string(field_name, region)?;

    // AWS region format validation
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AnniversaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config(sns: bool) -> AppConfig {
        let mut content = String::from(
            "[event]\noriginal_date = \"2004-05-01\"\nnames = \"A and J\"\ndid_this = \"were married\"\n",
        );
        if sns {
            content.push_str("[sns]\ntopic_arn = \"arn:aws:sns:us-east-1:123456789012:from-file\"\n");
        }
        AppConfig::from_toml_str(&content).unwrap()
    }

    #[test]
    fn test_topic_from_file_when_no_override() {
        let config = LambdaConfig {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            topic_arn: None,
            region: None,
        };
        assert_eq!(
            config.resolve_topic_arn(&app_config(true)).unwrap(),
            "arn:aws:sns:us-east-1:123456789012:from-file"
        );
        assert!(config.resolve_topic_arn(&app_config(false)).is_err());
    }

    #[test]
    fn test_env_override_wins() {
        let config = LambdaConfig {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            topic_arn: Some("arn:aws:sns:eu-west-1:123456789012:override".to_string()),
            region: Some("eu-west-1".to_string()),
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.resolve_topic_arn(&app_config(false)).unwrap(),
            "arn:aws:sns:eu-west-1:123456789012:override"
        );
    }

    #[test]
    fn test_invalid_region() {
        let config = LambdaConfig {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            topic_arn: None,
            region: Some("EU West".to_string()),
        };
        assert!(config.validate().is_err());
    }
}

use crate::domain::model::AnniversaryEvent;
use crate::utils::error::{AnniversaryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "anniversary.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub event: EventConfig,
    pub email: Option<EmailConfig>,
    pub smtp: Option<SmtpConfig>,
    pub sns: Option<SnsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub original_date: String,
    pub names: String,
    pub did_this: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub fromaddr: String,
    /// 以空白分隔的收件人
    pub toaddrs: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub starttls: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsConfig {
    pub topic_arn: String,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnniversaryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SMTP_PASSWORD}); 未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnniversaryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 建立不可變的週年事件
    pub fn event(&self) -> Result<AnniversaryEvent> {
        let wedding_date =
            validation::validate_iso_date("event.original_date", &self.event.original_date)?;
        validation::validate_non_empty_string("event.names", &self.event.names)?;
        validation::validate_non_empty_string("event.did_this", &self.event.did_this)?;

        Ok(AnniversaryEvent::new(
            wedding_date,
            self.event.names.trim(),
            self.event.did_this.trim(),
        ))
    }

    /// 寄送 email 需要 [email] 與 [smtp] 兩個區段
    pub fn email_settings(&self) -> Result<(&EmailConfig, &SmtpConfig)> {
        let email = validation::validate_required_field("email", &self.email)?;
        let smtp = validation::validate_required_field("smtp", &self.smtp)?;
        email.validate()?;
        smtp.validate()?;
        Ok((email, smtp))
    }

    pub fn topic_arn(&self) -> Result<&str> {
        let sns = validation::validate_required_field("sns", &self.sns)?;
        sns.validate()?;
        Ok(sns.topic_arn.trim())
    }
}

impl EmailConfig {
    pub fn recipients(&self) -> Vec<&str> {
        self.toaddrs.split_whitespace().collect()
    }
}

impl SmtpConfig {
    pub fn starttls(&self) -> bool {
        self.starttls.unwrap_or(true)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.event()?;

        if let Some(email) = &self.email {
            email.validate()?;
        }
        if let Some(smtp) = &self.smtp {
            smtp.validate()?;
        }
        if let Some(sns) = &self.sns {
            sns.validate()?;
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

impl Validate for EmailConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_mailbox("email.fromaddr", &self.fromaddr)?;

        let recipients = self.recipients();
        if recipients.is_empty() {
            return Err(AnniversaryError::InvalidConfigValueError {
                field: "email.toaddrs".to_string(),
                value: self.toaddrs.clone(),
                reason: "At least one recipient is required".to_string(),
            });
        }
        for recipient in recipients {
            validation::validate_mailbox("email.toaddrs", recipient)?;
        }
        Ok(())
    }
}

impl Validate for SmtpConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("smtp.host", &self.host)?;
        validation::validate_range("smtp.port", self.port, 1, u16::MAX)?;
        validation::validate_non_empty_string("smtp.username", &self.username)?;
        validation::validate_non_empty_string("smtp.password", &self.password)?;
        Ok(())
    }
}

impl Validate for SnsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_topic_arn("sns.topic_arn", &self.topic_arn)
    }
}

use crate::config::toml_config::DEFAULT_CONFIG_PATH;
use crate::utils::error::{AnniversaryError, Result};
use crate::utils::validation;
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "anniversary")]
#[command(about = "Calculate the days, weeks and months since the wedding")]
pub struct CliConfig {
    /// Print anniversary calculations to stdout
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Send anniversary calculations by email
    #[arg(short, long)]
    pub email: bool,

    /// Path to TOML configuration file
    #[arg(short, long, env = "ANNIVERSARY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Calculate as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// 沒有指定任何輸出方式時只顯示用法
    pub fn has_delivery(&self) -> bool {
        self.print || self.email
    }

    pub fn today_override(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|value| validation::validate_iso_date("--today", value))
            .transpose()
    }

    pub fn validate_path(&self) -> Result<()> {
        if self.config.trim().is_empty() || self.config.contains('\0') {
            return Err(AnniversaryError::InvalidConfigValueError {
                field: "--config".to_string(),
                value: self.config.clone(),
                reason: "Path cannot be empty or contain null bytes".to_string(),
            });
        }
        Ok(())
    }
}

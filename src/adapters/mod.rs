// Adapters layer: concrete notifiers for external systems (stdout, smtp, sns).

pub mod console;
pub mod email;
#[cfg(feature = "lambda")]
pub mod sns;

use crate::config::toml_config::AppConfig;
use crate::domain::model::Delivery;
use crate::domain::ports::Notify;
use crate::utils::error::Result;
use async_trait::async_trait;

pub use console::ConsoleNotifier;
pub use email::EmailNotifier;
#[cfg(feature = "lambda")]
pub use sns::SnsNotifier;

/// Subject line for email and SNS deliveries.
pub const SUBJECT: &str = "Anniversary Calculations";

pub enum Notifier {
    Console(ConsoleNotifier),
    Email(EmailNotifier),
    #[cfg(feature = "lambda")]
    Sns(SnsNotifier),
}

impl Notifier {
    pub fn console() -> Self {
        Notifier::Console(ConsoleNotifier::new())
    }

    pub fn email(config: &AppConfig) -> Result<Self> {
        let (email, smtp) = config.email_settings()?;
        Ok(Notifier::Email(EmailNotifier::from_config(email, smtp)?))
    }

    #[cfg(feature = "lambda")]
    pub async fn sns(topic_arn: String, region: Option<String>) -> Self {
        Notifier::Sns(SnsNotifier::from_env(topic_arn, region).await)
    }
}

#[async_trait]
impl Notify for Notifier {
    fn channel(&self) -> &'static str {
        match self {
            Notifier::Console(n) => n.channel(),
            Notifier::Email(n) => n.channel(),
            #[cfg(feature = "lambda")]
            Notifier::Sns(n) => n.channel(),
        }
    }

    async fn send(&self, message: &str) -> Result<Delivery> {
        match self {
            Notifier::Console(n) => n.send(message).await,
            Notifier::Email(n) => n.send(message).await,
            #[cfg(feature = "lambda")]
            Notifier::Sns(n) => n.send(message).await,
        }
    }
}

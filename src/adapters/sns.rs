use crate::adapters::SUBJECT;
use crate::domain::model::Delivery;
use crate::domain::ports::Notify;
use crate::utils::error::{AnniversaryError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_sns::Client as SnsClient;

#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: SnsClient,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: SnsClient, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }

    /// 以預設憑證鏈建立 SNS client, 可選擇覆寫區域
    pub async fn from_env(topic_arn: String, region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;

        Self::new(SnsClient::new(&config), topic_arn)
    }

    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl Notify for SnsNotifier {
    fn channel(&self) -> &'static str {
        "sns"
    }

    async fn send(&self, message: &str) -> Result<Delivery> {
        tracing::debug!("Publishing to SNS topic {}", self.topic_arn);

        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(SUBJECT)
            .message(message)
            .send()
            .await
            .map_err(|e| AnniversaryError::NotificationError {
                channel: self.channel().to_string(),
                message: format!(
                    "{} ({})",
                    DisplayErrorContext(&e),
                    e.code().unwrap_or("no error code")
                ),
            })?;

        Ok(Delivery::new(self.channel())
            .with_message_id(output.message_id().map(str::to_string))
            .with_sequence_number(output.sequence_number().map(str::to_string)))
    }
}

use crate::adapters::SUBJECT;
use crate::config::toml_config::{EmailConfig, SmtpConfig};
use crate::domain::model::Delivery;
use crate::domain::ports::Notify;
use crate::utils::error::{AnniversaryError, Result};
use crate::utils::validation::validate_mailbox;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

pub struct EmailNotifier<T = AsyncSmtpTransport<Tokio1Executor>> {
    transport: T,
    from: Mailbox,
    to: Vec<Mailbox>,
}

impl EmailNotifier {
    /// 依 [smtp] 區段建立 SMTP 連線設定 (實際連線在送信時才建立)
    pub fn from_config(email: &EmailConfig, smtp: &SmtpConfig) -> Result<Self> {
        let builder = if smtp.starttls() {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp.host.trim()).map_err(|e| {
                AnniversaryError::InvalidConfigValueError {
                    field: "smtp.host".to_string(),
                    value: smtp.host.clone(),
                    reason: format!("Cannot configure STARTTLS relay: {}", e),
                }
            })?
        } else {
            tracing::warn!("⚠️ STARTTLS disabled, SMTP credentials are sent in plain text");
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(smtp.host.trim())
        };

        let transport = builder
            .port(smtp.port)
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build();

        tracing::debug!(
            "SMTP transport configured for {}:{} (starttls: {})",
            smtp.host,
            smtp.port,
            smtp.starttls()
        );

        Self::with_transport(transport, email)
    }
}

impl<T> EmailNotifier<T> {
    pub fn with_transport(transport: T, email: &EmailConfig) -> Result<Self> {
        let from = validate_mailbox("email.fromaddr", &email.fromaddr)?;
        let to = email
            .recipients()
            .into_iter()
            .map(|recipient| validate_mailbox("email.toaddrs", recipient))
            .collect::<Result<Vec<_>>>()?;

        if to.is_empty() {
            return Err(AnniversaryError::MissingConfigError {
                field: "email.toaddrs".to_string(),
            });
        }

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 組出含 Date / From / Subject / To 標頭的郵件
    pub fn build_message(&self, body: &str) -> Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(SUBJECT)
            .date_now()
            .header(ContentType::TEXT_PLAIN);

        for recipient in &self.to {
            builder = builder.to(recipient.clone());
        }

        builder
            .body(body.to_string())
            .map_err(|e| AnniversaryError::NotificationError {
                channel: "email".to_string(),
                message: format!("Failed to build message: {}", e),
            })
    }
}

#[async_trait]
impl<T> Notify for EmailNotifier<T>
where
    T: AsyncTransport + Send + Sync,
    T::Error: std::fmt::Display,
{
    fn channel(&self) -> &'static str {
        "email"
    }

    async fn send(&self, message: &str) -> Result<Delivery> {
        let email = self.build_message(message)?;
        tracing::debug!("Sending email to {} recipient(s)", self.to.len());

        self.transport
            .send(email)
            .await
            .map_err(|e| AnniversaryError::NotificationError {
                channel: self.channel().to_string(),
                message: e.to_string(),
            })?;

        Ok(Delivery::new(self.channel()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettre::transport::stub::AsyncStubTransport;

    fn email_config(toaddrs: &str) -> EmailConfig {
        EmailConfig {
            fromaddr: "jim@example.com".to_string(),
            toaddrs: toaddrs.to_string(),
        }
    }

    #[test]
    fn test_message_headers() {
        let notifier = EmailNotifier::with_transport(
            AsyncStubTransport::new_ok(),
            &email_config("annelies@example.com jim@example.com"),
        )
        .unwrap();

        let message = notifier.build_message("It has been 0 days since the wedding.").unwrap();
        let envelope = message.envelope();
        assert_eq!(envelope.to().len(), 2);
        assert_eq!(
            envelope.from().map(|a| a.to_string()),
            Some("jim@example.com".to_string())
        );

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Anniversary Calculations"));
        assert!(raw.contains("Date: "));
        assert!(raw.contains("It has been 0 days since the wedding."));
    }

    #[test]
    fn test_requires_recipient() {
        let result = EmailNotifier::with_transport(AsyncStubTransport::new_ok(), &email_config(" "));
        assert!(matches!(
            result,
            Err(AnniversaryError::MissingConfigError { .. })
        ));
    }

    #[tokio::test]
    async fn test_send_through_stub_transport() {
        let notifier = EmailNotifier::with_transport(
            AsyncStubTransport::new_ok(),
            &email_config("annelies@example.com"),
        )
        .unwrap();

        let delivery = notifier.send("Today is Saturday, May 01, 2004.").await.unwrap();
        assert_eq!(delivery.channel, "email");

        let sent = notifier.transport().messages().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("Today is Saturday, May 01, 2004."));
    }

    #[tokio::test]
    async fn test_transport_failure_is_notification_error() {
        let notifier = EmailNotifier::with_transport(
            AsyncStubTransport::new_error(),
            &email_config("annelies@example.com"),
        )
        .unwrap();

        let err = notifier.send("hello").await.unwrap_err();
        assert!(matches!(
            err,
            AnniversaryError::NotificationError { ref channel, .. } if channel == "email"
        ));
        assert_eq!(err.exit_code(), 2);
    }
}

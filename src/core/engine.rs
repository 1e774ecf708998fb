use crate::core::calculator::AnniversaryCalculator;
use crate::domain::model::{AnniversaryEvent, Delivery, Report};
use crate::domain::ports::{Clock, Notify};
use crate::utils::error::{AnniversaryError, Result};

pub struct AnniversaryEngine<C: Clock> {
    calculator: AnniversaryCalculator,
    clock: C,
}

impl<C: Clock> AnniversaryEngine<C> {
    pub fn new(event: AnniversaryEvent, clock: C) -> Self {
        Self {
            calculator: AnniversaryCalculator::new(event),
            clock,
        }
    }

    /// 以時鐘的今天計算報告; 婚禮日期在未來視為設定錯誤
    pub fn report(&self) -> Result<Report> {
        let today = self.clock.today();
        let wedding_date = self.calculator.event().wedding_date;

        if today < wedding_date {
            return Err(AnniversaryError::InvalidConfigValueError {
                field: "event.original_date".to_string(),
                value: wedding_date.to_string(),
                reason: format!("Wedding date is after today ({})", today),
            });
        }

        let report = self.calculator.report(today);
        tracing::debug!(
            "Calculated report for {}: {} days, {} weeks, {} months",
            report.today,
            report.days_elapsed,
            report.weeks_elapsed,
            report.months_elapsed
        );
        Ok(report)
    }

    pub async fn deliver<N: Notify + ?Sized>(
        &self,
        notifier: &N,
        report: &Report,
    ) -> Result<Delivery> {
        tracing::info!("📨 Sending anniversary message via {}", notifier.channel());

        match notifier.send(&report.rendered_text).await {
            Ok(delivery) => {
                tracing::info!(
                    "✅ Delivered via {} (message id: {})",
                    delivery.channel,
                    delivery.message_id.as_deref().unwrap_or("-")
                );
                Ok(delivery)
            }
            Err(e) => {
                tracing::error!("❌ Delivery via {} failed: {}", notifier.channel(), e);
                Err(e)
            }
        }
    }

    /// 計算一次報告, 依序送往每個通知管道, 遇到第一個錯誤即停止
    pub async fn run<N: Notify>(&self, notifiers: &[N]) -> Result<(Report, Vec<Delivery>)> {
        let report = self.report()?;

        let mut deliveries = Vec::with_capacity(notifiers.len());
        for notifier in notifiers {
            deliveries.push(self.deliver(notifier, &report).await?);
        }

        Ok((report, deliveries))
    }
}

use crate::domain::model::Delivery;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// 今天的日期來源; 測試時注入固定日期
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[async_trait]
pub trait Notify: Send + Sync {
    /// Short channel name used in logs, errors and receipts.
    fn channel(&self) -> &'static str;

    async fn send(&self, message: &str) -> Result<Delivery>;
}

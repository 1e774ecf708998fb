use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 週年事件: 從設定檔 `[event]` 區段建立, 建立後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnniversaryEvent {
    pub wedding_date: NaiveDate,
    pub names: String,
    pub verb_phrase: String,
}

impl AnniversaryEvent {
    pub fn new(
        wedding_date: NaiveDate,
        names: impl Into<String>,
        verb_phrase: impl Into<String>,
    ) -> Self {
        Self {
            wedding_date,
            names: names.into(),
            verb_phrase: verb_phrase.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub wedding_date: NaiveDate,
    pub today: NaiveDate,
    pub days_elapsed: i64,
    pub next_saturday: NaiveDate,
    pub weeks_elapsed: i64,
    pub first_of_next_month: NaiveDate,
    pub months_elapsed: i64,
    pub rendered_text: String,
}

/// Receipt returned by a notifier after a successful send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

impl Delivery {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            message_id: None,
            sequence_number: None,
        }
    }

    pub fn with_message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn with_sequence_number(mut self, sequence_number: Option<String>) -> Self {
        self.sequence_number = sequence_number;
        self
    }
}

/// Lambda 回傳內容: 訊息本文與通知回條
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaResponse {
    pub message: String,
    pub notification_response: Delivery,
}

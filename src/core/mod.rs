pub mod calculator;
pub mod engine;

pub use crate::domain::model::{AnniversaryEvent, Delivery, Report};
pub use crate::domain::ports::{Clock, FixedClock, Notify, SystemClock};
pub use crate::utils::error::Result;

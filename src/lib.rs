pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::Notifier;
pub use config::AppConfig;
pub use crate::core::{calculator::AnniversaryCalculator, engine::AnniversaryEngine};
pub use domain::model::{AnniversaryEvent, Delivery, LambdaResponse, Report};
pub use domain::ports::{Clock, FixedClock, Notify, SystemClock};
pub use utils::error::{AnniversaryError, Result};

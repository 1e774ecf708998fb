use crate::domain::model::Delivery;
use crate::domain::ports::Notify;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::{Stdout, Write};
use std::sync::Mutex;

pub struct ConsoleNotifier<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> Notify for ConsoleNotifier<W> {
    fn channel(&self) -> &'static str {
        "stdout"
    }

    async fn send(&self, message: &str) -> Result<Delivery> {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        writeln!(out, "{}", message)?;
        out.flush()?;
        Ok(Delivery::new(self.channel()))
    }
}

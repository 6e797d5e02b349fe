use crate::domain::ports::MessageSink;
use crate::utils::error::Result;
use std::io::Write;

/// CLI 的訊息出口：標準輸出。
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for StdoutSink {
    async fn deliver(&self, message: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", message)?;
        stdout.flush()?;
        Ok(())
    }
}

use crate::core::{OutputFormat, ReportSink, SumReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::{Stdout, Write};
use std::sync::Mutex;

/// Writes one line per report to any `Write` target.
pub struct ConsoleSink<W: Write + Send> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl ConsoleSink<Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn render(&self, report: &SumReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(report.line()),
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> ReportSink for ConsoleSink<W> {
    async fn emit(&self, report: &SumReport) -> Result<()> {
        let line = self.render(report)?;
        let mut writer = match self.writer.lock() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        };
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

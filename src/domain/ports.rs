use crate::domain::model::{OutputFormat, SumReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Calculator: Send + Sync {
    fn sum(&self, lhs: i32, rhs: i32) -> Result<i32>;
}

#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn emit(&self, report: &SumReport) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn lhs(&self) -> i32;
    fn rhs(&self) -> i32;
    fn interval(&self) -> Duration;
    /// `None` means run until shut down.
    fn max_iterations(&self) -> Option<u64>;
    fn output_format(&self) -> OutputFormat;
}

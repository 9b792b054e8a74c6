pub mod machine;
pub mod ticker;

pub use crate::domain::model::{OutputFormat, RunSummary, SumReport};
pub use crate::domain::ports::{Calculator, ConfigProvider, ReportSink};
pub use crate::utils::error::Result;

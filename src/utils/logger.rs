use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = log_level.unwrap_or(if verbose { "debug" } else { "info" });
        if verbose {
            EnvFilter::new(format!("calc_ticker={},info", level))
        } else {
            EnvFilter::new(format!("calc_ticker={}", level))
        }
    })
}

pub fn init_cli_logger(verbose: bool, log_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

// JSON 報告模式下，日誌也輸出為 JSON
pub fn init_json_logger(verbose: bool, log_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

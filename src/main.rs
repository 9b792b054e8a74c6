use calc_ticker::core::ConfigProvider;
use calc_ticker::utils::logger;
use calc_ticker::{CliConfig, ConsoleSink, OutputFormat, TickerConfig, TickerEngine};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 配置錯誤時日誌尚未初始化，直接輸出到 stderr
    let config = match TickerConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let format = config.output_format();
    match format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose, config.log_level.as_deref()),
        OutputFormat::Json => logger::init_json_logger(config.verbose, config.log_level.as_deref()),
    }

    tracing::info!("Starting calc-ticker");
    tracing::debug!("Resolved config: {:?}", config);
    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let sink = ConsoleSink::stdout(format);
    let monitor_enabled = config.monitor;
    let engine = TickerEngine::new_with_monitoring(sink, config, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Stopped after {} iterations in {:?}",
                summary.iterations,
                summary.elapsed
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Ticker failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

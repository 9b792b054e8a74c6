use crate::core::machine::CalculationMachine;
use crate::core::{Calculator, ConfigProvider, ReportSink, RunSummary, SumReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;
use std::future::Future;
use tokio::time::Instant;

const STATS_EVERY: u64 = 10;

pub struct TickerEngine<S: ReportSink, C: ConfigProvider> {
    sink: S,
    config: C,
    monitor: SystemMonitor,
}

impl<S: ReportSink, C: ConfigProvider> TickerEngine<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self::new_with_monitoring(sink, config, false)
    }

    pub fn new_with_monitoring(sink: S, config: C, monitor_enabled: bool) -> Self {
        Self {
            sink,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn monitor(&self) -> &SystemMonitor {
        &self.monitor
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Computes one sum and hands it to the sink.
    pub async fn run_once(&self, iteration: u64) -> Result<SumReport> {
        let machine = CalculationMachine::new();
        let (lhs, rhs) = (self.config.lhs(), self.config.rhs());
        let sum = machine.sum(lhs, rhs)?;

        let report = SumReport {
            iteration,
            lhs,
            rhs,
            sum,
            timestamp: Utc::now(),
        };
        tracing::debug!("Iteration {}: {} + {} = {}", iteration, lhs, rhs, sum);

        self.sink.emit(&report).await?;
        Ok(report)
    }

    /// Runs until Ctrl-C or until `max_iterations` is reached.
    pub async fn run(&self) -> Result<RunSummary> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("⚠️ Cannot listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    pub async fn run_until<F: Future>(&self, shutdown: F) -> Result<RunSummary> {
        let started = Instant::now();
        let interval = self.config.interval();
        let max_iterations = self.config.max_iterations();
        tokio::pin!(shutdown);

        tracing::info!(
            "🚀 Ticker started: {} + {} every {:?} ({})",
            self.config.lhs(),
            self.config.rhs(),
            interval,
            match max_iterations {
                Some(n) => format!("{} iterations", n),
                None => "until stopped".to_string(),
            }
        );

        let mut iterations = 0u64;
        loop {
            iterations += 1;
            if let Err(e) = self.run_once(iterations).await {
                tracing::error!("❌ Iteration {} failed: {}", iterations, e);
                self.monitor.log_summary(iterations - 1);
                return Err(e);
            }

            if self.monitor.is_enabled() && iterations % STATS_EVERY == 0 {
                self.monitor.log_iteration(iterations);
            }

            if max_iterations.is_some_and(|max| iterations >= max) {
                tracing::info!("🏁 Reached {} iterations", iterations);
                break;
            }

            // 延遲期間也可以被中斷
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = &mut shutdown => {
                    tracing::info!("🛑 Shutdown requested after {} iterations", iterations);
                    break;
                }
            }
        }

        self.monitor.log_summary(iterations);

        Ok(RunSummary {
            iterations,
            elapsed: started.elapsed(),
        })
    }
}

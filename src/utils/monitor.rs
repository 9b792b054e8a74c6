use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

/// Resource usage of the ticker process at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSample {
    pub cpu_percent: f32,
    pub rss_mb: u64,
    pub rss_share_percent: f32,
    pub peak_rss_mb: u64,
    pub uptime: Duration,
}

#[cfg(feature = "cli")]
struct ProcessProbe {
    system: System,
    pid: Pid,
    peak_rss_mb: u64,
}

#[cfg(feature = "cli")]
impl ProcessProbe {
    fn open() -> Option<Self> {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(e) => {
                tracing::warn!("⚠️ Cannot resolve current PID, monitoring disabled: {}", e);
                return None;
            }
        };

        let mut probe = Self {
            system: System::new(),
            pid,
            peak_rss_mb: 0,
        };
        // CPU 使用率需要兩次刷新之間的差值
        probe.refresh();
        Some(probe)
    }

    fn refresh(&mut self) {
        self.system.refresh_memory();
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
    }

    fn sample(&mut self, uptime: Duration) -> Option<ProcessSample> {
        self.refresh();

        let process = self.system.process(self.pid)?;
        let rss_mb = process.memory() / 1024 / 1024;
        let total_mb = self.system.total_memory() / 1024 / 1024;
        self.peak_rss_mb = self.peak_rss_mb.max(rss_mb);

        Some(ProcessSample {
            cpu_percent: process.cpu_usage(),
            rss_mb,
            rss_share_percent: if total_mb > 0 {
                rss_mb as f32 / total_mb as f32 * 100.0
            } else {
                0.0
            },
            peak_rss_mb: self.peak_rss_mb,
            uptime,
        })
    }
}

/// Samples CPU and memory of the current process. Holds no `System` when disabled.
pub struct SystemMonitor {
    #[cfg(feature = "cli")]
    probe: Option<Mutex<ProcessProbe>>,
    started: Instant,
    samples_logged: AtomicU64,
}

impl SystemMonitor {
    #[cfg(feature = "cli")]
    pub fn new(enabled: bool) -> Self {
        Self {
            probe: enabled.then(ProcessProbe::open).flatten().map(Mutex::new),
            started: Instant::now(),
            samples_logged: AtomicU64::new(0),
        }
    }

    #[cfg(not(feature = "cli"))]
    pub fn new(_enabled: bool) -> Self {
        Self {
            started: Instant::now(),
            samples_logged: AtomicU64::new(0),
        }
    }

    #[cfg(feature = "cli")]
    pub fn is_enabled(&self) -> bool {
        self.probe.is_some()
    }

    #[cfg(not(feature = "cli"))]
    pub fn is_enabled(&self) -> bool {
        false
    }

    #[cfg(feature = "cli")]
    pub fn sample(&self) -> Option<ProcessSample> {
        let mut probe = match self.probe.as_ref()?.lock() {
            Ok(probe) => probe,
            Err(poisoned) => poisoned.into_inner(),
        };
        probe.sample(self.started.elapsed())
    }

    #[cfg(not(feature = "cli"))]
    pub fn sample(&self) -> Option<ProcessSample> {
        None
    }

    /// Number of samples written to the log so far.
    pub fn samples_logged(&self) -> u64 {
        self.samples_logged.load(Ordering::Relaxed)
    }

    pub fn log_iteration(&self, iteration: u64) {
        if let Some(s) = self.sample() {
            self.samples_logged.fetch_add(1, Ordering::Relaxed);
            tracing::info!(
                iteration,
                cpu_percent = s.cpu_percent,
                rss_mb = s.rss_mb,
                peak_rss_mb = s.peak_rss_mb,
                "📊 After {} ticks: CPU {:.1}%, RSS {}MB ({:.1}% of RAM)",
                iteration,
                s.cpu_percent,
                s.rss_mb,
                s.rss_share_percent
            );
        }
    }

    pub fn log_summary(&self, iterations: u64) {
        if let Some(s) = self.sample() {
            self.samples_logged.fetch_add(1, Ordering::Relaxed);
            tracing::info!(
                "📊 Ran {} ticks in {:?}, peak RSS {}MB",
                iterations,
                s.uptime,
                s.peak_rss_mb
            );
        }
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_nothing() {
        let monitor = SystemMonitor::default();
        assert!(!monitor.is_enabled());
        assert!(monitor.sample().is_none());

        monitor.log_summary(3);
        assert_eq!(monitor.samples_logged(), 0);
    }

    #[test]
    fn test_enabled_monitor_samples_current_process() {
        let monitor = SystemMonitor::new(true);
        assert!(monitor.is_enabled());

        let sample = monitor.sample().expect("current process should be visible");
        assert!(sample.rss_mb <= sample.peak_rss_mb);
        assert!(sample.rss_share_percent >= 0.0);

        monitor.log_iteration(10);
        assert_eq!(monitor.samples_logged(), 1);
    }
}

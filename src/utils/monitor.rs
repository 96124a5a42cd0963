#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct StageStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub elapsed: Duration,
}

/// Per-request resource logging, one line per pipeline stage.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Option<(System, Pid)>,
    started: Instant,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let system = enabled
            .then(|| sysinfo::get_current_pid().ok())
            .flatten()
            .map(|pid| (System::new(), pid));

        if enabled && system.is_none() {
            tracing::warn!("Could not resolve current PID, monitoring disabled");
        }

        Self {
            system,
            started: Instant::now(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.system.is_some()
    }

    pub fn sample(&mut self) -> Option<StageStats> {
        let (system, pid) = self.system.as_mut()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[*pid]),
            true,
            ProcessRefreshKind::everything(),
        );
        let process = system.process(*pid)?;

        Some(StageStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: process.memory() / 1024 / 1024,
            elapsed: self.started.elapsed(),
        })
    }

    pub fn log_stats(&mut self, stage: &str) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Time: {:?}",
                stage,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.elapsed
            );
        }
    }

    pub fn log_final_stats(&mut self) {
        if self.is_enabled() {
            tracing::info!("📊 Request finished in {:?}", self.started.elapsed());
        }
    }
}

// 非 CLI 環境 (Lambda) 不收集系統資訊
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn log_stats(&mut self, _stage: &str) {}

    pub fn log_final_stats(&mut self) {}
}

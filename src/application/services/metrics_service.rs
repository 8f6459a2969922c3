//! Registration counters reported by the health endpoint

use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts registration outcomes since process start
pub struct MetricsService {
    accepted: AtomicU64,
    rejected: AtomicU64,
    failed: AtomicU64,
    start_time: std::time::Instant,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            start_time: std::time::Instant::now(),
        }
    }

    /// A registration passed validation and was stored
    pub fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// A registration was rejected by validation
    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// A registration failed for a server-side reason
    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get current counters
    pub fn get_metrics(&self) -> Value {
        serde_json::json!({
            "registrations_accepted": self.accepted.load(Ordering::Relaxed),
            "registrations_rejected": self.rejected.load(Ordering::Relaxed),
            "registrations_failed": self.failed.load(Ordering::Relaxed),
            "uptime_seconds": self.uptime_seconds(),
        })
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

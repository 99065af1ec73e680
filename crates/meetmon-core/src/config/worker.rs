//! Background reconciler configuration.

use serde::{Deserialize, Serialize};

/// Background reconciler loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the background loops are enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval in seconds between live metrics samples.
    #[serde(default = "default_interval")]
    pub sample_interval_seconds: u64,
    /// Interval in seconds between staleness sweeps.
    #[serde(default = "default_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            sample_interval_seconds: default_interval(),
            sweep_interval_seconds: default_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    1
}

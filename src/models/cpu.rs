// CPU models: per-core raw samples and the aligned record

use serde::{Deserialize, Serialize};

/// Static description of one logical core, as reported by the OS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreInfo {
    pub cores: u32,
    pub model_name: String,
    pub mhz: f64,
}

/// Cumulative time-in-state for one core, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreTimes {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
}

/// One record per core; `id` is the position in the sample set, not the OS cpu number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreStat {
    pub id: usize,
    pub cores: u32,
    pub model_name: String,
    #[serde(rename = "clockMHz")]
    pub clock_mhz: f64,
    pub used: f64,
    pub user_time: f64,
    pub system_time: f64,
    pub idle_time: f64,
}

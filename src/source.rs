// MetricsSource: the boundary between OS queries and the normalizers

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    CoreInfo, CoreTimes, DiskStats, HostInfo, LoadAvg, NetworkInterface, ProcCounts, SwapSample,
    VirtualSample,
};

/// Raw, per-subsystem OS samples. Each call is an independent query; failures surface as
/// `CollectError::SourceUnavailable`.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn cpu_info(&self) -> Result<Vec<CoreInfo>>;

    /// Per-core usage in percent (0-100).
    async fn cpu_percent(&self) -> Result<Vec<f64>>;

    async fn cpu_times(&self) -> Result<Vec<CoreTimes>>;

    async fn disk_stats(&self) -> Result<DiskStats>;

    async fn swap_memory(&self) -> Result<SwapSample>;

    async fn virtual_memory(&self) -> Result<VirtualSample>;

    async fn load_avg(&self) -> Result<LoadAvg>;

    async fn load_procs(&self) -> Result<ProcCounts>;

    /// Lines of a passwd-style account file.
    async fn read_accounts_file(&self, path: &Path) -> Result<Vec<String>>;

    /// Raw text of the package manager's status database.
    async fn read_packages_file(&self, path: &Path) -> Result<String>;

    async fn host_info(&self) -> Result<HostInfo>;

    async fn network_interfaces(&self) -> Result<Vec<NetworkInterface>>;
}

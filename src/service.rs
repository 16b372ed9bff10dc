// Per-resource application services: fetch raw samples, hand them to the normalizers.

use std::path::Path;

use crate::error::Result;
use crate::models::*;
use crate::normalize;
use crate::source::MetricsSource;

pub mod cpu {
    use super::*;

    pub async fn list(source: &dyn MetricsSource) -> Result<Vec<CoreStat>> {
        let (info, used, times) = tokio::try_join!(
            source.cpu_info(),
            source.cpu_percent(),
            source.cpu_times()
        )?;
        normalize::align_core_stats(&info, &used, &times)
            .inspect_err(|e| tracing::warn!("cpu list: {}", e))
    }
}

pub mod disk {
    use super::*;

    pub async fn list(source: &dyn MetricsSource) -> Result<Vec<StorageDevice>> {
        let stats = source.disk_stats().await?;
        normalize::list_devices(&stats).inspect_err(|e| tracing::warn!("disk list: {}", e))
    }

    /// `Ok(None)` when no device has this id.
    pub async fn view(source: &dyn MetricsSource, id: &str) -> Result<Option<StorageDevice>> {
        let stats = source.disk_stats().await?;
        normalize::view_device(&stats, id)
            .inspect_err(|e| tracing::warn!("disk view {}: {}", id, e))
    }
}

pub mod memory {
    use super::*;

    pub async fn list(source: &dyn MetricsSource) -> Result<MemorySnapshot> {
        let (swap, virtual_memory) =
            tokio::try_join!(source.swap_memory(), source.virtual_memory())?;
        Ok(normalize::normalize_memory(&swap, &virtual_memory))
    }
}

pub mod load {
    use super::*;

    pub async fn list(source: &dyn MetricsSource) -> Result<LoadSnapshot> {
        let (avg, procs) = tokio::try_join!(source.load_avg(), source.load_procs())?;
        Ok(normalize::normalize_load(&avg, &procs))
    }
}

pub mod users {
    use super::*;

    pub async fn list(
        source: &dyn MetricsSource,
        accounts_path: &Path,
    ) -> Result<Vec<HumanAccount>> {
        let lines = source.read_accounts_file(accounts_path).await?;
        let accounts = normalize::filter_human_users(&lines);
        tracing::debug!(lines = lines.len(), humans = accounts.len(), "filtered accounts");
        Ok(accounts)
    }
}

pub mod software {
    use super::*;

    pub async fn list(
        source: &dyn MetricsSource,
        packages_path: &Path,
    ) -> Result<Vec<SoftwarePackage>> {
        let status = source.read_packages_file(packages_path).await?;
        Ok(normalize::parse_packages(&status))
    }
}

pub mod host {
    use super::*;

    pub async fn view(source: &dyn MetricsSource) -> Result<HostInfo> {
        source.host_info().await
    }
}

pub mod network {
    use super::*;

    pub async fn list(source: &dyn MetricsSource) -> Result<Vec<NetworkInterface>> {
        source.network_interfaces().await
    }
}

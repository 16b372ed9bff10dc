// System stats via sysinfo

mod linux;

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

use crate::error::{CollectError, Result};
use crate::models::*;
use crate::source::MetricsSource;

/// Production `MetricsSource`: sysinfo handles kept warm between requests.
pub struct SysinfoRepo {
    sys: Arc<Mutex<System>>,
    disks: Arc<Mutex<Disks>>,
    networks: Arc<Mutex<Networks>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: Arc::new(Mutex::new(sys)),
            disks: Arc::new(Mutex::new(disks)),
            networks: Arc::new(Mutex::new(networks)),
        }
    }
}

/// Run a blocking OS query off the async runtime, tagging any failure with its source.
async fn blocking<T, F>(source_name: &'static str, f: F) -> Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CollectError::unavailable(source_name, format!("task join: {}", e)))?
        .map_err(|e| CollectError::unavailable(source_name, e))
}

fn percent(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[async_trait]
impl MetricsSource for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_info"))]
    async fn cpu_info(&self) -> Result<Vec<CoreInfo>> {
        let sys = self.sys.clone();
        blocking("cpu_info", move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_cpu_frequency();
            let model = linux::read_cpu_model_linux();
            let cores = linux::read_cpu_cores_linux().unwrap_or(1);
            Ok(sys
                .cpus()
                .iter()
                .map(|c| CoreInfo {
                    cores,
                    model_name: model.clone().unwrap_or_else(|| c.brand().to_string()),
                    mhz: c.frequency() as f64,
                })
                .collect())
        })
        .await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_percent"))]
    async fn cpu_percent(&self) -> Result<Vec<f64>> {
        blocking("cpu_percent", || {
            // Usage is a delta between two refreshes; a request-local System keeps concurrent
            // requests from shortening each other's window.
            let mut sys = System::new();
            sys.refresh_cpu_usage();
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            sys.refresh_cpu_usage();
            Ok(sys
                .cpus()
                .iter()
                .map(|c| (c.cpu_usage() as f64).clamp(0.0, 100.0))
                .collect())
        })
        .await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_times"))]
    async fn cpu_times(&self) -> Result<Vec<CoreTimes>> {
        blocking("cpu_times", linux::read_cpu_times_linux).await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "disk_stats"))]
    async fn disk_stats(&self) -> Result<DiskStats> {
        let disks = self.disks.clone();
        blocking("disk_stats", move || {
            let mut disks_guard = disks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo disks lock poisoned: {}", e))?;
            disks_guard.refresh(true);
            let options = linux::read_mount_options_linux()?;

            let mut stats = DiskStats::new();
            for d in disks_guard.list() {
                let device = d.name().to_string_lossy().into_owned();
                let mountpoint = d.mount_point().to_string_lossy().into_owned();
                let fstype = d.file_system().to_string_lossy().into_owned();
                let total = d.total_space();
                let free = d.available_space();
                let used = total.saturating_sub(free);
                let (inodes_total, inodes_free) = match linux::inode_usage(&mountpoint) {
                    Ok(counts) => counts,
                    Err(e) => {
                        tracing::warn!(
                            "statvfs {} failed, inode counts unknown: {}",
                            mountpoint,
                            e
                        );
                        (0, 0)
                    }
                };
                let inodes_used = inodes_total.saturating_sub(inodes_free);

                let partition = Partition {
                    device: device.clone(),
                    mountpoint: mountpoint.clone(),
                    fstype: fstype.clone(),
                    opts: options.get(&mountpoint).cloned().unwrap_or_default(),
                };
                let usage = DiskUsage {
                    path: mountpoint,
                    fstype,
                    total,
                    free,
                    used,
                    used_percent: percent(used, total),
                    inodes_total,
                    inodes_used,
                    inodes_free,
                    inodes_used_percent: percent(inodes_used, inodes_total),
                };
                stats.entry(device).or_default().push((partition, usage));
            }
            Ok(stats)
        })
        .await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "swap_memory"))]
    async fn swap_memory(&self) -> Result<SwapSample> {
        let sys = self.sys.clone();
        blocking("swap_memory", move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();
            let total = sys.total_swap();
            let used = sys.used_swap();
            Ok(SwapSample {
                total,
                used,
                free: sys.free_swap(),
                used_percent: percent(used, total),
            })
        })
        .await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "virtual_memory"))]
    async fn virtual_memory(&self) -> Result<VirtualSample> {
        let sys = self.sys.clone();
        blocking("virtual_memory", move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();
            let total = sys.total_memory();
            let available = sys.available_memory();
            let used = total.saturating_sub(available);
            Ok(VirtualSample {
                total,
                available,
                used,
                free: sys.free_memory(),
                used_percent: percent(used, total),
            })
        })
        .await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "load_avg"))]
    async fn load_avg(&self) -> Result<LoadAvg> {
        blocking("load_avg", linux::read_load_avg_linux).await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "load_procs"))]
    async fn load_procs(&self) -> Result<ProcCounts> {
        blocking("load_procs", linux::read_proc_counts_linux).await
    }

    #[instrument(skip(self), fields(repo = "fs", operation = "read_accounts_file"))]
    async fn read_accounts_file(&self, path: &Path) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CollectError::unavailable("accounts_file", e))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    #[instrument(skip(self), fields(repo = "fs", operation = "read_packages_file"))]
    async fn read_packages_file(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CollectError::unavailable("packages_file", e))
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "host_info"))]
    async fn host_info(&self) -> Result<HostInfo> {
        blocking("host_info", || {
            Ok(HostInfo {
                hostname: System::host_name().unwrap_or_default(),
                os_name: System::name().unwrap_or_else(|| std::env::consts::OS.into()),
                os_version: System::os_version().unwrap_or_default(),
                kernel_version: System::kernel_version().unwrap_or_default(),
                architecture: System::cpu_arch(),
                uptime_secs: System::uptime(),
                boot_time: System::boot_time(),
            })
        })
        .await
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "network_interfaces"))]
    async fn network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        let networks = self.networks.clone();
        blocking("network_interfaces", move || {
            let mut networks_guard = networks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo networks lock poisoned: {}", e))?;
            networks_guard.refresh(true);
            let mut interfaces: Vec<NetworkInterface> = networks_guard
                .list()
                .iter()
                .map(|(name, data)| NetworkInterface {
                    name: name.clone(),
                    mac_address: data.mac_address().to_string(),
                    ipv4: data
                        .ip_networks()
                        .iter()
                        .filter(|n| n.addr.is_ipv4())
                        .map(|n| n.addr.to_string())
                        .collect(),
                    ipv6: data
                        .ip_networks()
                        .iter()
                        .filter(|n| n.addr.is_ipv6())
                        .map(|n| n.addr.to_string())
                        .collect(),
                    bytes_sent: data.total_transmitted(),
                    bytes_recv: data.total_received(),
                    packets_sent: data.total_packets_transmitted(),
                    packets_recv: data.total_packets_received(),
                })
                .collect();
            interfaces.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(interfaces)
        })
        .await
    }
}

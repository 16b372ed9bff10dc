// Shared test helpers

#![allow(dead_code)]

use std::path::Path;

use async_trait::async_trait;
use hoststat::error::{CollectError, Result};
use hoststat::models::*;
use hoststat::source::MetricsSource;

/// In-memory `MetricsSource`; any sample set to `None` reports `SourceUnavailable`.
#[derive(Clone, Default)]
pub struct FakeSource {
    pub cpu_info: Option<Vec<CoreInfo>>,
    pub cpu_percent: Option<Vec<f64>>,
    pub cpu_times: Option<Vec<CoreTimes>>,
    pub disk_stats: Option<DiskStats>,
    pub swap: Option<SwapSample>,
    pub virtual_memory: Option<VirtualSample>,
    pub load_avg: Option<LoadAvg>,
    pub procs: Option<ProcCounts>,
    pub accounts: Option<Vec<String>>,
    pub packages: Option<String>,
    pub host: Option<HostInfo>,
    pub interfaces: Option<Vec<NetworkInterface>>,
}

fn take<T: Clone>(v: &Option<T>, name: &'static str) -> Result<T> {
    v.clone()
        .ok_or_else(|| CollectError::unavailable(name, "fake source has no sample"))
}

#[async_trait]
impl MetricsSource for FakeSource {
    async fn cpu_info(&self) -> Result<Vec<CoreInfo>> {
        take(&self.cpu_info, "cpu_info")
    }

    async fn cpu_percent(&self) -> Result<Vec<f64>> {
        take(&self.cpu_percent, "cpu_percent")
    }

    async fn cpu_times(&self) -> Result<Vec<CoreTimes>> {
        take(&self.cpu_times, "cpu_times")
    }

    async fn disk_stats(&self) -> Result<DiskStats> {
        take(&self.disk_stats, "disk_stats")
    }

    async fn swap_memory(&self) -> Result<SwapSample> {
        take(&self.swap, "swap_memory")
    }

    async fn virtual_memory(&self) -> Result<VirtualSample> {
        take(&self.virtual_memory, "virtual_memory")
    }

    async fn load_avg(&self) -> Result<LoadAvg> {
        take(&self.load_avg, "load_avg")
    }

    async fn load_procs(&self) -> Result<ProcCounts> {
        take(&self.procs, "load_procs")
    }

    async fn read_accounts_file(&self, _path: &Path) -> Result<Vec<String>> {
        take(&self.accounts, "accounts_file")
    }

    async fn read_packages_file(&self, _path: &Path) -> Result<String> {
        take(&self.packages, "packages_file")
    }

    async fn host_info(&self) -> Result<HostInfo> {
        take(&self.host, "host_info")
    }

    async fn network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        take(&self.interfaces, "network_interfaces")
    }
}

pub fn core_info(model: &str, mhz: f64) -> CoreInfo {
    CoreInfo {
        cores: 1,
        model_name: model.into(),
        mhz,
    }
}

pub fn core_times(user: f64, system: f64, idle: f64) -> CoreTimes {
    CoreTimes { user, system, idle }
}

pub fn mount(device: &str, path: &str, total: u64, free: u64) -> (Partition, DiskUsage) {
    let used = total - free;
    (
        Partition {
            device: device.into(),
            mountpoint: path.into(),
            fstype: "ext4".into(),
            opts: "rw,relatime".into(),
        },
        DiskUsage {
            path: path.into(),
            fstype: "ext4".into(),
            total,
            free,
            used,
            used_percent: (used * 100) as f64 / total as f64,
            inodes_total: 1000,
            inodes_used: 100,
            inodes_free: 900,
            inodes_used_percent: 10.0,
        },
    )
}

/// `/dev1` with two mountpoints, `/dev2` with one.
pub fn two_device_stats() -> DiskStats {
    let mut stats = DiskStats::new();
    stats.insert(
        "/dev1".into(),
        vec![mount("/dev1", "/", 1000, 400), mount("/dev1", "/boot", 200, 100)],
    );
    stats.insert("/dev2".into(), vec![mount("/dev2", "/data", 5000, 5000)]);
    stats
}

pub const PASSWD: &[&str] = &[
    "root:x:0:0:root:/root:/bin/bash",
    "_apt:x:103:65534::/nonexistent:/usr/sbin/nologin",
    "pi:x:1000:1000:,,,:/home/pi:/bin/bash",
    "nobody:x:65534:65534:nobody:/nonexistent:/usr/sbin/nologin",
    "#old:x:1001:1001::/home/old:/bin/bash",
    "pi3:x:1002:1002:A,B,C,:/home/pi3:/bin/bash",
];

pub fn populated_source() -> FakeSource {
    FakeSource {
        cpu_info: Some(vec![core_info("ARMv7", 1500.0), core_info("ARMv7", 1500.0)]),
        cpu_percent: Some(vec![12.5, 50.0]),
        cpu_times: Some(vec![core_times(10.0, 5.0, 100.0), core_times(20.0, 6.0, 90.0)]),
        disk_stats: Some(two_device_stats()),
        swap: Some(SwapSample {
            total: 100,
            used: 25,
            free: 75,
            used_percent: 25.0,
        }),
        virtual_memory: Some(VirtualSample {
            total: 1000,
            available: 600,
            used: 400,
            free: 500,
            used_percent: 40.0,
        }),
        load_avg: Some(LoadAvg {
            load1: 0.5,
            load5: 0.25,
            load15: 0.1,
        }),
        procs: Some(ProcCounts {
            total: 120,
            running: 2,
            blocked: 0,
        }),
        accounts: Some(PASSWD.iter().map(|s| s.to_string()).collect()),
        packages: Some(
            "Package: bash\nStatus: install ok installed\nArchitecture: armhf\nVersion: 5.1-2\nDescription: GNU Bourne Again SHell\n"
                .into(),
        ),
        host: Some(HostInfo {
            hostname: "raspberrypi".into(),
            os_name: "Debian GNU/Linux".into(),
            os_version: "12".into(),
            kernel_version: "6.1.21-v7+".into(),
            architecture: "armv7l".into(),
            uptime_secs: 3600,
            boot_time: 1_700_000_000,
        }),
        interfaces: Some(vec![NetworkInterface {
            name: "eth0".into(),
            mac_address: "b8:27:eb:00:00:01".into(),
            ipv4: vec!["192.168.1.10".into()],
            ipv6: vec![],
            bytes_sent: 10,
            bytes_recv: 20,
            packets_sent: 1,
            packets_recv: 2,
        }]),
    }
}

// Domain records served over HTTP, plus the raw samples a MetricsSource hands in

mod cpu;
mod network;
mod software;
mod storage;
mod system;
mod user;

pub use cpu::{CoreInfo, CoreStat, CoreTimes};
pub use network::NetworkInterface;
pub use software::SoftwarePackage;
pub use storage::{DiskStats, DiskUsage, Mountpoint, Partition, StorageDevice};
pub use system::{
    HostInfo, LoadAvg, LoadSnapshot, MemorySnapshot, ProcCounts, SwapMemory, SwapSample,
    VirtualMemory, VirtualSample,
};
pub use user::HumanAccount;

// Pure transforms from raw OS samples into domain records. No I/O happens here.

mod cpu;
mod memory;
mod software;
mod storage;
mod users;

pub use cpu::align_core_stats;
pub use memory::{normalize_load, normalize_memory};
pub use software::parse_packages;
pub use storage::{device_id, list_devices, view_device};
pub use users::{MIN_HUMAN_UID, filter_human_users};

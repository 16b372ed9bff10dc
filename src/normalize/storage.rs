// Group flat (partition, usage) samples into one record per physical device

use crate::error::{CollectError, Result};
use crate::models::{DiskStats, DiskUsage, Mountpoint, Partition, StorageDevice};

/// Short identifier for a device path: the last `/`-separated segment, quotes stripped.
///
/// `/dev/sda1` yields `sda1`; a path without `/` is its own id. An empty segment
/// (empty path, trailing slash) is rejected. Inner spaces are part of the id.
pub fn device_id(path: &str) -> Result<String> {
    let segment = path.rsplit('/').next().unwrap_or_default().trim_matches('"');
    if segment.is_empty() {
        return Err(CollectError::DeviceIdParse {
            path: path.to_string(),
        });
    }
    Ok(segment.to_string())
}

/// All devices, ordered by device path. Any unparsable path fails the whole call.
pub fn list_devices(stats: &DiskStats) -> Result<Vec<StorageDevice>> {
    stats
        .iter()
        .map(|(path, partitions)| build_device(path, partitions))
        .collect()
}

/// The device whose id equals `id`, or `None`. Every path is still validated, so a
/// malformed entry elsewhere fails the lookup too.
pub fn view_device(stats: &DiskStats, id: &str) -> Result<Option<StorageDevice>> {
    Ok(list_devices(stats)?.into_iter().find(|d| d.id == id))
}

fn build_device(path: &str, partitions: &[(Partition, DiskUsage)]) -> Result<StorageDevice> {
    let id = device_id(path)?;
    let fstype = partitions
        .first()
        .map(|(p, _)| p.fstype.clone())
        .unwrap_or_default();
    let mountpoints = partitions
        .iter()
        .map(|(partition, usage)| Mountpoint {
            path: usage.path.clone(),
            fstype: usage.fstype.clone(),
            options: partition.opts.clone(),
            total_bytes: usage.total,
            free_bytes: usage.free,
            used_bytes: usage.used,
            used_percent: usage.used_percent,
            inodes_total: usage.inodes_total,
            inodes_used: usage.inodes_used,
            inodes_free: usage.inodes_free,
            inodes_used_percent: usage.inodes_used_percent,
        })
        .collect();
    Ok(StorageDevice {
        id,
        filesystem: path.to_string(),
        fstype,
        mountpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_takes_last_segment() {
        assert_eq!(device_id("/dev/sda1").unwrap(), "sda1");
        assert_eq!(device_id("/dev/mapper/vg-root").unwrap(), "vg-root");
        assert_eq!(device_id("\"/dev/mmcblk0p2\"").unwrap(), "mmcblk0p2");
    }

    #[test]
    fn device_id_without_slash_is_whole_string() {
        assert_eq!(device_id("tmpfs").unwrap(), "tmpfs");
    }

    #[test]
    fn device_id_keeps_spaces_in_last_segment() {
        assert_eq!(device_id("//nas/My Share").unwrap(), "My Share");
        assert_eq!(
            device_id("/dev/disk/by-label/USB DISK").unwrap(),
            "USB DISK"
        );
    }

    #[test]
    fn device_id_rejects_empty_segment() {
        assert!(matches!(
            device_id("/dev/"),
            Err(CollectError::DeviceIdParse { .. })
        ));
        assert!(device_id("").is_err());
        assert!(device_id("\"\"").is_err());
    }
}

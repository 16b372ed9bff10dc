// Linux-specific helpers: /proc parsing and statvfs for what sysinfo does not expose.

use std::collections::HashMap;
use std::path::Path;

use crate::models::{CoreTimes, LoadAvg, ProcCounts};

/// Fallback when sysconf cannot report clock ticks.
const DEFAULT_CLOCK_TICKS: f64 = 100.0;

/// Read first "model name" from /proc/cpuinfo (Linux). Prefer over sysinfo when it returns "cpu0" etc.
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        return cpuinfo_field(&content, "model name").filter(|s| s != "cpu0");
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// "cpu cores" from /proc/cpuinfo; absent on most ARM boards.
pub(super) fn read_cpu_cores_linux() -> Option<u32> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        return cpuinfo_field(&content, "cpu cores")?.parse().ok();
    }
    #[cfg(not(target_os = "linux"))]
    None
}

fn cpuinfo_field(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.starts_with(key))
        .find_map(|line| line.split_once(':'))
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(super) fn read_cpu_times_linux() -> anyhow::Result<Vec<CoreTimes>> {
    let content = std::fs::read_to_string("/proc/stat")?;
    parse_cpu_times(&content, clock_ticks())
}

pub(super) fn read_load_avg_linux() -> anyhow::Result<LoadAvg> {
    let content = std::fs::read_to_string("/proc/loadavg")?;
    parse_load_avg(&content)
}

pub(super) fn read_proc_counts_linux() -> anyhow::Result<ProcCounts> {
    let stat = std::fs::read_to_string("/proc/stat")?;
    let loadavg = std::fs::read_to_string("/proc/loadavg")?;
    parse_proc_counts(&stat, &loadavg)
}

/// Mount options keyed by mountpoint, from /proc/mounts.
pub(super) fn read_mount_options_linux() -> anyhow::Result<HashMap<String, String>> {
    read_mount_options(Path::new("/proc/mounts"))
}

fn read_mount_options(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
    Ok(parse_mount_options(&content))
}

/// (total, free) inode counts for the filesystem mounted at `path`.
#[allow(clippy::unnecessary_cast)]
pub(super) fn inode_usage(path: &str) -> std::io::Result<(u64, u64)> {
    #[cfg(unix)]
    {
        let c_path = std::ffi::CString::new(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
        let ret = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
        if ret != 0 {
            return Err(std::io::Error::last_os_error());
        }
        return Ok((stat.f_files as u64, stat.f_ffree as u64));
    }
    #[cfg(not(unix))]
    {
        let _ = path;
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "statvfs is unix-only",
        ))
    }
}

fn clock_ticks() -> f64 {
    #[cfg(unix)]
    {
        let ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
        if ticks > 0 {
            return ticks as f64;
        }
    }
    DEFAULT_CLOCK_TICKS
}

/// Per-core lines (`cpuN ...`) of /proc/stat, converted from ticks to seconds.
/// The aggregate `cpu` line is skipped; a short or non-numeric core line is an error.
fn parse_cpu_times(content: &str, ticks: f64) -> anyhow::Result<Vec<CoreTimes>> {
    let mut times = Vec::new();
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let Some(index) = parts.next().and_then(|label| label.strip_prefix("cpu")) else {
            continue;
        };
        if index.is_empty() || index.parse::<u32>().is_err() {
            continue;
        }
        let vals = parts
            .take(4)
            .map(|p| p.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("cpu{}: {}", index, e))?;
        let &[user, _nice, system, idle] = vals.as_slice() else {
            anyhow::bail!("cpu{}: expected at least 4 fields, got {}", index, vals.len());
        };
        times.push(CoreTimes {
            user: user / ticks,
            system: system / ticks,
            idle: idle / ticks,
        });
    }
    Ok(times)
}

fn parse_load_avg(content: &str) -> anyhow::Result<LoadAvg> {
    let mut fields = content.split_whitespace();
    let mut next = |name: &str| -> anyhow::Result<f64> {
        fields
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| anyhow::anyhow!("invalid loadavg {}", name))
    };
    Ok(LoadAvg {
        load1: next("load1")?,
        load5: next("load5")?,
        load15: next("load15")?,
    })
}

/// Total from the `running/total` field of /proc/loadavg; running and blocked from /proc/stat.
fn parse_proc_counts(stat: &str, loadavg: &str) -> anyhow::Result<ProcCounts> {
    let total = loadavg
        .split_whitespace()
        .nth(3)
        .and_then(|f| f.split_once('/'))
        .and_then(|(_, t)| t.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("invalid loadavg format"))?;

    let field = |name: &str| -> anyhow::Result<u64> {
        stat.lines()
            .find_map(|line| line.strip_prefix(name))
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| anyhow::anyhow!("missing or invalid {} in /proc/stat", name))
    };

    Ok(ProcCounts {
        total,
        running: field("procs_running")?,
        blocked: field("procs_blocked")?,
    })
}

fn parse_mount_options(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [_, mountpoint, _, opts, ..] => {
                    Some((unescape_mount_path(mountpoint), opts.to_string()))
                }
                _ => None,
            }
        })
        .collect()
}

/// /proc/mounts encodes spaces as `\040` (and tabs, newlines, backslashes likewise).
fn unescape_mount_path(raw: &str) -> String {
    raw.replace("\\040", " ")
        .replace("\\011", "\t")
        .replace("\\012", "\n")
        .replace("\\134", "\\")
}

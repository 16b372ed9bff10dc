// Per-core alignment of independently sampled CPU sequences

use crate::error::{CollectError, Result};
use crate::models::{CoreInfo, CoreStat, CoreTimes};

/// Pair static info, usage percent and cumulative times index-by-index.
///
/// The three sequences come from separate OS queries, so a length mismatch means the
/// positions cannot be trusted to describe the same core; nothing is returned in that case.
pub fn align_core_stats(
    info: &[CoreInfo],
    used: &[f64],
    times: &[CoreTimes],
) -> Result<Vec<CoreStat>> {
    if info.len() != used.len() || info.len() != times.len() {
        return Err(CollectError::AlignmentMismatch {
            info: info.len(),
            percent: used.len(),
            times: times.len(),
        });
    }

    Ok(info
        .iter()
        .zip(used)
        .zip(times)
        .enumerate()
        .map(|(id, ((info, &used), times))| CoreStat {
            id,
            cores: info.cores,
            model_name: info.model_name.clone(),
            clock_mhz: info.mhz,
            used,
            user_time: times.user,
            system_time: times.system,
            idle_time: times.idle,
        })
        .collect())
}

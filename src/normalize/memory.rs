// Memory and load merges. Zero-valued samples are valid input, not missing data.

use crate::models::{
    LoadAvg, LoadSnapshot, MemorySnapshot, ProcCounts, SwapMemory, SwapSample, VirtualMemory,
    VirtualSample,
};

pub fn normalize_memory(swap: &SwapSample, virtual_memory: &VirtualSample) -> MemorySnapshot {
    MemorySnapshot {
        swap: SwapMemory {
            total: swap.total,
            used: swap.used,
            free: swap.free,
            used_percent: swap.used_percent,
        },
        virtual_memory: VirtualMemory {
            total: virtual_memory.total,
            available: virtual_memory.available,
            used: virtual_memory.used,
            used_percent: virtual_memory.used_percent,
        },
    }
}

pub fn normalize_load(avg: &LoadAvg, procs: &ProcCounts) -> LoadSnapshot {
    LoadSnapshot {
        load1: avg.load1,
        load5: avg.load5,
        load15: avg.load15,
        procs_total: procs.total,
        procs_running: procs.running,
        procs_blocked: procs.blocked,
    }
}

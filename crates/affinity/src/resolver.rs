use crate::config::Config;
use crate::cpuset::{parse_cpuset, CpuId};
use crate::env::{parse_affinity_env_var, FORCE_AFFINITY_VAR};
use crate::error::Result;
use tracing::debug;

/// Integer form of "no affinity preference" for callers that pass CPU ids around as plain
/// integers. Inside this crate the same state is `None`.
pub const NIL_CPU_ID: i64 = -1;

/// Converts a resolved affinity to its integer form, `None` becoming `NIL_CPU_ID`.
pub fn to_raw_cpu_id(cpu: Option<CpuId>) -> i64 {
    cpu.map_or(NIL_CPU_ID, i64::from)
}

/// Converts an integer CPU id back, mapping `NIL_CPU_ID` and other negatives to `None`.
pub fn from_raw_cpu_id(raw: i64) -> Option<CpuId> {
    CpuId::try_from(raw).ok()
}

/// Decides which single CPU a container process should run on.
///
/// A cgroup section in `config` always wins: the lowest CPU of its cpuset is chosen, and an
/// empty cpuset means no preference. Only without a cgroup section is `env` consulted for a
/// `FORCE_AFFINITY` override. A malformed override counts as no preference, while a
/// malformed cpuset is an error.
pub fn resolve_affinity<S: AsRef<str>>(
    config: &Config,
    env: Option<&[S]>,
) -> Result<Option<CpuId>> {
    if let Some(cpuset) = config.cpuset() {
        let cpus = parse_cpuset(cpuset)?;
        let cpu = cpus.first().copied();
        debug!(cpuset, ?cpu, "Resolved affinity from cgroup cpuset");
        return Ok(cpu);
    }

    if let Some(env) = env {
        let cpu = affinity_from_env(env);
        debug!(?cpu, "Resolved affinity from environment");
        return Ok(cpu);
    }

    Ok(None)
}

fn affinity_from_env<S: AsRef<str>>(env: &[S]) -> Option<CpuId> {
    // prefix match only, so `FORCE_AFFINITY_X=5` is picked up too
    let entry = env
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|entry| entry.starts_with(FORCE_AFFINITY_VAR))?;

    let cpu = parse_affinity_env_var(entry);
    if cpu.is_none() {
        debug!(entry, "Ignoring malformed affinity override");
    }
    cpu
}

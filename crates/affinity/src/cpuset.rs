//! # Cpuset Parsing
//!
//! Parses the cpuset format used by the cgroup `cpuset.cpus` file into a list of CPU ids.
//!
//! The value is a comma-separated list of tokens, each either a single id (`2`) or an
//! inclusive range (`0-3`). Whitespace around a token is ignored. The resulting ids are
//! sorted, but duplicates produced by overlapping tokens are kept.
//!
//! A range is split on its first `-`, so a negative id such as `-3` reads as a range with an
//! empty start and is rejected. A range whose start is above its end contributes no ids.

use crate::error::{AffinityError, Result};
use tracing::trace;

/// A logical CPU id, as used by the cpuset and affinity interfaces.
pub type CpuId = u32;

/// Parses a cpuset into its sorted CPU ids. Ranges are expanded eagerly, so a huge range
/// such as `0-4294967295` allocates one entry per id.
pub fn parse_cpuset(spec: &str) -> Result<Vec<CpuId>> {
    let mut cpus = Vec::new();
    if spec.is_empty() {
        return Ok(cpus);
    }

    let mut tokens = 0usize;
    for item in spec.split(',') {
        tokens += 1;
        let item = item.trim();
        match item.split_once('-') {
            // range of cpus: "0-3"
            Some((begin, end)) => {
                let begin = parse_cpu_id(begin)?;
                let end = parse_cpu_id(end)?;
                cpus.extend(begin..=end);
            }
            // single cpu: "2"
            None => cpus.push(parse_cpu_id(item)?),
        }
    }

    cpus.sort_unstable();
    trace!(spec, tokens, cpus = cpus.len(), "Parsed cpuset");
    Ok(cpus)
}

fn parse_cpu_id(text: &str) -> Result<CpuId> {
    // `u32::from_str` tolerates a leading '+', the cpuset format does not
    if text.starts_with('+') {
        return Err(AffinityError::SignedCpuId(text.to_string()));
    }

    text.parse::<CpuId>().map_err(|source| AffinityError::InvalidCpuId {
        value: text.to_string(),
        source,
    })
}

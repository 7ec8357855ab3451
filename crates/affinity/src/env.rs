use crate::cpuset::CpuId;

/// Name of the variable that forces a CPU when the container has no cgroup section
pub const FORCE_AFFINITY_VAR: &str = "FORCE_AFFINITY";

/// Formats the `FORCE_AFFINITY=<cpu_id>` entry for a child process environment.
///
/// The id is written as given, including the `-1` "no preference" sentinel.
pub fn affinity_env_var(cpu_id: i64) -> String {
    format!("{}={}", FORCE_AFFINITY_VAR, cpu_id)
}

/// Reads the CPU id back out of a `FORCE_AFFINITY=<integer>` entry.
///
/// Leading spaces before the integer are skipped and anything after its digits is ignored,
/// so `FORCE_AFFINITY= 7x` reads as 7. A different variable name, a missing integer or an id
/// outside the `CpuId` range yields `None`.
pub fn parse_affinity_env_var(entry: &str) -> Option<CpuId> {
    let value = entry
        .strip_prefix(FORCE_AFFINITY_VAR)
        .and_then(|rest| rest.strip_prefix('='))?
        .trim_start_matches(' ');

    let sign_len = usize::from(value.starts_with(['+', '-']));
    let digits_len = value[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    let cpu_id = value[..sign_len + digits_len].parse::<i64>().ok()?;
    CpuId::try_from(cpu_id).ok()
}

/// The current process environment as `KEY=VALUE` entries.
///
/// Entries that are not valid UTF-8 are skipped.
pub fn current_env() -> Vec<String> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.to_str(), value.to_str()) {
            (Some(key), Some(value)) => Some(format!("{}={}", key, value)),
            _ => None,
        })
        .collect()
}

use crate::helpers::{config_from_json, env_of, init_tracing};
use affinity::{
    affinity_env_var, current_env, resolve_affinity, to_raw_cpu_id, AffinityError, Config,
    NIL_CPU_ID,
};

#[test]
fn test_cgroup_config_beats_env() {
    init_tracing();
    let config = config_from_json(r#"{"cgroups": {"resources": {"cpuset_cpus": "4-6"}}}"#);
    let env = env_of(&["FORCE_AFFINITY=1"]);

    let cpu = resolve_affinity(&config, Some(env.as_slice())).unwrap();
    assert_eq!(cpu, Some(4));
    assert_eq!(to_raw_cpu_id(cpu), 4);
}

#[test]
fn test_invalid_cgroup_config() {
    init_tracing();
    let config = config_from_json(r#"{"cgroups": {"resources": {"cpuset_cpus": "-3"}}}"#);

    let err = resolve_affinity::<String>(&config, None).unwrap_err();
    assert!(matches!(err, AffinityError::InvalidCpuId { .. }));
    assert_eq!(err.invalid_value(), "");
}

#[test]
fn test_env_override_propagates() {
    init_tracing();
    // what a runtime hands to the child after resolving cpu 7
    let env = vec!["TERM=xterm".to_string(), affinity_env_var(7)];

    let cpu = resolve_affinity(&Config::without_cgroups(), Some(env.as_slice())).unwrap();
    assert_eq!(cpu, Some(7));
}

#[test]
fn test_sentinel_override_is_no_preference() {
    init_tracing();
    let env = vec![affinity_env_var(NIL_CPU_ID)];

    let cpu = resolve_affinity(&Config::without_cgroups(), Some(env.as_slice())).unwrap();
    assert_eq!(cpu, None);
    assert_eq!(to_raw_cpu_id(cpu), NIL_CPU_ID);
}

#[test]
fn test_absent_sources() {
    init_tracing();
    let cpu = resolve_affinity::<String>(&Config::without_cgroups(), None).unwrap();
    assert_eq!(to_raw_cpu_id(cpu), NIL_CPU_ID);
}

#[test]
fn test_current_env_entries() {
    init_tracing();
    let env = current_env();
    assert!(env.iter().all(|entry| entry.contains('=')));

    // whatever the process environment holds, resolution must not fail
    assert!(resolve_affinity(&Config::without_cgroups(), Some(env.as_slice())).is_ok());
}

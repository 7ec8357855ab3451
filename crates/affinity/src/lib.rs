//! Resolves the single CPU a container process should be pinned to, either from the cpuset
//! of its cgroup configuration or from a `FORCE_AFFINITY` environment override.
//!
//! Nothing here touches the real scheduler affinity; callers apply the result themselves.
//!
//! ```
//! use affinity::{affinity_env_var, parse_cpuset, resolve_affinity, Config};
//!
//! assert_eq!(parse_cpuset("2,0-1").unwrap(), vec![0, 1, 2]);
//!
//! let config = Config::with_cpuset("4-6");
//! assert_eq!(resolve_affinity::<&str>(&config, None).unwrap(), Some(4));
//!
//! let env = [affinity_env_var(7)];
//! assert_eq!(resolve_affinity(&Config::without_cgroups(), Some(&env[..])).unwrap(), Some(7));
//! ```
pub mod config;
pub mod cpuset;
pub mod env;
pub mod error;
pub mod resolver;


// re-export
pub use config::{Cgroup, Config, Resources};
pub use cpuset::{parse_cpuset, CpuId};
pub use env::{affinity_env_var, current_env, parse_affinity_env_var, FORCE_AFFINITY_VAR};
pub use error::{AffinityError, Result};
pub use resolver::{from_raw_cpu_id, resolve_affinity, to_raw_cpu_id, NIL_CPU_ID};

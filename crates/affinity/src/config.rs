use serde::{Deserialize, Serialize};

/// The part of a container's resource configuration that affinity resolution reads.
///
/// `cgroups: None` means the container has no cgroup section at all, which is not the same
/// as a cgroup section with an empty cpuset.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub cgroups: Option<Cgroup>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Cgroup {
    #[serde(default)]
    pub resources: Resources,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Resources {
    /// The cpuset as written to `cpuset.cpus`, e.g. `0-3,8`
    #[serde(default)]
    pub cpuset_cpus: String,
}

impl Config {
    pub fn with_cpuset(cpus: &str) -> Self {
        Self {
            cgroups: Some(Cgroup {
                resources: Resources {
                    cpuset_cpus: cpus.to_string(),
                },
            }),
        }
    }

    pub fn without_cgroups() -> Self {
        Self::default()
    }

    /// The cpuset spec of the cgroup section, if there is one.
    pub fn cpuset(&self) -> Option<&str> {
        self.cgroups
            .as_ref()
            .map(|cgroup| cgroup.resources.cpuset_cpus.as_str())
    }
}

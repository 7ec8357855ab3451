use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AffinityError {
    #[error("Invalid CPU id in cpuset: {value:?}: {source}")]
    InvalidCpuId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid CPU id in cpuset: {0:?}: explicit sign is not allowed")]
    SignedCpuId(String),
}

impl AffinityError {
    /// The malformed piece of the cpuset, either a whole token or one half of a range.
    pub fn invalid_value(&self) -> &str {
        match self {
            AffinityError::InvalidCpuId { value, .. } => value,
            AffinityError::SignedCpuId(value) => value,
        }
    }
}

pub type Result<T> = std::result::Result<T, AffinityError>;

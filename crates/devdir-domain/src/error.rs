//! FetchError - What can go wrong while loading the employee list
//!
//! The domain only names the failure kinds. Which transport produced
//! them is the adapter's business.

/// Errors a data source can report when loading the employee document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The upstream could not be reached (DNS, connect, reset, timeout)
    Network { message: String },
    /// The upstream answered with a non-2xx status
    Status { code: u16 },
    /// The body was not a JSON document
    InvalidJson { message: String },
}

impl FetchError {
    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Status { .. } => "status",
            FetchError::InvalidJson { .. } => "invalid_json",
        }
    }
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FetchError::Network { message } => {
                write!(f, "Upstream unreachable: {}", message)
            }
            FetchError::Status { code } => {
                write!(f, "Upstream returned status {}", code)
            }
            FetchError::InvalidJson { message } => {
                write!(f, "Upstream returned invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for FetchError {}

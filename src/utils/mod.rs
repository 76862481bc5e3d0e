//! Utility modules for k8s-release-dev

pub mod errors;
pub mod logger;

#[cfg(test)]
pub mod testserver;

// Re-export commonly used items
pub use errors::{display_error_and_exit, ReleaseDevError};
pub use logger::{log_error, log_info, log_warn};

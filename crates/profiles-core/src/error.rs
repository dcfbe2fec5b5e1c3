//! Profile error types
//!
//! Errors raised by the profile model, configuration loading, and the view
//! layer's guarded operations. User-facing failures of external operations
//! (a wrong password, a failed registration) are *not* represented here; they
//! arrive as state and are rendered, never raised.

use thiserror::Error;

/// Errors from profile operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Every allocated identity address is already in use.
    #[error("no unused identity address (next index {next_index}, {allocated} allocated)")]
    NoUnusedAddress {
        /// Next unused address index
        next_index: usize,
        /// Number of allocated addresses
        allocated: usize,
    },

    /// A profile creation request is already in flight.
    #[error("profile creation already in progress")]
    AlreadyProcessing,

    /// Field binding targeted a field the view does not own.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Service is not present in the service registry.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// Collaborator operation failed.
    #[error("bridge operation {operation} failed: {reason}")]
    Bridge {
        /// Operation that failed
        operation: &'static str,
        /// Failure description
        reason: String,
    },

    /// Configuration is malformed or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("failed to read {path}: {reason}")]
    Io {
        /// Path that failed
        path: String,
        /// Failure description
        reason: String,
    },
}

impl ProfileError {
    /// Create a no unused address error.
    pub fn no_unused_address(next_index: usize, allocated: usize) -> Self {
        Self::NoUnusedAddress {
            next_index,
            allocated,
        }
    }

    /// Create a bridge failure error.
    pub fn bridge(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Bridge {
            operation,
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    /// Create an I/O error for a path.
    pub fn io(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check whether the user can resolve this error by acting in the UI.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::NoUnusedAddress { .. } | Self::AlreadyProcessing)
    }
}

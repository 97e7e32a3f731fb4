//! Domain errors raised by early-window operations.
//!
//! All errors use `thiserror`-derived enums with structured context so
//! callers can inspect the failure programmatically. Selection never
//! fails (a missing or disabled provider degrades to the fallback), so
//! every variant here describes either a registration conflict or a
//! provider-side failure after selection.

use thiserror::Error;

/// Errors arising from early-window operations.
#[derive(Debug, Error)]
pub enum WindowError {
    /// A window provider with the same name is already registered.
    #[error("window provider '{name}' is already registered")]
    DuplicateProvider {
        /// Name that was registered twice.
        name: String,
    },

    /// A graphics bootstrap plugin with the same name is already
    /// registered.
    #[error("graphics bootstrap '{name}' is already registered")]
    DuplicateBootstrap {
        /// Name that was registered twice.
        name: String,
    },

    /// A window-setup operation was invoked on the fallback provider
    /// before the game module was bound.
    ///
    /// This is a contract violation by the caller, not an
    /// absence-of-feature condition: reaching an unbound fallback
    /// through one of these operations means the bootstrap sequence is
    /// logically broken.
    #[error("'{operation}' called on the fallback provider before the game module was bound")]
    FallbackUnbound {
        /// Operation that was invoked.
        operation: &'static str,
    },

    /// The active provider failed to carry out a window operation.
    #[error("window provider '{name}' failed: {message}")]
    Provider {
        /// Provider name.
        name: String,
        /// Human-readable failure description.
        message: String,
    },
}

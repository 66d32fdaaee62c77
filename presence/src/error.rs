//! Errors raised when building a controller.

use thiserror::Error;

/// Contract violations caught at construction time.
///
/// Once a controller is built it never fails: missing callbacks are no-ops
/// and a panicking render callback unwinds into the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `build()` was called without a render callback.
    #[error("Transition controller requires a render callback")]
    MissingRender,
}

pub type Result<T> = std::result::Result<T, Error>;

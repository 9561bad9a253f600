//! Device error type.

use fibengine_core::FibError;

/// Errors returned by the device front end.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Another handle currently owns the device.
    #[error("device is in use")]
    Busy,

    /// A write at a position that names no algorithm.
    #[error("unknown algorithm selector: {0}")]
    UnknownSelector(u64),

    /// An index beyond the device's bound.
    #[error("index {index} exceeds maximum {max}")]
    IndexOutOfRange { index: u64, max: u64 },

    /// The computation itself failed.
    #[error(transparent)]
    Engine(#[from] FibError),
}

//! Error handling and exit codes.

use fibengine_core::{exit_codes, FibError};
use fibengine_device::DeviceError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A result disagreed with the num-bigint reference.
    #[error("F({0}) does not match the reference value")]
    Verification(u64),
}

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Engine(_) => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch(_) => exit_codes::ERROR_MISMATCH,
    }
}

/// Map a device error to its exit code.
pub fn handle_device_error(err: &DeviceError) -> i32 {
    match err {
        DeviceError::Busy => exit_codes::ERROR_BUSY,
        DeviceError::UnknownSelector(_) | DeviceError::IndexOutOfRange { .. } => {
            exit_codes::ERROR_CONFIG
        }
        DeviceError::Engine(e) => handle_error(e),
    }
}

/// Exit code for any error that reaches `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<DeviceError>() {
        handle_device_error(e)
    } else if let Some(e) = err.downcast_ref::<FibError>() {
        handle_error(e)
    } else if err.downcast_ref::<AppError>().is_some() {
        exit_codes::ERROR_MISMATCH
    } else {
        exit_codes::ERROR_GENERIC
    }
}

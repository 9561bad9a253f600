//! # fibengine-device
//!
//! Device-style front end for the Fibonacci engine: exclusive open, seek to
//! an index, write to select an algorithm, timed read of the decimal result.

pub mod device;
pub mod error;
pub mod stats;

pub use device::{DeviceHandle, FibDevice, Reading, Whence};
pub use error::DeviceError;
pub use stats::DeviceStats;

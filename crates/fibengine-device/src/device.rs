//! The device and its handles.
//!
//! A [`FibDevice`] admits one open handle at a time. The handle carries its
//! own position and algorithm selection, so nothing a client configures leaks
//! into another client's request.

use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use fibengine_core::{compute, Algorithm, MAX_INDEX};

use crate::error::DeviceError;
use crate::stats::{AtomicDeviceStats, DeviceStats};

/// Reference point for [`DeviceHandle::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Absolute position.
    Set,
    /// Relative to the current position.
    Cur,
    /// Counted down from the maximum index.
    End,
}

/// Result of one timed read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Index that was computed.
    pub index: u64,
    /// Algorithm that computed it.
    pub algorithm: Algorithm,
    /// Decimal digits of F(index).
    pub value: String,
    /// Time spent inside the engine.
    pub elapsed: Duration,
}

impl Reading {
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed.as_nanos() as u64
    }
}

/// Single-holder front end over the engine.
///
/// # Example
/// ```
/// use fibengine_device::{FibDevice, Whence};
///
/// let device = FibDevice::new();
/// let mut handle = device.open().unwrap();
/// handle.seek(100, Whence::Set);
/// assert_eq!(handle.read().unwrap().value, "354224848179261915075");
/// ```
pub struct FibDevice {
    lock: Mutex<()>,
    max_index: u64,
    stats: AtomicDeviceStats,
}

impl FibDevice {
    /// A device bounded at [`MAX_INDEX`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_index(MAX_INDEX)
    }

    #[must_use]
    pub fn with_max_index(max_index: u64) -> Self {
        Self {
            lock: Mutex::new(()),
            max_index,
            stats: AtomicDeviceStats::new(),
        }
    }

    #[must_use]
    pub fn max_index(&self) -> u64 {
        self.max_index
    }

    /// Take exclusive ownership, failing with [`DeviceError::Busy`] if
    /// another handle is open.
    pub fn open(&self) -> Result<DeviceHandle<'_>, DeviceError> {
        let Some(guard) = self.lock.try_lock() else {
            self.stats.record_busy();
            warn!("fibonacci device is in use");
            return Err(DeviceError::Busy);
        };
        Ok(self.admit(guard))
    }

    /// Take exclusive ownership, waiting for the current holder to close.
    pub fn open_blocking(&self) -> DeviceHandle<'_> {
        let guard = self.lock.lock();
        self.admit(guard)
    }

    fn admit<'a>(&'a self, guard: MutexGuard<'a, ()>) -> DeviceHandle<'a> {
        self.stats.record_open();
        debug!("fibonacci device opened");
        DeviceHandle {
            device: self,
            _guard: guard,
            position: 0,
            algorithm: Algorithm::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> DeviceStats {
        self.stats.snapshot()
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// An open device. Dropping it releases the device.
pub struct DeviceHandle<'a> {
    device: &'a FibDevice,
    _guard: MutexGuard<'a, ()>,
    position: u64,
    algorithm: Algorithm,
}

impl DeviceHandle<'_> {
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The algorithm the next read will use.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Move the position and return it, clamped into `[0, max_index]`.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> u64 {
        let max = i128::from(self.device.max_index);
        let target = match whence {
            Whence::Set => i128::from(offset),
            Whence::Cur => i128::from(self.position) + i128::from(offset),
            Whence::End => max - i128::from(offset),
        };
        self.position = u64::try_from(target.clamp(0, max)).unwrap_or(self.device.max_index);
        self.position
    }

    /// Set the position to `index`, rejecting indices beyond the bound
    /// instead of clamping them.
    pub fn seek_to(&mut self, index: u64) -> Result<u64, DeviceError> {
        let max = self.device.max_index;
        if index > max {
            return Err(DeviceError::IndexOutOfRange { index, max });
        }
        self.position = index;
        Ok(index)
    }

    /// Select the algorithm named by the current position (`0` linear,
    /// `1` fast doubling). Other positions leave the selection unchanged.
    pub fn write(&mut self) -> Result<Algorithm, DeviceError> {
        let algorithm = Algorithm::from_selector(self.position)
            .ok_or(DeviceError::UnknownSelector(self.position))?;
        self.algorithm = algorithm;
        debug!(algorithm = %algorithm, "algorithm selected");
        Ok(algorithm)
    }

    /// Select an algorithm directly.
    pub fn select(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Compute F(position) with the selected algorithm, timing the engine.
    pub fn read(&mut self) -> Result<Reading, DeviceError> {
        let index = self.position;
        let algorithm = self.algorithm;

        let start = Instant::now();
        let value = compute(index, algorithm)?;
        let elapsed = start.elapsed();

        self.device.stats.record_read(elapsed);

        let reading = Reading {
            index,
            algorithm,
            value,
            elapsed,
        };
        debug!(
            index,
            algorithm = %algorithm,
            digits = reading.value.len(),
            elapsed_ns = reading.elapsed_ns(),
            "read complete"
        );
        Ok(reading)
    }

    /// Read into a caller buffer as NUL-terminated digits, truncating to fit,
    /// and return the elapsed nanoseconds.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<u64, DeviceError> {
        let reading = self.read()?;
        if let Some(room) = buf.len().checked_sub(1) {
            let digits = reading.value.as_bytes();
            let n = digits.len().min(room);
            buf[..n].copy_from_slice(&digits[..n]);
            buf[n] = 0;
        }
        Ok(reading.elapsed_ns())
    }
}

impl Drop for DeviceHandle<'_> {
    fn drop(&mut self) {
        debug!(position = self.position, "fibonacci device released");
    }
}

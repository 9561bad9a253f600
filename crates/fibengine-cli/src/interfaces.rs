//! Presentation interfaces.

use fibengine_device::{DeviceError, Reading};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one reading.
    fn present_reading(&self, reading: &Reading, details: bool);

    /// Present readings of the same index by several algorithms.
    fn present_comparison(&self, readings: &[Reading]);

    /// Present the outcome of a multi-client run.
    fn present_clients(&self, results: &[ClientResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Outcome of one client in a multi-client run.
#[derive(Debug)]
pub struct ClientResult {
    /// Client number, starting at 0.
    pub client: usize,
    /// Index the client asked for.
    pub index: u64,
    /// The reading, or why there is none.
    pub outcome: Result<Reading, DeviceError>,
}

impl ClientResult {
    /// Short status label: `OK`, `BUSY` or `ERROR`.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match &self.outcome {
            Ok(_) => "OK",
            Err(DeviceError::Busy) => "BUSY",
            Err(_) => "ERROR",
        }
    }
}

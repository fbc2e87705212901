use thiserror::Error;

/// Failure reported by a device operation.
///
/// "No data available" is not an error; polling reads return `Ok(None)` for it.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DeviceError {
    /// The device reported a hardware or firmware fault.
    #[error("device fault: {0}")]
    Fault(String),

    /// The request does not fit the device (e.g. blit larger than the mode).
    #[error("invalid device request: {0}")]
    InvalidRequest(String),
}

use thiserror::Error;

/// Errors the driver can hit outside of grammar evaluation. Failure to
/// match is not an error; only the I/O plumbing can fail.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("standard stream error: {0}")]
    Io(#[from] std::io::Error),
}

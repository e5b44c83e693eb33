//! Error types for growbuf.

use std::fmt;

/// Errors that can occur while building a buffer.
#[derive(Debug)]
pub enum BufError {
    /// An explicit initial capacity of zero was requested.
    ///
    /// A zero-capacity buffer is a valid state, but only as the default
    /// starting point of [`GrowBuf::new`](crate::GrowBuf::new); asking for
    /// it explicitly is treated as a caller mistake.
    ZeroCapacity,

    /// The allocator could not satisfy a growth or initial allocation
    /// request. The buffer is unchanged; retrying or aborting is up to
    /// the caller.
    AllocationFailed {
        /// The total capacity in bytes that was requested.
        requested: usize,
    },
}

impl fmt::Display for BufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufError::ZeroCapacity => {
                write!(f, "explicit initial capacity must be non-zero")
            }
            BufError::AllocationFailed { requested } => {
                write!(f, "allocation failed: {} bytes requested", requested)
            }
        }
    }
}

impl std::error::Error for BufError {}

impl From<BufError> for std::io::Error {
    fn from(e: BufError) -> Self {
        match e {
            BufError::AllocationFailed { .. } => {
                std::io::Error::new(std::io::ErrorKind::OutOfMemory, e)
            }
            BufError::ZeroCapacity => std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        }
    }
}

//! growbuf
//!
//! A growable byte buffer ("string builder") for Rust.
//!
//! `growbuf` accumulates bytes appended one at a time or slice by slice
//! and hands the result back as a single contiguous view. It is designed
//! as a small, composable primitive for:
//!
//! - building wire messages and records
//! - assembling output incrementally before one write
//! - any append-only byte accumulation where reallocation cost matters
//!
//! The crate intentionally:
//! - does NOT interpret bytes (no text encoding or decoding)
//! - does NOT support insertion or deletion at arbitrary offsets
//! - does NOT manage concurrency
//! - does NOT persist anything
//!
//! It only does one thing: **bytes in → contiguous bytes out**, with a
//! deterministic amortized-O(1) growth policy (`capacity/2 + 8` per
//! step) instead of an allocator-defined one.
//!
//! # Usage
//!
//! ```
//! use growbuf::{GrowBuf, BufError};
//!
//! fn main() -> Result<(), BufError> {
//!     let mut buf = GrowBuf::with_capacity(16)?;
//!
//!     buf.append_slice(b"status=")?;
//!     buf.append_byte(b'1')?;
//!
//!     assert_eq!(buf.as_slice(), b"status=1");
//!     assert_eq!(buf.capacity(), 16);
//!     Ok(())
//! }
//! ```
//!
//! Allocation is fallible throughout: appends return
//! [`BufError::AllocationFailed`] instead of aborting when memory cannot
//! be obtained, and the buffer is left untouched.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod error;

mod growth; // internal capacity computation

//
// Public surface (intentionally tiny)
//

pub use buffer::GrowBuf;
pub use error::BufError;

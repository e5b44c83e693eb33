//! The growable buffer itself.
//!
//! - [`GrowBuf`] - append-only byte accumulator with explicit growth

mod growable;

pub use growable::GrowBuf;

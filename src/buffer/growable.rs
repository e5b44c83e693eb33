//! The GrowBuf type - an append-only growable byte buffer.

use bytes::Bytes;

use crate::error::BufError;
use crate::growth;

/// An append-only byte buffer with an explicit, deterministic growth
/// policy.
///
/// `GrowBuf` owns a contiguous block of memory and a write cursor. Bytes
/// are appended at the end, never inserted or removed, and the
/// accumulated content is read back as one contiguous slice. When an
/// append does not fit, capacity grows by `capacity/2 + 8` per step
/// (saturating) until it covers the request, which bounds reallocations
/// to O(log n) over n appended bytes and makes append amortized O(1).
///
/// Unlike `Vec<u8>`, the capacity a buffer passes through is part of the
/// contract: [`capacity`](GrowBuf::capacity) reports exactly what the
/// growth policy granted, and appends that fit in free space never move
/// the storage.
///
/// Allocation is fallible. Appends return `Err` instead of aborting when
/// the allocator refuses, and a failed append leaves the buffer exactly
/// as it was.
///
/// # Example
///
/// ```
/// use growbuf::GrowBuf;
///
/// let mut buf = GrowBuf::new();
/// buf.append_slice(b"hello ")?;
/// buf.append_slice(b"world")?;
/// buf.append_byte(b'!')?;
///
/// assert_eq!(buf.as_slice(), b"hello world!");
/// assert_eq!(buf.len(), 12);
/// # Ok::<(), growbuf::BufError>(())
/// ```
#[derive(Debug)]
pub struct GrowBuf {
    data: Vec<u8>,
    // Capacity granted by the growth policy. The vec has reserved at
    // least this much; the allocator may hold more, but callers only
    // ever observe this value.
    capacity: usize,
}

impl GrowBuf {
    /// Creates an empty buffer with zero capacity.
    ///
    /// Does not allocate. The first append triggers the initial
    /// allocation.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Creates a buffer with exactly `capacity` bytes pre-allocated.
    ///
    /// Returns [`BufError::ZeroCapacity`] if `capacity` is zero (use
    /// [`GrowBuf::new`] for a legitimately empty buffer) and
    /// [`BufError::AllocationFailed`] if the allocator refuses.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufError> {
        if capacity == 0 {
            return Err(BufError::ZeroCapacity);
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| BufError::AllocationFailed {
                requested: capacity,
            })?;

        Ok(Self { data, capacity })
    }

    /// Appends a byte slice to the end of the buffer.
    ///
    /// Grows first if needed, then copies; on
    /// [`BufError::AllocationFailed`] the buffer is unchanged. An empty
    /// slice is a successful no-op.
    pub fn append_slice(&mut self, data: &[u8]) -> Result<(), BufError> {
        self.ensure_capacity(data.len())?;
        self.data.extend_from_slice(data);
        Ok(())
    }

    /// Appends a single byte. Fast path for `append_slice(&[b])`.
    pub fn append_byte(&mut self, b: u8) -> Result<(), BufError> {
        self.ensure_capacity(1)?;
        self.data.push(b);
        Ok(())
    }

    /// Returns everything written so far as one contiguous slice.
    ///
    /// Zero-copy: the slice borrows the buffer's storage and the borrow
    /// ends before the next mutating call. Callers that need the bytes
    /// to outlive the buffer should copy them out or use
    /// [`into_bytes`](GrowBuf::into_bytes).
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity granted by the growth policy.
    ///
    /// Always at least [`len`](GrowBuf::len), and never decreases.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resets the write cursor to zero without releasing storage.
    ///
    /// Capacity is kept, so a cleared buffer can be refilled without
    /// reallocating.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the buffer and freezes its content into [`Bytes`].
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.data)
    }

    /// Consumes the buffer and returns the underlying vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Makes room for `additional` more bytes.
    ///
    /// Both growth paths live behind the single reservation call: the
    /// allocator extends the block in place when it can and otherwise
    /// reallocates and copies the valid region. Either way the written
    /// bytes and the cursor are untouched, and on failure so is the
    /// capacity.
    fn ensure_capacity(&mut self, additional: usize) -> Result<(), BufError> {
        if self.capacity - self.data.len() >= additional {
            return Ok(());
        }

        let new_capacity = growth::next_capacity(self.capacity, self.data.len(), additional);
        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| BufError::AllocationFailed {
                requested: new_capacity,
            })?;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl Default for GrowBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for GrowBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<GrowBuf> for Bytes {
    fn from(buf: GrowBuf) -> Self {
        buf.into_bytes()
    }
}

impl From<GrowBuf> for Vec<u8> {
    fn from(buf: GrowBuf) -> Self {
        buf.into_vec()
    }
}

impl std::io::Write for GrowBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.append_slice(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

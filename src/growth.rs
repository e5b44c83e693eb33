//! Internal capacity-growth computation.
//!
//! The growth policy is part of the crate's observable contract: capacity
//! grows by `capacity/2 + 8` per step until it covers the request, so the
//! whole sequence of capacities a buffer passes through is deterministic.
//! It is an implementation detail and not part of the public API.

/// Computes the next capacity for a buffer that holds `len` bytes in
/// `capacity` allocated bytes and needs room for `additional` more.
///
/// Starts from the current capacity and repeatedly applies
/// `cap += cap/2 + 8` until the total requirement is covered. The `+8`
/// term guarantees progress from a zero or tiny capacity; the 1.5x factor
/// keeps the number of reallocations logarithmic in the total bytes
/// appended. Saturates instead of overflowing on pathological inputs.
///
/// Callers must only invoke this when `additional` does not fit in the
/// free space, so the returned capacity is always strictly larger than
/// `capacity` (except at the `usize::MAX` saturation point).
pub(crate) fn next_capacity(capacity: usize, len: usize, additional: usize) -> usize {
    let required = len.saturating_add(additional);
    let mut new_capacity = capacity;
    while new_capacity < required {
        let step = (new_capacity / 2).saturating_add(8);
        new_capacity = new_capacity.saturating_add(step);
    }
    new_capacity
}

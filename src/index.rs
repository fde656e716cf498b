//! Circular index arithmetic.
//!
//! All wraparound math lives here; the container itself only ever moves one
//! slot at a time through these helpers, so the modulo invariant has a single
//! home.

/// Steps one slot forward, wrapping at `capacity`.
#[inline]
pub fn wrap_next(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    (index + 1) % capacity
}

/// Steps one slot backward, wrapping at `capacity`.
#[inline]
pub fn wrap_prev(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    (index + capacity - 1) % capacity
}

/// Number of forward steps from slot `start` to slot `stop`.
///
/// `span(a, a, _) == 0`; a span that wraps past the end of the buffer adds
/// `capacity` back in.
#[inline]
pub fn span(start: usize, stop: usize, capacity: usize) -> usize {
    debug_assert!(start < capacity);
    debug_assert!(stop < capacity);
    if start <= stop {
        stop - start
    } else {
        capacity - start + stop
    }
}

/// Clamps `value` into `[min_value, max_value]`.
#[inline]
pub fn clamp(value: isize, min_value: isize, max_value: isize) -> isize {
    if value < min_value {
        min_value
    } else if value > max_value {
        max_value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(wrap_next(0, 8), 1);
        assert_eq!(wrap_next(7, 8), 0);
        assert_eq!(wrap_prev(1, 8), 0);
        assert_eq!(wrap_prev(0, 8), 7);
    }

    #[test]
    fn span_handles_wraparound() {
        assert_eq!(span(2, 5, 8), 3);
        assert_eq!(span(5, 2, 8), 5);
        assert_eq!(span(3, 3, 8), 0);
        assert_eq!(span(7, 0, 8), 1);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, -3, 3), 3);
        assert_eq!(clamp(-5, -3, 3), -3);
        assert_eq!(clamp(2, -3, 3), 2);
    }
}

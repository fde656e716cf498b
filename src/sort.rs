//! In-place hybrid sort over circular spans.
//!
//! The sort never unwraps the ring: every comparison and move works on
//! physical slot indices, with `wrap_next`/`wrap_prev` carrying positions
//! across the end of the buffer. Pending quicksort ranges are kept on an
//! explicit stack of `(start, stop)` spans instead of the call stack.

use crate::index::{span, wrap_next, wrap_prev};
use crate::RingList;

/// Spans at most this many steps long are insertion sorted.
const INSERTION_SPAN: usize = 64;

impl<T: Ord> RingList<T> {
    /// Sorts the list in place in ascending order.
    ///
    /// Small spans use a circular insertion sort; larger spans use a
    /// Hoare-partition quicksort with a midpoint pivot. A partition whose
    /// elements all equal the pivot is detected during the left scan and
    /// dropped outright, so duplicate-heavy input stays `O(n log n)`.
    /// The sort is not stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::ringlist;
    ///
    /// let mut list = ringlist![5, 7, 21, 2];
    /// list.sort();
    /// assert_eq!(list, vec![2, 5, 7, 21]);
    /// ```
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }
        let start = wrap_next(self.head, self.capacity());
        self.sort_spans(start, self.tail);
    }

    fn sort_spans(&mut self, start: usize, stop: usize) {
        let cap = self.capacity();
        let mut pending = vec![(start, stop)];
        while let Some((start, stop)) = pending.pop() {
            if start == stop {
                continue;
            }
            if span(start, stop, cap) <= INSERTION_SPAN {
                self.insertion_sort(start, stop);
                continue;
            }
            let mid = if start < stop {
                (start + stop) / 2
            } else {
                (start + (cap - start + stop) / 2) % cap
            };
            unsafe { self.swap_slots(start, mid) };
            if let Some(pivot) = self.partition(start, stop) {
                if pivot != start {
                    pending.push((start, wrap_prev(pivot, cap)));
                }
                if pivot != stop {
                    pending.push((wrap_next(pivot, cap), stop));
                }
            }
        }
    }

    /// Hoare-style partition of `[start, stop]` around the element at
    /// `start`.
    ///
    /// Returns the pivot's final slot, or `None` when the forward scan saw
    /// only elements equal to the pivot, in which case the span is already
    /// as ordered as it can get and neither side needs another pass.
    fn partition(&mut self, start: usize, stop: usize) -> Option<usize> {
        let cap = self.capacity();
        let stop_next = wrap_next(stop, cap);
        let mut i = start;
        let mut j = stop;
        loop {
            let mut all_equal = true;
            unsafe {
                while i != stop_next && self.slot_ref(i) <= self.slot_ref(start) {
                    if self.slot_ref(i) != self.slot_ref(start) {
                        all_equal = false;
                    }
                    i = wrap_next(i, cap);
                }
                if all_equal && i == stop_next {
                    return None;
                }
                while j != start && self.slot_ref(j) > self.slot_ref(start) {
                    j = wrap_prev(j, cap);
                }
                if wrap_next(j, cap) == i {
                    break;
                }
                self.swap_slots(i, j);
            }
        }
        unsafe { self.swap_slots(start, j) };
        Some(j)
    }

    /// Circular insertion sort of `[start, stop]`, both ends inclusive.
    fn insertion_sort(&mut self, start: usize, stop: usize) {
        let cap = self.capacity();
        let before_start = wrap_prev(start, cap);
        let stop_next = wrap_next(stop, cap);
        let mut i = wrap_next(start, cap);
        while i != stop_next {
            unsafe {
                let value = self.read_slot(i);
                let mut hole = i;
                let mut j = wrap_prev(i, cap);
                while j != before_start && *self.slot_ref(j) > value {
                    self.move_slot(hole, j);
                    hole = j;
                    j = wrap_prev(j, cap);
                }
                self.write_slot(hole, value);
            }
            i = wrap_next(i, cap);
        }
    }
}

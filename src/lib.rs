//! A Python-style list backed by a growable circular buffer.
//!
//! `RingList` reproduces the semantics of Python's `list` on top of a
//! single contiguous ring buffer: negative indexing, slicing with a step,
//! amortized `O(1)` append and pop, in-place sort, and concatenation,
//! repetition, and comparison through the usual operators. An insert or
//! removal moves at most half the list, because every shift picks the
//! cheaper of the two circular directions.
//!
//! One slot of the buffer is permanently reserved as a sentinel separating
//! the position before the first element from the last element, so a list
//! holds at most `capacity() - 1` elements between resizes.
//!
//! # Examples
//!
//! ```
//! use ringlist::ringlist;
//!
//! let mut list = ringlist![5, 7, 2];
//! list.insert(2, 21);
//! assert_eq!(list, vec![5, 7, 21, 2]);
//!
//! list.sort();
//! assert_eq!(list, vec![2, 5, 7, 21]);
//!
//! list.reverse();
//! assert_eq!(list, vec![21, 7, 5, 2]);
//!
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list, vec![21, 7, 5]);
//! ```
//!
//! Negative indices count from the end, exactly as in Python:
//!
//! ```
//! use ringlist::ringlist;
//!
//! let list = ringlist![1, 2, 3];
//! assert_eq!(list[-1], 3);
//! assert_eq!(list.slice(0, -1, 1)?, vec![1, 2]);
//! assert_eq!(list.slice(2, -4, -1)?, vec![3, 2, 1]);
//! # Ok::<(), ringlist::Error>(())
//! ```
//!
//! # Failure modes
//!
//! Accessors validate strictly and return [`Error::IndexOutOfRange`];
//! `insert` and `slice` clamp out-of-range indices to the nearer end
//! instead, matching Python. `remove` and `index` report
//! [`Error::ValueNotFound`], `max`/`min` on an empty list report
//! [`Error::Empty`], and a zero slice step reports [`Error::InvalidStep`].
//! A failed call never moves an element.

#![deny(missing_docs)]

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign};
use std::ptr;

mod error;
mod index;
mod sort;

pub use error::{Error, Result};

use index::{clamp, span, wrap_next, wrap_prev};

/// Smallest capacity a list ever has; shrinking stops here.
pub const MIN_CAPACITY: usize = 100;

fn alloc_buf<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    std::iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect()
}

/// A growable ring buffer with Python `list` semantics.
///
/// Logical index `0` is the front of the list; negative logical indices
/// count from the back. The live elements occupy the circular slot range
/// `(head, tail]`; the slot at `head` is the sentinel and never holds an
/// element.
pub struct RingList<T> {
    buf: Box<[MaybeUninit<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingList<T> {
    /// Creates an empty list at the minimum capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<i32> = RingList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_request(MIN_CAPACITY)
    }

    fn with_request(request: usize) -> Self {
        let capacity = request.max(MIN_CAPACITY);
        RingList {
            buf: alloc_buf(capacity),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total physical slots currently allocated, sentinel included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    // --- physical slot access -------------------------------------------
    //
    // Callers guarantee `slot` holds a live element (or, for `write_slot`,
    // that the slot is vacant and about to become live).

    #[inline]
    unsafe fn slot_ref(&self, slot: usize) -> &T {
        &*self.buf[slot].as_ptr()
    }

    #[inline]
    unsafe fn slot_mut(&mut self, slot: usize) -> &mut T {
        &mut *self.buf[slot].as_mut_ptr()
    }

    #[inline]
    unsafe fn read_slot(&self, slot: usize) -> T {
        self.buf[slot].as_ptr().read()
    }

    #[inline]
    unsafe fn write_slot(&mut self, slot: usize, value: T) {
        self.buf[slot].as_mut_ptr().write(value);
    }

    /// Bitwise move of the element in `src` into `dst`; `src` is vacant
    /// afterwards.
    #[inline]
    unsafe fn move_slot(&mut self, dst: usize, src: usize) {
        let src: *const T = self.buf[src].as_ptr();
        let dst: *mut T = self.buf[dst].as_mut_ptr();
        ptr::copy(src, dst, 1);
    }

    #[inline]
    unsafe fn swap_slots(&mut self, a: usize, b: usize) {
        if a != b {
            let pa: *mut T = self.buf[a].as_mut_ptr();
            let pb: *mut T = self.buf[b].as_mut_ptr();
            ptr::swap(pa, pb);
        }
    }

    // --- index translation ----------------------------------------------

    /// Maps a caller-validated logical index to its physical slot.
    ///
    /// Negative indices are rebased by `+ len` first. The first element
    /// lives one past the sentinel, hence the `+ 1`.
    #[inline]
    fn to_physical(&self, index: isize) -> usize {
        let normalized = if index < 0 {
            index + self.len as isize
        } else {
            index
        };
        debug_assert!(normalized >= 0);
        (normalized as usize + self.head + 1) % self.capacity()
    }

    /// Inverse of [`to_physical`](Self::to_physical) for a live slot.
    #[inline]
    fn to_logical(&self, slot: usize) -> usize {
        debug_assert!(slot != self.head);
        if slot > self.head {
            slot - self.head - 1
        } else {
            slot + self.capacity() - self.head - 1
        }
    }

    fn check_index(&self, index: isize) -> Result<()> {
        let len = self.len as isize;
        if index < len && index >= -len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    // --- buffer store ---------------------------------------------------

    /// Grows or shrinks the buffer when the length crosses a resize
    /// threshold, relinearizing the elements from slot `1`.
    ///
    /// Runs before any single-element add and after any single-element
    /// removal. Growth doubles once the last free (non-sentinel) slot would
    /// be consumed; shrinking halves once occupancy falls under a quarter,
    /// but never below [`MIN_CAPACITY`]. The quarter threshold keeps an
    /// append/pop sequence straddling a capacity boundary from thrashing.
    fn ensure_capacity(&mut self) {
        let cap = self.capacity();
        let new_cap = if self.len >= cap - 1 {
            cap * 2
        } else if self.len < cap / 4 && cap / 2 >= MIN_CAPACITY {
            cap / 2
        } else {
            return;
        };
        let mut fresh = alloc_buf(new_cap);
        let mut src = self.head;
        for slot in fresh.iter_mut().skip(1).take(self.len) {
            src = wrap_next(src, cap);
            *slot = MaybeUninit::new(unsafe { self.read_slot(src) });
        }
        self.buf = fresh;
        self.head = 0;
        self.tail = self.len;
    }

    // --- mutation engine ------------------------------------------------

    /// Appends `value` to the back of the list. Amortized `O(1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list, vec![1, 2]);
    /// ```
    pub fn append(&mut self, value: T) {
        self.ensure_capacity();
        self.tail = wrap_next(self.tail, self.capacity());
        self.len += 1;
        unsafe { self.write_slot(self.tail, value) };
    }

    /// Inserts `value` before logical position `index`.
    ///
    /// Out-of-range indices clamp to the nearer end instead of failing,
    /// matching Python's `list.insert`. The elements between the target and
    /// the closer end of the list shift one slot toward that end, so an
    /// insert moves at most half the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::ringlist;
    ///
    /// let mut list = ringlist![5, 7, 2];
    /// list.insert(2, 21);
    /// list.insert(-100, 0);
    /// assert_eq!(list, vec![0, 5, 7, 21, 2]);
    /// ```
    pub fn insert(&mut self, index: isize, value: T) {
        self.ensure_capacity();
        let cap = self.capacity();
        let len = self.len as isize;
        let target = self.to_physical(clamp(index, -len, len));
        if span(target, self.tail, cap) < self.len / 2 {
            // Open the gap by pushing the tail side forward one slot.
            self.tail = wrap_next(self.tail, cap);
            let mut slot = self.tail;
            while slot != target {
                let prev = wrap_prev(slot, cap);
                unsafe { self.move_slot(slot, prev) };
                slot = prev;
            }
            unsafe { self.write_slot(target, value) };
        } else {
            // Retract the head side; the gap opens one slot before the
            // target.
            let mut slot = self.head;
            self.head = wrap_prev(self.head, cap);
            let stop = wrap_prev(target, cap);
            while slot != stop {
                let next = wrap_next(slot, cap);
                unsafe { self.move_slot(slot, next) };
                slot = next;
            }
            unsafe { self.write_slot(slot, value) };
        }
        self.len += 1;
    }

    /// Removes and returns the element at logical position `index`.
    ///
    /// Validates strictly (`-len <= index < len`); the gap closes by
    /// shifting whichever side of the list is shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::ringlist;
    ///
    /// let mut list = ringlist![1, 2, 3];
    /// assert_eq!(list.pop(0), Ok(1));
    /// assert_eq!(list, vec![2, 3]);
    /// assert!(list.pop(5).is_err());
    /// ```
    pub fn pop(&mut self, index: isize) -> Result<T> {
        self.check_index(index)?;
        let cap = self.capacity();
        let mut slot = self.to_physical(index);
        let value = unsafe { self.read_slot(slot) };
        if span(slot, self.tail, cap) < self.len / 2 {
            while slot != self.tail {
                let next = wrap_next(slot, cap);
                unsafe { self.move_slot(slot, next) };
                slot = next;
            }
            self.tail = wrap_prev(self.tail, cap);
        } else {
            let first = wrap_next(self.head, cap);
            while slot != first {
                let prev = wrap_prev(slot, cap);
                unsafe { self.move_slot(slot, prev) };
                slot = prev;
            }
            self.head = first;
        }
        self.len -= 1;
        self.ensure_capacity();
        Ok(value)
    }

    /// Removes and returns the last element, like Python's `list.pop()`.
    pub fn pop_back(&mut self) -> Result<T> {
        self.pop(-1)
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::ringlist;
    ///
    /// let mut list = ringlist![1, 7, 2, 7];
    /// assert!(list.remove(&7).is_ok());
    /// assert_eq!(list, vec![1, 2, 7]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let cap = self.capacity();
        let mut slot = self.head;
        while slot != self.tail {
            slot = wrap_next(slot, cap);
            if unsafe { self.slot_ref(slot) } == value {
                let logical = self.to_logical(slot) as isize;
                self.pop(logical)?;
                return Ok(());
            }
        }
        Err(Error::ValueNotFound)
    }

    /// Appends a clone of every element of `other`, in order.
    pub fn extend(&mut self, other: &Self)
    where
        T: Clone,
    {
        for value in other.iter() {
            self.append(value.clone());
        }
    }

    /// Drops every element and returns the buffer to the minimum capacity.
    pub fn clear(&mut self) {
        self.drop_elements();
        self.buf = alloc_buf(MIN_CAPACITY);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    fn drop_elements(&mut self) {
        let cap = self.capacity();
        let mut slot = self.head;
        for _ in 0..self.len {
            slot = wrap_next(slot, cap);
            unsafe { ptr::drop_in_place(self.buf[slot].as_mut_ptr()) };
        }
    }

    fn take_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.head = wrap_next(self.head, self.capacity());
        self.len -= 1;
        let value = unsafe { self.read_slot(self.head) };
        if self.len == 0 {
            self.tail = self.head;
        }
        Some(value)
    }

    fn take_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = unsafe { self.read_slot(self.tail) };
        self.tail = wrap_prev(self.tail, self.capacity());
        self.len -= 1;
        if self.len == 0 {
            self.head = self.tail;
        }
        Some(value)
    }

    // --- element access -------------------------------------------------

    /// Returns a reference to the element at logical position `index`,
    /// which may be negative.
    pub fn get(&self, index: isize) -> Result<&T> {
        self.check_index(index)?;
        Ok(unsafe { self.slot_ref(self.to_physical(index)) })
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        self.check_index(index)?;
        let slot = self.to_physical(index);
        Ok(unsafe { self.slot_mut(slot) })
    }

    /// Overwrites the element at logical position `index`.
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    // --- slice engine ---------------------------------------------------

    /// Builds a new list from the elements at logical positions `start`,
    /// `start + step`, … up to (excluding) `stop`.
    ///
    /// `start` and `stop` clamp to the valid range and may be negative; a
    /// negative `step` walks backward. Pass [`isize::MAX`] as `stop` (or use
    /// [`slice_from`](Self::slice_from)) to slice to the end. The result is
    /// over-allocated to about twice the expected element count so that
    /// appending to it does not immediately resize.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStep`] when `step == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::ringlist;
    ///
    /// let list = ringlist![0, 1, 2, 3, 4, 5];
    /// assert_eq!(list.slice(1, 5, 2)?, vec![1, 3]);
    /// assert_eq!(list.slice(-2, isize::MAX, 1)?, vec![4, 5]);
    /// assert_eq!(list.slice(5, -7, -2)?, vec![5, 3, 1]);
    /// # Ok::<(), ringlist::Error>(())
    /// ```
    pub fn slice(&self, start: isize, stop: isize, step: isize) -> Result<Self>
    where
        T: Clone,
    {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        if self.len == 0 {
            return Ok(Self::new());
        }
        let len = self.len as isize;
        let mut stop_clamped = clamp(stop, -len - 1, len);
        if stop_clamped < 0 {
            // "Before the front" clamps to -1, which terminates a backward
            // walk after index 0.
            stop_clamped += len;
        }
        let mut start_clamped = clamp(start, -len, len - 1);
        if start_clamped < 0 {
            start_clamped += len;
        }
        let expected =
            ((stop_clamped - start_clamped).unsigned_abs() / step.unsigned_abs() + 1) * 2;
        let mut out = Self::with_request(expected);
        let mut count = 0;
        let mut i = start_clamped;
        loop {
            let done = if step > 0 {
                i >= stop_clamped
            } else {
                i <= stop_clamped
            };
            if done {
                break;
            }
            count += 1;
            let value = unsafe { self.slot_ref(self.to_physical(i)) }.clone();
            unsafe { out.write_slot(count, value) };
            // A step near the integer limit saturates; the next check ends
            // the walk from outside the clamped range.
            i = i.saturating_add(step);
        }
        out.tail = count;
        out.len = count;
        Ok(out)
    }

    /// Slices from `start` to the end of the list.
    pub fn slice_from(&self, start: isize, step: isize) -> Result<Self>
    where
        T: Clone,
    {
        self.slice(start, isize::MAX, step)
    }

    // --- scans ----------------------------------------------------------

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|v| *v == value).count()
    }

    /// Logical position of the first element equal to `value` within
    /// `[start, stop)`, both bounds clamped like [`slice`](Self::slice).
    ///
    /// # Errors
    ///
    /// [`Error::ValueNotFound`] when no element in the range matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{ringlist, Error};
    ///
    /// let list = ringlist![5, 7, 21, 2];
    /// assert_eq!(list.index(&7, 0, isize::MAX), Ok(1));
    /// assert_eq!(list.index(&7, 1, 2), Ok(1));
    /// assert_eq!(list.index(&7, 2, isize::MAX), Err(Error::ValueNotFound));
    /// ```
    pub fn index(&self, value: &T, start: isize, stop: isize) -> Result<usize>
    where
        T: PartialEq,
    {
        if self.len == 0 {
            return Err(Error::ValueNotFound);
        }
        let len = self.len as isize;
        let mut stop_clamped = clamp(stop, -len - 1, len);
        if stop_clamped < 0 {
            stop_clamped += len;
        }
        let mut start_clamped = clamp(start, -len, len - 1);
        if start_clamped < 0 {
            start_clamped += len;
        }
        let mut i = start_clamped;
        while i < stop_clamped {
            if unsafe { self.slot_ref(self.to_physical(i)) } == value {
                return Ok(i as usize);
            }
            i += 1;
        }
        Err(Error::ValueNotFound)
    }

    /// Largest element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty list.
    pub fn max(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.iter().max().ok_or(Error::Empty { op: "max" })
    }

    /// Smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] on an empty list.
    pub fn min(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.iter().min().ok_or(Error::Empty { op: "min" })
    }

    /// Sum of all elements, starting from the element type's zero.
    ///
    /// An empty list sums to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::ringlist;
    ///
    /// assert_eq!(ringlist![1, 2, 3].sum(), 6);
    /// ```
    pub fn sum(&self) -> T
    where
        T: Clone + Sum<T>,
    {
        self.iter().cloned().sum()
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let cap = self.capacity();
        let mut front = wrap_next(self.head, cap);
        let mut back = self.tail;
        for _ in 0..self.len / 2 {
            unsafe { self.swap_slots(front, back) };
            front = wrap_next(front, cap);
            back = wrap_prev(back, cap);
        }
    }

    // --- iteration ------------------------------------------------------

    /// Iterates over the elements in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            rem: self.len,
        }
    }

    /// Mutable iteration in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            ring: self.buf.as_mut_ptr(),
            capacity: self.capacity(),
            front: self.head,
            back: self.tail,
            rem: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Drop for RingList<T> {
    fn drop(&mut self) {
        self.drop_elements();
    }
}

impl<T> Default for RingList<T> {
    #[inline]
    fn default() -> Self {
        RingList::new()
    }
}

impl<T: Clone> Clone for RingList<T> {
    /// Deep copy at the same capacity, relinearized so the clone's elements
    /// start at slot `1`.
    fn clone(&self) -> Self {
        let mut buf = alloc_buf(self.capacity());
        for (i, value) in self.iter().enumerate() {
            buf[i + 1] = MaybeUninit::new(value.clone());
        }
        RingList {
            buf,
            head: 0,
            tail: self.len,
            len: self.len,
        }
    }
}

// --- relational layer ----------------------------------------------------

impl<T: PartialEq> PartialEq for RingList<T> {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingList<T> {}

// Lexicographic `<`/`>`/`<=`/`>=` come from `PartialOrd` alone. `Ord` is
// deliberately not implemented: its by-value `max`/`min` methods would win
// method resolution over the inherent element scans of the same names.
impl<T: PartialOrd> PartialOrd for RingList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for RingList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for RingList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.len == N && self.iter().eq(other.iter())
    }
}

impl<T: Hash> Hash for RingList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

/// Concatenation: clones the left list and extends it with the right.
impl<T: Clone> Add<&RingList<T>> for &RingList<T> {
    type Output = RingList<T>;

    fn add(self, rhs: &RingList<T>) -> RingList<T> {
        let mut out = self.clone();
        out.extend(rhs);
        out
    }
}

impl<T: Clone> AddAssign<&RingList<T>> for RingList<T> {
    fn add_assign(&mut self, rhs: &RingList<T>) {
        self.extend(rhs);
    }
}

/// Repetition; a count of zero or less yields an empty list.
impl<T: Clone> Mul<isize> for &RingList<T> {
    type Output = RingList<T>;

    fn mul(self, count: isize) -> RingList<T> {
        let mut out = RingList::new();
        for _ in 0..count {
            out.extend(self);
        }
        out
    }
}

impl<T: Clone> MulAssign<isize> for RingList<T> {
    fn mul_assign(&mut self, count: isize) {
        if count <= 0 {
            self.clear();
            return;
        }
        let snapshot = self.clone();
        for _ in 1..count {
            self.extend(&snapshot);
        }
    }
}

impl<T> Index<isize> for RingList<T> {
    type Output = T;

    /// Panics on an out-of-range index; [`get`](RingList::get) is the
    /// fallible form.
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<isize> for RingList<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for RingList<T> {
    /// Renders the elements in logical order as `[e0, e1, …]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for RingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// --- construction --------------------------------------------------------

impl<T> FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        Self::from(items)
    }
}

impl<T> From<Vec<T>> for RingList<T> {
    /// Builds a list sized at twice the source length, mirroring the
    /// general growth policy.
    fn from(items: Vec<T>) -> Self {
        let mut list = Self::with_request(2 * items.len());
        for item in items {
            list.append(item);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for RingList<T> {
    fn from(items: [T; N]) -> Self {
        let mut list = Self::with_request(2 * N);
        for item in items {
            list.append(item);
        }
        list
    }
}

impl<T: Clone> From<&[T]> for RingList<T> {
    fn from(items: &[T]) -> Self {
        let mut list = Self::with_request(2 * items.len());
        for item in items {
            list.append(item.clone());
        }
        list
    }
}

/// Creates a [`RingList`] from a literal element sequence.
///
/// # Examples
///
/// ```
/// use ringlist::ringlist;
///
/// let list = ringlist![5, 7, 2];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! ringlist {
    () => {
        $crate::RingList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::RingList::from([$($value),+])
    };
}

// --- iterators -----------------------------------------------------------

/// Borrowing iterator over a [`RingList`] in logical order.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    list: &'a RingList<T>,
    front: usize,
    back: usize,
    rem: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            rem: self.rem,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.rem == 0 {
            return None;
        }
        self.front = wrap_next(self.front, self.list.capacity());
        self.rem -= 1;
        Some(unsafe { self.list.slot_ref(self.front) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem, Some(self.rem))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.rem == 0 {
            return None;
        }
        let slot = self.back;
        self.back = wrap_prev(self.back, self.list.capacity());
        self.rem -= 1;
        Some(unsafe { self.list.slot_ref(slot) })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over a [`RingList`] in logical order.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T> {
    ring: *mut MaybeUninit<T>,
    capacity: usize,
    front: usize,
    back: usize,
    rem: usize,
    marker: PhantomData<&'a mut RingList<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.rem == 0 {
            return None;
        }
        self.front = wrap_next(self.front, self.capacity);
        self.rem -= 1;
        unsafe { Some(&mut *(*self.ring.add(self.front)).as_mut_ptr()) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem, Some(self.rem))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.rem == 0 {
            return None;
        }
        let slot = self.back;
        self.back = wrap_prev(self.back, self.capacity);
        self.rem -= 1;
        unsafe { Some(&mut *(*self.ring.add(slot)).as_mut_ptr()) }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// By-value iterator over a [`RingList`] in logical order.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len, Some(self.inner.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for RingList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Appends followed by back pops behave like a stack.
        #[test]
        fn append_pop_net_length(values in prop::collection::vec(any::<i32>(), 0..300)) {
            let mut list = RingList::new();
            for &v in &values {
                list.append(v);
            }
            prop_assert_eq!(list.len(), values.len());
            for &v in values.iter().rev() {
                prop_assert_eq!(list.pop_back(), Ok(v));
            }
            prop_assert!(list.is_empty());
        }

        /// The list agrees with a `Vec` model under random append, insert,
        /// and pop traffic.
        #[test]
        fn matches_vec_model(ops in prop::collection::vec((any::<i32>(), 0u8..4, any::<i16>()), 0..400)) {
            let mut list = RingList::new();
            let mut model: Vec<i32> = Vec::new();
            for (value, op, raw_index) in ops {
                match op {
                    0 => {
                        list.append(value);
                        model.push(value);
                    }
                    1 => {
                        let at = (raw_index as isize).rem_euclid(model.len() as isize + 1);
                        list.insert(at, value);
                        model.insert(at as usize, value);
                    }
                    2 if !model.is_empty() => {
                        let at = (raw_index as isize).rem_euclid(model.len() as isize);
                        prop_assert_eq!(list.pop(at), Ok(model.remove(at as usize)));
                    }
                    _ => {}
                }
                prop_assert_eq!(list.len(), model.len());
            }
            prop_assert_eq!(list.iter().cloned().collect::<Vec<_>>(), model);
        }

        /// A full unit-step slice reproduces the list.
        #[test]
        fn full_slice_round_trips(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let list: RingList<i32> = values.iter().cloned().collect();
            let copy = list.slice(0, list.len() as isize, 1).unwrap();
            prop_assert_eq!(copy, list);
        }

        /// Sorting matches the standard library sort and is idempotent.
        #[test]
        fn sort_matches_std(values in prop::collection::vec(-50i32..50, 0..300)) {
            let mut list: RingList<i32> = values.iter().cloned().collect();
            list.sort();
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(list.iter().cloned().collect::<Vec<_>>(), expected.clone());
            list.sort();
            prop_assert_eq!(list.iter().cloned().collect::<Vec<_>>(), expected);
        }

        /// Sorting a wrapped live region matches the standard library sort.
        #[test]
        fn sort_wrapped_matches_std(values in prop::collection::vec(-50i32..50, 0..90)) {
            let mut list = RingList::new();
            for &v in values.iter().rev() {
                list.insert(0, v);
            }
            list.sort();
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(list.iter().cloned().collect::<Vec<_>>(), expected);
        }

        /// `insert` then `pop` at the same position is the identity.
        #[test]
        fn insert_pop_identity(values in prop::collection::vec(any::<i32>(), 1..100), raw in any::<i16>(), extra in any::<i32>()) {
            let original: RingList<i32> = values.iter().cloned().collect();
            let mut list = original.clone();
            let at = (raw as isize).rem_euclid(values.len() as isize + 1);
            list.insert(at, extra);
            prop_assert_eq!(list.pop(at), Ok(extra));
            prop_assert_eq!(list, original);
        }

        /// Capacity never drops below the configured minimum.
        #[test]
        fn capacity_floor(count in 0usize..600) {
            let mut list = RingList::new();
            for i in 0..count {
                list.append(i);
                prop_assert!(list.capacity() >= MIN_CAPACITY);
                prop_assert!(list.len() < list.capacity());
            }
            while !list.is_empty() {
                list.pop_back().unwrap();
                prop_assert!(list.capacity() >= MIN_CAPACITY);
            }
            prop_assert_eq!(list.capacity(), MIN_CAPACITY);
        }

        /// Negative indices mirror `len - k`.
        #[test]
        fn negative_index_mirror(values in prop::collection::vec(any::<i32>(), 1..100)) {
            let list: RingList<i32> = values.iter().cloned().collect();
            let len = values.len() as isize;
            for k in 1..=values.len() as isize {
                prop_assert_eq!(list[-k], list[len - k]);
            }
        }
    }
}

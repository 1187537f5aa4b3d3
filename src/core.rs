use core::fmt;

use crate::error::RingBufferError;
use crate::iter::RingBufferIter;

/// A fixed-capacity byte ring buffer that overwrites the oldest byte when full
///
/// `N` must be a power of two and at least 2. Index wraparound is done with a
/// bitmask, so a bad `N` is rejected when the buffer type is instantiated.
///
/// Full and empty are told apart by the `full` flag: `head == tail` means
/// empty unless `full` is set. All `N` slots are usable.
#[derive(Clone)]
pub struct RingBuffer<const N: usize> {
    storage: [u8; N],
    head: usize,
    tail: usize,
    full: bool,
}

impl<const N: usize> RingBuffer<N> {
    /// Number of bytes the buffer holds when full.
    pub const CAPACITY: usize = N;

    pub(crate) const MASK: usize = {
        assert!(
            N >= 2 && N.is_power_of_two(),
            "RingBuffer capacity must be a power of two and at least 2"
        );
        N - 1
    };

    /// Creates an empty buffer with zero-filled storage.
    #[must_use]
    pub const fn new() -> Self {
        let _ = Self::MASK;
        Self {
            storage: [0; N],
            head: 0,
            tail: 0,
            full: false,
        }
    }

    /// Empties the buffer. Stored bytes are left in place and become unreachable.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.full = false;
    }

    /// Number of bytes the buffer holds when full, always `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// True when no bytes are held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail && !self.full
    }

    /// True when `N` bytes are held and the next `queue` overwrites the oldest.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.full
    }

    /// Number of bytes currently held, in `0..=N`.
    #[must_use]
    pub const fn num_items(&self) -> usize {
        if self.full {
            N
        } else {
            self.head.wrapping_sub(self.tail) & Self::MASK
        }
    }

    /// Appends a byte. When the buffer is full the oldest byte is discarded first.
    pub fn queue(&mut self, data: u8) {
        if self.full {
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = N, tail = self.tail, "overwriting oldest byte");
            self.tail = (self.tail + 1) & Self::MASK;
        }

        self.storage[self.head] = data;
        self.head = (self.head + 1) & Self::MASK;
        self.full = self.head == self.tail;
    }

    /// Appends bytes one by one, in order.
    ///
    /// A slice longer than the capacity overwrites its own leading bytes, so only
    /// the last `N` bytes of `data` survive.
    pub fn queue_array(&mut self, data: &[u8]) {
        for &byte in data {
            self.queue(byte);
        }
    }

    /// Moves up to `max_count` bytes, oldest first, from `src` into this buffer.
    ///
    /// Stops early when `src` runs empty. Returns the number of bytes moved.
    pub fn queue_from<const M: usize>(&mut self, src: &mut RingBuffer<M>, max_count: usize) -> usize {
        let mut moved = 0;
        while moved < max_count {
            let Some(byte) = src.dequeue() else {
                break;
            };
            self.queue(byte);
            moved += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(requested = max_count, moved, "queue_from finished");
        moved
    }

    /// Removes and returns the oldest byte.
    ///
    /// Returns `None` if the buffer is empty.
    pub fn dequeue(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }

        let data = self.storage[self.tail];
        self.tail = (self.tail + 1) & Self::MASK;
        self.full = false;
        Some(data)
    }

    /// Removes and returns the oldest byte.
    ///
    /// # Errors
    ///
    /// Returns `RingBufferError::Empty` if the buffer is empty.
    pub fn try_dequeue(&mut self) -> Result<u8, RingBufferError> {
        self.dequeue().ok_or(RingBufferError::Empty)
    }

    /// Dequeues into `out` until it is filled or the buffer runs empty.
    ///
    /// Returns the number of bytes written to the front of `out`. On an empty
    /// buffer `out` is left untouched and 0 is returned.
    pub fn dequeue_array(&mut self, out: &mut [u8]) -> usize {
        let mut removed = 0;
        for slot in out.iter_mut() {
            let Some(byte) = self.dequeue() else {
                break;
            };
            *slot = byte;
            removed += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(requested = out.len(), removed, "dequeue_array finished");
        removed
    }

    /// Returns the byte at logical `index`, where 0 is the oldest byte.
    ///
    /// Returns `None` if `index >= num_items()`. Never changes the buffer.
    #[must_use]
    pub fn peek(&self, index: usize) -> Option<u8> {
        if index >= self.num_items() {
            return None;
        }
        self.storage.get((self.tail + index) & Self::MASK).copied()
    }

    /// Returns the byte at logical `index`, where 0 is the oldest byte.
    ///
    /// # Errors
    ///
    /// Returns `RingBufferError::IndexOutOfBounds` if `index >= num_items()`.
    pub fn try_peek(&self, index: usize) -> Result<u8, RingBufferError> {
        self.peek(index).ok_or(RingBufferError::IndexOutOfBounds {
            index,
            length: self.num_items(),
        })
    }

    /// Returns an iterator over the held bytes, oldest first.
    #[must_use]
    pub fn iter(&self) -> RingBufferIter<'_, N> {
        self.into_iter()
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Extend<u8> for RingBuffer<N> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.queue(byte);
        }
    }
}

impl<'a, const N: usize> Extend<&'a u8> for RingBuffer<N> {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

struct Contents<'a, const N: usize>(&'a RingBuffer<N>);

impl<const N: usize> fmt::Debug for Contents<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<const N: usize> fmt::Debug for RingBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &N)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("items", &Contents(self))
            .finish()
    }
}

#[cfg(feature = "display")]
impl<const N: usize> fmt::Display for RingBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

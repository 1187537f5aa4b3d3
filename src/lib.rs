#![no_std]

//! `RingBuffer`: a fixed-capacity byte ring buffer for constrained environments.
//!
//! The buffer owns a `[u8; N]` array and never allocates. Writing into a full
//! buffer discards the oldest byte, so `queue` can never fail. Besides FIFO
//! access the buffer offers random-access `peek`, a newest-first `search`
//! for a single byte and `best_match`, which finds where a second buffer's
//! contents best align against the first.
//!
//! `N` must be a power of two (and at least 2) so that index wraparound is a
//! bitmask. Other values fail to compile as soon as the buffer type is used.
//!
//! ```
//! # use byteringbuf::RingBuffer;
//! let mut rb = RingBuffer::<4>::new();
//! rb.queue_array(b"abcde"); // 'a' is overwritten
//!
//! assert!(rb.is_full());
//! assert_eq!(rb.num_items(), 4);
//! assert_eq!(rb.peek(0), Some(b'b'));
//! assert_eq!(rb.dequeue(), Some(b'b'));
//! assert_eq!(rb.num_items(), 3);
//! ```
//!
//! # Time Complexity
//! - `queue()`, `dequeue()`, `peek()`: O(1)
//! - `queue_array()`, `dequeue_array()`, `queue_from()`: O(n) in bytes moved
//! - `search()`: O(n) in bytes held
//! - `best_match()`: O(n * m) worst case for buffer and pattern lengths
//!
//! # Full and Empty
//!
//! `head` is the next write slot and `tail` the oldest byte. Both always stay
//! in `0..N`. A separate `full` flag tells a full buffer from an empty one when
//! `head == tail`, so all `N` slots hold data and `is_full()` holds exactly when
//! `num_items() == N`.
//!
//! A capacity that is not a power of two does not compile:
//!
//! ```compile_fail
//! # use byteringbuf::RingBuffer;
//! let mut rb = RingBuffer::<3>::new();
//! rb.queue(1);
//! ```
//!
//! Neither does a zero capacity:
//!
//! ```compile_fail
//! # use byteringbuf::RingBuffer;
//! let mut rb = RingBuffer::<0>::new();
//! rb.queue(1);
//! ```
//!
//! # Search and Match
//!
//! ```
//! # use byteringbuf::{Match, RingBuffer};
//! let mut haystack = RingBuffer::<8>::new();
//! haystack.queue_array(b"xabcy");
//!
//! let mut pattern = RingBuffer::<4>::new();
//! pattern.queue_array(b"abc");
//!
//! assert_eq!(haystack.search(b'y'), Some(4));
//! assert_eq!(haystack.best_match(&pattern), Match { index: 1, length: 3 });
//! ```
//!
//! `best_match` only considers start positions holding the pattern's first
//! byte. It is a longest-common-extension search anchored on that byte, not a
//! general substring search.
//!
//! # Draining Between Buffers
//!
//! ```
//! # use byteringbuf::RingBuffer;
//! let mut src = RingBuffer::<4>::new();
//! src.queue_array(&[1, 2, 3]);
//!
//! let mut dst = RingBuffer::<4>::new();
//! assert_eq!(dst.queue_from(&mut src, 2), 2);
//!
//! assert_eq!(dst.iter().collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(src.iter().collect::<Vec<_>>(), vec![3]);
//! ```
//!
//! ## `no_std` Compatibility
//!
//! The crate only uses `core`. Optional features:
//! - `std`: implements `std::error::Error` through `thiserror/std`
//! - `display`: `Display` for `RingBuffer` as a hex dump, oldest first
//! - `tracing`: `trace` level events on overwrite and bulk transfers
//!
//! ```toml
//! [dependencies]
//! byteringbuf = { version = "0.1", features = ["tracing"] }
//! ```

mod core;
mod error;
mod iter;
mod search;

pub use crate::core::RingBuffer;
pub use error::RingBufferError;
pub use iter::RingBufferIter;
pub use search::Match;

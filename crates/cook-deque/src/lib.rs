//! Circular double-ended queue for the cook toolkit.
//!
//! [`CircularDeque`] is a ring buffer addressed by logical `front` and
//! `rear` indices modulo its capacity. When full it grows to
//! `max(16, 2 * capacity)` and re-lays the logical sequence out from index
//! 0 of the new buffer, so FIFO and LIFO order survive every resize.
//!
//! ```text
//! capacity 4, wrapped (front = 2, rear = 1)
//!   [ c  d  a  b ]
//! grown to 16 and linearized (front = 0, rear = 3)
//!   [ a  b  c  d  .  .  .  .  .  .  .  .  .  .  .  . ]
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deque;
pub mod iter;

pub use deque::CircularDeque;
pub use iter::{IntoIter, Iter};

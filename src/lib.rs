//! Streaming enumeration of combinations drawn from a slice.
//!
//! Combinations are produced in ascending length, and within a length in
//! lexicographic order of the selected index positions, one at a time —
//! never as a materialized collection. The consumer can halt the whole
//! enumeration early by returning `ControlFlow::Break(())`.
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! let mut count = 0;
//! combinations::enumerate(&[1, 2, 3, 4], |_| {
//!     count += 1;
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(count, 15);
//! ```

#[cfg(test)]
mod comb;
mod enumerate;
mod iter;
mod lending;
mod pointer_set;

pub use enumerate::{enumerate, enumerate_range, InvalidRangeError};
pub use iter::Combinations;
pub use lending::LendingIterator;
pub use pointer_set::PointerSet;

use std::ops::ControlFlow;

use thiserror::Error;

use crate::lending::LendingIterator;
use crate::pointer_set::PointerSet;

/// Explicit length bounds must satisfy `1 <= min_len <= max_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid combination length range [{min_len}, {max_len}]: bounds must satisfy 1 <= min <= max")]
pub struct InvalidRangeError {
    pub min_len: usize,
    pub max_len: usize,
}

pub(crate) fn check_range(min_len: usize, max_len: usize) -> Result<(), InvalidRangeError> {
    if min_len == 0 || max_len == 0 || min_len > max_len {
        return Err(InvalidRangeError { min_len, max_len });
    }
    Ok(())
}

/// Feeds every combination of `items`, of every length from 1 to
/// `items.len()`, to `consumer`: ascending length, lexicographic index order
/// within a length. Each combination is a fresh `Vec`; returning
/// `ControlFlow::Break(())` halts the whole enumeration.
pub fn enumerate<T, F>(items: &[T], consumer: F)
where
    T: Clone,
    F: FnMut(Vec<T>) -> ControlFlow<()>,
{
    run(items, 1, items.len(), consumer);
}

/// Like [`enumerate`], restricted to lengths in `[min_len, max_len]`.
/// Bounds are validated before any consumer call; lengths exceeding
/// `items.len()` simply contribute no combinations.
pub fn enumerate_range<T, F>(
    items: &[T],
    min_len: usize,
    max_len: usize,
    consumer: F,
) -> Result<(), InvalidRangeError>
where
    T: Clone,
    F: FnMut(Vec<T>) -> ControlFlow<()>,
{
    check_range(min_len, max_len)?;
    run(items, min_len, max_len, consumer);
    Ok(())
}

fn run<T, F>(items: &[T], min_len: usize, max_len: usize, mut consumer: F)
where
    T: Clone,
    F: FnMut(Vec<T>) -> ControlFlow<()>,
{
    for len in min_len..=max_len {
        if len > items.len() {
            // Lengths ascend, so every remaining length is empty too.
            break;
        }
        let mut pointers = PointerSet::new(items.len(), len);
        while let Some(indices) = pointers.next() {
            let combination: Vec<T> = indices.iter().map(|&i| items[i].clone()).collect();
            if consumer(combination).is_break() {
                return;
            }
        }
    }
}

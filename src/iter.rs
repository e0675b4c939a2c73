use crate::enumerate::{check_range, InvalidRangeError};
use crate::lending::LendingIterator;
use crate::pointer_set::PointerSet;

/// Iterator form of the enumeration: yields each combination as an owned
/// `Vec<T>`, ascending in length and lexicographic in index order within a
/// length. Holds O(len) state regardless of how many combinations exist.
pub struct Combinations<'a, T> {
    items: &'a [T],
    len: usize,
    max_len: usize,
    pointers: Option<PointerSet>,
}

impl<'a, T> Combinations<'a, T> {
    /// All combinations of lengths 1 through `items.len()`.
    pub fn all(items: &'a [T]) -> Combinations<'a, T> {
        Combinations::start(items, 1, items.len())
    }

    /// Combinations of lengths in `[min_len, max_len]`. Lengths exceeding
    /// `items.len()` yield nothing; invalid bounds are an error.
    pub fn with_lengths(
        items: &'a [T],
        min_len: usize,
        max_len: usize,
    ) -> Result<Combinations<'a, T>, InvalidRangeError> {
        check_range(min_len, max_len)?;
        Ok(Combinations::start(items, min_len, max_len))
    }

    fn start(items: &'a [T], min_len: usize, max_len: usize) -> Combinations<'a, T> {
        let pointers = if min_len <= items.len() {
            Some(PointerSet::new(items.len(), min_len))
        } else {
            None
        };
        Combinations {
            items,
            len: min_len,
            max_len,
            pointers,
        }
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        loop {
            let items = self.items;
            let pointers = self.pointers.as_mut()?;
            if let Some(indices) = pointers.next() {
                return Some(indices.iter().map(|&i| items[i].clone()).collect());
            }
            self.len += 1;
            if self.len > self.max_len || self.len > self.items.len() {
                self.pointers = None;
            } else {
                self.pointers = Some(PointerSet::new(self.items.len(), self.len));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use std::ops::ControlFlow;

    #[test]
    fn test_matches_enumerate() {
        let items = [1, 2, 3, 4];
        let mut from_consumer = Vec::new();
        crate::enumerate(&items, |combination| {
            from_consumer.push(combination);
            ControlFlow::Continue(())
        });
        let from_iter: Vec<Vec<i32>> = Combinations::all(&items).collect();
        assert_eq!(from_iter, from_consumer);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u8> = Vec::new();
        assert_eq!(Combinations::all(&items).count(), 0);
    }

    #[test]
    fn test_invalid_range() {
        let result = Combinations::with_lengths(&[1, 2, 3], 2, 1);
        assert_eq!(
            result.err(),
            Some(InvalidRangeError {
                min_len: 2,
                max_len: 1
            })
        );
        assert!(Combinations::with_lengths(&[1, 2, 3], 0, 3).is_err());
    }

    #[test]
    fn test_min_len_exceeds_input() {
        let combos = Combinations::with_lengths(&[1, 2, 3], 4, 6).unwrap();
        assert_eq!(combos.count(), 0);
    }

    #[test]
    fn test_matches_itertools_per_length() {
        for n in 0..7usize {
            let items: Vec<usize> = (0..n).collect();
            for len in 1..=n {
                let ours: Vec<Vec<usize>> = Combinations::with_lengths(&items, len, len)
                    .unwrap()
                    .collect();
                let reference: Vec<Vec<usize>> = (0..n).combinations(len).collect();
                assert_eq!(ours, reference);
            }
        }
    }

    #[test]
    fn test_restartable() {
        let items = ['x', 'y', 'z'];
        let first: Vec<Vec<char>> = Combinations::all(&items).collect();
        let second: Vec<Vec<char>> = Combinations::all(&items).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }
}

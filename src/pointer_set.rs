use crate::lending::LendingIterator;

/// The index-level combination generator: an ordered set of `len` distinct
/// pointers into a sequence of length `n`, advanced in lexicographic order.
pub struct PointerSet {
    n: usize,
    pointers: Vec<usize>,
    started: bool,
}

impl PointerSet {
    /// Positioned on the lexicographically first pointer set
    /// `[0, 1, ..., len - 1]`. If `len > n` no valid pointer set exists and
    /// the generator yields nothing.
    pub fn new(n: usize, len: usize) -> PointerSet {
        PointerSet {
            n,
            pointers: (0..len).collect(),
            started: false,
        }
    }

    /// The current pointer positions, strictly increasing, each `< n`.
    pub fn indices(&self) -> &[usize] {
        &self.pointers
    }

    /// Steps to the next lexicographic pointer set. Returns false when the
    /// current set is the last one; the state is left unchanged in that case,
    /// so calling again keeps returning false.
    pub fn advance(&mut self) -> bool {
        let len = self.pointers.len();
        if len > self.n {
            return false;
        }
        // Rightmost pointer not yet at its maximal position n - (len - i).
        for i in (0..len).rev() {
            if self.pointers[i] < self.n - (len - i) {
                self.pointers[i] += 1;
                for j in i + 1..len {
                    self.pointers[j] = self.pointers[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl LendingIterator for PointerSet {
    type Item<'a> = &'a [usize];

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if self.pointers.len() > self.n {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.pointers);
        }
        if self.advance() {
            Some(&self.pointers)
        } else {
            None
        }
    }
}

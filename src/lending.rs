/// An iterator whose items borrow from the iterator itself, so successive
/// calls can reuse the same backing storage.
pub trait LendingIterator {
    type Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>>;
}

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
//! Iterator adaptor that can look an arbitrary number of items ahead.

use std::collections::VecDeque;

/// Adds [`Lookahead::lookahead`] to every [`Iterator`].
pub trait IntoLookahead: Iterator {
    /// Wraps `self` in a [`Lookahead`].
    fn lookahead(self) -> Lookahead<Self>
    where
        Self: Sized,
    {
        Lookahead::new(self)
    }
}

impl<I> IntoLookahead for I where I: Iterator {}

/// Buffers items pulled ahead of the consumer, so they can be inspected
/// before they are taken.
#[derive(Debug)]
pub struct Lookahead<I>
where
    I: Iterator,
{
    iter: I,
    buffer: VecDeque<I::Item>,
}

impl<I> Iterator for Lookahead<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop_front().or_else(|| self.iter.next())
    }
}

impl<I> Lookahead<I>
where
    I: Iterator,
{
    /// Creates a new [`Lookahead`] over `iter`.
    pub fn new(iter: I) -> Self {
        Lookahead {
            iter,
            buffer: VecDeque::new(),
        }
    }

    /// Fills the buffer until it holds `n` items or `iter` runs out.
    fn fill(&mut self, n: usize) {
        while self.buffer.len() < n {
            match self.iter.next() {
                Some(item) => self.buffer.push_back(item),
                None => break,
            }
        }
    }

    /// Returns the next item without consuming it.
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    /// Returns the item `n` positions ahead without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        self.fill(n + 1);
        self.buffer.get(n)
    }

    /// Consumes and returns the next item if it matches `predicate`.
    pub fn next_if<P>(&mut self, predicate: P) -> Option<I::Item>
    where
        P: FnOnce(&I::Item) -> bool,
    {
        if self.next_is(predicate) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes items for as long as they match `predicate`, returning them
    /// in order. The first non-matching item stays in place.
    pub fn next_while<P>(&mut self, predicate: P) -> Vec<I::Item>
    where
        P: Fn(&I::Item) -> bool,
    {
        let mut taken = Vec::new();

        while let Some(item) = self.next_if(&predicate) {
            taken.push(item);
        }

        taken
    }

    /// Whether the next item matches `predicate`.
    pub fn next_is<P>(&mut self, predicate: P) -> bool
    where
        P: FnOnce(&I::Item) -> bool,
    {
        self.peek().map_or(false, predicate)
    }

    /// Whether the item `n` positions ahead matches `predicate`.
    pub fn nth_is<P>(&mut self, n: usize, predicate: P) -> bool
    where
        P: FnOnce(&I::Item) -> bool,
    {
        self.peek_nth(n).map_or(false, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookahead_peek_test() {
        let numbers = [0, 1, 2, 3, 4];
        let mut ahead = numbers.iter().lookahead();

        assert_eq!(ahead.peek(), Some(&&0));
        assert_eq!(ahead.peek(), Some(&&0));

        assert_eq!(ahead.next(), Some(&0));
        assert_eq!(ahead.peek_nth(1), Some(&&2));
        assert_eq!(ahead.peek_nth(3), Some(&&4));
        assert_eq!(ahead.peek_nth(4), None);

        assert_eq!(ahead.next(), Some(&1));
        assert_eq!(ahead.next(), Some(&2));
        assert_eq!(ahead.next(), Some(&3));
        assert_eq!(ahead.next(), Some(&4));

        assert_eq!(ahead.peek(), None);
        assert_eq!(ahead.next(), None);
    }

    #[test]
    fn lookahead_next_if_test() {
        let mut ahead = "ab1".chars().lookahead();

        assert_eq!(ahead.next_if(|c| *c == 'b'), None);
        assert_eq!(ahead.next_if(|c| *c == 'a'), Some('a'));
        assert!(ahead.next_is(|c| *c == 'b'));
        assert!(ahead.nth_is(1, char::is_ascii_digit));
        assert!(!ahead.nth_is(2, |_| true));
    }

    #[test]
    fn lookahead_next_while_test() {
        let mut ahead = "123abc".chars().lookahead();

        let digits: String =
            ahead.next_while(char::is_ascii_digit).into_iter().collect();

        assert_eq!(digits, "123");
        assert_eq!(ahead.peek(), Some(&'a'));

        let rest: String = ahead.next_while(|_| true).into_iter().collect();

        assert_eq!(rest, "abc");
        assert!(ahead.next_while(|_| true).is_empty());
    }
}

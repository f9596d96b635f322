//! Compact set of lowercase letters
//!
//! Stored as a 26-bit mask, so a set is `Copy` and iterates in alphabetical
//! order for free.

use super::word::letter_index;
use std::fmt;

const FULL_MASK: u32 = (1 << 26) - 1;

/// A set of letters from `a..=z`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter of the alphabet
    pub const FULL: Self = Self(FULL_MASK);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << letter_index(letter)
    }

    /// A set holding only `letter`
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Add `letter`, returning whether it was newly added
    #[inline]
    pub const fn insert(&mut self, letter: u8) -> bool {
        let added = !self.contains(letter);
        self.0 |= Self::bit(letter);
        added
    }

    /// Remove `letter`, returning whether it was present
    #[inline]
    pub const fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !Self::bit(letter);
        present
    }

    /// Copy of this set with `letter` removed
    #[inline]
    #[must_use]
    pub const fn without(self, letter: u8) -> Self {
        Self(self.0 & !Self::bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in ascending alphabetical order
    #[inline]
    #[must_use]
    pub const fn iter(self) -> Letters {
        Letters(self.0)
    }
}

/// Ascending iterator over a [`LetterSet`]
#[derive(Debug, Clone)]
pub struct Letters(u32);

impl Iterator for Letters {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let offset = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(b'a' + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Letters {}

impl IntoIterator for LetterSet {
    type Item = u8;
    type IntoIter = Letters;

    fn into_iter(self) -> Letters {
        self.iter()
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_set_has_every_letter() {
        assert_eq!(LetterSet::FULL.len(), 26);
        assert!((b'a'..=b'z').all(|c| LetterSet::FULL.contains(c)));
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'q'));
        assert!(!set.insert(b'q'));
        assert!(set.remove(b'q'));
        assert!(!set.remove(b'q'));
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_is_alphabetical() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz".to_vec());
        assert_eq!(set.iter().len(), 5);
    }

    #[test]
    fn without_leaves_original_untouched() {
        let set = LetterSet::single(b'a');
        let smaller = set.without(b'a');
        assert!(set.contains(b'a'));
        assert!(smaller.is_empty());
    }

    #[test]
    fn subset_relation() {
        let ab: LetterSet = b"ab".iter().copied().collect();
        assert!(LetterSet::single(b'a').is_subset(ab));
        assert!(!ab.is_subset(LetterSet::single(b'a')));
        assert!(LetterSet::EMPTY.is_subset(ab));
    }

    #[test]
    fn display_and_debug() {
        let set: LetterSet = b"cab".iter().copied().collect();
        assert_eq!(set.to_string(), "abc");
        assert_eq!(format!("{set:?}"), "LetterSet(\"abc\")");
    }
}

//! A 9-bit set of candidate digits.
//!
//! [`DigitMask`] is the workhorse of the solver: every blank cell carries
//! one, and every row, column, and block tracks its already-used digits in
//! one. Bits 0-8 of a `u16` represent digits 1-9 respectively.
//!
//! # Examples
//!
//! ```
//! use cellmask_core::{Digit, DigitMask};
//!
//! let mut candidates = DigitMask::FULL;
//! candidates.remove(Digit::new(4));
//! candidates.remove(Digit::new(8));
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::new(4)));
//! assert!(candidates.contains(Digit::new(1)));
//! ```

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// A set of digits 1-9 backed by the low nine bits of a `u16`.
///
/// Used both as a per-cell candidate set and as the used-digit set of a
/// row, column, or block. All operations are total; there are no error
/// conditions.
///
/// # Examples
///
/// ```
/// use cellmask_core::{Digit, DigitMask};
///
/// let mut mask = DigitMask::EMPTY;
/// mask.insert(Digit::new(3));
/// assert_eq!(mask.as_single(), Some(Digit::new(3)));
///
/// mask.insert(Digit::new(7));
/// assert_eq!(mask.as_single(), None);
/// assert_eq!(mask.iter().map(Digit::get).collect::<Vec<_>>(), vec![3, 7]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitMask(u16);

/// All nine low bits.
const ALL_BITS: u16 = 0x1ff;

impl DigitMask {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(ALL_BITS);

    /// Returns `true` if `digit` is a member of this set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.index()) != 0
    }

    /// Adds `digit` to this set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.index();
    }

    /// Removes `digit` from this set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.index());
    }

    /// Returns the number of digits in this set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if this set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if this set is a singleton, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellmask_core::{Digit, DigitMask};
    ///
    /// assert_eq!(DigitMask::EMPTY.as_single(), None);
    /// assert_eq!(DigitMask::FULL.as_single(), None);
    ///
    /// let mut mask = DigitMask::EMPTY;
    /// mask.insert(Digit::new(9));
    /// assert_eq!(mask.as_single(), Some(Digit::new(9)));
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if !self.0.is_power_of_two() {
            return None;
        }
        let index = u8::try_from(self.0.trailing_zeros()).expect("at most 9 bits");
        Some(Digit::new(index + 1))
    }

    /// Returns the digits in this set that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the member digits in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }

    /// Returns the raw bit representation (bit `n` set means digit `n + 1`
    /// is a member).
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for DigitMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Digit> for DigitMask {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for digit in iter {
            mask.insert(digit);
        }
        mask
    }
}

impl IntoIterator for DigitMask {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitMask`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = u8::try_from(self.0.trailing_zeros()).expect("at most 9 bits");
        self.0 &= self.0 - 1;
        Some(Digit::new(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

/// Renders the mask as nine characters, position `i` being `'1'` if digit
/// `i + 1` is a member and `'0'` otherwise.
///
/// # Examples
///
/// ```
/// use cellmask_core::{Digit, DigitMask};
///
/// let mask: DigitMask = [Digit::new(2), Digit::new(3), Digit::new(5)].into_iter().collect();
/// assert_eq!(mask.to_string(), "011010000");
/// ```
impl fmt::Display for DigitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in Digit::all() {
            let ch = if self.contains(digit) { '1' } else { '0' };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

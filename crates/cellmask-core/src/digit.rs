//! Sudoku digit representation.

use std::{fmt, num::NonZeroU8};

/// A sudoku digit in the range 1-9.
///
/// Grid input uses plain `u8` values with `0` meaning blank; inside the
/// solver a blank is `Option::<Digit>::None`, so a `Digit` always holds a
/// real entry. The niche of [`NonZeroU8`] keeps `Option<Digit>` one byte.
///
/// # Examples
///
/// ```
/// use cellmask_core::Digit;
///
/// let five = Digit::new(5);
/// assert_eq!(five.get(), 5);
/// assert_eq!(Digit::new_checked(0), None);
/// assert_eq!(Digit::new_checked(10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self::new_checked(value).unwrap_or_else(|| panic!("invalid digit value: {value}"))
    }

    /// Creates a digit, returning `None` if `value` is not in the range 1-9.
    #[must_use]
    pub fn new_checked(value: u8) -> Option<Self> {
        if value > 9 {
            return None;
        }
        NonZeroU8::new(value).map(Digit)
    }

    /// Returns an iterator over all nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9).map(Digit::new)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index of the digit (0-8), used for bit positions.
    pub(crate) const fn index(self) -> u8 {
        self.0.get() - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.get()
    }
}

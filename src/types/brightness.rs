// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for lamp output control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// Key Lights use 0-100 for brightness, where 0 is the dimmest setting and
/// 100 is full output.
///
/// # Examples
///
/// ```
/// use keyfleet::types::Brightness;
///
/// // Create a brightness at 75%
/// let b = Brightness::new(75).unwrap();
/// assert_eq!(b.value(), 75);
///
/// // Out-of-range input saturates instead of failing
/// assert_eq!(Brightness::clamped(150).value(), 100);
/// assert_eq!(Brightness::clamped(-10).value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness value (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, saturating to the valid range.
    ///
    /// Negative values become 0, values above 100 become 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyfleet::types::Brightness;
    ///
    /// assert_eq!(Brightness::clamped(-5).value(), 0);
    /// assert_eq!(Brightness::clamped(50).value(), 50);
    /// assert_eq!(Brightness::clamped(150).value(), 100);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamped(value: i32) -> Self {
        if value < 0 {
            Self(0)
        } else if value > 100 {
            Self(100)
        } else {
            Self(value as u8)
        }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    /// The startup baseline before any slider has been touched.
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in 0..=100 {
            let b = Brightness::new(v).unwrap();
            assert_eq!(b.value(), v);
        }
    }

    #[test]
    fn brightness_invalid_value() {
        assert!(Brightness::new(101).is_err());
    }

    #[test]
    fn brightness_clamped_identity_in_range() {
        for v in 0..=100 {
            assert_eq!(Brightness::clamped(v).value(), u8::try_from(v).unwrap());
        }
    }

    #[test]
    fn brightness_clamped_saturates_low() {
        assert_eq!(Brightness::clamped(-1).value(), 0);
        assert_eq!(Brightness::clamped(i32::MIN).value(), 0);
    }

    #[test]
    fn brightness_clamped_saturates_high() {
        assert_eq!(Brightness::clamped(101).value(), 100);
        assert_eq!(Brightness::clamped(i32::MAX).value(), 100);
    }

    #[test]
    fn brightness_default_is_startup_baseline() {
        assert_eq!(Brightness::default().value(), 50);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn brightness_ordering() {
        assert!(Brightness::MIN < Brightness::MAX);
        assert!(Brightness::new(50).unwrap() < Brightness::new(75).unwrap());
    }
}

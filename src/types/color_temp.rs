// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature types for light control.
//!
//! The user-facing unit is Kelvin (2900-7000 K, the slider range). The
//! device-native unit is mired, the reciprocal scale computed as
//! `round(1_000_000 / kelvin)`. [`Kelvin`] is what callers set,
//! [`ColorTemp`] is what goes over the wire.

use std::fmt;

use crate::error::ValueError;

/// Color temperature in Kelvin (2900-7000).
///
/// Lower values are warmer (more orange/yellow), higher values are cooler
/// (bluer).
///
/// # Examples
///
/// ```
/// use keyfleet::types::Kelvin;
///
/// let k = Kelvin::new(4000).unwrap();
/// assert_eq!(k.to_mired().value(), 250);
///
/// // Out-of-range input saturates instead of failing
/// assert_eq!(Kelvin::clamped(10_000).value(), 7000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kelvin(u16);

impl Kelvin {
    /// Minimum color temperature the device accepts (~345 mired).
    pub const MIN: u16 = 2900;

    /// Maximum color temperature the device accepts (~143 mired).
    pub const MAX: u16 = 7000;

    /// Neutral white, the startup baseline.
    pub const NEUTRAL: Self = Self(4000);

    /// Creates a new Kelvin value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [2900, 7000].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a Kelvin value, saturating to the valid range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamped(value: i32) -> Self {
        if value < Self::MIN as i32 {
            Self(Self::MIN)
        } else if value > Self::MAX as i32 {
            Self(Self::MAX)
        } else {
            Self(value as u16)
        }
    }

    /// Returns the color temperature in Kelvin.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Converts to the device-native mired unit.
    ///
    /// Computed as `round(1_000_000 / kelvin)`. The Kelvin range guarantees
    /// the result lands inside [`ColorTemp`]'s valid range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_mired(&self) -> ColorTemp {
        let k = self.0 as u32;
        // Integer rounding: (n + d/2) / d
        ColorTemp(((1_000_000 + k / 2) / k) as u16)
    }
}

impl Default for Kelvin {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} K", self.0)
    }
}

/// Color temperature in mireds (143-345), the device-native unit.
///
/// # Examples
///
/// ```
/// use keyfleet::types::ColorTemp;
///
/// let ct = ColorTemp::new(250).unwrap();
/// assert_eq!(ct.to_kelvin(), 4000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemp(u16);

impl ColorTemp {
    /// Minimum mired value (coolest, 7000 K).
    pub const MIN: u16 = 143;

    /// Maximum mired value (warmest, 2900 K).
    pub const MAX: u16 = 345;

    /// Neutral white (4000 K).
    pub const NEUTRAL: Self = Self(250);

    /// Creates a new color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [143, 345].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a color temperature, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u16) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the color temperature value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the approximate color temperature in Kelvin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_kelvin(&self) -> u16 {
        let m = self.0 as u32;
        ((1_000_000 + m / 2) / m) as u16
    }
}

impl Default for ColorTemp {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ColorTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mired", self.0)
    }
}

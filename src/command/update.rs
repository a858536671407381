// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Partial state update sent to a single device.

use crate::types::{Brightness, ColorTemp, PowerState};

/// A partial state update for one device.
///
/// All fields are optional. A field left unset is omitted from the outbound
/// request entirely, which leaves that attribute unchanged on the device —
/// it is never coerced to a default.
///
/// # Examples
///
/// ```
/// use keyfleet::command::StateUpdate;
/// use keyfleet::types::{Brightness, PowerState};
///
/// let update = StateUpdate::new()
///     .with_power(PowerState::On)
///     .with_brightness(Brightness::clamped(80));
///
/// assert_eq!(update.power(), Some(PowerState::On));
/// assert!(update.color_temp().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateUpdate {
    power: Option<PowerState>,
    brightness: Option<Brightness>,
    color_temp: Option<ColorTemp>,
}

impl StateUpdate {
    /// Creates an empty update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the power state to apply.
    #[must_use]
    pub const fn with_power(mut self, power: PowerState) -> Self {
        self.power = Some(power);
        self
    }

    /// Sets the brightness to apply.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the color temperature to apply.
    #[must_use]
    pub const fn with_color_temp(mut self, color_temp: ColorTemp) -> Self {
        self.color_temp = Some(color_temp);
        self
    }

    /// Returns the requested power state, if any.
    #[must_use]
    pub const fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Returns the requested brightness, if any.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Returns the requested color temperature, if any.
    #[must_use]
    pub const fn color_temp(&self) -> Option<ColorTemp> {
        self.color_temp
    }

    /// Returns `true` if the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.power.is_none() && self.brightness.is_none() && self.color_temp.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_changes_nothing() {
        let update = StateUpdate::new();
        assert!(update.is_empty());
        assert!(update.power().is_none());
        assert!(update.brightness().is_none());
        assert!(update.color_temp().is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let update = StateUpdate::new()
            .with_power(PowerState::Off)
            .with_brightness(Brightness::clamped(30))
            .with_color_temp(ColorTemp::NEUTRAL);

        assert!(!update.is_empty());
        assert_eq!(update.power(), Some(PowerState::Off));
        assert_eq!(update.brightness().unwrap().value(), 30);
        assert_eq!(update.color_temp().unwrap().value(), 250);
    }

    #[test]
    fn partial_update_leaves_other_fields_unset() {
        let update = StateUpdate::new().with_brightness(Brightness::MAX);
        assert!(update.power().is_none());
        assert!(update.color_temp().is_none());
    }
}

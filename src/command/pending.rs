// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accumulated user intent awaiting dispatch.

use crate::types::{Brightness, Kelvin, PowerState};

use super::StateUpdate;

/// The most recently requested, not-yet-applied user intent.
///
/// Each user interaction overwrites one field in place (last write wins).
/// The structure is never cleared after a dispatch — it stays around as the
/// baseline for subsequent edits, so brightness and temperature always carry
/// a value. Power starts unspecified and remains `None` until the user
/// touches the power control; `None` means "do not change power on the
/// device".
///
/// # Examples
///
/// ```
/// use keyfleet::command::PendingCommand;
/// use keyfleet::types::{Brightness, PowerState};
///
/// let mut pending = PendingCommand::default();
/// assert!(pending.power().is_none());
/// assert_eq!(pending.brightness().value(), 50);
///
/// pending.set_power(PowerState::On);
/// pending.set_brightness(Brightness::clamped(80));
///
/// let update = pending.to_update();
/// assert_eq!(update.power(), Some(PowerState::On));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCommand {
    power: Option<PowerState>,
    brightness: Brightness,
    kelvin: Kelvin,
}

impl PendingCommand {
    /// Creates the startup baseline: brightness 50%, 4000 K, power untouched.
    #[must_use]
    pub fn new() -> Self {
        Self {
            power: None,
            brightness: Brightness::default(),
            kelvin: Kelvin::NEUTRAL,
        }
    }

    /// Overwrites the requested power state.
    pub fn set_power(&mut self, power: PowerState) {
        self.power = Some(power);
    }

    /// Overwrites the requested brightness.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    /// Overwrites the requested color temperature.
    pub fn set_kelvin(&mut self, kelvin: Kelvin) {
        self.kelvin = kelvin;
    }

    /// Returns the requested power state, if the user has touched it.
    #[must_use]
    pub const fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Returns the requested brightness.
    #[must_use]
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Returns the requested color temperature.
    #[must_use]
    pub const fn kelvin(&self) -> Kelvin {
        self.kelvin
    }

    /// Builds the per-device update for this intent.
    ///
    /// Brightness and temperature always carry a value; kelvin is converted
    /// to the device-native mired unit here. Power is included only once the
    /// user has touched it.
    #[must_use]
    pub fn to_update(&self) -> StateUpdate {
        let mut update = StateUpdate::new()
            .with_brightness(self.brightness)
            .with_color_temp(self.kelvin.to_mired());
        if let Some(power) = self.power {
            update = update.with_power(power);
        }
        update
    }
}

impl Default for PendingCommand {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result of probing a single device.

use serde_json::Value;

/// The observed state of one device at probe time.
///
/// If `reachable` is `false`, every other field holds its default and must
/// not be interpreted as real device state. A reachable device that reports
/// no lights also carries defaults but keeps `reachable = true` — "reachable
/// but no data" is distinct from "unreachable".
///
/// A status is constructed fresh on each probe and never mutated; the next
/// probe's result supersedes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStatus {
    reachable: bool,
    on: bool,
    brightness: u8,
    mired: u16,
    raw: Value,
}

impl DeviceStatus {
    /// Status for a device that did not answer within the timeout.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            on: false,
            brightness: 0,
            mired: 0,
            raw: Value::Null,
        }
    }

    /// Status for a reachable device that reported no lights.
    #[must_use]
    pub fn reachable_empty(raw: Value) -> Self {
        Self {
            reachable: true,
            on: false,
            brightness: 0,
            mired: 0,
            raw,
        }
    }

    /// Status for a reachable device, from its first reported light.
    #[must_use]
    pub fn reachable(on: bool, brightness: u8, mired: u16, raw: Value) -> Self {
        Self {
            reachable: true,
            on,
            brightness,
            mired,
            raw,
        }
    }

    /// Returns `true` if the device answered the probe.
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        self.reachable
    }

    /// Returns `true` if the lamp reported itself powered on.
    ///
    /// Only meaningful when [`is_reachable`](Self::is_reachable) is `true`.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Returns the reported brightness percentage.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the reported color temperature in mireds.
    #[must_use]
    pub const fn mired(&self) -> u16 {
        self.mired
    }

    /// Returns the raw response payload, for diagnostics.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }
}

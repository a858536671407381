// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core value types for Key Light control.
//!
//! All numeric types in this module are constrained to the ranges the device
//! accepts. Out-of-range user input is saturated via the `clamped`
//! constructors rather than rejected.

mod brightness;
mod color_temp;
mod power;

pub use brightness::Brightness;
pub use color_temp::{ColorTemp, Kelvin};
pub use power::PowerState;

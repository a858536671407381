// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observed device and fleet state.
//!
//! State here is read-only and replaced wholesale: every probe constructs a
//! fresh [`DeviceStatus`] per device and a fresh [`FleetSnapshot`] for the
//! fleet; nothing is mutated in place.

mod device_status;
mod snapshot;

pub use device_status::DeviceStatus;
pub use snapshot::FleetSnapshot;

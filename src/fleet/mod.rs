// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fleet-level coordination across all configured devices.
//!
//! The fleet is a fixed, ordered set of devices supplied once via
//! [`FleetConfig`] and always addressed as one broadcast group. Probing
//! ([`FleetProber`]) and command dispatch ([`FleetDispatcher`]) are
//! independent of each other; both fan out one concurrent call per device
//! so fleet-wide latency approaches the slowest single device rather than
//! the sum.

mod config;
mod dispatcher;
mod prober;

pub use config::{DeviceAddress, FleetConfig};
pub use dispatcher::{DispatchReport, FleetDispatcher};
pub use prober::FleetProber;

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `keyfleet` - A Rust library to control a fleet of Elgato Key Lights.
//!
//! This library drives a small, statically configured set of Key Light
//! devices over their local HTTP API and always addresses them as one
//! broadcast group. It is the network core of a control panel: the UI layer
//! on top of it only needs to push slider/toggle events in and read fleet
//! snapshots out.
//!
//! # What it does
//!
//! - **Device client**: per-device HTTP get/set with a short bounded
//!   timeout; every transport failure degrades to an "unreachable" status
//!   or a `false` return instead of an error
//! - **Fleet probing**: concurrent reachability probes aggregated into a
//!   single [`FleetSnapshot`] with a fleet-wide `all_reachable` signal
//! - **Debouncing**: bursts of user input (slider drags) coalesce into one
//!   command per ~200 ms window
//! - **Fleet dispatch**: one coalesced command broadcast to all devices
//!   concurrently, tolerating partial failure
//!
//! # Quick Start
//!
//! ```no_run
//! use keyfleet::FleetController;
//! use keyfleet::fleet::FleetConfig;
//! use keyfleet::types::{Brightness, Kelvin, PowerState};
//!
//! #[tokio::main]
//! async fn main() -> keyfleet::Result<()> {
//!     let config = FleetConfig::new(["192.168.0.83", "192.168.0.181"]);
//!     let controller = FleetController::new(&config)?;
//!
//!     // Probe reachability; subscribe for the UI indicator.
//!     let mut snapshots = controller.snapshots();
//!     let snapshot = controller.probe().await;
//!     println!("all reachable: {}", snapshot.all_reachable());
//!
//!     // User input: debounced and broadcast to every lamp.
//!     controller.set_power(PowerState::On);
//!     controller.set_brightness(Brightness::clamped(80));
//!     controller.set_kelvin(Kelvin::clamped(5000));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Lower-level pieces
//!
//! The [`FleetController`] is convenience glue; every piece is usable on
//! its own. [`protocol::KeyLightClient`] talks to one device,
//! [`fleet::FleetProber`] and [`fleet::FleetDispatcher`] fan out over a
//! configured fleet, and [`debounce::CommandDebouncer`] coalesces input
//! without any networking attached.

pub mod command;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod fleet;
pub mod protocol;
pub mod state;
pub mod types;

pub use command::{PendingCommand, StateUpdate};
pub use controller::FleetController;
pub use debounce::CommandDebouncer;
pub use error::{Error, ProtocolError, Result, ValueError};
pub use fleet::{DeviceAddress, DispatchReport, FleetConfig, FleetDispatcher, FleetProber};
pub use protocol::{KeyLightClient, KeyLightConfig};
pub use state::{DeviceStatus, FleetSnapshot};
pub use types::{Brightness, ColorTemp, Kelvin, PowerState};

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Glue between user input, debouncing, dispatch, and probing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::command::PendingCommand;
use crate::debounce::CommandDebouncer;
use crate::error::Error;
use crate::fleet::{DispatchReport, FleetConfig, FleetDispatcher, FleetProber};
use crate::state::FleetSnapshot;
use crate::types::{Brightness, Kelvin, PowerState};

/// Single entry point wiring the fleet constructs together.
///
/// The controller owns a [`CommandDebouncer`], a [`FleetDispatcher`], and a
/// [`FleetProber`], and runs the forwarding task that applies each coalesced
/// command to the fleet. A UI layer drives it through the setters and
/// [`probe`](Self::probe), and consumes [`snapshots`](Self::snapshots) for
/// its reachability indicator; the controller never touches UI state itself.
///
/// Must be created within a Tokio runtime.
///
/// # Examples
///
/// ```no_run
/// use keyfleet::controller::FleetController;
/// use keyfleet::fleet::FleetConfig;
/// use keyfleet::types::{Brightness, PowerState};
///
/// #[tokio::main]
/// async fn main() -> keyfleet::Result<()> {
///     let config = FleetConfig::new(["192.168.0.83", "192.168.0.181"]);
///     let controller = FleetController::new(&config)?;
///
///     // Initial reachability check.
///     let snapshot = controller.probe().await;
///     println!("{}", snapshot.report());
///
///     // Debounced user input; the fleet receives one coalesced command.
///     controller.set_power(PowerState::On);
///     controller.set_brightness(Brightness::clamped(80));
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct FleetController {
    debouncer: CommandDebouncer,
    dispatcher: Arc<FleetDispatcher>,
    prober: FleetProber,
    forwarder: JoinHandle<()>,
}

impl FleetController {
    /// Creates a controller with the default debounce window.
    ///
    /// # Errors
    ///
    /// Returns error if a device client cannot be constructed.
    pub fn new(config: &FleetConfig) -> Result<Self, Error> {
        Self::with_debounce(config, crate::debounce::DEFAULT_DEBOUNCE)
    }

    /// Creates a controller with a custom debounce window.
    ///
    /// # Errors
    ///
    /// Returns error if a device client cannot be constructed.
    pub fn with_debounce(config: &FleetConfig, delay: Duration) -> Result<Self, Error> {
        let prober = FleetProber::new(config)?;
        let dispatcher = Arc::new(FleetDispatcher::new(config)?);
        let debouncer = CommandDebouncer::with_delay(delay);

        let forwarder = Self::spawn_forwarder(debouncer.subscribe(), Arc::clone(&dispatcher));

        Ok(Self {
            debouncer,
            dispatcher,
            prober,
            forwarder,
        })
    }

    /// Runs the task that applies every coalesced command to the fleet.
    fn spawn_forwarder(
        mut commands: broadcast::Receiver<PendingCommand>,
        dispatcher: Arc<FleetDispatcher>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match commands.recv().await {
                    Ok(command) => {
                        let report = dispatcher.apply(&command).await;
                        if report.failed() > 0 {
                            tracing::warn!(
                                applied = report.applied(),
                                failed = report.failed(),
                                "partial fleet dispatch"
                            );
                        }
                    }
                    // A lagged receiver only skipped already-superseded
                    // commands; the next one carries the full intent anyway.
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    /// Records a debounced power change.
    pub fn set_power(&self, power: PowerState) {
        self.debouncer.set_power(power);
    }

    /// Records a debounced brightness change.
    pub fn set_brightness(&self, brightness: Brightness) {
        self.debouncer.set_brightness(brightness);
    }

    /// Records a debounced color temperature change.
    pub fn set_kelvin(&self, kelvin: Kelvin) {
        self.debouncer.set_kelvin(kelvin);
    }

    /// Returns a copy of the current pending command.
    #[must_use]
    pub fn pending(&self) -> PendingCommand {
        self.debouncer.pending()
    }

    /// Applies a command to the fleet immediately, bypassing the debouncer.
    pub async fn apply_now(&self, command: &PendingCommand) -> DispatchReport {
        self.dispatcher.apply(command).await
    }

    /// Probes the fleet now and publishes the snapshot.
    pub async fn probe(&self) -> FleetSnapshot {
        self.prober.probe().await
    }

    /// Subscribes to published fleet snapshots.
    #[must_use]
    pub fn snapshots(&self) -> watch::Receiver<FleetSnapshot> {
        self.prober.subscribe()
    }

    /// Returns the number of configured devices.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.dispatcher.device_count()
    }
}

impl Drop for FleetController {
    fn drop(&mut self) {
        self.forwarder.abort();
    }
}

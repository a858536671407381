// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Concurrent fleet command dispatch.

use tokio::task::JoinSet;

use crate::command::{PendingCommand, StateUpdate};
use crate::error::ProtocolError;
use crate::protocol::KeyLightClient;

use super::FleetConfig;

/// Outcome summary of one dispatch cycle.
///
/// Dispatch is fire-and-forget by design: a failed device degrades nothing
/// and triggers no rollback on the others. The report is informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    applied: usize,
    failed: usize,
}

impl DispatchReport {
    /// Returns the number of devices that accepted the update.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// Returns the number of devices that failed or did not answer.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Returns the number of devices addressed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.applied + self.failed
    }

    /// Returns `true` iff no device failed (vacuously true for an empty
    /// fleet).
    #[must_use]
    pub const fn all_applied(&self) -> bool {
        self.failed == 0
    }
}

/// Applies one coalesced command to every configured device.
///
/// The same update goes to all devices - a true broadcast with no per-device
/// customization. Writes run concurrently and independently; one failure
/// never blocks application to the rest.
///
/// # Examples
///
/// ```no_run
/// use keyfleet::command::PendingCommand;
/// use keyfleet::fleet::{FleetConfig, FleetDispatcher};
/// use keyfleet::types::PowerState;
///
/// # async fn example() -> keyfleet::Result<()> {
/// let config = FleetConfig::new(["192.168.0.83", "192.168.0.181"]);
/// let dispatcher = FleetDispatcher::new(&config)?;
///
/// let mut command = PendingCommand::new();
/// command.set_power(PowerState::On);
/// dispatcher.apply(&command).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FleetDispatcher {
    clients: Vec<KeyLightClient>,
}

impl FleetDispatcher {
    /// Creates a dispatcher for the configured fleet.
    ///
    /// # Errors
    ///
    /// Returns error if a device client cannot be constructed.
    pub fn new(config: &FleetConfig) -> Result<Self, ProtocolError> {
        Ok(Self {
            clients: config.clients()?,
        })
    }

    /// Returns the number of devices this dispatcher covers.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.clients.len()
    }

    /// Applies a pending command to all devices.
    ///
    /// The command's kelvin value is converted to the device-native mired
    /// unit before dispatch.
    pub async fn apply(&self, command: &PendingCommand) -> DispatchReport {
        self.apply_update(&command.to_update()).await
    }

    /// Applies a raw state update to all devices concurrently.
    pub async fn apply_update(&self, update: &StateUpdate) -> DispatchReport {
        tracing::debug!(devices = self.clients.len(), ?update, "dispatching to fleet");

        let mut writes = JoinSet::new();
        for client in &self.clients {
            let client = client.clone();
            let update = *update;
            writes.spawn(async move {
                let accepted = client.set_state(&update).await;
                (client.address().clone(), accepted)
            });
        }

        let mut report = DispatchReport::default();
        while let Some(joined) = writes.join_next().await {
            match joined {
                Ok((_, true)) => report.applied += 1,
                Ok((address, false)) => {
                    tracing::warn!(%address, "device did not accept state update");
                    report.failed += 1;
                }
                Err(_) => report.failed += 1,
            }
        }

        tracing::debug!(
            applied = report.applied,
            failed = report.failed,
            "fleet dispatch finished"
        );

        report
    }
}

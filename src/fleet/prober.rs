// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Concurrent fleet status probing.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::error::ProtocolError;
use crate::protocol::KeyLightClient;
use crate::state::FleetSnapshot;

use super::FleetConfig;

/// Probes every configured device and aggregates the results into a
/// [`FleetSnapshot`].
///
/// Per-device probes run concurrently, so total wall-clock cost approaches
/// the slowest single device bounded by its own timeout - N unreachable
/// devices do not multiply probe latency by N. A failed probe is recorded as
/// unreachable without retries; re-probe cadence is the caller's
/// responsibility.
///
/// Snapshots are published through a `watch` channel, so a consumer on
/// another task (typically the UI context) only ever observes whole
/// snapshots. A monotonic sequence guard drops the result of a probe that
/// started earlier than the last published one.
///
/// # Examples
///
/// ```no_run
/// use keyfleet::fleet::{FleetConfig, FleetProber};
///
/// # async fn example() -> keyfleet::Result<()> {
/// let config = FleetConfig::new(["192.168.0.83", "192.168.0.181"]);
/// let prober = FleetProber::new(&config)?;
///
/// let mut snapshots = prober.subscribe();
/// let snapshot = prober.probe().await;
/// println!("{}", snapshot.report());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FleetProber {
    clients: Vec<KeyLightClient>,
    snapshot_tx: watch::Sender<FleetSnapshot>,
    sequence: AtomicU64,
}

impl FleetProber {
    /// Creates a prober for the configured fleet.
    ///
    /// # Errors
    ///
    /// Returns error if a device client cannot be constructed.
    pub fn new(config: &FleetConfig) -> Result<Self, ProtocolError> {
        let clients = config.clients()?;
        let (snapshot_tx, _) = watch::channel(FleetSnapshot::empty());
        Ok(Self {
            clients,
            snapshot_tx,
            sequence: AtomicU64::new(0),
        })
    }

    /// Returns the number of devices this prober covers.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.clients.len()
    }

    /// Subscribes to published snapshots.
    ///
    /// The receiver always holds the latest published snapshot; earlier
    /// snapshots are not retained.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FleetSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Probes all devices concurrently and publishes the resulting snapshot.
    ///
    /// Also returns the snapshot directly for callers that triggered the
    /// probe themselves.
    pub async fn probe(&self) -> FleetSnapshot {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(sequence, devices = self.clients.len(), "starting fleet probe");

        let mut probes = JoinSet::new();
        for (index, client) in self.clients.iter().enumerate() {
            let client = client.clone();
            probes.spawn(async move {
                let address = client.address().clone();
                let status = client.status().await;
                (index, address, status)
            });
        }

        // Results come back in completion order; slot them back into the
        // configured order for the report.
        let mut slots = vec![None; self.clients.len()];
        while let Some(joined) = probes.join_next().await {
            if let Ok((index, address, status)) = joined {
                slots[index] = Some((address, status));
            }
        }

        let entries = slots.into_iter().flatten().collect();
        let snapshot = FleetSnapshot::new(sequence, entries);

        tracing::info!(
            sequence,
            all_reachable = snapshot.all_reachable(),
            "fleet probe finished"
        );

        self.publish(&snapshot);
        snapshot
    }

    /// Publishes a snapshot unless a newer probe's snapshot is already out.
    fn publish(&self, snapshot: &FleetSnapshot) {
        self.snapshot_tx.send_if_modified(|current| {
            if snapshot.sequence() >= current.sequence() {
                *current = snapshot.clone();
                true
            } else {
                tracing::debug!(
                    sequence = snapshot.sequence(),
                    published = current.sequence(),
                    "dropping stale probe result"
                );
                false
            }
        });
    }
}

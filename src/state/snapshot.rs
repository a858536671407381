// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fleet-wide snapshot of one probe cycle.

use chrono::{DateTime, Utc};

use crate::fleet::DeviceAddress;

use super::DeviceStatus;

/// The state of every configured device at one point in time.
///
/// Entries preserve the configured device order. Snapshots are replaced
/// wholesale after each probe cycle (last probe wins, no history); the
/// `sequence` number identifies the probe that produced this snapshot so a
/// late-arriving older probe can be recognized and dropped.
///
/// # Examples
///
/// ```
/// use keyfleet::fleet::DeviceAddress;
/// use keyfleet::state::{DeviceStatus, FleetSnapshot};
///
/// let snapshot = FleetSnapshot::new(
///     1,
///     vec![(DeviceAddress::new("192.168.0.83"), DeviceStatus::unreachable())],
/// );
/// assert!(!snapshot.all_reachable());
/// assert_eq!(snapshot.report_lines(), vec!["192.168.0.83: unreachable"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSnapshot {
    sequence: u64,
    taken_at: DateTime<Utc>,
    entries: Vec<(DeviceAddress, DeviceStatus)>,
}

impl FleetSnapshot {
    /// Creates a snapshot from one probe cycle's results, in configured order.
    #[must_use]
    pub fn new(sequence: u64, entries: Vec<(DeviceAddress, DeviceStatus)>) -> Self {
        Self {
            sequence,
            taken_at: Utc::now(),
            entries,
        }
    }

    /// The pre-probe placeholder: no entries, sequence zero.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    /// Returns `true` iff every entry is reachable.
    ///
    /// An empty fleet is vacuously all-reachable.
    #[must_use]
    pub fn all_reachable(&self) -> bool {
        self.entries.iter().all(|(_, status)| status.is_reachable())
    }

    /// Returns the per-device entries in configured order.
    #[must_use]
    pub fn entries(&self) -> &[(DeviceAddress, DeviceStatus)] {
        &self.entries
    }

    /// Returns the status for one device, if it is part of the fleet.
    #[must_use]
    pub fn status_of(&self, address: &DeviceAddress) -> Option<&DeviceStatus> {
        self.entries
            .iter()
            .find(|(entry_address, _)| entry_address == address)
            .map(|(_, status)| status)
    }

    /// Returns the number of devices in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the probe sequence number that produced this snapshot.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns when the snapshot was assembled.
    #[must_use]
    pub const fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Returns one human-readable reachability line per device, in
    /// configured order. Suitable for an indicator tooltip.
    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(address, status)| {
                let reachability = if status.is_reachable() {
                    "reachable"
                } else {
                    "unreachable"
                };
                format!("{address}: {reachability}")
            })
            .collect()
    }

    /// Returns the reachability report as a single newline-joined string.
    #[must_use]
    pub fn report(&self) -> String {
        self.report_lines().join("\n")
    }
}

impl Default for FleetSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(host: &str) -> DeviceAddress {
        DeviceAddress::new(host)
    }

    #[test]
    fn empty_fleet_is_vacuously_all_reachable() {
        let snapshot = FleetSnapshot::empty();
        assert!(snapshot.all_reachable());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.report(), "");
    }

    #[test]
    fn one_unreachable_device_degrades_aggregate() {
        let snapshot = FleetSnapshot::new(
            1,
            vec![
                (addr("a"), DeviceStatus::reachable_empty(serde_json::Value::Null)),
                (addr("b"), DeviceStatus::unreachable()),
            ],
        );
        assert!(!snapshot.all_reachable());
    }

    #[test]
    fn all_reachable_when_every_entry_answers() {
        let snapshot = FleetSnapshot::new(
            1,
            vec![
                (addr("a"), DeviceStatus::reachable_empty(serde_json::Value::Null)),
                (addr("b"), DeviceStatus::reachable_empty(serde_json::Value::Null)),
            ],
        );
        assert!(snapshot.all_reachable());
    }

    #[test]
    fn report_preserves_configured_order() {
        let snapshot = FleetSnapshot::new(
            1,
            vec![
                (addr("10.0.0.2"), DeviceStatus::unreachable()),
                (addr("10.0.0.1"), DeviceStatus::reachable_empty(serde_json::Value::Null)),
            ],
        );
        assert_eq!(
            snapshot.report_lines(),
            vec!["10.0.0.2: unreachable", "10.0.0.1: reachable"]
        );
    }

    #[test]
    fn status_of_finds_entry() {
        let snapshot = FleetSnapshot::new(1, vec![(addr("a"), DeviceStatus::unreachable())]);
        assert!(snapshot.status_of(&addr("a")).is_some());
        assert!(snapshot.status_of(&addr("b")).is_none());
    }
}

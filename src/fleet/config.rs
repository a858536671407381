// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static fleet configuration.

use std::fmt;
use std::time::Duration;

use crate::error::ProtocolError;
use crate::protocol::{KeyLightClient, KeyLightConfig};

/// Network address of one lamp (host or IP).
///
/// Addresses are opaque and immutable; the set of addresses is supplied once
/// at startup and fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    /// Creates a device address from a host or IP string.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceAddress {
    fn from(host: &str) -> Self {
        Self::new(host)
    }
}

impl From<String> for DeviceAddress {
    fn from(host: String) -> Self {
        Self(host)
    }
}

/// Configuration for a fleet of Key Light devices.
///
/// An explicit value passed into the fleet constructs at construction time,
/// never process-wide state - multiple independent fleets can coexist. The
/// address order is preserved everywhere a fleet result is reported.
///
/// # Examples
///
/// ```
/// use keyfleet::fleet::FleetConfig;
/// use std::time::Duration;
///
/// let config = FleetConfig::new(["192.168.0.83", "192.168.0.181"])
///     .with_timeout(Duration::from_secs(2));
///
/// assert_eq!(config.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FleetConfig {
    addresses: Vec<DeviceAddress>,
    port: u16,
    timeout: Duration,
}

impl FleetConfig {
    /// Creates a fleet configuration from an ordered list of addresses.
    ///
    /// Port and timeout start at the [`KeyLightConfig`] defaults.
    #[must_use]
    pub fn new<I, A>(addresses: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<DeviceAddress>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
            port: KeyLightConfig::DEFAULT_PORT,
            timeout: KeyLightConfig::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the control port used for every device.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the per-call timeout used for every device.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured addresses in order.
    #[must_use]
    pub fn addresses(&self) -> &[DeviceAddress] {
        &self.addresses
    }

    /// Returns the control port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the number of configured devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns `true` if no devices are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Builds one client per configured address, in order.
    ///
    /// # Errors
    ///
    /// Returns error if any client cannot be constructed.
    pub fn clients(&self) -> Result<Vec<KeyLightClient>, ProtocolError> {
        self.addresses
            .iter()
            .map(|address| {
                KeyLightConfig::new(address.as_str())
                    .with_port(self.port)
                    .with_timeout(self.timeout)
                    .into_client()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_address_display() {
        let address = DeviceAddress::new("192.168.0.83");
        assert_eq!(address.to_string(), "192.168.0.83");
        assert_eq!(address.as_str(), "192.168.0.83");
    }

    #[test]
    fn config_preserves_address_order() {
        let config = FleetConfig::new(["b", "a", "c"]);
        let hosts: Vec<&str> = config.addresses().iter().map(DeviceAddress::as_str).collect();
        assert_eq!(hosts, vec!["b", "a", "c"]);
    }

    #[test]
    fn config_defaults() {
        let config = FleetConfig::new(["a"]);
        assert_eq!(config.port(), 9123);
        assert_eq!(config.timeout(), Duration::from_millis(1200));
    }

    #[test]
    fn config_empty_fleet() {
        let config = FleetConfig::new(Vec::<String>::new());
        assert!(config.is_empty());
        assert_eq!(config.len(), 0);
        assert!(config.clients().unwrap().is_empty());
    }

    #[test]
    fn clients_carry_fleet_settings() {
        let config = FleetConfig::new(["10.0.0.1"])
            .with_port(9999)
            .with_timeout(Duration::from_secs(3));
        let clients = config.clients().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].lights_url(), "http://10.0.0.1:9999/elgato/lights");
    }
}

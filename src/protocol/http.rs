// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for a single Key Light device.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::command::StateUpdate;
use crate::error::ProtocolError;
use crate::fleet::DeviceAddress;
use crate::state::DeviceStatus;

use super::wire::LightsEnvelope;

/// Path of the lights control endpoint on the device.
const API_PATH: &str = "/elgato/lights";

// ============================================================================
// KeyLightConfig - Configuration for one device client
// ============================================================================

/// Configuration for one Key Light device client.
///
/// # Examples
///
/// ```
/// use keyfleet::protocol::KeyLightConfig;
/// use std::time::Duration;
///
/// // Defaults: port 9123, 1.2 s timeout
/// let config = KeyLightConfig::new("192.168.0.83");
///
/// // With all options
/// let config = KeyLightConfig::new("192.168.0.83")
///     .with_port(9124)
///     .with_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct KeyLightConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl KeyLightConfig {
    /// Default control port of a Key Light.
    pub const DEFAULT_PORT: u16 = 9123;
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1200);

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the per-request timeout.
    ///
    /// This timeout is the only bound on call duration; there is no
    /// separate cancellation of in-flight requests.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the lights endpoint URL from this configuration.
    ///
    /// A host may carry an explicit `host:port` authority; otherwise the
    /// configured port is appended.
    #[must_use]
    pub fn lights_url(&self) -> String {
        if self.host.contains(':') {
            format!("http://{}{API_PATH}", self.host)
        } else {
            format!("http://{}:{}{API_PATH}", self.host, self.port)
        }
    }

    /// Creates a [`KeyLightClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<KeyLightClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        let lights_url = self.lights_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(KeyLightClient {
            address: DeviceAddress::new(self.host),
            lights_url,
            client,
        })
    }
}

// ============================================================================
// KeyLightClient - Per-device HTTP client
// ============================================================================

/// HTTP client for one Key Light device.
///
/// The client is stateless per call and cheap to clone; clones share the
/// underlying connection pool and can be used concurrently. Device-facing
/// failures never surface as errors: [`status`](Self::status) degrades to an
/// unreachable [`DeviceStatus`] and [`set_state`](Self::set_state) returns
/// `false`.
///
/// # Examples
///
/// ```no_run
/// use keyfleet::protocol::KeyLightConfig;
/// use keyfleet::command::StateUpdate;
/// use keyfleet::types::PowerState;
///
/// # async fn example() -> keyfleet::Result<()> {
/// let client = KeyLightConfig::new("192.168.0.83").into_client()?;
///
/// let status = client.status().await;
/// if status.is_reachable() {
///     client
///         .set_state(&StateUpdate::new().with_power(PowerState::On))
///         .await;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KeyLightClient {
    address: DeviceAddress,
    lights_url: String,
    client: Client,
}

impl KeyLightClient {
    /// Returns the address of the device this client controls.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Returns the lights endpoint URL.
    #[must_use]
    pub fn lights_url(&self) -> &str {
        &self.lights_url
    }

    /// Queries the current device state.
    ///
    /// Any transport error, timeout, or non-success status code yields an
    /// unreachable status. A reachable device reporting zero lights yields a
    /// reachable status with default fields; otherwise the first reported
    /// light is consumed.
    pub async fn status(&self) -> DeviceStatus {
        tracing::debug!(address = %self.address, "probing device");

        let response = match self.client.get(&self.lights_url).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!(address = %self.address, %error, "probe transport failure");
                return DeviceStatus::unreachable();
            }
        };

        if !response.status().is_success() {
            tracing::debug!(
                address = %self.address,
                status = response.status().as_u16(),
                "probe rejected by device"
            );
            return DeviceStatus::unreachable();
        }

        let raw: Value = match response.json().await {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(address = %self.address, %error, "probe response not JSON");
                return DeviceStatus::unreachable();
            }
        };

        parse_status(raw)
    }

    /// Applies a partial state update to the device.
    ///
    /// Only the fields present in `update` are included in the PUT body;
    /// omitted fields leave the corresponding device attribute unchanged.
    /// Returns `true` only on a successful response.
    pub async fn set_state(&self, update: &StateUpdate) -> bool {
        let body = LightsEnvelope::from_update(update);

        tracing::debug!(address = %self.address, ?update, "sending state update");

        match self.client.put(&self.lights_url).json(&body).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::debug!(
                    address = %self.address,
                    status = response.status().as_u16(),
                    "state update rejected by device"
                );
                false
            }
            Err(error) => {
                tracing::debug!(address = %self.address, %error, "state update transport failure");
                false
            }
        }
    }
}

/// Interprets a successful GET response body.
///
/// Parsing is permissive: absent numeric fields default to zero and an
/// unexpected shape degrades to "reachable, no data" rather than failing
/// the probe.
fn parse_status(raw: Value) -> DeviceStatus {
    let envelope: LightsEnvelope = match serde_json::from_value(raw.clone()) {
        Ok(envelope) => envelope,
        Err(_) => return DeviceStatus::reachable_empty(raw),
    };

    match envelope.lights.first() {
        None => DeviceStatus::reachable_empty(raw),
        Some(light) => DeviceStatus::reachable(
            light.on.unwrap_or(0) != 0,
            light.brightness.unwrap_or(0),
            light.temperature.unwrap_or(0),
            raw,
        ),
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for fleet probing, dispatch, and the controller.

use std::time::{Duration, Instant};

use keyfleet::command::PendingCommand;
use keyfleet::controller::FleetController;
use keyfleet::fleet::{FleetConfig, FleetDispatcher, FleetProber};
use keyfleet::types::{Brightness, PowerState};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn host_of(mock_server: &MockServer) -> String {
    mock_server.uri().replace("http://", "")
}

async fn mock_lamp(on: u8, brightness: u8, temperature: u16) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/elgato/lights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "numberOfLights": 1,
            "lights": [{"on": on, "brightness": brightness, "temperature": temperature}]
        })))
        .mount(&mock_server)
        .await;
    mock_server
}

// ============================================================================
// FleetProber
// ============================================================================

mod prober {
    use super::*;

    #[tokio::test]
    async fn partial_fleet_failure_degrades_only_the_aggregate() {
        let lamp_one = mock_lamp(1, 42, 250).await;
        let lamp_three = mock_lamp(0, 10, 300).await;

        // Device two never responds.
        let config = FleetConfig::new([
            host_of(&lamp_one),
            "127.0.0.1:59999".to_string(),
            host_of(&lamp_three),
        ])
        .with_timeout(Duration::from_millis(500));

        let prober = FleetProber::new(&config).unwrap();
        let snapshot = prober.probe().await;

        assert!(!snapshot.all_reachable());
        assert_eq!(snapshot.len(), 3);

        let entries = snapshot.entries();
        assert!(entries[0].1.is_reachable());
        assert_eq!(entries[0].1.brightness(), 42);
        assert!(!entries[1].1.is_reachable());
        assert!(entries[2].1.is_reachable());
        assert_eq!(entries[2].1.mired(), 300);

        // Report preserves configured order.
        let lines = snapshot.report_lines();
        assert!(lines[0].ends_with("reachable"));
        assert_eq!(lines[1], "127.0.0.1:59999: unreachable");
    }

    #[tokio::test]
    async fn probes_run_concurrently_not_sequentially() {
        let mut hosts = Vec::new();
        let mut servers = Vec::new();
        for _ in 0..3 {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(serde_json::json!({"lights": []}))
                        .set_delay(Duration::from_millis(300)),
                )
                .mount(&mock_server)
                .await;
            hosts.push(host_of(&mock_server));
            servers.push(mock_server);
        }

        let config = FleetConfig::new(hosts).with_timeout(Duration::from_secs(2));
        let prober = FleetProber::new(&config).unwrap();

        let started = Instant::now();
        let snapshot = prober.probe().await;
        let elapsed = started.elapsed();

        assert!(snapshot.all_reachable());
        // Sequential probing would take at least 3 x 300 ms.
        assert!(
            elapsed < Duration::from_millis(800),
            "probe took {elapsed:?}, expected roughly one device's latency"
        );
    }

    #[tokio::test]
    async fn empty_fleet_snapshot_is_vacuously_all_reachable() {
        let prober = FleetProber::new(&FleetConfig::new(Vec::<String>::new())).unwrap();
        let snapshot = prober.probe().await;
        assert!(snapshot.all_reachable());
        assert_eq!(snapshot.len(), 0);
    }
}

// ============================================================================
// FleetDispatcher
// ============================================================================

mod dispatcher {
    use super::*;

    #[tokio::test]
    async fn one_failed_write_does_not_block_the_others() {
        let healthy = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/elgato/lights"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&healthy)
            .await;

        let broken = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&broken)
            .await;

        let config = FleetConfig::new([host_of(&healthy), host_of(&broken)])
            .with_timeout(Duration::from_millis(500));
        let dispatcher = FleetDispatcher::new(&config).unwrap();

        let mut command = PendingCommand::new();
        command.set_power(PowerState::On);
        let report = dispatcher.apply(&command).await;

        assert_eq!(report.applied(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.total(), 2);
    }

    #[tokio::test]
    async fn broadcasts_the_same_converted_command_to_every_device() {
        // 5000 K converts to round(1_000_000 / 5000) = 200 mired.
        let expected_body = serde_json::json!({
            "numberOfLights": 1,
            "lights": [{"on": 1, "brightness": 80, "temperature": 200}]
        });

        let mut hosts = Vec::new();
        let mut servers = Vec::new();
        for _ in 0..2 {
            let mock_server = MockServer::start().await;
            Mock::given(method("PUT"))
                .and(path("/elgato/lights"))
                .and(body_json(expected_body.clone()))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&mock_server)
                .await;
            hosts.push(host_of(&mock_server));
            servers.push(mock_server);
        }

        let config = FleetConfig::new(hosts).with_timeout(Duration::from_millis(500));
        let dispatcher = FleetDispatcher::new(&config).unwrap();

        let mut command = PendingCommand::new();
        command.set_power(PowerState::On);
        command.set_brightness(Brightness::clamped(80));
        command.set_kelvin(keyfleet::types::Kelvin::clamped(5000));

        let report = dispatcher.apply(&command).await;
        assert!(report.all_applied());
        assert_eq!(report.applied(), 2);
    }
}

// ============================================================================
// FleetController end-to-end
// ============================================================================

mod controller {
    use super::*;

    #[tokio::test]
    async fn slider_burst_produces_exactly_one_put_per_device() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/elgato/lights"))
            .and(body_json(serde_json::json!({
                "numberOfLights": 1,
                "lights": [{"brightness": 70, "temperature": 250}]
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config =
            FleetConfig::new([host_of(&mock_server)]).with_timeout(Duration::from_millis(500));
        let controller =
            FleetController::with_debounce(&config, Duration::from_millis(50)).unwrap();

        // A drag: three rapid changes, last write wins.
        controller.set_brightness(Brightness::clamped(50));
        controller.set_brightness(Brightness::clamped(60));
        controller.set_brightness(Brightness::clamped(70));

        // Let the debounce window elapse and the dispatch land.
        tokio::time::sleep(Duration::from_millis(400)).await;

        // MockServer verifies expect(1) on drop.
    }

    #[tokio::test]
    async fn probe_now_publishes_a_snapshot() {
        let lamp = mock_lamp(1, 55, 250).await;
        let config = FleetConfig::new([host_of(&lamp)]).with_timeout(Duration::from_millis(500));
        let controller = FleetController::new(&config).unwrap();

        let mut snapshots = controller.snapshots();
        let snapshot = controller.probe().await;

        assert!(snapshot.all_reachable());
        snapshots.changed().await.unwrap();
        let published = snapshots.borrow().clone();
        assert_eq!(published, snapshot);
        assert_eq!(published.entries()[0].1.brightness(), 55);
    }

    #[tokio::test]
    async fn empty_configuration_end_to_end() {
        let controller = FleetController::new(&FleetConfig::new(Vec::<String>::new())).unwrap();
        let snapshot = controller.probe().await;
        assert!(snapshot.all_reachable());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.report(), "");
    }
}

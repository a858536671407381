// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire format of the `/elgato/lights` endpoint.
//!
//! The device firmware owns this format; this module only mirrors it.
//! Every field is optional on both directions: the firmware leaves an
//! attribute unchanged when its key is absent from a PUT body, and a GET
//! response is parsed permissively with absent numeric fields defaulting
//! to zero.

use serde::{Deserialize, Serialize};

use crate::command::StateUpdate;

/// The JSON envelope wrapping the lights array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct LightsEnvelope {
    #[serde(
        rename = "numberOfLights",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_lights: Option<u32>,
    #[serde(default)]
    pub lights: Vec<LightElement>,
}

/// One light inside the envelope.
///
/// Multi-emitter devices report several elements; only the first one is
/// consumed, and updates always address the device as one logical unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct LightElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<u16>,
}

impl LightsEnvelope {
    /// Builds the PUT body for a state update.
    ///
    /// Unset update fields are omitted from the JSON entirely so the device
    /// keeps those attributes as they are.
    pub(crate) fn from_update(update: &StateUpdate) -> Self {
        Self {
            number_of_lights: Some(1),
            lights: vec![LightElement {
                on: update.power().map(|p| p.as_num()),
                brightness: update.brightness().map(|b| b.value()),
                temperature: update.color_temp().map(|ct| ct.value()),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brightness, ColorTemp, PowerState};
    use serde_json::json;

    #[test]
    fn full_update_serializes_all_fields() {
        let update = StateUpdate::new()
            .with_power(PowerState::On)
            .with_brightness(Brightness::clamped(80))
            .with_color_temp(ColorTemp::NEUTRAL);

        let body = serde_json::to_value(LightsEnvelope::from_update(&update)).unwrap();
        assert_eq!(
            body,
            json!({
                "numberOfLights": 1,
                "lights": [{"on": 1, "brightness": 80, "temperature": 250}]
            })
        );
    }

    #[test]
    fn partial_update_omits_unset_keys() {
        let update = StateUpdate::new().with_brightness(Brightness::clamped(40));
        let body = serde_json::to_value(LightsEnvelope::from_update(&update)).unwrap();
        assert_eq!(
            body,
            json!({
                "numberOfLights": 1,
                "lights": [{"brightness": 40}]
            })
        );
    }

    #[test]
    fn response_with_missing_fields_parses() {
        let envelope: LightsEnvelope =
            serde_json::from_value(json!({"lights": [{"on": 1}]})).unwrap();
        let light = &envelope.lights[0];
        assert_eq!(light.on, Some(1));
        assert_eq!(light.brightness, None);
        assert_eq!(light.temperature, None);
    }

    #[test]
    fn response_without_lights_parses_as_empty() {
        let envelope: LightsEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.lights.is_empty());
    }
}

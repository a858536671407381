// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol layer for Elgato Key Light devices.
//!
//! Each device exposes a local REST endpoint at
//! `http://<host>:9123/elgato/lights`. HTTP is stateless here - every
//! operation is an independent request with its own bounded timeout, and the
//! client holds no mutable state between calls.

mod http;
mod wire;

pub use http::{KeyLightClient, KeyLightConfig};

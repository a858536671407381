// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command types describing requested lamp state.
//!
//! [`StateUpdate`] is the per-request view the device client sends: every
//! field is optional and an omitted field leaves the corresponding device
//! attribute unchanged. [`PendingCommand`] is the longer-lived user intent
//! the debouncer accumulates between dispatches.

mod pending;
mod update;

pub use pending::PendingCommand;
pub use update::StateUpdate;

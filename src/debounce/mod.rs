// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Debouncing of rapid user input into coalesced commands.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::command::PendingCommand;
use crate::types::{Brightness, Kelvin, PowerState};

/// Default debounce window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Channel capacity for coalesced commands. Bursts are already coalesced
/// upstream, so the buffer stays small.
const COMMAND_CHANNEL_CAPACITY: usize = 16;

/// Coalesces a burst of user-driven parameter changes into a single
/// outbound command.
///
/// Every setter overwrites one field of the shared [`PendingCommand`]
/// (last write wins) and re-arms a single countdown, cancelling any
/// countdown already in flight - only the last event within a burst ever
/// fires. The countdown is shared across all fields: a power toggle and a
/// brightness drag inside the same window coalesce into one combined
/// command.
///
/// When the countdown elapses, a copy of the full pending command is
/// broadcast to subscribers; the pending structure is retained as the
/// baseline for subsequent edits.
///
/// Setters must be called from within a Tokio runtime (they spawn the
/// countdown task).
///
/// # Examples
///
/// ```no_run
/// use keyfleet::debounce::CommandDebouncer;
/// use keyfleet::types::Brightness;
///
/// # async fn example() {
/// let debouncer = CommandDebouncer::new();
/// let mut commands = debouncer.subscribe();
///
/// // A slider drag: many events, one command.
/// for value in 50..=70 {
///     debouncer.set_brightness(Brightness::clamped(value));
/// }
///
/// let command = commands.recv().await.unwrap();
/// assert_eq!(command.brightness().value(), 70);
/// # }
/// ```
#[derive(Debug)]
pub struct CommandDebouncer {
    pending: Arc<Mutex<PendingCommand>>,
    delay: Duration,
    sender: broadcast::Sender<PendingCommand>,
    countdown: Mutex<Option<JoinHandle<()>>>,
}

impl CommandDebouncer {
    /// Creates a debouncer with the default 200 ms window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DEBOUNCE)
    }

    /// Creates a debouncer with a custom window.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        let (sender, _) = broadcast::channel(COMMAND_CHANNEL_CAPACITY);
        Self {
            pending: Arc::new(Mutex::new(PendingCommand::new())),
            delay,
            sender,
            countdown: Mutex::new(None),
        }
    }

    /// Returns the debounce window.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Subscribes to coalesced commands.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PendingCommand> {
        self.sender.subscribe()
    }

    /// Returns a copy of the current pending command.
    #[must_use]
    pub fn pending(&self) -> PendingCommand {
        *self.pending.lock()
    }

    /// Records a power change and re-arms the countdown.
    pub fn set_power(&self, power: PowerState) {
        self.pending.lock().set_power(power);
        self.rearm();
    }

    /// Records a brightness change and re-arms the countdown.
    pub fn set_brightness(&self, brightness: Brightness) {
        self.pending.lock().set_brightness(brightness);
        self.rearm();
    }

    /// Records a color temperature change and re-arms the countdown.
    pub fn set_kelvin(&self, kelvin: Kelvin) {
        self.pending.lock().set_kelvin(kelvin);
        self.rearm();
    }

    /// Restarts the countdown, cancelling any countdown in flight.
    ///
    /// The spawned task reads the pending command only after the delay
    /// elapses, so later edits within the window are picked up; the copy it
    /// sends is detached from subsequent mutation.
    fn rearm(&self) {
        let pending = Arc::clone(&self.pending);
        let sender = self.sender.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let command = *pending.lock();
            tracing::debug!(?command, "debounce window elapsed, emitting command");
            // No subscribers is fine - the command is simply dropped.
            let _ = sender.send(command);
        });

        if let Some(previous) = self.countdown.lock().replace(handle) {
            previous.abort();
        }
    }
}

impl Default for CommandDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CommandDebouncer {
    fn drop(&mut self) {
        // No command may fire after the debouncer is gone.
        if let Some(handle) = self.countdown.lock().take() {
            handle.abort();
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller identifier type.

use std::fmt;

use uuid::Uuid;

/// Unique identifier for a light controller.
///
/// Every [`LightController`](crate::LightController) gets one at construction.
/// It tags log records and [`SignalEvent`](super::SignalEvent)s so output
/// from several controllers in one process can be told apart.
///
/// # Examples
///
/// ```
/// use traffic_signal::event::ControllerId;
///
/// let id = ControllerId::new();
/// println!("Controller: {}", id);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ControllerId(Uuid);

impl ControllerId {
    /// Creates a new unique controller identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a controller identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the first eight hex digits, used in log records.
    #[must_use]
    pub fn short(&self) -> String {
        let mut buf = Uuid::encode_buffer();
        self.0.simple().encode_lower(&mut buf)[..8].to_string()
    }
}

impl Default for ControllerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControllerId({}...)", self.short())
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ControllerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

//! Typed GUIDs for the identities carried by an ETW event.
//!
//! Each wrapper is the same 16 bytes as [`Guid`](crate::Guid); the type only
//! keeps a provider GUID from being passed where a container id is expected.

use crate::define_guid;

define_guid!(
    /// Identifies the server silo (container) an event was raised from.
    ContainerId
);

define_guid!(
    /// Identifies the provider that raised an event.
    ProviderId
);

define_guid!(
    /// Correlates events belonging to the same activity.
    ActivityId
);

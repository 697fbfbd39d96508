//! Delay expiration events.
//!
//! When an entry of [`DelayedActions`](crate::resources::delayedactions::DelayedActions)
//! comes due, [`update_delayed_actions`](crate::systems::delayedactions::update_delayed_actions)
//! triggers a [`DelayElapsedEvent`]. The owner compares the token with the
//! one it is waiting for and ignores stale ones.

use bevy_ecs::prelude::*;

use crate::resources::delayedactions::ScheduleToken;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayElapsedEvent {
    /// The entity that scheduled the action.
    pub entity: Entity,
    pub token: ScheduleToken,
}

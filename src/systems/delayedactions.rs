//! Delayed action dispatch.
//!
//! [`update_delayed_actions`] drains every due entry of
//! [`DelayedActions`](crate::resources::delayedactions::DelayedActions) and
//! triggers a [`DelayElapsedEvent`] for it. Cancelled entries never fire.

use bevy_ecs::prelude::*;

use crate::events::delayedactions::DelayElapsedEvent;
use crate::resources::delayedactions::DelayedActions;
use crate::resources::worldtime::WorldTime;

pub fn update_delayed_actions(
    time: Res<WorldTime>,
    mut actions: ResMut<DelayedActions>,
    mut commands: Commands,
) {
    if actions.is_empty() {
        return;
    }
    for (entity, token) in actions.drain_due(time.elapsed) {
        commands.trigger(DelayElapsedEvent { entity, token });
    }
}

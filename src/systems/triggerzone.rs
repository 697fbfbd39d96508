//! Trigger zone detection.
//!
//! Each frame, [`trigger_zone_system`] tests every trigger collider that has a
//! [`TriggerZone`] against all other box colliders and emits
//! [`TriggerEnterEvent`] / [`TriggerExitEvent`] for the overlaps that started
//! or ended since the previous frame. Entities that despawn while inside a
//! zone produce an exit event too.
//!
//! Colliders whose `is_trigger` flag is off are skipped and keep their
//! previous overlap set.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::triggerzone::TriggerZone;
use crate::events::trigger::{TriggerDimension, TriggerEnterEvent, TriggerExitEvent};

pub fn trigger_zone_system(
    mut zones: Query<(Entity, &MapPosition, &BoxCollider, &mut TriggerZone)>,
    bodies: Query<(Entity, &MapPosition, &BoxCollider), Without<TriggerZone>>,
    mut commands: Commands,
) {
    for (zone, zone_pos, zone_collider, mut state) in zones.iter_mut() {
        if !zone_collider.is_trigger {
            continue;
        }

        let current: FxHashSet<Entity> = bodies
            .iter()
            .filter(|(_, pos, collider)| zone_collider.overlaps(zone_pos.pos, collider, pos.pos))
            .map(|(entity, _, _)| entity)
            .collect();

        if current == state.overlapping {
            continue;
        }

        for &other in current.difference(&state.overlapping) {
            commands.trigger(TriggerEnterEvent {
                zone,
                other,
                dimension: TriggerDimension::TwoD,
            });
        }
        for &other in state.overlapping.difference(&current) {
            commands.trigger(TriggerExitEvent {
                zone,
                other,
                dimension: TriggerDimension::TwoD,
            });
        }

        state.overlapping = current;
    }
}

//! Trigger zone overlap bookkeeping.
//!
//! A [`TriggerZone`] sits on an entity with a trigger [`BoxCollider`](crate::components::boxcollider::BoxCollider)
//! and remembers which colliders overlapped it last frame, so that
//! [`trigger_zone_system`](crate::systems::triggerzone::trigger_zone_system)
//! can report enter and exit transitions.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

#[derive(Component, Debug, Clone, Default)]
pub struct TriggerZone {
    pub overlapping: FxHashSet<Entity>,
}

impl TriggerZone {
    pub fn contains(&self, entity: Entity) -> bool {
        self.overlapping.contains(&entity)
    }
}

//! Trigger zone enter/exit events.
//!
//! [`trigger_zone_system`](crate::systems::triggerzone::trigger_zone_system)
//! emits 2D events for overlapping box colliders. A host with its own 3D
//! physics can trigger the same events with [`TriggerDimension::ThreeD`];
//! observers treat both alike.
use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerDimension {
    #[default]
    TwoD,
    ThreeD,
}

/// Fired when `other` starts overlapping the trigger zone `zone`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEnterEvent {
    pub zone: Entity,
    pub other: Entity,
    pub dimension: TriggerDimension,
}

/// Fired when `other` stops overlapping the trigger zone `zone`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerExitEvent {
    pub zone: Entity,
    pub other: Entity,
    pub dimension: TriggerDimension,
}

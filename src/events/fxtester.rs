//! Manual commands for an FX tester.
//!
//! The inspector panel and the preview runner never touch an
//! [`FxTester`](crate::components::fxtester::FxTester) directly: they trigger
//! an [`FxCommandEvent`] and
//! [`fxtester_command_observer`](crate::systems::fxtester::fxtester_command_observer)
//! applies it with access to the emitters and the scheduler.
//!
//! # Example
//!
//! ```ignore
//! world.trigger(FxCommandEvent {
//!     entity: tester,
//!     command: FxCommand::PlayLoop,
//! });
//! ```
use bevy_ecs::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FxCommand {
    /// Force the loop override off and trigger.
    PlayOnce,
    /// Force the loop override on and trigger.
    PlayLoop,
    /// Stop, clear particles and restore loop flags.
    Stop,
    /// Trigger with the current loop setting.
    Trigger,
    /// Re-scan the subtree for emitters and adopt them.
    CollectChildren,
    /// Replace the emitter list wholesale.
    SetEmitters(Vec<Entity>),
    /// Re-apply settings after an edit: trigger collider, auto-collect, loop cache.
    Validate,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct FxCommandEvent {
    /// The entity carrying the FxTester.
    pub entity: Entity,
    pub command: FxCommand,
}

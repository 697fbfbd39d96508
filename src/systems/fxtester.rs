//! FX tester systems and observers.
//!
//! This module wires engine events into [`FxTester`]:
//!
//! - [`fxtester_awake_system`] – initializes newly added testers (trigger
//!   collider, auto-collect, loop cache, play on start)
//! - [`fxtester_manual_key_system`] – hotkey trigger (`legacy_input` feature)
//! - [`fxtester_trigger_enter_observer`] / [`fxtester_trigger_exit_observer`]
//!   – zone events filtered by tag
//! - [`fxtester_delay_observer`] – completes delayed plays
//! - [`fxtester_command_observer`] – inspector and preview commands
//! - [`fxtester_removed_observer`] – drops the delayed plays of removed testers
//!
//! Emitters are driven through [`EmitterAccess`], the [`EmitterControl`]
//! implementation backed by the world's [`ParticleEmitter`] components and
//! the `ChildOf`/`Children` hierarchy.
//!
//! # Setup
//!
//! ```ignore
//! register_fxtester(&mut world);
//! let mut update = Schedule::default();
//! add_fxtester_systems(&mut update);
//! ```

use bevy_ecs::hierarchy::Children;
use bevy_ecs::lifecycle::Remove;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::fxtester::FxTester;
use crate::components::particleemitter::{EmitterControl, ParticleEmitter, StopBehavior};
use crate::components::tag::{Tag, tag_name};
use crate::components::triggerzone::TriggerZone;
use crate::events::delayedactions::DelayElapsedEvent;
use crate::events::fxtester::{FxCommand, FxCommandEvent};
use crate::events::trigger::{TriggerEnterEvent, TriggerExitEvent};
use crate::resources::delayedactions::DelayedActions;
#[cfg(feature = "legacy_input")]
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::delayedactions::update_delayed_actions;
use crate::systems::particleemitter::particle_emitter_system;
use crate::systems::triggerzone::trigger_zone_system;

/// Emitter access through the ECS world.
///
/// `play` and `stop` apply to the handle and every emitter below it in the
/// hierarchy; the loop flag only to the handle.
#[derive(SystemParam)]
pub struct EmitterAccess<'w, 's> {
    emitters: Query<'w, 's, &'static mut ParticleEmitter>,
    children: Query<'w, 's, &'static Children>,
}

impl EmitterAccess<'_, '_> {
    /// `root` and all its descendants, depth-first, parents before children.
    pub fn subtree(&self, root: Entity) -> Vec<Entity> {
        let mut out = Vec::new();
        self.push_subtree(root, &mut out);
        out
    }

    fn push_subtree(&self, entity: Entity, out: &mut Vec<Entity>) {
        out.push(entity);
        if let Ok(children) = self.children.get(entity) {
            for child in children.iter() {
                self.push_subtree(child, out);
            }
        }
    }

    /// Every emitter in the subtree of `root`, `root` included.
    pub fn collect_emitters(&self, root: Entity) -> Vec<Entity> {
        self.subtree(root)
            .into_iter()
            .filter(|e| self.emitters.contains(*e))
            .collect()
    }

    pub fn get(&self, emitter: Entity) -> Option<&ParticleEmitter> {
        self.emitters.get(emitter).ok()
    }
}

impl EmitterControl for EmitterAccess<'_, '_> {
    fn play(&mut self, emitter: Entity) {
        for e in self.subtree(emitter) {
            if let Ok(mut p) = self.emitters.get_mut(e) {
                p.play();
            }
        }
    }

    fn stop(&mut self, emitter: Entity, behavior: StopBehavior) {
        for e in self.subtree(emitter) {
            if let Ok(mut p) = self.emitters.get_mut(e) {
                p.stop(behavior);
            }
        }
    }

    fn looping(&self, emitter: Entity) -> Option<bool> {
        self.emitters.get(emitter).ok().map(|p| p.looping)
    }

    fn set_looping(&mut self, emitter: Entity, looping: bool) {
        if let Ok(mut p) = self.emitters.get_mut(emitter) {
            p.looping = looping;
        }
    }
}

/// Shared by initialization and validation: make the owner's collider a
/// trigger zone, collect children if asked, and capture loop flags.
fn prepare_tester(
    entity: Entity,
    tester: &mut FxTester,
    collider: Option<Mut<BoxCollider>>,
    has_zone: bool,
    commands: &mut Commands,
    emitters: &EmitterAccess,
) {
    if let Some(mut collider) = collider {
        if !collider.is_trigger {
            collider.is_trigger = true;
        }
        if !has_zone {
            commands.entity(entity).insert(TriggerZone::default());
        }
    }

    if tester.settings.auto_collect_children {
        let found = emitters.collect_emitters(entity);
        tester.set_emitters(found, emitters);
    } else {
        tester.cache_original_loops(emitters);
    }
}

/// Initialize testers added since the last run.
pub fn fxtester_awake_system(
    mut testers: Query<
        (
            Entity,
            &mut FxTester,
            Option<&mut BoxCollider>,
            Has<TriggerZone>,
        ),
        Added<FxTester>,
    >,
    mut emitters: EmitterAccess,
    mut scheduler: ResMut<DelayedActions>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut tester, collider, has_zone) in testers.iter_mut() {
        prepare_tester(
            entity,
            &mut tester,
            collider,
            has_zone,
            &mut commands,
            &emitters,
        );
        info!(
            "FX tester {:?} ready with {} emitters",
            entity,
            tester.emitters().len()
        );

        if tester.settings.play_on_start {
            tester.trigger_play(entity, time.elapsed, &mut scheduler, &mut emitters);
        }
    }
}

/// Trigger a play when a tester's hotkey was pressed this frame.
#[cfg(feature = "legacy_input")]
pub fn fxtester_manual_key_system(
    input: Res<InputState>,
    mut testers: Query<(Entity, &mut FxTester)>,
    mut emitters: EmitterAccess,
    mut scheduler: ResMut<DelayedActions>,
    time: Res<WorldTime>,
) {
    for (entity, mut tester) in testers.iter_mut() {
        let Some(key) = tester.settings.manual_key else {
            continue;
        };
        if input.just_pressed(key) {
            tester.trigger_play(entity, time.elapsed, &mut scheduler, &mut emitters);
        }
    }
}

pub fn fxtester_trigger_enter_observer(
    trigger: On<TriggerEnterEvent>,
    mut testers: Query<&mut FxTester>,
    tags: Query<&Tag>,
    mut emitters: EmitterAccess,
    mut scheduler: ResMut<DelayedActions>,
    time: Res<WorldTime>,
) {
    let event = trigger.event();
    let Ok(mut tester) = testers.get_mut(event.zone) else {
        return;
    };
    let other_tag = tag_name(tags.get(event.other).ok());
    tester.on_trigger_enter(
        other_tag,
        event.zone,
        time.elapsed,
        &mut scheduler,
        &mut emitters,
    );
}

pub fn fxtester_trigger_exit_observer(
    trigger: On<TriggerExitEvent>,
    mut testers: Query<&mut FxTester>,
    tags: Query<&Tag>,
    mut emitters: EmitterAccess,
    mut scheduler: ResMut<DelayedActions>,
) {
    let event = trigger.event();
    let Ok(mut tester) = testers.get_mut(event.zone) else {
        return;
    };
    let other_tag = tag_name(tags.get(event.other).ok());
    tester.on_trigger_exit(other_tag, &mut scheduler, &mut emitters);
}

pub fn fxtester_delay_observer(
    trigger: On<DelayElapsedEvent>,
    mut testers: Query<&mut FxTester>,
    mut emitters: EmitterAccess,
) {
    let event = trigger.event();
    if let Ok(mut tester) = testers.get_mut(event.entity) {
        tester.complete_pending(event.token, &mut emitters);
    }
}

pub fn fxtester_command_observer(
    trigger: On<FxCommandEvent>,
    mut testers: Query<(&mut FxTester, Option<&mut BoxCollider>, Has<TriggerZone>)>,
    mut emitters: EmitterAccess,
    mut scheduler: ResMut<DelayedActions>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let entity = event.entity;
    let Ok((mut tester, collider, has_zone)) = testers.get_mut(entity) else {
        return;
    };
    let now = time.elapsed;

    match &event.command {
        FxCommand::PlayOnce => {
            tester.play_once(entity, now, &mut scheduler, &mut emitters);
        }
        FxCommand::PlayLoop => {
            tester.play_loop(entity, now, &mut scheduler, &mut emitters);
        }
        FxCommand::Stop => tester.stop_all_context(&mut scheduler, &mut emitters),
        FxCommand::Trigger => {
            tester.trigger_play(entity, now, &mut scheduler, &mut emitters);
        }
        FxCommand::CollectChildren => {
            let found = emitters.collect_emitters(entity);
            info!("FX tester {:?} collected {} emitters", entity, found.len());
            tester.set_emitters(found, &emitters);
        }
        FxCommand::SetEmitters(handles) => {
            tester.set_emitters(handles.iter().copied(), &emitters);
        }
        FxCommand::Validate => {
            prepare_tester(
                entity,
                &mut tester,
                collider,
                has_zone,
                &mut commands,
                &emitters,
            );
        }
    }
}

pub fn fxtester_removed_observer(
    trigger: On<Remove, FxTester>,
    mut scheduler: ResMut<DelayedActions>,
) {
    let entity = trigger.event().entity;
    let dropped = scheduler.cancel_owner(entity);
    if dropped > 0 {
        debug!(
            "FX tester {:?} removed, dropped {} delayed plays",
            entity, dropped
        );
    }
}

/// Insert the resources the FX tester needs and register its observers.
pub fn register_fxtester(world: &mut World) {
    world.init_resource::<WorldTime>();
    world.init_resource::<DelayedActions>();
    #[cfg(feature = "legacy_input")]
    world.init_resource::<InputState>();

    world.add_observer(fxtester_trigger_enter_observer);
    world.add_observer(fxtester_trigger_exit_observer);
    world.add_observer(fxtester_delay_observer);
    world.add_observer(fxtester_command_observer);
    world.add_observer(fxtester_removed_observer);
    world.flush();
}

/// Add the per-frame FX tester systems, in order.
pub fn add_fxtester_systems(schedule: &mut Schedule) {
    #[cfg(feature = "legacy_input")]
    schedule.add_systems(
        (
            fxtester_awake_system,
            fxtester_manual_key_system,
            trigger_zone_system,
            update_delayed_actions,
            particle_emitter_system,
        )
            .chain(),
    );
    #[cfg(not(feature = "legacy_input"))]
    schedule.add_systems(
        (
            fxtester_awake_system,
            trigger_zone_system,
            update_delayed_actions,
            particle_emitter_system,
        )
            .chain(),
    );
}

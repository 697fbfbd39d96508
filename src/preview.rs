//! Headless preview of an FX tester preset.
//!
//! [`Preview`] builds a world with one tester entity, a child
//! [`ParticleEmitter`] per configured loop flag, the tester's resources,
//! observers and systems, and then steps it at a fixed rate while feeding in
//! the inputs of a [`Scenario`].
//!
//! Zone enter/exit steps are delivered as [`TriggerEnterEvent`] /
//! [`TriggerExitEvent`] from a tagged stand-in entity, the same way a physics
//! host would report them.

use std::fmt;

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::components::fxtester::{FxState, FxTester};
use crate::components::particleemitter::ParticleEmitter;
use crate::components::tag::Tag;
use crate::events::fxtester::{FxCommand, FxCommandEvent};
use crate::events::trigger::{TriggerDimension, TriggerEnterEvent, TriggerExitEvent};
use crate::resources::input::{InputState, KeyCode};
use crate::resources::previewconfig::PreviewConfig;
use crate::resources::worldtime::{TIME_EPSILON, WorldTime};
use crate::scenario::{Scenario, ScenarioAction};
use crate::systems::fxtester::{add_fxtester_systems, register_fxtester};
use crate::systems::time::update_world_time;

/// Snapshot of one emitter at the end of a preview.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterReport {
    pub entity: Entity,
    pub playing: bool,
    pub looping: bool,
    pub live_particles: u32,
    pub times_started: u32,
}

/// Snapshot of the tester and its emitters.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewReport {
    pub elapsed: f32,
    pub state: FxState,
    pub plays: u32,
    pub emitters: Vec<EmitterReport>,
}

impl fmt::Display for PreviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "t={:.3}s state={:?} plays={}",
            self.elapsed, self.state, self.plays
        )?;
        for (i, e) in self.emitters.iter().enumerate() {
            writeln!(
                f,
                "  emitter #{} {:?}: playing={} loop={} particles={} started={}",
                i, e.entity, e.playing, e.looping, e.live_particles, e.times_started
            )?;
        }
        Ok(())
    }
}

pub struct Preview {
    pub world: World,
    pub tester: Entity,
    pub emitters: Vec<Entity>,
    schedule: Schedule,
    dt: f32,
    actors: FxHashMap<String, Entity>,
    tapped: Vec<KeyCode>,
}

impl Preview {
    /// Build the preview world and run the initialization pass.
    pub fn new(config: &PreviewConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
        world.insert_resource(InputState::default());
        register_fxtester(&mut world);

        let tester = world.spawn_empty().id();
        let emitters: Vec<Entity> = config
            .emitter_loops
            .iter()
            .map(|&looping| {
                world
                    .spawn((
                        ParticleEmitter::new(config.emitter_duration, looping)
                            .with_rate(config.emitter_rate, 1),
                        ChildOf(tester),
                    ))
                    .id()
            })
            .collect();
        world.flush();

        let mut fx = FxTester::new(config.fx.clone());
        if !config.fx.auto_collect_children {
            fx = fx.with_emitters(emitters.iter().copied());
        }
        world.entity_mut(tester).insert(fx);

        let mut schedule = Schedule::default();
        add_fxtester_systems(&mut schedule);

        let mut preview = Self {
            world,
            tester,
            emitters,
            schedule,
            dt: config.tick_delta(),
            actors: FxHashMap::default(),
            tapped: Vec::new(),
        };
        // Initialization pass at t=0: no time passes, testers wake up.
        preview.schedule.run(&mut preview.world);
        preview
    }

    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn tester(&self) -> Option<&FxTester> {
        self.world.get::<FxTester>(self.tester)
    }

    /// Advance one fixed step.
    pub fn step(&mut self) {
        update_world_time(&mut self.world, self.dt);
        self.schedule.run(&mut self.world);

        let mut input = self.world.resource_mut::<InputState>();
        for key in self.tapped.drain(..) {
            input.release(key);
        }
        input.end_frame();
    }

    /// Deliver one scenario input right away.
    pub fn apply(&mut self, action: &ScenarioAction) {
        info!("t={:.3}s input {:?}", self.elapsed(), action);
        match action {
            ScenarioAction::Enter { tag, three_d } => {
                let other = self.actor(tag);
                self.world.trigger(TriggerEnterEvent {
                    zone: self.tester,
                    other,
                    dimension: dimension(*three_d),
                });
            }
            ScenarioAction::Exit { tag, three_d } => {
                let other = self.actor(tag);
                self.world.trigger(TriggerExitEvent {
                    zone: self.tester,
                    other,
                    dimension: dimension(*three_d),
                });
            }
            ScenarioAction::Key { key } => {
                self.world.resource_mut::<InputState>().press(*key);
                self.tapped.push(*key);
            }
            ScenarioAction::PlayOnce => self.command(FxCommand::PlayOnce),
            ScenarioAction::PlayLoop => self.command(FxCommand::PlayLoop),
            ScenarioAction::Stop => self.command(FxCommand::Stop),
            ScenarioAction::Trigger => self.command(FxCommand::Trigger),
            ScenarioAction::CollectChildren => self.command(FxCommand::CollectChildren),
        }
    }

    /// Run until `duration` seconds of world time have passed, applying
    /// scenario steps as their time comes.
    pub fn run(&mut self, scenario: &Scenario, duration: f32) -> PreviewReport {
        let mut next = 0;
        loop {
            let now = self.elapsed();
            while next < scenario.steps.len() && scenario.steps[next].at <= now + TIME_EPSILON {
                self.apply(&scenario.steps[next].action);
                next += 1;
            }
            if now + TIME_EPSILON >= duration {
                break;
            }
            if self.step_delta() <= 0.0 {
                warn!("Time scale stops the clock at {:.3}s; ending preview", now);
                break;
            }
            self.step();
        }
        self.report()
    }

    /// World seconds one [`step`](Self::step) advances.
    pub fn step_delta(&self) -> f32 {
        (self.dt * self.world.resource::<WorldTime>().time_scale).max(0.0)
    }

    pub fn report(&self) -> PreviewReport {
        let emitters = self
            .emitters
            .iter()
            .filter_map(|&entity| {
                self.world
                    .get::<ParticleEmitter>(entity)
                    .map(|p| EmitterReport {
                        entity,
                        playing: p.is_playing(),
                        looping: p.looping,
                        live_particles: p.live_particles(),
                        times_started: p.times_started(),
                    })
            })
            .collect();
        PreviewReport {
            elapsed: self.elapsed(),
            state: self.tester().map_or(FxState::Idle, FxTester::state),
            plays: self.tester().map_or(0, FxTester::plays_count),
            emitters,
        }
    }

    fn command(&mut self, command: FxCommand) {
        self.world.trigger(FxCommandEvent {
            entity: self.tester,
            command,
        });
    }

    /// Stand-in entity carrying `tag`, spawned on first use.
    fn actor(&mut self, tag: &str) -> Entity {
        if let Some(&entity) = self.actors.get(tag) {
            return entity;
        }
        let entity = self.world.spawn(Tag::new(tag)).id();
        self.actors.insert(tag.to_string(), entity);
        entity
    }
}

fn dimension(three_d: bool) -> TriggerDimension {
    if three_d {
        TriggerDimension::ThreeD
    } else {
        TriggerDimension::TwoD
    }
}

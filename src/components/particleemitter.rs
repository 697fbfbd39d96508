//! Particle emitter playback component.
//!
//! The [`ParticleEmitter`] component is the engine's playable effect unit. It
//! tracks whether the emitter is playing, whether its cycle loops, and how
//! many live particles it currently holds. The actual particle look and
//! motion are left to the renderer; this component only answers "is it
//! playing" and "how much is on screen".
//!
//! # How It Works
//!
//! 1. [`ParticleEmitter::play`] starts a cycle of `duration` seconds.
//! 2. The `particle_emitter_system` runs each frame:
//!    - Accumulates time and emits `particles_per_emission` whenever an
//!      emission period elapses (with catch-up for large deltas)
//!    - Caps the live count at `max_particles`
//!    - Ends a non-looping emitter when its cycle is over, or wraps a
//!      looping one
//! 3. [`ParticleEmitter::stop`] either keeps the live particles
//!    ([`StopBehavior::StopEmitting`]) or drops them
//!    ([`StopBehavior::StopEmittingAndClear`]).
//!
//! # Related
//!
//! - [`crate::systems::particleemitter::particle_emitter_system`] – system that advances emitters
//! - [`EmitterControl`] – the capability the FX tester drives emitters through

use bevy_ecs::prelude::*;

/// How an emitter stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopBehavior {
    /// Stop emitting new particles; live ones stay.
    #[default]
    StopEmitting,
    /// Stop emitting and remove all live particles.
    StopEmittingAndClear,
}

/// Particle emitter playback state.
///
/// # Fields
///
/// - `looping` - Restart the cycle when it ends instead of stopping
/// - `duration` - Length of one emission cycle in seconds
/// - `emissions_per_second` - Emission frequency (0 or negative = disabled)
/// - `particles_per_emission` - Particles added per emission event
/// - `max_particles` - Upper bound for the live particle count
#[derive(Component, Debug, Clone)]
pub struct ParticleEmitter {
    pub looping: bool,
    pub duration: f32,
    pub emissions_per_second: f32,
    pub particles_per_emission: u32,
    pub max_particles: u32,
    playing: bool,
    cycle_time: f32,
    time_since_emit: f32,
    live_particles: u32,
    times_started: u32,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self {
            looping: false,
            duration: 1.0,
            emissions_per_second: 10.0,
            particles_per_emission: 1,
            max_particles: 1000,
            playing: false,
            cycle_time: 0.0,
            time_since_emit: 0.0,
            live_particles: 0,
            times_started: 0,
        }
    }
}

impl ParticleEmitter {
    pub fn new(duration: f32, looping: bool) -> Self {
        Self {
            duration,
            looping,
            ..Default::default()
        }
    }

    pub fn with_rate(mut self, emissions_per_second: f32, particles_per_emission: u32) -> Self {
        self.emissions_per_second = emissions_per_second;
        self.particles_per_emission = particles_per_emission;
        self
    }

    pub fn with_max_particles(mut self, max_particles: u32) -> Self {
        self.max_particles = max_particles;
        self
    }

    /// Start a new cycle. Playing an emitter that is already playing does nothing.
    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.cycle_time = 0.0;
        self.time_since_emit = 0.0;
        self.times_started += 1;
    }

    pub fn stop(&mut self, behavior: StopBehavior) {
        self.playing = false;
        self.cycle_time = 0.0;
        self.time_since_emit = 0.0;
        if behavior == StopBehavior::StopEmittingAndClear {
            self.live_particles = 0;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn live_particles(&self) -> u32 {
        self.live_particles
    }

    /// How many times a stopped emitter has been started.
    pub fn times_started(&self) -> u32 {
        self.times_started
    }

    pub fn cycle_time(&self) -> f32 {
        self.cycle_time
    }

    /// Advance the emitter by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.playing || dt <= 0.0 {
            return;
        }

        if self.emissions_per_second > 0.0 {
            let period = 1.0 / self.emissions_per_second;
            self.time_since_emit += dt;
            // Catch-up loop: emit multiple times if dt is large
            while self.time_since_emit >= period {
                self.live_particles = self
                    .live_particles
                    .saturating_add(self.particles_per_emission)
                    .min(self.max_particles);
                self.time_since_emit -= period;
            }
        }

        self.cycle_time += dt;
        if self.duration > 0.0 && self.cycle_time >= self.duration {
            if self.looping {
                self.cycle_time %= self.duration;
            } else {
                self.playing = false;
                self.cycle_time = 0.0;
                self.time_since_emit = 0.0;
            }
        }
    }
}

/// Playback capability the FX tester uses to drive emitters by handle.
///
/// Implementations must silently ignore handles that no longer point at an
/// emitter. `play` and `stop` act on the handle and every emitter below it
/// in the hierarchy; the loop flag only concerns the handle itself.
pub trait EmitterControl {
    fn play(&mut self, emitter: Entity);
    fn stop(&mut self, emitter: Entity, behavior: StopBehavior);
    /// Current loop flag, or `None` when the handle is gone.
    fn looping(&self, emitter: Entity) -> Option<bool>;
    fn set_looping(&mut self, emitter: Entity, looping: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_particle_emitter_default_values() {
        let e = ParticleEmitter::default();
        assert!(!e.looping);
        assert!(!e.is_playing());
        assert!(approx_eq(e.duration, 1.0));
        assert!(approx_eq(e.emissions_per_second, 10.0));
        assert_eq!(e.particles_per_emission, 1);
        assert_eq!(e.live_particles(), 0);
        assert_eq!(e.times_started(), 0);
    }

    #[test]
    fn test_play_while_playing_is_noop() {
        let mut e = ParticleEmitter::new(2.0, false);
        e.play();
        e.advance(0.5);
        e.play();
        assert_eq!(e.times_started(), 1);
        assert!(approx_eq(e.cycle_time(), 0.5));
    }

    #[test]
    fn test_advance_emits_with_catch_up() {
        let mut e = ParticleEmitter::new(10.0, false).with_rate(4.0, 2);
        e.play();
        e.advance(1.0);
        assert_eq!(e.live_particles(), 8);
    }

    #[test]
    fn test_live_particles_capped() {
        let mut e = ParticleEmitter::new(10.0, false)
            .with_rate(100.0, 5)
            .with_max_particles(12);
        e.play();
        e.advance(1.0);
        assert_eq!(e.live_particles(), 12);
    }

    #[test]
    fn test_non_looping_cycle_ends() {
        let mut e = ParticleEmitter::new(1.0, false);
        e.play();
        e.advance(0.5);
        assert!(e.is_playing());
        e.advance(0.5);
        assert!(!e.is_playing());
        assert!(e.live_particles() > 0);
    }

    #[test]
    fn test_looping_cycle_wraps() {
        let mut e = ParticleEmitter::new(1.0, true);
        e.play();
        e.advance(1.25);
        assert!(e.is_playing());
        assert!(approx_eq(e.cycle_time(), 0.25));
    }

    #[test]
    fn test_stop_keeps_or_clears_particles() {
        let mut e = ParticleEmitter::new(5.0, true).with_rate(10.0, 1);
        e.play();
        e.advance(0.5);
        let live = e.live_particles();
        assert!(live > 0);

        e.stop(StopBehavior::StopEmitting);
        assert!(!e.is_playing());
        assert_eq!(e.live_particles(), live);

        e.stop(StopBehavior::StopEmittingAndClear);
        assert_eq!(e.live_particles(), 0);
    }

    #[test]
    fn test_stopped_emitter_does_not_advance() {
        let mut e = ParticleEmitter::new(1.0, false);
        e.advance(1.0);
        assert_eq!(e.live_particles(), 0);
        assert!(approx_eq(e.cycle_time(), 0.0));
    }
}

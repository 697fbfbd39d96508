//! Particle emitter system.
//!
//! Advances every [`ParticleEmitter`] by the scaled frame delta: emission
//! accumulation, the live particle cap, and end-of-cycle handling are in
//! [`ParticleEmitter::advance`].

use bevy_ecs::prelude::*;

use crate::components::particleemitter::ParticleEmitter;
use crate::resources::worldtime::WorldTime;

pub fn particle_emitter_system(mut query: Query<&mut ParticleEmitter>, time: Res<WorldTime>) {
    let dt = time.delta; // delta is already scaled
    if dt <= 0.0 {
        return;
    }

    for mut emitter in query.iter_mut() {
        if emitter.is_playing() {
            emitter.advance(dt);
        }
    }
}

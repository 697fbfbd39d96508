//! Frame clock.
//!
//! Advances the [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame. Cooldowns and delayed plays read `elapsed`,
//! emitters read `delta`.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance `WorldTime` by the unscaled frame delta `dt`.
///
/// A negative delta or time scale counts as zero: the clock never runs
/// backwards.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = (dt * wt.time_scale).max(0.0);
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

//! Simulation time resource.
//!
//! [`WorldTime`] is advanced once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time). Cooldowns
//! and delayed plays are measured against `elapsed`.
use bevy_ecs::prelude::Resource;

/// Tolerance for comparing world times. `elapsed` is a sum of f32 frame
/// deltas, so at 60 ticks/s two seconds add up to 1.9999988.
pub const TIME_EPSILON: f32 = 1e-4;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f32,
    /// Scaled seconds of the last frame.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider, optionally a trigger
//! - [`fxtester`] – designer-driven particle effect controller
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`particleemitter`] – playable particle emitter and its control capability
//! - [`tag`] – designer-assigned tag compared by trigger filters
//! - [`triggerzone`] – overlap bookkeeping for trigger colliders

pub mod boxcollider;
pub mod fxtester;
pub mod mapposition;
pub mod particleemitter;
pub mod tag;
pub mod triggerzone;

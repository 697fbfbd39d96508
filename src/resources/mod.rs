//! ECS resources made available to systems.
//!
//! Overview
//! - `delayedactions` – cancellable delayed actions, the engine's coroutine stand-in
//! - `input` – per-frame keyboard state and bindable key codes
//! - `previewconfig` – INI-backed preset for the preview runner
//! - `worldtime` – simulation time and delta
pub mod delayedactions;
pub mod input;
pub mod previewconfig;
pub mod worldtime;

//! FX Tester library.
//!
//! This module exposes the ECS components, resources, systems, and events
//! behind the FX tester, plus its inspector panel and the headless preview
//! runner, for use in integration tests and as a reusable library.

pub mod components;
pub mod editor;
pub mod events;
pub mod preview;
pub mod resources;
pub mod scenario;
pub mod systems;

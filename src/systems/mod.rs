//! Engine systems and observers.
//!
//! Submodules overview
//! - [`delayedactions`] – turn due scheduled delays into events
//! - [`fxtester`] – FX tester lifecycle, hotkey, trigger and command handling
//! - [`particleemitter`] – advance emitter playback
//! - [`time`] – update simulation time and delta
//! - [`triggerzone`] – detect enter/exit transitions on trigger colliders

pub mod delayedactions;
pub mod fxtester;
pub mod particleemitter;
pub mod time;
pub mod triggerzone;

//! Event types used by the engine.
//!
//! Events provide a decoupled way for systems, the host and the inspector to
//! talk to the FX tester without direct dependencies.
//!
//! Submodules:
//! - [`delayedactions`] – a scheduled delay came due
//! - [`fxtester`] – manual commands addressed to an FX tester
//! - [`trigger`] – zone enter/exit notifications (2D detected, 3D host-fed)
pub mod delayedactions;
pub mod fxtester;
pub mod trigger;

//! Editor-side tooling.
//!
//! - [`inspector`] – property rows, control buttons and the imgui panel for
//!   [`FxTester`](crate::components::fxtester::FxTester)
pub mod inspector;

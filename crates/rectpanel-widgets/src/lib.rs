#![forbid(unsafe_code)]

//! Interactive surface for a bounded, resizable panel.
//!
//! The pieces here sit between a host toolkit's input events and
//! [`rectpanel_core::BoundedRect`]:
//!
//! - [`handles::HandleLayout`] lays out the nine drag zones and hit-tests them.
//! - [`drag::DragSession`] turns absolute pointer positions into incremental
//!   deltas for the zone that was grabbed.
//! - [`field::AxisField`] is one editable numeric readout.
//! - [`panel::ResizablePanel`] composes all of the above.

pub mod drag;
pub mod field;
pub mod handles;
pub mod panel;

pub use drag::{DragOutcome, DragSession, PointerEvent};
pub use field::AxisField;
pub use handles::HandleLayout;
pub use panel::ResizablePanel;

#![forbid(unsafe_code)]

//! Core: geometry, clamping, and the bounded rect controller.
//!
//! # Role in rectpanel
//! `rectpanel-core` is the constraint engine behind a draggable, resizable
//! panel. It owns the unclamped "live" rectangle that drag gestures and manual
//! edits accumulate into, and derives the clamped bounds that a renderer and
//! the numeric readouts display.
//!
//! # Primary responsibilities
//! - **Dimensions / clamp**: the rectangle type and the container clamp.
//! - **Zone**: the nine drag surfaces and their signed update table.
//! - **BoundedRect**: the controller that applies drags and edits.
//! - **PanelConfig**: construction parameters and validation.
//!
//! # How it fits in the system
//! `rectpanel-widgets` turns pointer events and text input into calls on
//! [`controller::BoundedRect`]. Nothing here knows about rendering or input
//! capture; every operation is a synchronous, total update of plain data.

pub mod config;
pub mod constraint;
pub mod controller;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod zone;

pub use config::PanelConfig;
pub use controller::BoundedRect;
pub use edit::{Axis, UnknownAxis};
pub use error::{ConfigError, EditError};
pub use geometry::{ClampBasis, Dimensions};
pub use zone::Zone;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};

#![forbid(unsafe_code)]

//! The bounded rect controller.
//!
//! [`BoundedRect`] owns the live rectangle: four cells that drag deltas and
//! manual edits write into without any clamping. What a renderer or readout
//! shows is [`BoundedRect::displayed_bounds`], recomputed on demand from the
//! live cells and the fixed container.
//!
//! # Invariants
//!
//! 1. Live cells are always finite; non-finite deltas and values, and drags
//!    whose result would overflow to infinity, are dropped.
//! 2. `displayed_bounds()` is a pure read: calling it repeatedly without an
//!    intervening mutation yields identical results.
//! 3. `0 <= displayed.x <= container.w`, `0 <= displayed.y <= container.h`,
//!    and displayed width/height are never negative.
//! 4. A resize handle leaves the opposite edge or corner of the live
//!    rectangle where it was.
//!
//! # Failure Modes
//!
//! - Dragging past the container accumulates in the live origin without
//!   bound. The display stays pinned at the container edge and only follows
//!   the pointer again once the live origin is back in range.
//! - A rejected edit returns an [`EditError`] and leaves the live value as it
//!   was.

use crate::config::PanelConfig;
use crate::constraint::constrained_origin;
use crate::edit::{Axis, format_readout, parse_integer};
use crate::error::{ConfigError, EditError};
use crate::geometry::{ClampBasis, Dimensions, displayed_bounds};
use crate::zone::Zone;

/// State and update rules for one draggable, resizable panel.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedRect {
    live: Dimensions,
    container: Dimensions,
    basis: ClampBasis,
    handle_size: f64,
}

impl Default for BoundedRect {
    fn default() -> Self {
        let config = PanelConfig::default();
        Self {
            live: config.initial,
            container: config.max,
            basis: config.clamp_basis,
            handle_size: config.handle_size,
        }
    }
}

impl BoundedRect {
    /// Create a controller from validated construction parameters.
    pub fn new(config: PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        crate::debug!(
            initial = ?config.initial,
            max = ?config.max,
            basis = ?config.clamp_basis,
            "bounded rect initialized"
        );
        Ok(Self {
            live: config.initial,
            container: config.max,
            basis: config.clamp_basis,
            handle_size: config.handle_size,
        })
    }

    /// Create a controller from a starting rectangle and container, with the
    /// remaining parameters at their defaults.
    pub fn with_dimensions(initial: Dimensions, max: Dimensions) -> Result<Self, ConfigError> {
        Self::new(PanelConfig::default().initial(initial).max(max))
    }

    /// The unclamped live rectangle.
    #[inline]
    pub const fn live(&self) -> Dimensions {
        self.live
    }

    /// The container this panel is bounded by.
    #[inline]
    pub const fn container(&self) -> Dimensions {
        self.container
    }

    /// Origin used for the width/height ceiling.
    #[inline]
    pub const fn clamp_basis(&self) -> ClampBasis {
        self.basis
    }

    /// Thickness of the resize handles.
    #[inline]
    pub const fn handle_size(&self) -> f64 {
        self.handle_size
    }

    /// The live rectangle clamped to the container.
    #[must_use]
    pub fn displayed_bounds(&self) -> Dimensions {
        displayed_bounds(self.live, self.container, self.basis)
    }

    /// Apply one incremental drag delta from `zone`.
    ///
    /// Resize handles follow [`Zone::rule`]. The body translates the live
    /// origin by as much of the delta as keeps the rectangle inside the
    /// container. Non-finite deltas are ignored, as are drags whose result
    /// would overflow a live cell.
    pub fn on_drag(&mut self, zone: Zone, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            crate::debug!(zone = %zone, dx, dy, "ignoring non-finite drag delta");
            return;
        }

        let next = match zone {
            Zone::Body => {
                let (x, y) = constrained_origin(self.live, self.container, dx, dy);
                Dimensions { x, y, ..self.live }
            }
            handle => handle.rule().apply(self.live, dx, dy),
        };
        if !next.is_finite() {
            crate::debug!(
                zone = %zone,
                dx,
                dy,
                live = ?self.live,
                "ignoring overflowing drag"
            );
            return;
        }
        self.live = next;

        crate::trace!(
            zone = %zone,
            dx,
            dy,
            live = ?self.live,
            displayed = ?self.displayed_bounds(),
            "drag applied"
        );
    }

    /// Apply a manual edit of one axis from raw field text.
    ///
    /// The leading integer of `raw` replaces the live cell directly. Text
    /// without one is rejected and the previous value retained.
    pub fn on_edit(&mut self, axis: Axis, raw: &str) -> Result<(), EditError> {
        match parse_integer(raw) {
            Ok(value) => {
                *axis.get_mut(&mut self.live) = value as f64;
                crate::debug!(
                    axis = %axis,
                    value,
                    displayed = ?self.displayed_bounds(),
                    "manual edit applied"
                );
                Ok(())
            }
            Err(err) => {
                crate::warn!(axis = %axis, error = %err, "manual edit rejected");
                Err(err)
            }
        }
    }

    /// Write a numeric value straight into one live cell.
    pub fn set_axis(&mut self, axis: Axis, value: f64) -> Result<(), EditError> {
        if !value.is_finite() {
            return Err(EditError::NotFinite);
        }
        *axis.get_mut(&mut self.live) = value;
        Ok(())
    }

    /// Text shown in the readout field for `axis`.
    #[must_use]
    pub fn readout(&self, axis: Axis) -> String {
        format_readout(axis.get(&self.displayed_bounds()))
    }

    /// All four readouts in x, y, w, h order.
    #[must_use]
    pub fn readouts(&self) -> [(Axis, String); 4] {
        let shown = self.displayed_bounds();
        Axis::ALL.map(|axis| (axis, format_readout(axis.get(&shown))))
    }

    /// How far the live origin sits outside `[0, container]` on each axis.
    ///
    /// Negative when the origin is before the container, positive when past
    /// its far edge, zero when in range.
    #[must_use]
    pub fn drift(&self) -> (f64, f64) {
        let shown = self.displayed_bounds();
        (self.live.x - shown.x, self.live.y - shown.y)
    }
}

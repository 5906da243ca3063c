#![forbid(unsafe_code)]

//! Body-drag constraint.
//!
//! Resize handles write deltas straight into the live cells and leave the
//! clamp to [`crate::geometry::displayed_bounds`]. Dragging the body is
//! different: the translation itself is limited so the whole rectangle stays
//! inside the container, and the size never changes.

use crate::geometry::{Dimensions, clamp};

/// The origin a body drag of `(dx, dy)` lands on.
///
/// The result is kept within `[0, container.w - live.w]` on x and
/// `[0, container.h - live.h]` on y. A rectangle larger than its container
/// can only sit at origin 0 on that axis. A live origin that has already
/// drifted out of range is pulled back into range by the first body drag.
#[must_use]
pub fn constrained_origin(
    live: Dimensions,
    container: Dimensions,
    dx: f64,
    dy: f64,
) -> (f64, f64) {
    let max_x = (container.w - live.w).max(0.0);
    let max_y = (container.h - live.h).max(0.0);
    (
        clamp(live.x + dx, 0.0, max_x),
        clamp(live.y + dy, 0.0, max_y),
    )
}

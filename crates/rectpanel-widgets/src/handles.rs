#![forbid(unsafe_code)]

//! Handle layout and hit testing.
//!
//! Handles are laid out inside the displayed rectangle. Edges are
//! `handle_size` thick and stop `handle_size` short of each corner; corners
//! are `handle_size` squares; the body covers the whole rectangle underneath.

use rectpanel_core::config::DEFAULT_HANDLE_SIZE;
use rectpanel_core::{Dimensions, Zone};

/// Hit-test priority: corners, then edges, then the body.
const HIT_ORDER: [Zone; 9] = [
    Zone::NorthWest,
    Zone::NorthEast,
    Zone::SouthEast,
    Zone::SouthWest,
    Zone::West,
    Zone::East,
    Zone::North,
    Zone::South,
    Zone::Body,
];

/// Geometry of the nine drag zones for a given handle thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLayout {
    handle_size: f64,
}

impl Default for HandleLayout {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLE_SIZE)
    }
}

impl HandleLayout {
    /// Create a layout with the given handle thickness (negative is treated
    /// as zero).
    pub fn new(handle_size: f64) -> Self {
        Self {
            handle_size: handle_size.max(0.0),
        }
    }

    /// Handle thickness.
    #[inline]
    pub const fn handle_size(&self) -> f64 {
        self.handle_size
    }

    /// The area covered by `zone` on a panel displayed at `bounds`.
    #[must_use]
    pub fn zone_rect(&self, bounds: Dimensions, zone: Zone) -> Dimensions {
        let s = self.handle_size;
        let inner_w = (bounds.w - 2.0 * s).max(0.0);
        let inner_h = (bounds.h - 2.0 * s).max(0.0);
        let right = bounds.right() - s;
        let bottom = bounds.bottom() - s;
        match zone {
            Zone::Body => bounds,
            Zone::West => Dimensions::new(bounds.x, bounds.y + s, s, inner_h),
            Zone::East => Dimensions::new(right, bounds.y + s, s, inner_h),
            Zone::North => Dimensions::new(bounds.x + s, bounds.y, inner_w, s),
            Zone::South => Dimensions::new(bounds.x + s, bottom, inner_w, s),
            Zone::NorthWest => Dimensions::new(bounds.x, bounds.y, s, s),
            Zone::NorthEast => Dimensions::new(right, bounds.y, s, s),
            Zone::SouthEast => Dimensions::new(right, bottom, s, s),
            Zone::SouthWest => Dimensions::new(bounds.x, bottom, s, s),
        }
    }

    /// The topmost zone under `(px, py)`, if any.
    #[must_use]
    pub fn hit_test(&self, bounds: Dimensions, px: f64, py: f64) -> Option<Zone> {
        if !bounds.contains(px, py) {
            return None;
        }
        HIT_ORDER
            .into_iter()
            .find(|&zone| self.zone_rect(bounds, zone).contains(px, py))
    }

    /// Cursor name to show at `(px, py)`.
    #[must_use]
    pub fn cursor_at(&self, bounds: Dimensions, px: f64, py: f64) -> Option<&'static str> {
        self.hit_test(bounds, px, py).map(Zone::cursor_hint)
    }
}

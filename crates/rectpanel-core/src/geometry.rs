#![forbid(unsafe_code)]

//! Geometric primitives and the container clamp.

/// A rectangle in container-local coordinates.
///
/// `x`/`y` are the top-left offset from the container origin, `w`/`h` the
/// extent. Values are plain reals: a live rectangle may be negative or
/// overflow its container while a drag is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Dimensions {
    /// Starting rectangle used when the host supplies none.
    pub const DEFAULT_INITIAL: Self = Self::new(0.0, 0.0, 100.0, 100.0);

    /// Container extent used when the host supplies none.
    pub const DEFAULT_MAX: Self = Self::new(0.0, 0.0, 250.0, 250.0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(w: f64, h: f64) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// The bottom-right corner.
    #[inline]
    pub fn far_corner(&self) -> (f64, f64) {
        (self.right(), self.bottom())
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether every field is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

/// Two-sided clamp: `min(max(n, min), max)`.
///
/// Unlike [`f64::clamp`] this never panics; when `min > max` the upper bound
/// wins and `max` is returned.
#[inline]
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Which origin the width/height ceiling is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClampBasis {
    /// Available extent is `container - live origin`, even when the live
    /// origin is itself out of range.
    #[default]
    RawOrigin,
    /// Available extent is `container - displayed origin`.
    DisplayedOrigin,
}

/// Project a live rectangle into the container.
///
/// ```text
/// displayed.x = clamp(live.x, 0, container.w)
/// displayed.y = clamp(live.y, 0, container.h)
/// displayed.w = clamp(live.w, 0, container.w - origin.x)
/// displayed.h = clamp(live.h, 0, container.h - origin.y)
/// ```
///
/// where `origin` is the live or displayed origin depending on `basis`. The
/// extent ceiling is floored at zero so a displayed width or height is never
/// negative. Only `container.w`/`container.h` are read.
pub fn displayed_bounds(live: Dimensions, container: Dimensions, basis: ClampBasis) -> Dimensions {
    let x = clamp(live.x, 0.0, container.w);
    let y = clamp(live.y, 0.0, container.h);
    let (origin_x, origin_y) = match basis {
        ClampBasis::RawOrigin => (live.x, live.y),
        ClampBasis::DisplayedOrigin => (x, y),
    };
    let w = clamp(live.w, 0.0, (container.w - origin_x).max(0.0));
    let h = clamp(live.h, 0.0, (container.h - origin_y).max(0.0));
    Dimensions::new(x, y, w, h)
}

#![forbid(unsafe_code)]

//! Drag zones and their signed update rules.
//!
//! A panel exposes nine drag surfaces: the body and eight resize handles
//! (four edges, four corners). Each handle maps a pointer delta onto a subset
//! of the four live cells:
//!
//! | Zone       | x     | y     | w     | h     |
//! |------------|-------|-------|-------|-------|
//! | west       | +dx   |       | -dx   |       |
//! | east       |       |       | +dx   |       |
//! | north      |       | +dy   |       | -dy   |
//! | south      |       |       |       | +dy   |
//! | north-west | +dx   | +dy   | -dx   | -dy   |
//! | north-east |       | +dy   | +dx   | -dy   |
//! | south-east |       |       | +dx   | +dy   |
//! | south-west | +dx   |       | -dx   | +dy   |
//!
//! Handles on the low side (west, north) move the origin by the same delta
//! they take off the extent, so the opposite edge stays fixed in container
//! coordinates.

use std::fmt;
use std::str::FromStr;

use crate::geometry::Dimensions;

/// One of the nine interactive drag surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Zone {
    /// Whole-rect translation.
    Body,
    West,
    East,
    North,
    South,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Zone {
    /// Every zone, body first.
    pub const ALL: [Zone; 9] = [
        Zone::Body,
        Zone::West,
        Zone::East,
        Zone::North,
        Zone::South,
        Zone::NorthWest,
        Zone::NorthEast,
        Zone::SouthEast,
        Zone::SouthWest,
    ];

    /// The eight resize handles.
    pub const HANDLES: [Zone; 8] = [
        Zone::West,
        Zone::East,
        Zone::North,
        Zone::South,
        Zone::NorthWest,
        Zone::NorthEast,
        Zone::SouthEast,
        Zone::SouthWest,
    ];

    /// Whether this zone resizes (as opposed to translating the body).
    #[inline]
    pub const fn is_handle(self) -> bool {
        !matches!(self, Self::Body)
    }

    /// Whether this zone is a corner handle.
    #[inline]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthEast | Self::SouthWest
        )
    }

    /// The signed cell mask for this zone.
    ///
    /// `Body` has an all-zero rule; body drags go through
    /// [`crate::constraint::constrained_origin`] instead.
    #[must_use]
    pub const fn rule(self) -> ZoneRule {
        match self {
            Self::Body => ZoneRule::new(0, 0, 0, 0),
            Self::West => ZoneRule::new(1, 0, -1, 0),
            Self::East => ZoneRule::new(0, 0, 1, 0),
            Self::North => ZoneRule::new(0, 1, 0, -1),
            Self::South => ZoneRule::new(0, 0, 0, 1),
            Self::NorthWest => ZoneRule::new(1, 1, -1, -1),
            Self::NorthEast => ZoneRule::new(0, 1, 1, -1),
            Self::SouthEast => ZoneRule::new(0, 0, 1, 1),
            Self::SouthWest => ZoneRule::new(1, 0, -1, 1),
        }
    }

    /// Pointer cursor conventionally shown over this zone.
    #[must_use]
    pub const fn cursor_hint(self) -> &'static str {
        match self {
            Self::Body => "move",
            Self::West | Self::East => "ew-resize",
            Self::North | Self::South => "ns-resize",
            Self::NorthWest | Self::SouthEast => "nwse-resize",
            Self::NorthEast | Self::SouthWest => "nesw-resize",
        }
    }

    /// Stable kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::West => "west",
            Self::East => "east",
            Self::North => "north",
            Self::South => "south",
            Self::NorthWest => "north-west",
            Self::NorthEast => "north-east",
            Self::SouthEast => "south-east",
            Self::SouthWest => "south-west",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown zone name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownZone(pub String);

impl fmt::Display for UnknownZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown drag zone {:?}", self.0)
    }
}

impl std::error::Error for UnknownZone {}

impl FromStr for Zone {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|zone| zone.name() == s)
            .ok_or_else(|| UnknownZone(s.to_owned()))
    }
}

/// Signed coefficients mapping `(dx, dy)` onto the four live cells.
///
/// Each coefficient is `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRule {
    pub dx_to_x: i8,
    pub dy_to_y: i8,
    pub dx_to_w: i8,
    pub dy_to_h: i8,
}

impl ZoneRule {
    const fn new(dx_to_x: i8, dy_to_y: i8, dx_to_w: i8, dy_to_h: i8) -> Self {
        Self {
            dx_to_x,
            dy_to_y,
            dx_to_w,
            dy_to_h,
        }
    }

    /// Whether the rule touches no cell at all.
    #[inline]
    pub const fn is_noop(&self) -> bool {
        self.dx_to_x == 0 && self.dy_to_y == 0 && self.dx_to_w == 0 && self.dy_to_h == 0
    }

    /// Apply a pointer delta to a live rectangle.
    #[must_use]
    pub fn apply(&self, live: Dimensions, dx: f64, dy: f64) -> Dimensions {
        Dimensions {
            x: live.x + f64::from(self.dx_to_x) * dx,
            y: live.y + f64::from(self.dy_to_y) * dy,
            w: live.w + f64::from(self.dx_to_w) * dx,
            h: live.h + f64::from(self.dy_to_h) * dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE: Dimensions = Dimensions::new(10.0, 20.0, 100.0, 80.0);

    #[test]
    fn east_only_grows_width() {
        let next = Zone::East.rule().apply(LIVE, 15.0, 99.0);
        assert_eq!(next, Dimensions::new(10.0, 20.0, 115.0, 80.0));
    }

    #[test]
    fn south_only_grows_height() {
        let next = Zone::South.rule().apply(LIVE, 99.0, -30.0);
        assert_eq!(next, Dimensions::new(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn west_keeps_right_edge_fixed() {
        let next = Zone::West.rule().apply(LIVE, -7.0, 3.0);
        assert_eq!(next.right(), LIVE.right());
        assert_eq!(next.y, LIVE.y);
        assert_eq!(next.h, LIVE.h);
    }

    #[test]
    fn north_keeps_bottom_edge_fixed() {
        let next = Zone::North.rule().apply(LIVE, 3.0, 12.0);
        assert_eq!(next.bottom(), LIVE.bottom());
        assert_eq!(next.x, LIVE.x);
        assert_eq!(next.w, LIVE.w);
    }

    #[test]
    fn corners_keep_opposite_corner_fixed() {
        let nw = Zone::NorthWest.rule().apply(LIVE, -20.0, -20.0);
        assert_eq!(nw.far_corner(), LIVE.far_corner());

        let ne = Zone::NorthEast.rule().apply(LIVE, 5.0, 6.0);
        assert_eq!((ne.x, ne.bottom()), (LIVE.x, LIVE.bottom()));

        let se = Zone::SouthEast.rule().apply(LIVE, 5.0, 6.0);
        assert_eq!((se.x, se.y), (LIVE.x, LIVE.y));

        let sw = Zone::SouthWest.rule().apply(LIVE, 5.0, 6.0);
        assert_eq!((sw.right(), sw.y), (LIVE.right(), LIVE.y));
    }

    #[test]
    fn body_rule_is_noop() {
        assert!(Zone::Body.rule().is_noop());
        assert!(Zone::HANDLES.iter().all(|z| !z.rule().is_noop()));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for zone in Zone::ALL {
            assert_eq!(zone.name().parse::<Zone>(), Ok(zone));
        }
        assert!("middle".parse::<Zone>().is_err());
    }

    #[test]
    fn cursor_hints_pair_diagonals() {
        assert_eq!(Zone::NorthWest.cursor_hint(), Zone::SouthEast.cursor_hint());
        assert_eq!(Zone::NorthEast.cursor_hint(), Zone::SouthWest.cursor_hint());
        assert_eq!(Zone::West.cursor_hint(), "ew-resize");
        assert_eq!(Zone::Body.cursor_hint(), "move");
    }

    #[test]
    fn handles_exclude_body() {
        assert!(!Zone::Body.is_handle());
        assert_eq!(Zone::HANDLES.iter().filter(|z| z.is_corner()).count(), 4);
    }
}

#![forbid(unsafe_code)]

//! Pointer drag sessions.
//!
//! [`DragSession`] follows one pointer from press to release. The press picks
//! the zone under the pointer; every subsequent move is forwarded to
//! [`BoundedRect::on_drag`] as the delta from the previous pointer position.
//!
//! # Invariants
//!
//! 1. At most one zone is being dragged at a time.
//! 2. Deltas are incremental: the sum of all forwarded deltas equals the
//!    pointer's total travel since the press.
//! 3. After `Up` or `Cancel` the session is idle and further moves are
//!    ignored until the next `Down`.
//!
//! # Failure Modes
//!
//! - A press outside the panel starts nothing; the whole gesture is ignored.
//! - `Cancel` (focus loss, escape) stops forwarding but does not roll back
//!   deltas already applied.

use rectpanel_core::{BoundedRect, Zone};

use crate::handles::HandleLayout;

/// Raw pointer input in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Cancel,
}

/// What a pointer event did to the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// A press landed on `zone`.
    Started { zone: Zone },
    /// A delta was applied through `zone`.
    Moved { zone: Zone, dx: f64, dy: f64 },
    /// The pointer was released.
    Ended { zone: Zone },
    /// The gesture was abandoned.
    Canceled { zone: Zone },
    /// Nothing happened.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    zone: Zone,
    last_x: f64,
    last_y: f64,
}

/// Tracks one in-flight drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The zone currently being dragged.
    #[inline]
    pub fn active_zone(&self) -> Option<Zone> {
        self.active.map(|drag| drag.zone)
    }

    /// Whether a drag is in flight.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Drop any in-flight drag without emitting an outcome.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Feed one pointer event.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        rect: &mut BoundedRect,
        layout: &HandleLayout,
    ) -> DragOutcome {
        match event {
            PointerEvent::Down { x, y } => {
                let Some(zone) = layout.hit_test(rect.displayed_bounds(), x, y) else {
                    self.active = None;
                    return DragOutcome::Ignored;
                };
                #[cfg(feature = "tracing")]
                tracing::debug!(zone = %zone, x, y, "drag started");
                self.active = Some(ActiveDrag {
                    zone,
                    last_x: x,
                    last_y: y,
                });
                DragOutcome::Started { zone }
            }
            PointerEvent::Move { x, y } => self.forward(x, y, rect),
            PointerEvent::Up { x, y } => {
                let Some(drag) = self.active else {
                    return DragOutcome::Ignored;
                };
                self.forward(x, y, rect);
                self.active = None;
                #[cfg(feature = "tracing")]
                tracing::debug!(zone = %drag.zone, bounds = ?rect.displayed_bounds(), "drag ended");
                DragOutcome::Ended { zone: drag.zone }
            }
            PointerEvent::Cancel => match self.active.take() {
                Some(drag) => DragOutcome::Canceled { zone: drag.zone },
                None => DragOutcome::Ignored,
            },
        }
    }

    fn forward(&mut self, x: f64, y: f64, rect: &mut BoundedRect) -> DragOutcome {
        let Some(drag) = self.active.as_mut() else {
            return DragOutcome::Ignored;
        };
        let dx = x - drag.last_x;
        let dy = y - drag.last_y;
        drag.last_x = x;
        drag.last_y = y;
        if dx == 0.0 && dy == 0.0 {
            return DragOutcome::Ignored;
        }
        rect.on_drag(drag.zone, dx, dy);
        DragOutcome::Moved {
            zone: drag.zone,
            dx,
            dy,
        }
    }
}

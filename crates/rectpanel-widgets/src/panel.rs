#![forbid(unsafe_code)]

//! Resizable panel: controller, handles, drag session and fields together.
//!
//! # Example
//!
//! ```
//! use rectpanel_core::{Axis, PanelConfig};
//! use rectpanel_widgets::{PointerEvent, ResizablePanel};
//!
//! let mut panel = ResizablePanel::new(PanelConfig::default()).unwrap();
//! panel.pointer(PointerEvent::Down { x: 99.0, y: 50.0 });
//! panel.pointer(PointerEvent::Move { x: 149.0, y: 50.0 });
//! panel.pointer(PointerEvent::Up { x: 149.0, y: 50.0 });
//! assert_eq!(panel.readout_lines()[2], "w: 150");
//!
//! panel.type_into(Axis::W, "300").unwrap();
//! assert_eq!(panel.bounds().w, 250.0);
//! ```

use rectpanel_core::{Axis, BoundedRect, ConfigError, Dimensions, EditError, PanelConfig};

use crate::drag::{DragOutcome, DragSession, PointerEvent};
use crate::field::AxisField;
use crate::handles::HandleLayout;

/// A draggable, resizable panel with four numeric fields.
#[derive(Debug, Clone)]
pub struct ResizablePanel {
    rect: BoundedRect,
    layout: HandleLayout,
    session: DragSession,
    fields: [AxisField; 4],
}

impl Default for ResizablePanel {
    fn default() -> Self {
        let rect = BoundedRect::default();
        Self::from_rect(rect)
    }
}

impl ResizablePanel {
    /// Create a panel from construction parameters.
    pub fn new(config: PanelConfig) -> Result<Self, ConfigError> {
        BoundedRect::new(config).map(Self::from_rect)
    }

    fn from_rect(rect: BoundedRect) -> Self {
        Self {
            layout: HandleLayout::new(rect.handle_size()),
            rect,
            session: DragSession::new(),
            fields: Axis::ALL.map(AxisField::new),
        }
    }

    /// The underlying controller.
    #[inline]
    pub fn rect(&self) -> &BoundedRect {
        &self.rect
    }

    /// Handle geometry.
    #[inline]
    pub fn layout(&self) -> &HandleLayout {
        &self.layout
    }

    /// Clamped bounds for rendering.
    #[must_use]
    pub fn bounds(&self) -> Dimensions {
        self.rect.displayed_bounds()
    }

    /// Feed one pointer event.
    ///
    /// Starting a drag blurs any focused field so the fields go back to
    /// mirroring the panel.
    pub fn pointer(&mut self, event: PointerEvent) -> DragOutcome {
        let outcome = self.session.handle(event, &mut self.rect, &self.layout);
        if matches!(outcome, DragOutcome::Started { .. }) {
            self.fields.iter_mut().for_each(AxisField::blur);
        }
        outcome
    }

    /// Whether a drag is in flight.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Cursor name for a pointer hovering at `(px, py)`.
    #[must_use]
    pub fn cursor_at(&self, px: f64, py: f64) -> Option<&'static str> {
        self.session
            .active_zone()
            .map(rectpanel_core::Zone::cursor_hint)
            .or_else(|| self.layout.cursor_at(self.bounds(), px, py))
    }

    /// The field for `axis`.
    #[must_use]
    pub fn field(&self, axis: Axis) -> &AxisField {
        &self.fields[Self::index(axis)]
    }

    /// Mutable access to the field for `axis` together with the controller
    /// it edits.
    pub fn field_mut(&mut self, axis: Axis) -> (&mut AxisField, &mut BoundedRect) {
        (&mut self.fields[Self::index(axis)], &mut self.rect)
    }

    /// Replace the text of one field and commit it.
    ///
    /// The typed value reaches the live cell unclamped; only the field's
    /// readout shows the clamped value.
    pub fn type_into(&mut self, axis: Axis, text: &str) -> Result<(), EditError> {
        let (field, rect) = self.field_mut(axis);
        field.set_text(text, rect)?;
        field.commit(rect)
    }

    /// `"x: 0"`, `"y: 0"`, `"w: 100"`, `"h: 100"` in axis order, reflecting
    /// any focused draft.
    #[must_use]
    pub fn readout_lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| format!("{}: {}", field.label(), field.text(&self.rect)))
            .collect()
    }

    const fn index(axis: Axis) -> usize {
        match axis {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::W => 2,
            Axis::H => 3,
        }
    }
}

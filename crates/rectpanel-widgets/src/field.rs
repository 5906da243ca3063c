#![forbid(unsafe_code)]

//! Editable numeric readout for one axis.
//!
//! An [`AxisField`] shows the panel's displayed value for its axis while it
//! is not being edited. Once focused it holds a draft string; committing the
//! draft writes the leading integer into the live cell through
//! [`BoundedRect::on_edit`].
//!
//! In live-edit mode (the default) every keystroke commits, so the field
//! behaves like a controlled input: after each accepted keystroke the draft
//! is replaced by the clamped readout. A keystroke that leaves the draft
//! without a leading integer is rejected; the draft is kept so the user can
//! keep typing, and the live value stays as it was.
//!
//! Only drafts the user has changed since the last sync are committed, so a
//! commit with nothing typed never writes the clamped readout back into the
//! live cell.

use rectpanel_core::{Axis, BoundedRect, EditError};
use unicode_segmentation::UnicodeSegmentation;

/// One of the four numeric fields next to the panel.
#[derive(Debug, Clone)]
pub struct AxisField {
    axis: Axis,
    /// Text being edited; `None` while the field just mirrors the readout.
    draft: Option<String>,
    /// Cursor position in graphemes.
    cursor: usize,
    /// Set by edits, cleared when the draft is re-synced to the readout.
    dirty: bool,
    live_edit: bool,
    error: Option<EditError>,
}

impl AxisField {
    /// Create an unfocused field for `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            draft: None,
            cursor: 0,
            dirty: false,
            live_edit: true,
            error: None,
        }
    }

    /// Commit on every keystroke (`true`) or only on [`commit`](Self::commit).
    #[must_use]
    pub fn with_live_edit(mut self, live_edit: bool) -> Self {
        self.live_edit = live_edit;
        self
    }

    /// The axis this field edits.
    #[inline]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Field label (`"x"`, `"y"`, `"w"`, `"h"`).
    #[inline]
    pub const fn label(&self) -> &'static str {
        self.axis.label()
    }

    /// Whether the field holds a draft.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.draft.is_some()
    }

    /// Cursor position in graphemes.
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the draft holds edits not yet written into the panel.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The most recent rejected commit, cleared by the next accepted one.
    #[inline]
    pub fn error(&self) -> Option<&EditError> {
        self.error.as_ref()
    }

    /// Text to show: the draft while focused, otherwise the readout.
    #[must_use]
    pub fn text(&self, rect: &BoundedRect) -> String {
        match &self.draft {
            Some(draft) => draft.clone(),
            None => rect.readout(self.axis),
        }
    }

    /// Start editing, seeded with the current readout.
    pub fn focus(&mut self, rect: &BoundedRect) {
        if self.draft.is_none() {
            self.sync(rect);
        }
    }

    /// Stop editing and discard any uncommitted draft.
    pub fn blur(&mut self) {
        self.draft = None;
        self.cursor = 0;
        self.dirty = false;
        self.error = None;
    }

    /// Insert a character at the cursor. Control characters are dropped.
    pub fn insert_char(&mut self, c: char, rect: &mut BoundedRect) -> Result<(), EditError> {
        if c.is_control() {
            return Ok(());
        }
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf), rect)
    }

    /// Insert text at the cursor.
    pub fn insert_str(&mut self, text: &str, rect: &mut BoundedRect) -> Result<(), EditError> {
        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return Ok(());
        }
        self.focus(rect);
        let offset = self.grapheme_byte_offset(self.cursor);
        let before = self.grapheme_count();
        if let Some(draft) = self.draft.as_mut() {
            draft.insert_str(offset, &filtered);
        }
        let added = self.grapheme_count().saturating_sub(before);
        self.cursor += added;
        self.dirty = true;
        self.after_edit(rect)
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self, rect: &mut BoundedRect) -> Result<(), EditError> {
        self.focus(rect);
        if self.cursor == 0 {
            return Ok(());
        }
        let start = self.grapheme_byte_offset(self.cursor - 1);
        let end = self.grapheme_byte_offset(self.cursor);
        if let Some(draft) = self.draft.as_mut() {
            draft.drain(start..end);
        }
        self.cursor -= 1;
        self.dirty = true;
        self.after_edit(rect)
    }

    /// Replace the whole draft.
    pub fn set_text(&mut self, text: &str, rect: &mut BoundedRect) -> Result<(), EditError> {
        self.draft = Some(text.to_owned());
        self.cursor = self.grapheme_count();
        self.dirty = true;
        self.after_edit(rect)
    }

    /// Empty the draft.
    pub fn clear(&mut self, rect: &mut BoundedRect) -> Result<(), EditError> {
        self.set_text("", rect)
    }

    /// Move the cursor one grapheme left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one grapheme right.
    pub fn move_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    /// Write the draft into the panel.
    ///
    /// On success the draft is re-synced to the clamped readout. On failure
    /// the draft is kept and the live value is untouched. A draft with no
    /// edits since the last sync is not written.
    pub fn commit(&mut self, rect: &mut BoundedRect) -> Result<(), EditError> {
        if !self.dirty {
            return Ok(());
        }
        let Some(draft) = self.draft.as_deref() else {
            return Ok(());
        };
        match rect.on_edit(self.axis, draft) {
            Ok(()) => {
                self.sync(rect);
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(axis = %self.axis, draft, "field keeps rejected draft");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn after_edit(&mut self, rect: &mut BoundedRect) -> Result<(), EditError> {
        if self.live_edit {
            self.commit(rect)
        } else {
            Ok(())
        }
    }

    fn sync(&mut self, rect: &BoundedRect) {
        self.draft = Some(rect.readout(self.axis));
        self.cursor = self.grapheme_count();
        self.dirty = false;
        self.error = None;
    }

    fn grapheme_count(&self) -> usize {
        self.draft
            .as_deref()
            .map_or(0, |draft| draft.graphemes(true).count())
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        let draft = self.draft.as_deref().unwrap_or_default();
        draft
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map_or(draft.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(
        field: &mut AxisField,
        text: &str,
        rect: &mut BoundedRect,
    ) -> Vec<Result<(), EditError>> {
        text.chars().map(|c| field.insert_char(c, rect)).collect()
    }

    #[test]
    fn unfocused_field_mirrors_readout() {
        let mut rect = BoundedRect::default();
        let field = AxisField::new(Axis::W);
        assert_eq!(field.text(&rect), "100");
        rect.on_drag(rectpanel_core::Zone::East, 25.0, 0.0);
        assert_eq!(field.text(&rect), "125");
        assert!(!field.is_focused());
    }

    #[test]
    fn live_edit_clamps_as_you_type() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::W);
        assert!(field.clear(&mut rect).is_err());
        let results = type_str(&mut field, "300", &mut rect);
        assert!(results.iter().all(Result::is_ok));
        assert_eq!(rect.live().w, 300.0);
        assert_eq!(field.text(&rect), "250");
        assert_eq!(field.cursor(), 3);
        assert!(!field.is_dirty());

        // Committing the synced readout must not overwrite the live value.
        assert_eq!(field.commit(&mut rect), Ok(()));
        assert_eq!(rect.live().w, 300.0);
        assert_eq!(rect.displayed_bounds().w, 250.0);
    }

    #[test]
    fn focus_then_commit_preserves_drift() {
        let mut rect = BoundedRect::default();
        rect.set_axis(Axis::X, -40.0).expect("finite");
        let mut field = AxisField::new(Axis::X);
        field.focus(&rect);
        assert_eq!(field.text(&rect), "0");
        assert_eq!(field.commit(&mut rect), Ok(()));
        assert_eq!(rect.live().x, -40.0);
        assert_eq!(rect.drift(), (-40.0, 0.0));
    }

    #[test]
    fn rejected_draft_stays_dirty_until_fixed() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::H).with_live_edit(false);
        field.set_text("-", &mut rect).expect("deferred");
        assert!(field.commit(&mut rect).is_err());
        assert!(field.is_dirty());
        field.insert_char('5', &mut rect).expect("deferred");
        assert_eq!(field.commit(&mut rect), Ok(()));
        assert_eq!(rect.live().h, -5.0);
        assert!(!field.is_dirty());
    }

    #[test]
    fn rejected_draft_is_kept_and_live_retained() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::X);
        assert!(field.set_text("abc", &mut rect).is_err());
        assert_eq!(field.text(&rect), "abc");
        assert!(matches!(field.error(), Some(EditError::NotANumber { .. })));
        assert_eq!(rect.live().x, 0.0);
    }

    #[test]
    fn deferred_commit_waits_for_commit() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::H).with_live_edit(false);
        field.focus(&rect);
        assert_eq!(field.backspace(&mut rect), Ok(()));
        assert_eq!(field.backspace(&mut rect), Ok(()));
        assert_eq!(field.text(&rect), "1");
        assert_eq!(rect.live().h, 100.0);
        assert_eq!(field.commit(&mut rect), Ok(()));
        assert_eq!(rect.live().h, 1.0);
    }

    #[test]
    fn blur_discards_draft() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::Y).with_live_edit(false);
        field.set_text("40", &mut rect).expect("deferred edits never fail");
        field.blur();
        assert_eq!(field.text(&rect), "0");
        assert_eq!(rect.live().y, 0.0);
    }

    #[test]
    fn backspace_is_grapheme_aware() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::X).with_live_edit(false);
        field.set_text("12e\u{301}", &mut rect).expect("deferred");
        assert_eq!(field.cursor(), 3);
        field.backspace(&mut rect).expect("deferred");
        assert_eq!(field.text(&rect), "12");
    }

    #[test]
    fn insert_at_cursor() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::X).with_live_edit(false);
        field.set_text("15", &mut rect).expect("deferred");
        field.move_left();
        field.insert_char('0', &mut rect).expect("deferred");
        assert_eq!(field.text(&rect), "105");
        field.move_right();
        field.move_right();
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn control_characters_are_dropped() {
        let mut rect = BoundedRect::default();
        let mut field = AxisField::new(Axis::X);
        assert_eq!(field.insert_char('\n', &mut rect), Ok(()));
        assert!(!field.is_focused());
    }
}

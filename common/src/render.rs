//! Redraw bookkeeping shared by every screen.
//!
//! Screens track their own displayed state. This tracks the conditions
//! that invalidate the whole screen regardless of mode: the first frame,
//! an explicit request (mode change, idle exit, buffer reset) and a footer
//! notice closing.

use crate::notice::Notice;

/// Frame-level dirty tracking.
pub struct RenderState {
    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Full redraw requested since the last frame.
    full_requested: bool,

    /// Notice shown on the previous frame.
    prev_notice: Option<Notice>,

    /// Whether the notice closed this frame.
    notice_just_closed: bool,

    /// Whether the notice appeared or changed this frame.
    notice_changed: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            full_requested: false,
            prev_notice: None,
            notice_just_closed: false,
            notice_changed: false,
        }
    }

    /// Force a full redraw on the next frame.
    #[inline]
    pub fn request_full(&mut self) { self.full_requested = true; }

    /// Record the notice for this frame and detect open/close/switch.
    pub fn update_notice(
        &mut self,
        notice: Option<Notice>,
    ) {
        let changed = notice != self.prev_notice;
        let was_visible = self.prev_notice.is_some();
        self.prev_notice = notice;

        self.notice_just_closed = changed && was_visible && notice.is_none();
        self.notice_changed = changed;
    }

    /// Whether the current screen must be drawn in full this frame.
    #[inline]
    pub const fn needs_full(&self) -> bool { self.first_frame || self.full_requested || self.notice_just_closed }

    /// Whether the footer needs repainting this frame.
    #[inline]
    pub const fn notice_dirty(&self) -> bool { self.notice_changed || self.needs_full() }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub fn end_frame(&mut self) {
        self.first_frame = false;
        self.full_requested = false;
        self.notice_just_closed = false;
        self.notice_changed = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

//! Input snapshots sampled from host events.
//!
//! Event handlers write through the setters; the frame loop reads the
//! current snapshots. Everything here is plain state on one thread, so
//! there is no coordination to speak of.

/// Current viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, guarded against degenerate dimensions.
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

/// Absolute vertical scroll offset of the document, in CSS pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    pub offset: f32,
}

/// Cursor position normalized to roughly [-0.5, 0.5] per axis, origin at
/// the viewport center. Zero before the first pointer event.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
}

/// Owns the latest scroll, cursor and viewport snapshots.
pub struct InputSampler {
    viewport: ViewportSize,
    scroll: ScrollState,
    cursor: CursorState,
}

impl InputSampler {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            scroll: ScrollState::default(),
            cursor: CursorState::default(),
        }
    }

    /// Overwrite the scroll offset with the document's current position.
    /// No smoothing happens at this layer.
    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll.offset = offset;
    }

    /// Normalize client pixel coordinates against the current viewport.
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32) {
        self.cursor.x = client_x / self.viewport.width.max(1.0) - 0.5;
        self.cursor.y = client_y / self.viewport.height.max(1.0) - 0.5;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = ViewportSize::new(width, height);
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }
}

//! Drawing state machine and input state management.

use crate::config::{Action, KeyBinding};
use crate::draw::{Color, FontDescriptor, Snapshot, Surface, SurfaceError};
use crate::history::History;
use crate::input::{modifiers::Modifiers, tool::StrokeKind, tool::Tool};
use std::collections::HashMap;

/// Minimum stroke width in pixels (the width control's lower bound).
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Maximum stroke width in pixels (the width control's upper bound).
pub const MAX_STROKE_WIDTH: f64 = 25.0;

/// Upper bound on the pending text buffer, to keep stamping cheap.
pub(super) const PENDING_TEXT_MAX: usize = 10_000;

/// Current drawing mode state machine.
///
/// Either idle or mid-stroke. The `Drawing` variant carries a [`StrokeKind`]
/// rather than a [`Tool`], so a stroke with the text tool is unrepresentable,
/// and it owns the pre-stroke snapshot that undo will need once the stroke
/// completes.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for input
    Idle,
    /// Actively drawing a stroke (pointer button held down)
    Drawing {
        /// Whether this stroke paints or erases
        kind: StrokeKind,
        /// X coordinate of the most recent stroke point
        last_x: i32,
        /// Y coordinate of the most recent stroke point
        last_y: i32,
        /// Surface contents from immediately before this stroke began;
        /// appended to the history when the stroke completes
        undo_snapshot: Snapshot,
    },
}

/// Main input state containing the whiteboard widget's entire session state.
///
/// Owns the raster surface, the undo history, and the tool/style state
/// (active tool, color, width, pending text). All pointer and keyboard
/// events funnel through this struct; everything runs on the UI thread in
/// strict call-and-return fashion.
pub struct InputState {
    /// The raster canvas strokes land on
    pub surface: Surface,
    /// One pre-stroke snapshot per completed stroke
    pub history: History,
    /// Currently selected tool (pen/eraser/text)
    pub active_tool: Tool,
    /// Current stroke/text color
    pub current_color: Color,
    /// Current stroke width in pixels; also the text stamp font size
    pub current_width: f64,
    /// Text the text tool stamps on each click
    pub pending_text: String,
    /// Font configuration for text stamping (family, weight, style)
    pub font_descriptor: FontDescriptor,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the user requested to quit
    pub should_exit: bool,
    /// Whether the window needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible
    pub show_help: bool,
    /// Whether the status bar is currently visible
    pub show_status_bar: bool,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with the specified defaults.
    ///
    /// Allocates the drawing surface up front; the dimensions are fixed for
    /// the life of the widget.
    ///
    /// # Arguments
    /// * `width` - Surface width in pixels (from the window size)
    /// * `height` - Surface height in pixels (from the window size)
    /// * `color` - Initial stroke color
    /// * `stroke_width` - Initial stroke width in pixels (clamped to 1-25)
    /// * `font_descriptor` - Font configuration for text stamping
    /// * `show_status_bar` - Whether the status bar starts visible
    /// * `action_map` - Keybinding action map
    /// * `max_history_depth` - Undo depth cap (0 = unlimited)
    #[allow(clippy::too_many_arguments)]
    pub fn with_defaults(
        width: i32,
        height: i32,
        color: Color,
        stroke_width: f64,
        font_descriptor: FontDescriptor,
        show_status_bar: bool,
        action_map: HashMap<KeyBinding, Action>,
        max_history_depth: usize,
    ) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: Surface::new(width, height)?,
            history: History::new(max_history_depth),
            active_tool: Tool::default(),
            current_color: color,
            current_width: stroke_width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
            pending_text: String::new(),
            font_descriptor,
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            action_map,
        })
    }

    /// Look up an action for the given key and modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }

    /// Adjusts the stroke width by a delta, clamping to the 1-25 range.
    ///
    /// Also changes the text stamp size, since that always equals the width.
    pub fn adjust_width(&mut self, delta: f64) {
        self.current_width = (self.current_width + delta).clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        self.needs_redraw = true;
        log::debug!("Stroke width adjusted to {:.0}px", self.current_width);
    }

    /// Switches the active tool.
    ///
    /// A stroke already in progress is unaffected: its kind was captured when
    /// the pointer went down, and only color/width are re-read per segment.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.active_tool != tool {
            log::debug!("Tool switched to {tool:?}");
        }
        self.active_tool = tool;
        self.needs_redraw = true;
    }

    /// Undoes the most recent completed stroke.
    ///
    /// Pops the last history snapshot and applies it, returning the surface
    /// to its state immediately before that stroke. Silent no-op when the
    /// history is empty or a stroke is still in progress.
    pub fn undo(&mut self) {
        if !matches!(self.state, DrawingState::Idle) {
            return;
        }
        if let Some(snapshot) = self.history.pop() {
            self.surface.restore(&snapshot);
            self.needs_redraw = true;
            log::debug!("Undo applied, {} strokes remain", self.history.len());
        }
    }
}

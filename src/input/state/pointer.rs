use crate::draw::render;
use crate::input::events::PointerButton;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer button press event.
    ///
    /// # Arguments
    /// * `button` - Which pointer button was pressed
    /// * `x` - Pointer X coordinate
    /// * `y` - Pointer Y coordinate
    ///
    /// # Behavior
    /// - Left press with pen/eraser while Idle: captures the pre-stroke
    ///   snapshot and enters the Drawing state at (x, y)
    /// - Left press with the text tool: stamps the pending text at (x, y)
    ///   (the click action); no history snapshot is recorded
    /// - Anything else: no-op
    pub fn on_pointer_press(&mut self, button: PointerButton, x: i32, y: i32) {
        if button != PointerButton::Left {
            return;
        }
        if !matches!(self.state, DrawingState::Idle) {
            return;
        }

        match self.active_tool.stroke_kind() {
            Some(kind) => {
                // The snapshot taken here is what undo will put back.
                let Some(undo_snapshot) = self.surface.snapshot() else {
                    return;
                };
                self.state = DrawingState::Drawing {
                    kind,
                    last_x: x,
                    last_y: y,
                    undo_snapshot,
                };
                self.needs_redraw = true;
            }
            None => self.stamp_pending_text(x, y),
        }
    }

    /// Processes pointer motion (dragging) events.
    ///
    /// While in the Drawing state, strokes the segment from the previous
    /// point to (x, y) directly onto the surface, so drawing is visibly
    /// incremental. Color and width come from the tool state at this very
    /// event: changing them mid-stroke only affects later segments.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        if let DrawingState::Drawing {
            kind,
            last_x,
            last_y,
            ..
        } = &mut self.state
        {
            let (kind, x1, y1) = (*kind, *last_x, *last_y);
            *last_x = x;
            *last_y = y;

            render::stroke_segment(
                &mut self.surface,
                kind,
                x1,
                y1,
                x,
                y,
                self.current_color,
                self.current_width,
            );
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer button release event.
    ///
    /// A left release while drawing completes the stroke: the pre-stroke
    /// snapshot moves into the history and the state returns to Idle.
    /// No-op when not drawing.
    pub fn on_pointer_release(&mut self, button: PointerButton, _x: i32, _y: i32) {
        if button != PointerButton::Left {
            return;
        }
        self.finish_stroke();
    }

    /// Processes the pointer leaving the drawing area.
    ///
    /// An in-progress stroke simply ends, exactly as on release; there is no
    /// cancellation. No-op when not drawing.
    pub fn on_pointer_leave(&mut self) {
        self.finish_stroke();
    }

    fn finish_stroke(&mut self) {
        if let DrawingState::Drawing { undo_snapshot, .. } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        {
            self.history.push(undo_snapshot);
            self.needs_redraw = true;
            log::debug!("Stroke completed, history depth {}", self.history.len());
        }
    }

    /// Stamps the pending text with its baseline at (x, y).
    ///
    /// Uses the current color and a font size equal to the current stroke
    /// width. Silent no-op when the pending text is empty. Deliberately does
    /// not touch the history: a text stamp cannot be undone.
    fn stamp_pending_text(&mut self, x: i32, y: i32) {
        if self.pending_text.is_empty() {
            return;
        }

        render::stamp_text(
            &mut self.surface,
            x,
            y,
            &self.pending_text,
            self.current_color,
            self.current_width,
            &self.font_descriptor,
        );
        self.needs_redraw = true;
    }
}

//! Drawing tool selection.

/// The active drawing tool.
///
/// Selected explicitly via keybindings (pen/eraser/text); the active tool
/// decides what pointer presses do: start a stroke, or stamp the pending
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand drawing - paints the current color along the pointer path (default)
    #[default]
    Pen,
    /// Freehand erasing - clears pixels along the pointer path to transparent
    Eraser,
    /// Text stamping - each click places the pending text at the pointer
    Text,
}

/// What an in-progress stroke does to the pixels it sweeps.
///
/// Only pen and eraser strokes exist; there is deliberately no text variant,
/// so "drawing with the text tool" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    /// Paint the stroke color over existing pixels
    Pen,
    /// Clear swept pixels to transparent
    Eraser,
}

impl Tool {
    /// The stroke kind this tool produces, or `None` for the text tool.
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            Tool::Pen => Some(StrokeKind::Pen),
            Tool::Eraser => Some(StrokeKind::Eraser),
            Tool::Text => None,
        }
    }

    /// Display name for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Text => "Text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pen_and_eraser_stroke() {
        assert_eq!(Tool::Pen.stroke_kind(), Some(StrokeKind::Pen));
        assert_eq!(Tool::Eraser.stroke_kind(), Some(StrokeKind::Eraser));
        assert_eq!(Tool::Text.stroke_kind(), None);
    }
}

//! Input handling and tool state machine.
//!
//! This module translates frontend keyboard and pointer events into drawing
//! actions. It maintains the current tool state, drawing parameters (color,
//! width, pending text), and the drawing-mode state machine (idle vs. mid
//! stroke).

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, PointerButton};
pub use state::{DrawingState, InputState};
pub use tool::{StrokeKind, Tool};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use modifiers::Modifiers;

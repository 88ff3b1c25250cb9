//! Library exports for the inkboard whiteboard widget.
//!
//! Exposes the drawing surface, input state machine, undo history, and
//! configuration types so that the windowed binary and the integration tests
//! share one implementation. The widget itself is windowing-agnostic: feed it
//! pointer/keyboard events and flatten its surface wherever you like.

pub mod config;
pub mod draw;
pub mod history;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;

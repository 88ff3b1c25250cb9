use crate::config::Action;
use crate::input::{events::Key, tool::Tool};
use crate::util;

use super::core::PENDING_TEXT_MAX;
use super::{DrawingState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Handles all keyboard input including:
    /// - Tool selection (pen/eraser/text - configurable)
    /// - Drawing color selection (configurable keybindings)
    /// - Undo and width adjustment (configurable)
    /// - Pending text editing (while the text tool is active)
    /// - Exit commands (configurable)
    /// - UI toggles (help, status bar)
    /// - Modifier key tracking
    pub fn on_key_press(&mut self, key: Key) {
        // Handle modifier keys first
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        // While the text tool is active, plain characters edit the pending
        // text instead of triggering actions. Actions still fire for special
        // keys and for character keys with Ctrl/Alt held, so undo and exit
        // keep working while typing.
        if self.active_tool == Tool::Text {
            let should_check_actions = match key {
                Key::Escape | Key::F10 | Key::F12 | Key::Return => true,
                Key::Char(_) => self.modifiers.ctrl || self.modifiers.alt,
                _ => self.modifiers.ctrl || self.modifiers.alt,
            };

            if should_check_actions {
                if let Some(key_str) = key_to_binding_str(key) {
                    if let Some(action) = self.find_action(&key_str) {
                        self.handle_action(action);
                        return;
                    }
                }
            }

            // No action triggered; edit the pending text buffer.
            match key {
                Key::Char(c) => {
                    if self.pending_text.len() < PENDING_TEXT_MAX {
                        self.pending_text.push(c);
                        self.needs_redraw = true;
                    }
                }
                Key::Backspace => {
                    self.pending_text.pop();
                    self.needs_redraw = true;
                }
                Key::Space => {
                    if self.pending_text.len() < PENDING_TEXT_MAX {
                        self.pending_text.push(' ');
                        self.needs_redraw = true;
                    }
                }
                _ => {}
            }
            return;
        }

        // Look up action based on keybinding
        if let Some(key_str) = key_to_binding_str(key) {
            if let Some(action) = self.find_action(&key_str) {
                self.handle_action(action);
            }
        }
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => {
                if self.active_tool == Tool::Text {
                    // Cancel text entry back to the pen; the pending text is
                    // kept so re-entering the tool stamps the same string.
                    self.select_tool(Tool::Pen);
                } else if matches!(self.state, DrawingState::Idle) {
                    self.should_exit = true;
                }
            }
            Action::SelectPen => self.select_tool(Tool::Pen),
            Action::SelectEraser => self.select_tool(Tool::Eraser),
            Action::SelectText => self.select_tool(Tool::Text),
            Action::Undo => self.undo(),
            Action::IncreaseWidth => self.adjust_width(1.0),
            Action::DecreaseWidth => self.adjust_width(-1.0),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.needs_redraw = true;
            }
            Action::SetColorRed => self.set_color_key('r'),
            Action::SetColorGreen => self.set_color_key('g'),
            Action::SetColorBlue => self.set_color_key('b'),
            Action::SetColorYellow => self.set_color_key('y'),
            Action::SetColorOrange => self.set_color_key('o'),
            Action::SetColorMagenta => self.set_color_key('m'),
            Action::SetColorWhite => self.set_color_key('w'),
            Action::SetColorBlack => self.set_color_key('k'),
        }
    }

    fn set_color_key(&mut self, key: char) {
        if let Some(color) = util::key_to_color(key) {
            self.current_color = color;
            self.needs_redraw = true;
        }
    }

    /// Processes a key release event.
    ///
    /// Currently only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}

/// Converts a key to the string form used in keybinding configs.
fn key_to_binding_str(key: Key) -> Option<String> {
    match key {
        Key::Char(c) => Some(c.to_string()),
        Key::Escape => Some("Escape".to_string()),
        Key::Return => Some("Return".to_string()),
        Key::Backspace => Some("Backspace".to_string()),
        Key::Space => Some("Space".to_string()),
        Key::F10 => Some("F10".to_string()),
        Key::F12 => Some("F12".to_string()),
        _ => None,
    }
}

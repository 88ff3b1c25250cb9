//! minifb window frontend.
//!
//! Owns the event loop: translates native mouse/keyboard events into the
//! widget's generic pointer/key events, and flattens the drawing surface
//! (plus UI chrome) into the window's framebuffer whenever a redraw is due.

use anyhow::{Context as _, Result};
use minifb::{Key as NativeKey, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use inkboard::config::Config;
use inkboard::draw::{self, Color, FontDescriptor, Surface};
use inkboard::input::{InputState, Key, PointerButton, Tool};
use inkboard::ui;

/// Opens the whiteboard window and runs the event loop until exit.
///
/// The window size comes from the config and doubles as the surface size;
/// both are fixed for the whole session.
pub fn run(config: &Config, initial_color: Color, initial_width: f64, initial_tool: Tool) -> Result<()> {
    let width = config.window.width;
    let height = config.window.height;

    let action_map = config
        .keybindings
        .build_action_map()
        .map_err(|err| anyhow::anyhow!(err))
        .context("Invalid [keybindings] configuration")?;

    let font_descriptor = FontDescriptor::new(
        config.drawing.font_family.clone(),
        config.drawing.font_weight.clone(),
        config.drawing.font_style.clone(),
    );

    let mut input = InputState::with_defaults(
        width as i32,
        height as i32,
        initial_color,
        initial_width,
        font_descriptor,
        config.ui.show_status_bar,
        action_map,
        config.history.max_depth,
    )
    .context("Failed to allocate drawing surface")?;
    input.active_tool = initial_tool;

    // Transient layer for the status bar / help overlay, redrawn per frame so
    // chrome never leaks into the persistent drawing surface.
    let mut chrome =
        Surface::new(width as i32, height as i32).context("Failed to allocate UI surface")?;

    let mut window = Window::new(
        &config.window.title,
        width as usize,
        height as usize,
        WindowOptions::default(),
    )
    .context("Failed to create window")?;
    window.set_target_fps(60);

    let background = draw::pack_rgb(config.window.background.to_color());
    let mut framebuffer = vec![background; width as usize * height as usize];

    let mut pointer = PointerTracker::default();

    while window.is_open() && !input.should_exit {
        pump_modifiers(&window, &mut input);
        pump_keys(&mut window, &mut input);
        pointer.pump(&window, &mut input);

        if input.needs_redraw {
            input.needs_redraw = false;
            compose(config, &mut input, &mut chrome, background, &mut framebuffer);
            window
                .update_with_buffer(&framebuffer, width as usize, height as usize)
                .context("Failed to present framebuffer")?;
        } else {
            window.update();
        }
    }

    Ok(())
}

/// Flattens background, drawing surface, and UI chrome into the framebuffer.
fn compose(
    config: &Config,
    input: &mut InputState,
    chrome: &mut Surface,
    background: u32,
    framebuffer: &mut [u32],
) {
    framebuffer.fill(background);
    draw::blend_onto(&mut input.surface, framebuffer);

    if input.show_status_bar || input.show_help {
        let (width, height) = (config.window.width, config.window.height);
        chrome.clear();
        chrome.with_context(|ctx| {
            if input.show_status_bar {
                ui::render_status_bar(
                    ctx,
                    input,
                    config.ui.status_bar_position,
                    &config.ui.status_bar_style,
                    width,
                    height,
                );
            }
            if input.show_help {
                ui::render_help_overlay(ctx, &config.ui.help_overlay_style, width, height);
            }
        });
        draw::blend_onto(chrome, framebuffer);
    }
}

/// Edge-detects modifier keys into generic press/release events.
fn pump_modifiers(window: &Window, input: &mut InputState) {
    let pairs = [
        (
            Key::Shift,
            window.is_key_down(NativeKey::LeftShift) || window.is_key_down(NativeKey::RightShift),
            input.modifiers.shift,
        ),
        (
            Key::Ctrl,
            window.is_key_down(NativeKey::LeftCtrl) || window.is_key_down(NativeKey::RightCtrl),
            input.modifiers.ctrl,
        ),
        (
            Key::Alt,
            window.is_key_down(NativeKey::LeftAlt) || window.is_key_down(NativeKey::RightAlt),
            input.modifiers.alt,
        ),
    ];

    for (key, down_now, down_before) in pairs {
        if down_now && !down_before {
            input.on_key_press(key);
        } else if !down_now && down_before {
            input.on_key_release(key);
        }
    }
}

/// Forwards freshly pressed keys, with repeat so held keys keep typing.
fn pump_keys(window: &mut Window, input: &mut InputState) {
    let shift = input.modifiers.shift;
    for key in window.get_keys_pressed(KeyRepeat::Yes) {
        if let Some(mapped) = map_key(key, shift) {
            input.on_key_press(mapped);
        }
    }
}

/// Tracks pointer position/button edges between frames.
#[derive(Default)]
struct PointerTracker {
    inside: bool,
    left_down: bool,
    last_pos: Option<(i32, i32)>,
}

impl PointerTracker {
    fn pump(&mut self, window: &Window, input: &mut InputState) {
        let down = window.get_mouse_down(MouseButton::Left);

        match window.get_mouse_pos(MouseMode::Discard) {
            Some((fx, fy)) => {
                let (x, y) = (fx as i32, fy as i32);
                self.inside = true;

                if down && !self.left_down {
                    input.on_pointer_press(PointerButton::Left, x, y);
                } else if down && self.last_pos != Some((x, y)) {
                    input.on_pointer_motion(x, y);
                } else if !down && self.left_down {
                    input.on_pointer_release(PointerButton::Left, x, y);
                }

                self.left_down = down;
                self.last_pos = Some((x, y));
            }
            None => {
                // Pointer left the window; an in-progress stroke just ends.
                if self.inside {
                    input.on_pointer_leave();
                    self.inside = false;
                    self.left_down = false;
                    self.last_pos = None;
                }
            }
        }
    }
}

/// Maps a native key code to the widget's generic key representation.
fn map_key(key: NativeKey, shift: bool) -> Option<Key> {
    use NativeKey as K;

    let mapped = match key {
        K::Escape => Key::Escape,
        K::Enter => Key::Return,
        K::Backspace => Key::Backspace,
        K::Space => Key::Space,
        K::F10 => Key::F10,
        K::F12 => Key::F12,
        K::Minus => Key::Char(if shift { '_' } else { '-' }),
        K::Equal => Key::Char(if shift { '+' } else { '=' }),
        K::Comma => Key::Char(if shift { '<' } else { ',' }),
        K::Period => Key::Char(if shift { '>' } else { '.' }),
        K::Slash => Key::Char(if shift { '?' } else { '/' }),
        K::Semicolon => Key::Char(if shift { ':' } else { ';' }),
        K::Apostrophe => Key::Char(if shift { '"' } else { '\'' }),
        _ => {
            if let Some(c) = letter_char(key) {
                Key::Char(if shift { c.to_ascii_uppercase() } else { c })
            } else if let Some(c) = digit_char(key, shift) {
                Key::Char(c)
            } else {
                return None;
            }
        }
    };

    Some(mapped)
}

fn letter_char(key: NativeKey) -> Option<char> {
    use NativeKey as K;
    let c = match key {
        K::A => 'a',
        K::B => 'b',
        K::C => 'c',
        K::D => 'd',
        K::E => 'e',
        K::F => 'f',
        K::G => 'g',
        K::H => 'h',
        K::I => 'i',
        K::J => 'j',
        K::K => 'k',
        K::L => 'l',
        K::M => 'm',
        K::N => 'n',
        K::O => 'o',
        K::P => 'p',
        K::Q => 'q',
        K::R => 'r',
        K::S => 's',
        K::T => 't',
        K::U => 'u',
        K::V => 'v',
        K::W => 'w',
        K::X => 'x',
        K::Y => 'y',
        K::Z => 'z',
        _ => return None,
    };
    Some(c)
}

fn digit_char(key: NativeKey, shift: bool) -> Option<char> {
    use NativeKey as K;
    let (plain, shifted) = match key {
        K::Key0 => ('0', ')'),
        K::Key1 => ('1', '!'),
        K::Key2 => ('2', '@'),
        K::Key3 => ('3', '#'),
        K::Key4 => ('4', '$'),
        K::Key5 => ('5', '%'),
        K::Key6 => ('6', '^'),
        K::Key7 => ('7', '&'),
        K::Key8 => ('8', '*'),
        K::Key9 => ('9', '('),
        _ => return None,
    };
    Some(if shift { shifted } else { plain })
}

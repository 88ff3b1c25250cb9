use super::*;
use crate::config::KeybindingsConfig;
use crate::draw::{Color, FontDescriptor, color::BLACK, color::RED};
use crate::input::{Key, PointerButton, Tool};
use crate::util;

fn create_test_input_state(width: i32, height: i32) -> InputState {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();

    InputState::with_defaults(
        width,
        height,
        BLACK,
        2.0, // stroke width
        FontDescriptor::default(),
        true,       // show_status_bar
        action_map, // action_map
        0,          // unlimited history
    )
    .unwrap()
}

fn drag(state: &mut InputState, from: (i32, i32), to: (i32, i32)) {
    state.on_pointer_press(PointerButton::Left, from.0, from.1);
    state.on_pointer_motion(to.0, to.1);
    state.on_pointer_release(PointerButton::Left, to.0, to.1);
}

#[test]
fn pen_stroke_pushes_one_history_entry() {
    let mut state = create_test_input_state(100, 100);
    drag(&mut state, (10, 10), (10, 50));

    assert_eq!(state.history.len(), 1);
    assert!(matches!(state.state, DrawingState::Idle));
    assert!(!state.surface.is_blank());
}

#[test]
fn stroke_then_undo_restores_blank_surface() {
    let mut state = create_test_input_state(100, 100);
    state.current_width = 5.0;

    drag(&mut state, (10, 10), (10, 50));
    assert_eq!(state.history.len(), 1);
    // Center of a 5px-wide vertical black line: fully opaque black.
    assert_eq!(state.surface.pixel(10, 30), Some(0xFF00_0000));

    state.undo();
    assert!(state.surface.is_blank());
    assert_eq!(state.history.len(), 0);

    // One more undo than strokes is a no-op.
    state.undo();
    assert!(state.surface.is_blank());
    assert_eq!(state.history.len(), 0);
}

#[test]
fn n_strokes_then_n_undos_walk_history_back() {
    let mut state = create_test_input_state(120, 120);
    state.current_width = 4.0;

    // Three horizontal strokes at different heights.
    for (i, y) in [20, 50, 80].into_iter().enumerate() {
        drag(&mut state, (10, y), (110, y));
        assert_eq!(state.history.len(), i + 1);
    }

    // Undo the third stroke: the first two remain.
    state.undo();
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.surface.pixel(60, 80), Some(0));
    assert_eq!(state.surface.pixel(60, 50), Some(0xFF00_0000));

    state.undo();
    assert_eq!(state.surface.pixel(60, 50), Some(0));
    assert_eq!(state.surface.pixel(60, 20), Some(0xFF00_0000));

    state.undo();
    assert!(state.surface.is_blank());
    assert_eq!(state.history.len(), 0);
}

#[test]
fn eraser_clears_swept_pixels_and_is_undoable() {
    let mut state = create_test_input_state(100, 100);
    state.current_width = 6.0;

    drag(&mut state, (10, 40), (90, 40));
    assert_eq!(state.surface.pixel(50, 40), Some(0xFF00_0000));

    state.select_tool(Tool::Eraser);
    drag(&mut state, (10, 40), (90, 40));
    assert_eq!(state.surface.pixel(50, 40), Some(0));
    assert_eq!(state.history.len(), 2);

    // Undoing the eraser stroke brings the paint back.
    state.undo();
    assert_eq!(state.surface.pixel(50, 40), Some(0xFF00_0000));
}

#[test]
fn mid_stroke_width_change_affects_only_later_segments() {
    let mut state = create_test_input_state(100, 100);
    state.current_width = 2.0;

    state.on_pointer_press(PointerButton::Left, 50, 5);
    state.on_pointer_motion(50, 40);
    state.adjust_width(18.0); // now 20px wide
    state.on_pointer_motion(50, 80);
    state.on_pointer_release(PointerButton::Left, 50, 80);

    // 8px off-axis: inside the 20px-wide lower segment, outside the 2px upper one.
    assert_eq!(state.surface.pixel(58, 20), Some(0));
    assert_eq!(state.surface.pixel(58, 60), Some(0xFF00_0000));
    assert_eq!(state.history.len(), 1);
}

#[test]
fn mid_stroke_color_change_affects_only_later_segments() {
    let mut state = create_test_input_state(100, 100);
    state.current_width = 4.0;

    state.on_pointer_press(PointerButton::Left, 10, 20);
    state.on_pointer_motion(40, 20);
    state.current_color = RED;
    state.on_pointer_motion(40, 60);
    state.on_pointer_release(PointerButton::Left, 40, 60);

    assert_eq!(state.surface.pixel(25, 20), Some(0xFF00_0000));
    assert_eq!(state.surface.pixel(40, 45), Some(0xFFFF_0000));
}

#[test]
fn pointer_leave_completes_the_stroke() {
    let mut state = create_test_input_state(100, 100);

    state.on_pointer_press(PointerButton::Left, 10, 10);
    state.on_pointer_motion(30, 30);
    state.on_pointer_leave();

    assert!(matches!(state.state, DrawingState::Idle));
    assert_eq!(state.history.len(), 1);

    // Leaving again without a stroke in progress is a no-op.
    state.on_pointer_leave();
    assert_eq!(state.history.len(), 1);
}

#[test]
fn non_left_buttons_are_ignored() {
    let mut state = create_test_input_state(100, 100);

    state.on_pointer_press(PointerButton::Right, 10, 10);
    assert!(matches!(state.state, DrawingState::Idle));

    state.on_pointer_press(PointerButton::Left, 10, 10);
    state.on_pointer_release(PointerButton::Middle, 20, 20);
    assert!(matches!(state.state, DrawingState::Drawing { .. }));

    state.on_pointer_release(PointerButton::Left, 20, 20);
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn text_click_with_empty_pending_text_is_a_no_op() {
    let mut state = create_test_input_state(100, 100);
    state.select_tool(Tool::Text);

    state.on_pointer_press(PointerButton::Left, 50, 50);
    assert!(state.surface.is_blank());
    assert_eq!(state.history.len(), 0);
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn text_click_stamps_without_history_entry() {
    let mut state = create_test_input_state(200, 100);
    state.current_width = 20.0;
    state.select_tool(Tool::Text);
    state.pending_text = "hi".to_string();

    state.on_pointer_press(PointerButton::Left, 20, 60);
    assert!(!state.surface.is_blank());
    assert_eq!(state.history.len(), 0);

    // A second click stamps the same pending text again.
    state.on_pointer_press(PointerButton::Left, 120, 60);
    assert_eq!(state.history.len(), 0);
}

#[test]
fn undo_cannot_remove_a_text_stamp() {
    let mut state = create_test_input_state(200, 120);
    state.current_width = 18.0;

    // Paint a stroke, stamp text, paint another stroke.
    drag(&mut state, (10, 100), (60, 100));
    state.select_tool(Tool::Text);
    state.pending_text = "ok".to_string();
    state.on_pointer_press(PointerButton::Left, 20, 40);
    let stamped = state.surface.snapshot().unwrap();

    state.select_tool(Tool::Pen);
    drag(&mut state, (120, 100), (180, 100));
    assert_eq!(state.history.len(), 2);

    // Undoing the second stroke returns exactly to the stamped state:
    // whatever the stamp drew is still there.
    state.undo();
    assert_eq!(state.surface.snapshot().unwrap(), stamped);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn typing_edits_pending_text_without_firing_color_actions() {
    let mut state = create_test_input_state(100, 100);
    state.select_tool(Tool::Text);
    let original_color = state.current_color;

    for c in ['r', 'g', 'b', 't'] {
        state.on_key_press(Key::Char(c));
    }
    state.on_key_press(Key::Space);
    state.on_key_press(Key::Char('!'));
    state.on_key_press(Key::Backspace);

    assert_eq!(state.pending_text, "rgbt ");
    assert_eq!(state.current_color, original_color);
    assert_eq!(state.active_tool, Tool::Text);
}

#[test]
fn ctrl_actions_still_fire_while_typing() {
    let mut state = create_test_input_state(100, 100);

    drag(&mut state, (10, 10), (50, 50));
    assert_eq!(state.history.len(), 1);

    state.select_tool(Tool::Text);
    state.pending_text = "note".to_string();

    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char('Z'));
    assert_eq!(state.history.len(), 0);
    assert_eq!(state.active_tool, Tool::Text);
    state.on_key_release(Key::Ctrl);
}

#[test]
fn escape_cancels_text_tool_back_to_pen() {
    let mut state = create_test_input_state(100, 100);
    state.select_tool(Tool::Text);
    state.pending_text = "keep me".to_string();

    state.on_key_press(Key::Escape);
    assert_eq!(state.active_tool, Tool::Pen);
    assert!(!state.should_exit);
    // The pending text survives tool switches.
    assert_eq!(state.pending_text, "keep me");

    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn escape_mid_stroke_does_not_exit() {
    let mut state = create_test_input_state(100, 100);

    state.on_pointer_press(PointerButton::Left, 10, 10);
    state.on_key_press(Key::Escape);
    assert!(!state.should_exit);
    assert!(matches!(state.state, DrawingState::Drawing { .. }));
    state.on_pointer_release(PointerButton::Left, 10, 10);
}

#[test]
fn plain_letters_trigger_actions_outside_text_tool() {
    let mut state = create_test_input_state(100, 100);
    let original_color = state.current_color;

    state.on_key_press(Key::Char('g'));
    assert_ne!(state.current_color, original_color);
    assert_eq!(state.current_color, util::key_to_color('g').unwrap());

    state.on_key_press(Key::Char('e'));
    assert_eq!(state.active_tool, Tool::Eraser);
    state.on_key_press(Key::Char('p'));
    assert_eq!(state.active_tool, Tool::Pen);
    state.on_key_press(Key::Char('t'));
    assert_eq!(state.active_tool, Tool::Text);
}

#[test]
fn width_adjustments_clamp_to_slider_range() {
    let mut state = create_test_input_state(100, 100);
    assert_eq!(state.current_width, 2.0);

    state.on_key_press(Key::Char('+'));
    assert_eq!(state.current_width, 3.0);
    state.on_key_press(Key::Char('-'));
    assert_eq!(state.current_width, 2.0);

    for _ in 0..40 {
        state.adjust_width(1.0);
    }
    assert_eq!(state.current_width, MAX_STROKE_WIDTH);

    for _ in 0..40 {
        state.adjust_width(-1.0);
    }
    assert_eq!(state.current_width, MIN_STROKE_WIDTH);
}

#[test]
fn constructor_clamps_configured_width() {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();
    let state = InputState::with_defaults(
        50,
        50,
        Color::new(0.2, 0.2, 0.2, 1.0),
        400.0,
        FontDescriptor::default(),
        false,
        action_map,
        0,
    )
    .unwrap();
    assert_eq!(state.current_width, MAX_STROKE_WIDTH);
}

#[test]
fn pending_text_respects_length_cap() {
    let mut state = create_test_input_state(100, 100);
    state.select_tool(Tool::Text);
    state.pending_text = "a".repeat(10_000);

    state.on_key_press(Key::Char('b'));
    assert_eq!(state.pending_text.len(), 10_000);
    assert!(state.pending_text.ends_with('a'));

    state.pending_text.truncate(9_999);
    state.on_key_press(Key::Char('c'));
    assert_eq!(state.pending_text.len(), 10_000);
    assert!(state.pending_text.ends_with('c'));
}

#[test]
fn capped_history_limits_undo_depth() {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();
    let mut state = InputState::with_defaults(
        80,
        80,
        BLACK,
        3.0,
        FontDescriptor::default(),
        false,
        action_map,
        2,
    )
    .unwrap();

    for y in [10, 30, 50] {
        drag(&mut state, (10, y), (70, y));
    }
    assert_eq!(state.history.len(), 2);

    state.undo();
    state.undo();
    state.undo();
    // The first stroke fell off the capped history and stays on the surface.
    assert_eq!(state.surface.pixel(40, 10), Some(0xFF00_0000));
    assert_eq!(state.surface.pixel(40, 30), Some(0));
}

//! End-to-end widget behavior: strokes, erasing, stamping, and undo.

use inkboard::config::KeybindingsConfig;
use inkboard::draw::{Color, FontDescriptor, color::BLACK, color::RED};
use inkboard::input::{InputState, PointerButton, Tool};

fn make_board(width: i32, height: i32, color: Color, stroke_width: f64) -> InputState {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    InputState::with_defaults(
        width,
        height,
        color,
        stroke_width,
        FontDescriptor::default(),
        false,
        action_map,
        0,
    )
    .unwrap()
}

fn drag(board: &mut InputState, path: &[(i32, i32)]) {
    let (first, rest) = path.split_first().expect("path needs a start point");
    board.on_pointer_press(PointerButton::Left, first.0, first.1);
    for &(x, y) in rest {
        board.on_pointer_motion(x, y);
    }
    let last = path.last().unwrap();
    board.on_pointer_release(PointerButton::Left, last.0, last.1);
}

/// Counts pixels whose premultiplied value matches exactly.
fn count_pixels(board: &mut InputState, value: u32) -> usize {
    let (w, h) = (board.surface.width(), board.surface.height());
    let mut count = 0;
    for y in 0..h {
        for x in 0..w {
            if board.surface.pixel(x, y) == Some(value) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn scenario_single_stroke_then_undo_returns_to_blank() {
    // Blank 100x100 surface, vertical pen stroke at x=10, width 5, black.
    let mut board = make_board(100, 100, BLACK, 5.0);
    assert!(board.surface.is_blank());

    drag(&mut board, &[(10, 10), (10, 30), (10, 50)]);

    assert_eq!(board.history.len(), 1);
    // The line's core is fully opaque black down its length.
    for y in [12, 25, 40, 48] {
        assert_eq!(board.surface.pixel(10, y), Some(0xFF00_0000), "at y={y}");
    }
    // Pixels away from x=10 are untouched.
    assert_eq!(board.surface.pixel(40, 30), Some(0));

    board.undo();
    assert!(board.surface.is_blank());
    assert_eq!(board.history.len(), 0);

    // The (N+1)-th undo is a no-op.
    board.undo();
    assert!(board.surface.is_blank());
    assert_eq!(board.history.len(), 0);
}

#[test]
fn history_grows_per_stroke_and_undo_walks_back() {
    let mut board = make_board(150, 150, BLACK, 3.0);
    let rows = [20, 45, 70, 95, 120];

    for (i, y) in rows.into_iter().enumerate() {
        drag(&mut board, &[(10, y), (140, y)]);
        assert_eq!(board.history.len(), i + 1);
    }

    // Undo strokes newest-first; after each undo the younger rows are gone
    // and the older rows remain.
    for (remaining, undone_y) in rows.into_iter().enumerate().rev() {
        board.undo();
        assert_eq!(board.history.len(), remaining);
        assert_eq!(board.surface.pixel(75, undone_y), Some(0));
        for &y in &rows[..remaining] {
            assert_eq!(board.surface.pixel(75, y), Some(0xFF00_0000));
        }
    }

    assert!(board.surface.is_blank());
}

#[test]
fn eraser_sweeps_a_transparent_band_through_paint() {
    let mut board = make_board(100, 100, BLACK, 25.0);

    // Cover a fat horizontal band in black.
    drag(&mut board, &[(0, 50), (99, 50)]);
    assert_eq!(board.surface.pixel(50, 50), Some(0xFF00_0000));

    // Erase a narrower band straight through it.
    board.select_tool(Tool::Eraser);
    board.current_width = 9.0;
    drag(&mut board, &[(0, 50), (99, 50)]);

    // Swept pixels are transparent again...
    for x in [10, 30, 50, 70, 90] {
        assert_eq!(board.surface.pixel(x, 50), Some(0), "at x={x}");
        assert_eq!(board.surface.pixel(x, 48), Some(0));
    }
    // ...while paint outside the 9px band survives.
    for x in [10, 50, 90] {
        assert_eq!(board.surface.pixel(x, 58), Some(0xFF00_0000), "at x={x}");
        assert_eq!(board.surface.pixel(x, 42), Some(0xFF00_0000));
    }

    // Both the paint and the erase count as strokes.
    assert_eq!(board.history.len(), 2);
}

#[test]
fn text_stamp_uses_current_color_and_skips_history() {
    let mut board = make_board(300, 120, RED, 24.0);
    board.select_tool(Tool::Text);
    board.pending_text = "Whiteboard".to_string();

    board.on_pointer_press(PointerButton::Left, 20, 80);

    assert_eq!(board.history.len(), 0);
    assert!(!board.surface.is_blank(), "stamp should leave glyph pixels");

    // Every fully opaque stamped pixel is the stamp color.
    let opaque_red = count_pixels(&mut board, 0xFFFF_0000);
    let opaque_black = count_pixels(&mut board, 0xFF00_0000);
    assert!(opaque_red > 0, "glyph cores should be solid red");
    assert_eq!(opaque_black, 0);
}

#[test]
fn text_stamp_with_empty_pending_text_changes_nothing() {
    let mut board = make_board(100, 100, BLACK, 12.0);
    board.select_tool(Tool::Text);

    board.on_pointer_press(PointerButton::Left, 50, 50);

    assert!(board.surface.is_blank());
    assert_eq!(board.history.len(), 0);
}

#[test]
fn undo_after_stamp_removes_only_the_following_stroke() {
    let mut board = make_board(200, 200, BLACK, 16.0);

    drag(&mut board, &[(10, 180), (190, 180)]);

    board.select_tool(Tool::Text);
    board.pending_text = "note".to_string();
    board.on_pointer_press(PointerButton::Left, 30, 60);
    let stamped = board.surface.snapshot().unwrap();

    board.select_tool(Tool::Pen);
    drag(&mut board, &[(10, 120), (190, 120)]);
    assert_eq!(board.history.len(), 2);

    // Undo removes the stroke drawn after the stamp, nothing else.
    board.undo();
    assert_eq!(board.surface.snapshot().unwrap(), stamped);
}

#[test]
fn mid_stroke_width_change_only_affects_later_segments() {
    let mut board = make_board(100, 100, BLACK, 2.0);

    board.on_pointer_press(PointerButton::Left, 50, 10);
    board.on_pointer_motion(50, 45);
    board.current_width = 20.0;
    board.on_pointer_motion(50, 90);
    board.on_pointer_release(PointerButton::Left, 50, 90);

    // 7px off-axis: outside the 2px segment, well inside the 20px one.
    assert_eq!(board.surface.pixel(57, 25), Some(0));
    assert_eq!(board.surface.pixel(57, 70), Some(0xFF00_0000));

    // Still one stroke, one history entry, one undo back to blank.
    assert_eq!(board.history.len(), 1);
    board.undo();
    assert!(board.surface.is_blank());
}

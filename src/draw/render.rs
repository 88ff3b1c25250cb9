//! Cairo-based rendering operations for the drawing surface.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::Surface;
use crate::input::tool::StrokeKind;

/// Strokes one segment of an in-progress stroke onto the surface.
///
/// The segment is painted immediately so drawing is visibly incremental;
/// color and width are whatever the tool state holds at this motion event,
/// so mid-stroke changes affect only the segments that follow.
///
/// Pen segments paint the color over existing pixels; eraser segments clear
/// the swept pixels to transparent regardless of the current color.
///
/// # Arguments
/// * `surface` - Surface to draw on
/// * `kind` - Whether this segment paints or erases
/// * `x1`, `y1` - Segment start (the previous pointer position)
/// * `x2`, `y2` - Segment end (the current pointer position)
/// * `color` - Stroke color (ignored while erasing)
/// * `width` - Line width in pixels
pub fn stroke_segment(
    surface: &mut Surface,
    kind: StrokeKind,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
    width: f64,
) {
    surface.with_context(|ctx| {
        match kind {
            StrokeKind::Pen => {
                ctx.set_operator(cairo::Operator::Over);
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            }
            StrokeKind::Eraser => {
                ctx.set_operator(cairo::Operator::Clear);
            }
        }

        ctx.set_line_width(width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        ctx.move_to(x1 as f64, y1 as f64);
        ctx.line_to(x2 as f64, y2 as f64);
        let _ = ctx.stroke();
    });
}

/// Stamps a text string onto the surface with its baseline at (x, y).
///
/// Uses Pango for layout so multi-line strings and non-Latin scripts render
/// correctly. The font size equals the current stroke width, mirroring the
/// width slider doing double duty for text. Stamping always paints over
/// existing pixels, even right after an eraser stroke.
///
/// Silent no-op when `text` is empty.
///
/// # Arguments
/// * `surface` - Surface to draw on
/// * `x` - X coordinate of the text baseline start
/// * `y` - Y coordinate of the text baseline (first line)
/// * `text` - Text content to stamp (may contain '\n')
/// * `color` - Text color
/// * `size` - Font size in points (the current stroke width)
/// * `font_descriptor` - Font configuration (family, weight, style)
pub fn stamp_text(
    surface: &mut Surface,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    size: f64,
    font_descriptor: &FontDescriptor,
) {
    if text.is_empty() {
        return;
    }

    surface.with_context(|ctx| {
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(ctx);

        let font_desc_str = font_descriptor.to_pango_string(size);
        let font_desc = pango::FontDescription::from_string(&font_desc_str);
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions from the top-left corner; shift up by the baseline
        // so (x, y) is the baseline of the first line.
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        ctx.move_to(x as f64, y as f64 - baseline);

        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        pangocairo::functions::show_layout(ctx, &layout);
    });
}

/// Packs an opaque color into the `0x00RRGGBB` format the window buffer uses.
pub fn pack_rgb(color: Color) -> u32 {
    let r = (color.r.clamp(0.0, 1.0) * 255.0).round() as u32;
    let g = (color.g.clamp(0.0, 1.0) * 255.0).round() as u32;
    let b = (color.b.clamp(0.0, 1.0) * 255.0).round() as u32;
    (r << 16) | (g << 8) | b
}

/// Composites a surface over an opaque `0x00RRGGBB` framebuffer in place.
///
/// The framebuffer is assumed to be `width * height` pixels in row-major
/// order; the surface's premultiplied alpha is applied per channel. Used to
/// flatten the board (and UI chrome) over the window background each frame.
pub fn blend_onto(surface: &mut Surface, out: &mut [u32]) {
    let width = surface.width() as usize;
    let height = surface.height() as usize;
    if out.len() < width * height {
        log::warn!(
            "Skipping blend, framebuffer holds {} pixels but surface is {}x{}",
            out.len(),
            width,
            height
        );
        return;
    }

    let stride = surface.stride() as usize;
    let Some(data) = surface.copy_data() else {
        return;
    };

    for row in 0..height {
        let src_row = &data[row * stride..row * stride + width * 4];
        let dst_row = &mut out[row * width..(row + 1) * width];

        for (src, dst) in src_row.chunks_exact(4).zip(dst_row.iter_mut()) {
            let pixel = u32::from_ne_bytes([src[0], src[1], src[2], src[3]]);
            let alpha = pixel >> 24;

            match alpha {
                0 => {}
                255 => *dst = pixel & 0x00FF_FFFF,
                _ => {
                    let inv = 255 - alpha;
                    let blend = |src_ch: u32, dst_ch: u32| src_ch + (dst_ch * inv + 127) / 255;

                    let r = blend((pixel >> 16) & 0xFF, (*dst >> 16) & 0xFF);
                    let g = blend((pixel >> 8) & 0xFF, (*dst >> 8) & 0xFF);
                    let b = blend(pixel & 0xFF, *dst & 0xFF);
                    *dst = (r << 16) | (g << 8) | b;
                }
            }
        }
    }
}

use crate::font::{self, LetterFont};
use ab_glyph::{Font, FontVec, PxScale, point};
use image::{Rgb, RgbImage};

/// Canvas background, visible only outside the rounded corners.
const BACKGROUND: Rgb<u8> = Rgb([0x4a, 0x90, 0xe2]);
/// Rounded-rectangle interior.
const TILE_FILL: Rgb<u8> = Rgb([0x5b, 0xa3, 0xf5]);
/// Rounded-rectangle border.
const TILE_OUTLINE: Rgb<u8> = Rgb([0x3a, 0x7b, 0xc8]);
/// Letter color.
const GLYPH_COLOR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
/// The placeholder letter: "S" for SwipeSort.
const LETTER: char = 'S';

/// Corner radius of the tile: an eighth of the smaller dimension.
pub fn corner_radius(width: u32, height: u32) -> u32 {
    width.min(height) / 8
}

/// Border stroke width: proportional to width, at least one pixel.
pub fn stroke_width(width: u32) -> u32 {
    (width / 64).max(1)
}

/// Renders one placeholder icon at exactly the target dimensions: background
/// fill, rounded tile with an inward-drawn border, centered letter.
pub fn render_icon(width: u32, height: u32, font: &LetterFont) -> RgbImage {
    let radius = corner_radius(width, height);
    let stroke = stroke_width(width);

    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if in_rounded_rect(x, y, width, height, radius, stroke) {
            *pixel = TILE_FILL;
        } else if in_rounded_rect(x, y, width, height, radius, 0) {
            *pixel = TILE_OUTLINE;
        }
    }

    let letter_px = (width.min(height) as f32 * 0.6).floor();
    match font {
        LetterFont::System(f) => draw_letter(&mut img, f, letter_px),
        LetterFont::Builtin => draw_builtin_letter(&mut img, letter_px),
    }
    img
}

/// Whether pixel (x, y) lies inside the rounded rectangle spanning
/// (inset, inset)..=(width-1-inset, height-1-inset), with the corner radius
/// shrunk by the same inset. Inset 0 is the tile boundary; inset equal to the
/// stroke width bounds the interior fill.
fn in_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: u32, inset: u32) -> bool {
    let (x, y) = (x as i64, y as i64);
    let x0 = inset as i64;
    let y0 = inset as i64;
    let x1 = width as i64 - 1 - inset as i64;
    let y1 = height as i64 - 1 - inset as i64;
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    let r = radius.saturating_sub(inset) as i64;
    // Distance to the nearest corner-circle center; zero along straight edges.
    let dx = (x0 + r - x).max(x - (x1 - r)).max(0);
    let dy = (y0 + r - y).max(y - (y1 - r)).max(0);
    dx * dx + dy * dy <= r * r
}

/// Rasterizes the letter at `letter_px` and blits it centered on its ink
/// bounding box, blending into the tile by glyph coverage.
fn draw_letter(img: &mut RgbImage, font: &FontVec, letter_px: f32) {
    let glyph = font
        .glyph_id(LETTER)
        .with_scale_and_position(PxScale::from(letter_px), point(0.0, 0.0));
    let Some(outlined) = font.outline_glyph(glyph) else {
        // A face without an outline for the letter gets the same silent
        // fallback as an unreadable font file.
        draw_builtin_letter(img, letter_px);
        return;
    };
    let bounds = outlined.px_bounds();
    let (width, height) = img.dimensions();
    let left = (width as f32 - bounds.width()) / 2.0;
    let top = (height as f32 - bounds.height()) / 2.0;
    outlined.draw(|gx, gy, coverage| {
        let px = (left + gx as f32).round() as i64;
        let py = (top + gy as f32).round() as i64;
        if (0..width as i64).contains(&px) && (0..height as i64).contains(&py) {
            let pixel = img.get_pixel_mut(px as u32, py as u32);
            *pixel = blend(*pixel, GLYPH_COLOR, coverage.clamp(0.0, 1.0));
        }
    });
}

/// Draws the built-in block letter centered on the canvas, covering the same
/// 60%-of-min box a system font glyph would.
fn draw_builtin_letter(img: &mut RgbImage, letter_px: f32) {
    let glyph_h = letter_px.max(1.0);
    let glyph_w = (letter_px * 0.62).max(1.0);
    let (width, height) = img.dimensions();
    let left = (width as f32 - glyph_w) / 2.0;
    let top = (height as f32 - glyph_h) / 2.0;
    for y in 0..height {
        for x in 0..width {
            let u = (x as f32 + 0.5 - left) / glyph_w;
            let v = (y as f32 + 0.5 - top) / glyph_h;
            if font::builtin_covers(u, v) {
                img.put_pixel(x, y, GLYPH_COLOR);
            }
        }
    }
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, alpha: f32) -> Rgb<u8> {
    let mix = |u: u8, o: u8| (u as f32 + (o as f32 - u as f32) * alpha).round() as u8;
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}

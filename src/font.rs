use ab_glyph::FontVec;
use std::fs;

/// Candidate font files, tried in order: the macOS system fonts first (the
/// app's home platform), then common Linux and Windows locations.
const FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Glyph source for the centered placeholder letter.
pub enum LetterFont {
    /// TrueType font loaded from one of the system paths.
    System(FontVec),
    /// Block-letter glyph drawn from axis-aligned bars, always available.
    Builtin,
}

/// Resolves the first loadable font from the fallback chain. Read and parse
/// failures are absorbed silently; the built-in glyph is the final fallback.
pub fn resolve() -> LetterFont {
    load_first(FONT_PATHS)
}

fn load_first(paths: &[&str]) -> LetterFont {
    for path in paths {
        if let Ok(data) = fs::read(path) {
            // Face index 0 also covers .ttc collections.
            if let Ok(font) = FontVec::try_from_vec_and_index(data, 0) {
                return LetterFont::System(font);
            }
        }
    }
    LetterFont::Builtin
}

/// Whether the built-in block "S" covers the point (u, v) of its glyph box,
/// in normalized coordinates with (0, 0) the top-left corner.
///
/// Three horizontal bars joined by an upper-left and a lower-right stem.
pub fn builtin_covers(u: f32, v: f32) -> bool {
    const BAR: f32 = 0.22;
    if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
        return false;
    }
    if v < BAR || v >= 1.0 - BAR {
        return true;
    }
    let mid_top = 0.5 - BAR / 2.0;
    if v >= mid_top && v < mid_top + BAR {
        return true;
    }
    if v < mid_top { u < BAR } else { u >= 1.0 - BAR }
}

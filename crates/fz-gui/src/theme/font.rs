//! Korean-capable TTF font loading and text drawing.
//!
//! macroquad's built-in font has no Hangul glyphs, so the client looks for a
//! TTF in a fixed order and only falls back to the built-in font (with a
//! warning) when nothing is found.

use std::path::{Path, PathBuf};

use macroquad::prelude::*;
use tracing::{info, warn};

use crate::error::{GuiError, GuiResult};

/// System fonts known to carry Hangul, tried after the user's choices.
const SYSTEM_FONTS: &[&str] = &[
    "C:/Windows/Fonts/malgun.ttf",
    "C:/Windows/Fonts/gulim.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
];

/// Font file paths in lookup order: explicit choice, the assets directory,
/// then system fonts.
pub fn font_candidates(explicit: Option<&Path>, assets: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }
    candidates.push(assets.join("font.ttf"));
    candidates.extend(SYSTEM_FONTS.iter().map(PathBuf::from));
    candidates
}

fn load_font_file(path: &Path) -> GuiResult<Font> {
    let bytes = std::fs::read(path).map_err(|source| GuiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_ttf_font_from_bytes(&bytes).map_err(|e| GuiError::Font {
        path: path.to_path_buf(),
        message: format!("{e:?}"),
    })
}

/// The UI font, or macroquad's default when none could be loaded.
pub struct UiFont {
    font: Option<Font>,
}

impl UiFont {
    /// Try every candidate in order and keep the first that loads.
    pub fn load(explicit: Option<&Path>, assets: &Path) -> Self {
        match Self::find(explicit, assets) {
            Ok(font) => Self { font: Some(font) },
            Err(e) => {
                warn!(error = %e, "falling back to built-in font; Korean text will not render");
                Self { font: None }
            }
        }
    }

    fn find(explicit: Option<&Path>, assets: &Path) -> GuiResult<Font> {
        for path in font_candidates(explicit, assets) {
            if !path.is_file() {
                continue;
            }
            match load_font_file(&path) {
                Ok(font) => {
                    info!(path = %path.display(), "loaded font");
                    return Ok(font);
                }
                Err(e) => warn!(error = %e, "skipping font"),
            }
        }
        Err(GuiError::NoFont)
    }

    /// Draw `text` with its baseline at `y`.
    pub fn draw(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size: size,
                color,
                ..Default::default()
            },
        );
    }

    /// Draw `text` centered on `(cx, cy)`.
    pub fn draw_centered(&self, text: &str, cx: f32, cy: f32, size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        let x = cx - dims.width / 2.0;
        let y = cy - dims.height / 2.0 + dims.offset_y;
        self.draw(text, x, y, size, color);
    }

    /// Rendered width of `text`.
    pub fn width(&self, text: &str, size: u16) -> f32 {
        measure_text(text, self.font.as_ref(), size, 1.0).width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_font_comes_first() {
        let candidates = font_candidates(Some(Path::new("my.ttf")), Path::new("assets"));
        assert_eq!(candidates[0], PathBuf::from("my.ttf"));
        assert_eq!(candidates[1], Path::new("assets").join("font.ttf"));
        assert_eq!(candidates.len(), SYSTEM_FONTS.len() + 2);
    }

    #[test]
    fn assets_font_without_explicit() {
        let candidates = font_candidates(None, Path::new("res"));
        assert_eq!(candidates[0], Path::new("res").join("font.ttf"));
    }

    #[test]
    fn missing_font_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");
        assert!(matches!(load_font_file(&path), Err(GuiError::Io { .. })));
    }
}

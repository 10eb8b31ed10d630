//! Per-room background images with a flat-color fallback.
//!
//! Images are decoded with the `image` crate (macroquad cannot read JPEG)
//! and uploaded once at startup. A missing or broken file is logged and the
//! room is drawn with [`room_fallback_color`] instead.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use macroquad::prelude::*;
use tracing::{debug, warn};

use fz_core::RoomId;

use super::{CANVAS_H, CANVAS_W, palette, room_fallback_color};
use crate::error::{GuiError, GuiResult};

/// Extensions tried for each room key, in order.
pub const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Decoded RGBA pixels ready for upload.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Row-major RGBA bytes.
    pub rgba: Vec<u8>,
}

/// The first existing `<key>.<ext>` file for a room.
pub fn find_background(dir: &Path, room: RoomId) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{ext}", room.key())))
        .find(|path| path.is_file())
}

/// Decode an image file into RGBA bytes.
pub fn decode_background(path: &Path) -> GuiResult<DecodedImage> {
    let img = image::open(path)
        .map_err(|source| GuiError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (w, h) = img.dimensions();
    let too_large = || GuiError::TooLarge {
        path: path.to_path_buf(),
        width: w,
        height: h,
    };
    Ok(DecodedImage {
        width: u16::try_from(w).map_err(|_| too_large())?,
        height: u16::try_from(h).map_err(|_| too_large())?,
        rgba: img.into_raw(),
    })
}

/// Uploaded backgrounds keyed by room.
#[derive(Default)]
pub struct Backgrounds {
    textures: HashMap<RoomId, Texture2D>,
}

impl Backgrounds {
    /// Load whatever backgrounds exist under `dir`. Never fails.
    pub fn load(dir: &Path) -> Self {
        let mut textures = HashMap::new();
        for room in RoomId::ALL {
            let Some(path) = find_background(dir, room) else {
                warn!(room = %room, dir = %dir.display(), "no background image, using flat color");
                continue;
            };
            match decode_background(&path) {
                Ok(img) => {
                    debug!(room = %room, path = %path.display(), "loaded background");
                    let texture = Texture2D::from_rgba8(img.width, img.height, &img.rgba);
                    texture.set_filter(FilterMode::Linear);
                    textures.insert(room, texture);
                }
                Err(e) => warn!(room = %room, error = %e, "unusable background, using flat color"),
            }
        }
        Self { textures }
    }

    /// Fill the canvas with the room's image or fallback color, darkened indoors.
    pub fn draw(&self, room: RoomId) {
        match self.textures.get(&room) {
            Some(texture) => draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(CANVAS_W, CANVAS_H)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, room_fallback_color(room)),
        }
        if room.is_indoors() {
            draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::SHADE);
        }
    }
}

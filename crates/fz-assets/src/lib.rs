//! Procedural backgrounds for the Forbidden Zone rooms.
//!
//! Paints one dark, grainy scene per room and writes them, plus a
//! `manifest.json`, into the directory the game client loads its assets
//! from. Files are named after the room keys (`lobby.jpg`, `morgue.png`, ...).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fz_core::RoomId;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Design-space drawing surface.
pub mod canvas;
/// Error types.
pub mod error;
/// The run manifest.
pub mod manifest;
/// Per-room painters.
pub mod scenes;

pub use error::{AssetError, AssetResult};
pub use manifest::{MANIFEST_FILE, Manifest};

/// Largest accepted image side.
pub const MAX_SIDE: u32 = 8192;

/// JPEG quality used for every background.
pub const JPEG_QUALITY: u8 = 95;

/// Image encoding of the generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG.
    Png,
    /// JPEG at [`JPEG_QUALITY`].
    Jpg,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

/// Settings for a generator run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Output directory, created if missing.
    pub out: PathBuf,
    /// Seed for every room's random stream.
    pub seed: u64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Encoding.
    pub format: OutputFormat,
    /// Rooms to paint. Empty means all of them.
    pub rooms: Vec<RoomId>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            out: PathBuf::from("assets"),
            seed: 42,
            width: 1280,
            height: 720,
            format: OutputFormat::Jpg,
            rooms: Vec::new(),
        }
    }
}

impl GenerateConfig {
    /// Rooms this run paints, in catalog order without repeats.
    pub fn selected_rooms(&self) -> Vec<RoomId> {
        RoomId::ALL
            .into_iter()
            .filter(|room| self.rooms.is_empty() || self.rooms.contains(room))
            .collect()
    }

    fn validate(&self) -> AssetResult<()> {
        let ok = |side: u32| (1..=MAX_SIDE).contains(&side);
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(AssetError::InvalidSize {
                width: self.width,
                height: self.height,
                max: MAX_SIDE,
            })
        }
    }
}

/// Encode an image into `writer`.
pub fn encode<W: Write>(img: &RgbImage, format: OutputFormat, writer: W) -> image::ImageResult<()> {
    let (w, h) = img.dimensions();
    match format {
        OutputFormat::Png => PngEncoder::new(writer).write_image(img.as_raw(), w, h, ExtendedColorType::Rgb8),
        OutputFormat::Jpg => JpegEncoder::new_with_quality(writer, JPEG_QUALITY).write_image(
            img.as_raw(),
            w,
            h,
            ExtendedColorType::Rgb8,
        ),
    }
}

fn write_background(path: &Path, img: &RgbImage, format: OutputFormat) -> AssetResult<()> {
    let io_err = |source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    encode(img, format, &mut writer).map_err(|source| AssetError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)
}

/// Paint the selected rooms into `config.out` and write the manifest.
pub fn generate(config: &GenerateConfig) -> AssetResult<Manifest> {
    config.validate()?;
    fs::create_dir_all(&config.out).map_err(|source| AssetError::Io {
        path: config.out.clone(),
        source,
    })?;

    let mut manifest = Manifest::new(config.seed, config.width, config.height, config.format);
    for room in config.selected_rooms() {
        let file_name = format!("{}.{}", room.key(), config.format.extension());
        let path = config.out.join(&file_name);
        let img = scenes::render(room, config.width, config.height, config.seed);
        write_background(&path, &img, config.format)?;
        debug!(room = room.key(), path = %path.display(), "wrote background");
        manifest.backgrounds.insert(room, file_name);
    }

    let path = config.out.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, json).map_err(|source| AssetError::Io { path, source })?;
    info!(rooms = manifest.backgrounds.len(), out = %config.out.display(), "assets generated");
    Ok(manifest)
}

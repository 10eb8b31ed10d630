//! The `manifest.json` written next to the generated backgrounds.

use std::collections::BTreeMap;

use fz_core::RoomId;
use serde::{Deserialize, Serialize};

use crate::OutputFormat;

/// File the manifest is written to inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Record of one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Seed the backgrounds were drawn with.
    pub seed: u64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Encoding used for every file.
    pub format: OutputFormat,
    /// Background file name per room, relative to the manifest.
    pub backgrounds: BTreeMap<RoomId, String>,
}

impl Manifest {
    /// An empty manifest for a run.
    pub fn new(seed: u64, width: u32, height: u32, format: OutputFormat) -> Self {
        Self {
            seed,
            width,
            height,
            format,
            backgrounds: BTreeMap::new(),
        }
    }
}

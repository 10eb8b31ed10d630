//! `fz-assets`: paint the room backgrounds the game client loads.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fz_assets::{GenerateConfig, OutputFormat};
use fz_core::RoomId;

#[derive(Parser, Debug)]
#[command(name = "fz-assets", about = "Generate Forbidden Zone room backgrounds", version)]
struct Args {
    /// Output directory
    #[arg(long, default_value = "assets")]
    out: PathBuf,

    /// Random seed; equal seeds give identical images
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Image width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// Image encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Jpg)]
    format: OutputFormat,

    /// Only paint this room (repeatable)
    #[arg(long = "room", value_parser = parse_room)]
    rooms: Vec<RoomId>,
}

fn parse_room(key: &str) -> Result<RoomId, String> {
    RoomId::from_key(key).ok_or_else(|| {
        let known: Vec<_> = RoomId::ALL.iter().map(|room| room.key()).collect();
        format!("unknown room '{key}' (expected one of: {})", known.join(", "))
    })
}

impl From<Args> for GenerateConfig {
    fn from(args: Args) -> Self {
        Self {
            out: args.out,
            seed: args.seed,
            width: args.width,
            height: args.height,
            format: args.format,
            rooms: args.rooms,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = GenerateConfig::from(Args::parse());
    match fz_assets::generate(&config) {
        Ok(manifest) => {
            for (room, file) in &manifest.backgrounds {
                println!("{:<10} {}", room.key(), config.out.join(file).display());
            }
            println!(
                "wrote {} background(s) and {}",
                manifest.backgrounds.len(),
                config.out.join(fz_assets::MANIFEST_FILE).display()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

//! Forbidden Zone game client: macroquad entry point.
//!
//! Manages the screen stack and main render loop. The virtual canvas
//! (1280x720) is scaled to fit the window.

use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fz_gui::app::{AppState, GuiConfig};
use fz_gui::screen::play::PlayScreen;
use fz_gui::screen::title::TitleScreen;
use fz_gui::screen::{Screen, ScreenId, Transition};
use fz_gui::theme::backgrounds::Backgrounds;
use fz_gui::theme::font::UiFont;
use fz_gui::theme::{CANVAS_H, CANVAS_W, palette, setup_virtual_canvas};

#[derive(Parser, Debug)]
#[command(name = "forbidden-zone", about = "금지 구역 - 폐병원 방탈출", version)]
struct Args {
    /// Directory with room backgrounds and an optional font.ttf
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// TTF font with Hangul glyphs
    #[arg(long)]
    font: Option<PathBuf>,

    /// Frames an ordinary message stays on screen
    #[arg(long, default_value = "120")]
    message_ticks: u32,
}

impl From<Args> for GuiConfig {
    fn from(args: Args) -> Self {
        Self {
            assets: args.assets,
            font: args.font,
            message_ticks: args.message_ticks,
        }
    }
}

/// Create a screen instance for a given screen id.
fn make_screen(id: ScreenId) -> Box<dyn Screen> {
    match id {
        ScreenId::Title => Box::new(TitleScreen::new()),
        ScreenId::Play => Box::new(PlayScreen::new()),
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "금지 구역 - 폐병원 방탈출".to_owned(),
        window_width: CANVAS_W as i32,
        window_height: CANVAS_H as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = GuiConfig::from(Args::parse());
    info!(assets = %config.assets.display(), "starting");

    let font = UiFont::load(config.font.as_deref(), &config.assets);
    let backgrounds = Backgrounds::load(&config.assets);
    let mut app = AppState::new(config, font, backgrounds);

    let mut screens: Vec<Box<dyn Screen>> = vec![make_screen(ScreenId::Title)];

    loop {
        // Clear with black (letterbox bars)
        clear_background(palette::BLACK);
        setup_virtual_canvas();
        draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::BLACK);

        if let Some(screen) = screens.last_mut() {
            match screen.update(&mut app) {
                Transition::Push(id) => screens.push(make_screen(id)),
                Transition::Pop => {
                    screens.pop();
                }
                Transition::Replace(id) => {
                    screens.pop();
                    screens.push(make_screen(id));
                }
                Transition::None => {}
            }
        }

        // Draw the current top screen (may have changed after transition)
        if let Some(screen) = screens.last() {
            screen.draw(&app);
        }

        if app.should_quit || screens.is_empty() {
            break;
        }

        next_frame().await;
    }
}

use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

mod config;
mod constants;
mod countdown;
mod engine;
mod input;
mod overlay;
mod pdf_loader;
mod scaler;
mod slide;
mod state;
mod timer;

use crate::config::{Cli, TimerConfig};
use crate::constants::*;
use crate::engine::{OverlayFont, Presenter};
use crate::scaler::Viewport;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Thresholds are checked before the PDF is read or a window exists
    let config = match cli.timer_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: slidetimer <PDF> <X> <Y> <Z>  (see --help)");
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli, config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, config: TimerConfig) -> Result<()> {
    // --- Decode the PDF up front ---
    let pages = pdf_loader::rasterize(&cli.pdf, cli.dpi)
        .with_context(|| format!("Could not load slides from {}", cli.pdf.display()))?;

    // --- Open the window ---
    // `rl` closes the window when dropped, on every path out of this function.
    let mut builder = raylib::init();
    builder
        .size(cli.width, cli.height)
        .title("Slideshow")
        .vsync()
        .resizable();
    if cli.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None);

    let viewport = Viewport::new(rl.get_screen_width(), rl.get_screen_height());
    info!("Window opened at {}x{}", viewport.width, viewport.height);

    // Declared after `rl` so textures are released before the window closes
    let slides = slide::upload_all(&mut rl, &thread, &pages)?;
    drop(pages);

    let font = OverlayFont::load(&mut rl, &thread, cli.font.as_deref());
    let mut presenter = Presenter::new(slides, viewport, config, font, Instant::now())
        .context("No slides to present")?;

    // --- Main Loop ---
    'frames: loop {
        for action in input::poll(&mut rl) {
            if !presenter.handle(action, Instant::now()) {
                break 'frames;
            }
        }

        presenter.update(Instant::now());

        let mut d = rl.begin_drawing(&thread);
        presenter.draw(&mut d);
    }

    info!("Slideshow closed");
    Ok(())
}

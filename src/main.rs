use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use raylib::prelude::*;

mod carousel;
mod config;
mod constants;
mod error;
mod layout;
mod slide;
mod snippet;
mod state;
mod texture_loader;
mod view;

use crate::carousel::Carousel;
use crate::config::{Args, Showcase};
use crate::constants::*;
use crate::texture_loader::load_slide_textures;
use crate::view::{CarouselView, ViewState};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let showcase = Showcase::from_args(&args).context("Failed to load slide sequence")?;

    let carousel = Carousel::new(showcase.slides);
    if carousel.is_empty() {
        warn!("Slide sequence is empty, navigation is disabled");
    }
    for (i, slide) in carousel.slides().iter().enumerate() {
        debug!("Slide {}: {} ({})", i + 1, slide.label, slide.source);
    }
    info!("Showing {} slides from {:?}", carousel.len(), args.assets);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&showcase.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_slide_textures(&mut rl, &thread, &args.assets, carousel.slides());
    let mut view = CarouselView::new(showcase.title, ViewState::new(carousel, args.show_strategy), textures);

    // --- Main Loop ---
    while !rl.window_should_close() {
        view.frame(&mut rl, &thread);
    }

    info!("Window closed");
    Ok(())
}

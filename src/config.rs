use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use serde::Deserialize;

use crate::constants::*;
use crate::error::{CarouselError, Result};
use crate::slide::{chart_slides, SlideDescriptor};

#[derive(Debug, Parser)]
#[command(name = "chart-carousel", version, about = "Analytics snapshots image carousel")]
pub struct Args {
    /// Directory slide sources are resolved against
    #[arg(long, default_value = ".")]
    pub assets: PathBuf,

    /// TOML manifest replacing the built-in slide sequence
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Start with the strategy snippet panel open
    #[arg(long)]
    pub show_strategy: bool,
}

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<SlideDescriptor>,
}

impl Manifest {
    /// Parses a manifest. Titles and labels end up as C strings in raylib,
    /// so interior NULs are rejected here.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(text).map_err(|source| CarouselError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

        let invalid = |field: String| CarouselError::InvalidText {
            path: path.to_path_buf(),
            field,
        };
        if manifest.title.as_deref().is_some_and(|title| title.contains('\0')) {
            return Err(invalid("title".to_string()));
        }
        if let Some(i) = manifest.slides.iter().position(|slide| slide.label.contains('\0')) {
            return Err(invalid(format!("slides[{}].label", i)));
        }
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CarouselError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }
}

/// What the window shows: heading and slide sequence.
#[derive(Debug)]
pub struct Showcase {
    pub title: String,
    pub slides: Vec<SlideDescriptor>,
}

impl Showcase {
    pub fn from_args(args: &Args) -> Result<Self> {
        match &args.manifest {
            Some(path) => {
                let manifest = Manifest::load(path)?;
                info!("Loaded {} slides from manifest {:?}", manifest.slides.len(), path);
                Ok(Self {
                    title: manifest.title.unwrap_or_else(|| HEADING.to_string()),
                    slides: manifest.slides,
                })
            }
            None => Ok(Self {
                title: HEADING.to_string(),
                slides: chart_slides(),
            }),
        }
    }
}

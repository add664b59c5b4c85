use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use log::{debug, info, warn};
use raylib::prelude::*;

use crate::error::{CarouselError, Result};
use crate::slide::SlideDescriptor;

/// Quarter turns needed to display an image upright.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Maps an EXIF orientation value. Mirrored orientations are shown as stored.
    pub fn from_exif(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }

    fn apply(self, image: &mut Image) {
        match self {
            Rotation::None => {}
            Rotation::Half => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Rotation::Clockwise => image.rotate_cw(),
            Rotation::CounterClockwise => image.rotate_ccw(),
        }
    }
}

/// Slide sources are relative to the asset root unless already absolute.
pub fn resolve_source(asset_root: &Path, source: &str) -> PathBuf {
    asset_root.join(source)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Reads the EXIF orientation of a JPEG, defaulting to upright.
fn exif_rotation(path: &Path, bytes: &[u8]) -> Rotation {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .map(Rotation::from_exif)
            .unwrap_or(Rotation::None),
        Err(e) => {
            debug!("No EXIF data for {:?}: {}", path, e);
            Rotation::None
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let asset_error = |reason: String| CarouselError::AssetLoad {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| asset_error(e.to_string()))?;

    let extension = extension_of(path);
    let rotation = if extension == "jpg" || extension == "jpeg" {
        exif_rotation(path, &bytes)
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &bytes)
        .map_err(|e| asset_error(e.to_string()))?;
    if rotation != Rotation::None {
        debug!("Rotating {:?}: {:?}", path, rotation);
        rotation.apply(&mut image);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| asset_error(e.to_string()))
}

/// Loads one texture per slide. A slide whose asset fails keeps `None`
/// and is drawn as a placeholder.
pub fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    asset_root: &Path,
    slides: &[SlideDescriptor],
) -> Vec<Option<Texture2D>> {
    let textures: Vec<Option<Texture2D>> = slides
        .iter()
        .map(|slide| {
            let path = resolve_source(asset_root, &slide.source);
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("Slide {:?} will show a placeholder: {}", slide.label, e);
                    None
                }
            }
        })
        .collect();

    let loaded = textures.iter().filter(|t| t.is_some()).count();
    info!("Loaded {}/{} slide images from {:?}", loaded, slides.len(), asset_root);
    textures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_orientations_map_to_rotations() {
        assert_eq!(Rotation::from_exif(1), Rotation::None);
        assert_eq!(Rotation::from_exif(3), Rotation::Half);
        assert_eq!(Rotation::from_exif(6), Rotation::Clockwise);
        assert_eq!(Rotation::from_exif(8), Rotation::CounterClockwise);
        // Mirrored variants are left alone
        assert_eq!(Rotation::from_exif(2), Rotation::None);
        assert_eq!(Rotation::from_exif(7), Rotation::None);
    }

    #[test]
    fn sources_resolve_against_asset_root() {
        let root = Path::new("site");
        assert_eq!(
            resolve_source(root, "public/charts/im1.png"),
            PathBuf::from("site/public/charts/im1.png")
        );
    }

    #[test]
    fn absolute_sources_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("chart.png");
        let resolved = resolve_source(Path::new("elsewhere"), absolute.to_str().unwrap());
        assert_eq!(resolved, absolute);
    }

    #[test]
    fn extensions_are_lowercased() {
        assert_eq!(extension_of(Path::new("a/B.JPG")), "jpg");
        assert_eq!(extension_of(Path::new("noext")), "");
    }

    #[test]
    fn garbage_bytes_have_no_rotation() {
        assert_eq!(exif_rotation(Path::new("x.jpg"), b"not a jpeg"), Rotation::None);
    }
}

//! Item icons
//!
//! An icon can come from several sources. Only some of them can be shown in
//! the title bar; legacy stock ids are resolved by the toolkit at the time
//! the tab was built and cannot be copied later, so the title falls back to
//! the generic document icon for them.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, RgbaImage};

/// Icon shown when an item has none, and in the title of an empty panel
pub const GENERIC_ICON_NAME: &str = "text-x-generic";

/// Edge length of menu-sized icons in logical pixels
pub const MENU_ICON_SIZE: u32 = 16;

/// Prefix of legacy stock icon ids
const STOCK_PREFIX: &str = "gtk-";

/// Source of an icon image
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    /// No image at all
    Empty,
    /// Decoded raster image, already scaled to menu size
    Image(Arc<RgbaImage>),
    /// Frames of an animated image, already scaled to menu size
    Animation(Arc<Vec<RgbaImage>>),
    /// Themed icon looked up by name when drawn
    Named(String),
    /// Legacy stock id
    Stock(String),
}

impl Default for Icon {
    fn default() -> Self {
        Icon::generic()
    }
}

impl Icon {
    /// The generic document icon
    pub fn generic() -> Self {
        Icon::Named(GENERIC_ICON_NAME.to_string())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Icon::Named(name.into())
    }

    /// Resolve an icon name, recognising legacy stock ids
    ///
    /// Empty names resolve to `None` so callers can fall back to their default.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            None
        } else if name.starts_with(STOCK_PREFIX) {
            Some(Icon::Stock(name.to_string()))
        } else {
            Some(Icon::Named(name.to_string()))
        }
    }

    /// Wrap a decoded image, shrinking it to menu size if needed
    pub fn from_image(image: DynamicImage) -> Self {
        Icon::Image(Arc::new(menu_sized(image)))
    }

    /// Wrap animation frames; a single frame is a plain image
    pub fn from_frames(frames: Vec<DynamicImage>) -> Self {
        let mut frames: Vec<RgbaImage> = frames.into_iter().map(menu_sized).collect();
        match frames.len() {
            0 => Icon::Empty,
            1 => Icon::Image(Arc::new(frames.remove(0))),
            _ => Icon::Animation(Arc::new(frames)),
        }
    }

    /// Decode an icon from an image file
    ///
    /// Animated GIFs keep all their frames.
    pub fn load(path: &Path) -> Result<Self> {
        let is_gif = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));
        if is_gif {
            return Self::load_animation(path);
        }

        let image = image::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to load icon {}: {}", path.display(), e))?;
        tracing::debug!(
            "Loaded icon {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Icon::from_image(image))
    }

    fn load_animation(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open icon {}", path.display()))?;
        let decoder = GifDecoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode icon {}", path.display()))?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .with_context(|| format!("Failed to decode frames of {}", path.display()))?;

        tracing::debug!("Loaded animated icon {} ({} frames)", path.display(), frames.len());
        Ok(Icon::from_frames(
            frames
                .into_iter()
                .map(|frame| DynamicImage::ImageRgba8(frame.into_buffer()))
                .collect(),
        ))
    }

    /// Produce the icon to show in a title bar for this item icon
    pub fn copy_for_title(&self) -> Icon {
        match self {
            Icon::Empty => Icon::Empty,
            Icon::Image(image) => Icon::Image(Arc::clone(image)),
            Icon::Animation(frames) => Icon::Animation(Arc::clone(frames)),
            Icon::Named(name) => Icon::Named(name.clone()),
            Icon::Stock(id) => {
                tracing::debug!("Stock icon {} not copied to title, using generic icon", id);
                Icon::generic()
            }
        }
    }

    /// Icon name, if this icon is looked up by name
    pub fn name(&self) -> Option<&str> {
        match self {
            Icon::Named(name) | Icon::Stock(name) => Some(name),
            Icon::Empty | Icon::Image(_) | Icon::Animation(_) => None,
        }
    }
}

fn menu_sized(image: DynamicImage) -> RgbaImage {
    if image.width() > MENU_ICON_SIZE || image.height() > MENU_ICON_SIZE {
        image.thumbnail(MENU_ICON_SIZE, MENU_ICON_SIZE).to_rgba8()
    } else {
        image.to_rgba8()
    }
}

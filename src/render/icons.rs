use crate::ICON_SIZE;
use crate::Pixels;
use crate::gesture::Choice;
use image::DynamicImage;
use image::RgbImage;
use image::RgbaImage;
use image::imageops::FilterType;
use std::collections::BTreeMap;
use std::path::Path;

/// A small pre-scaled gesture image, with or without an alpha channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    Opaque(RgbImage),
    Translucent(RgbaImage),
}

impl Icon {
    pub fn width(&self) -> Pixels {
        match self {
            Self::Opaque(image) => image.width(),
            Self::Translucent(image) => image.width(),
        }
    }
    pub fn height(&self) -> Pixels {
        match self {
            Self::Opaque(image) => image.height(),
            Self::Translucent(image) => image.height(),
        }
    }
}

/// alpha channel decides the variant
impl From<DynamicImage> for Icon {
    fn from(image: DynamicImage) -> Self {
        match image.color().has_alpha() {
            true => Self::Translucent(image.to_rgba8()),
            false => Self::Opaque(image.to_rgb8()),
        }
    }
}

/// Gesture icons keyed by choice. A choice whose asset failed to load is
/// simply absent, and its history slots render blank.
#[derive(Debug, Default, Clone)]
pub struct IconCache {
    icons: BTreeMap<Choice, Icon>,
}

impl IconCache {
    /// Load `<dir>/<choice>.png` for every choice, scaled to [`ICON_SIZE`].
    pub fn load(dir: &Path) -> Self {
        let mut cache = Self::default();
        for choice in Choice::all() {
            let path = dir.join(format!("{}.png", choice.name()));
            match image::open(&path) {
                Ok(image) => {
                    let scaled = image.resize_exact(ICON_SIZE, ICON_SIZE, FilterType::Triangle);
                    cache.icons.insert(choice, Icon::from(scaled));
                }
                Err(e) => log::warn!("could not load icon at {}: {}", path.display(), e),
            }
        }
        log::debug!("loaded {} of {} gesture icons", cache.len(), Choice::all().len());
        cache
    }
    pub fn with(mut self, choice: Choice, icon: Icon) -> Self {
        self.icons.insert(choice, icon);
        self
    }
    pub fn get(&self, choice: Choice) -> Option<&Icon> {
        self.icons.get(&choice)
    }
    pub fn len(&self) -> usize {
        self.icons.len()
    }
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

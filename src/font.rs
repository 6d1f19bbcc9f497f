use std::path::Path;

use anyhow::{Context, Result};
use font_kit::font::Font;
use log::{info, warn};

/// Used when the font file cannot be loaded. Pango picks the first family it can find.
pub const FALLBACK_FAMILY: &str = "Arimo, Arial, sans-serif";

/// The font every label of a scene is drawn with. The size is in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFace {
    pub family: String,
    pub size: f64,
}

impl FontFace {
    pub fn new(family: &str, size: f64) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }

    /// Reads the family name out of a font file.
    pub fn load(path: &Path, size: f64) -> Result<Self> {
        let font = Font::from_path(path, 0)
            .with_context(|| format!("Failed to load font: {}", path.display()))?;
        Ok(Self {
            family: font.family_name(),
            size,
        })
    }

    /// Like [`FontFace::load`], but falls back to [`FALLBACK_FAMILY`] instead of failing.
    pub fn load_or_fallback(path: &Path, size: f64) -> Self {
        match Self::load(path, size) {
            Ok(face) => {
                info!("Loaded font family {:?} at {}px", face.family, face.size);
                face
            }
            Err(e) => {
                warn!("{:#}; falling back to {:?}", e, FALLBACK_FAMILY);
                Self::new(FALLBACK_FAMILY, size)
            }
        }
    }

    /// The description string pango expects, e.g. `Arimo 24px`.
    pub fn pango_description(&self) -> String {
        format!("{} {}px", self.family, self.size)
    }
}

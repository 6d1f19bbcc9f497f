mod element;
mod field;
mod parser;

use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use log::info;

pub use element::{Label, Rect, Rgb, SceneElement};
pub use parser::SceneParser;

use crate::error::{Error, Result};
use crate::font::FontFace;
use crate::utils::PrintableView;

/// The parsed elements, in the order they are drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    elements: Vec<SceneElement>,
}

impl Scene {
    pub fn parse(text: &str, font: Rc<FontFace>) -> Result<Self> {
        Ok(Self {
            elements: SceneParser::new(text, font).parse()?,
        })
    }

    /// Reads and parses a scene file. Nothing is returned if the file cannot be read.
    pub fn load(path: &Path, font: Rc<FontFace>) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::SceneOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::parse(&text, font)?;
        info!(
            "Loaded {} scene elements from {}",
            scene.elements.len(),
            path.display()
        );
        Ok(scene)
    }

    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Scene ({} elements)", self.elements.len())?;
        for element in &self.elements {
            writeln!(f, "  {}", element)?;
        }
        Ok(())
    }
}

impl PrintableView for Scene {}

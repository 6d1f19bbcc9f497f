use std::fmt;
use std::rc::Rc;

use crate::font::FontFace;

/// RGB components as written in the scene. 0 to 255 is expected but not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Clamps each component to [0, 255] and scales it to [0.0, 1.0].
    pub fn to_unit(self) -> (f64, f64, f64) {
        let unit = |c: i32| c.clamp(0, 255) as f64 / 255.0;
        (unit(self.r), unit(self.g), unit(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Rgb,
}

/// A line of text drawn into a fixed box. The box is not derived from the glyph metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Rgb,
    pub content: String,
    /// Shared by every label of a scene.
    pub font: Rc<FontFace>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneElement {
    Rect(Rect),
    Label(Label),
}

impl fmt::Display for SceneElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SceneElement::Rect(rect) => write!(
                f,
                "Rect ({}, {}) [{}x{}] {}",
                rect.x, rect.y, rect.width, rect.height, rect.color
            ),
            SceneElement::Label(label) => write!(
                f,
                "Label ({}, {}) [{}x{}] {} {:?} ({} {}px)",
                label.x,
                label.y,
                label.width,
                label.height,
                label.color,
                label.content,
                label.font.family,
                label.font.size
            ),
        }
    }
}

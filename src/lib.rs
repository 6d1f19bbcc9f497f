#![deny(unsafe_code)]

mod app;
mod audio;
mod error;
mod font;
mod scene;
mod ui;
mod utils;

pub use app::{
    Config, Runner, Verbosity, DEFAULT_AUDIO_PATH, DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE,
    DEFAULT_SCENE_PATH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
pub use error::{Error, Result};
pub use font::FontFace;
pub use scene::{Label, Rect, Rgb, Scene, SceneElement, SceneParser};

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use gtk4::glib;
use log::{error, info, LevelFilter};

use crate::audio;
use crate::error::Error;
use crate::font::FontFace;
use crate::scene::Scene;
use crate::ui::{self, WindowContext};
use crate::utils::PrintableView;

pub const DEFAULT_SCENE_PATH: &str = "objects.lng";
pub const DEFAULT_AUDIO_PATH: &str = "audio.wav";
pub const DEFAULT_FONT_PATH: &str = "arimo.ttf";
pub const DEFAULT_FONT_SIZE: f64 = 24.0;
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// The default log filter; `RUST_LOG` takes precedence.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Warn,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scene_path: PathBuf,
    /// `None` skips the startup clip.
    pub audio_path: Option<PathBuf>,
    pub font_path: PathBuf,
    pub font_size: f64,
    pub window_size: (i32, i32),
    pub is_headless: bool,
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene_path: PathBuf::from(DEFAULT_SCENE_PATH),
            audio_path: Some(PathBuf::from(DEFAULT_AUDIO_PATH)),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            window_size: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            is_headless: false,
            verbosity: Verbosity::default(),
        }
    }
}

#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let font = Rc::new(FontFace::load_or_fallback(
            &self.config.font_path,
            self.config.font_size,
        ));

        if self.config.is_headless {
            self.load_scene(font)?.print(self.config.verbosity);
            return Ok(());
        }

        // The clip plays before the scene is read, so a malformed scene still gets it.
        if let Some(audio_path) = &self.config.audio_path {
            audio::play_file(audio_path);
        }
        let scene = self.load_scene(font)?;

        let exit_code = ui::show_ui(WindowContext {
            window_size: self.config.window_size,
            scene: Rc::new(scene),
        });
        if exit_code != glib::ExitCode::SUCCESS {
            bail!("GTK application exited with {:?}", exit_code);
        }
        info!("Window closed");
        Ok(())
    }

    /// An unreadable scene file leaves the scene empty; a malformed one is fatal.
    fn load_scene(&self, font: Rc<FontFace>) -> Result<Scene> {
        match Scene::load(&self.config.scene_path, font) {
            Ok(scene) => Ok(scene),
            Err(e @ Error::SceneOpen { .. }) => {
                error!("{}; continuing with an empty scene", e);
                Ok(Scene::default())
            }
            Err(e) => Err(e).with_context(|| {
                format!(
                    "Failed to parse scene file {}",
                    self.config.scene_path.display()
                )
            }),
        }
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tableau::{
    Verbosity, DEFAULT_AUDIO_PATH, DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DEFAULT_SCENE_PATH,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_SCENE_PATH,
        help = "The scene description to draw"
    )]
    pub scene: PathBuf,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_AUDIO_PATH,
        help = "The WAV clip played once at startup"
    )]
    pub audio: PathBuf,

    #[arg(long, help = "Do not play the startup clip")]
    pub no_audio: bool,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_FONT_PATH,
        help = "The font file used for every label"
    )]
    pub font: PathBuf,

    #[arg(
        long,
        value_name = "PX",
        default_value_t = DEFAULT_FONT_SIZE,
        help = "The font size in pixels"
    )]
    pub font_size: f64,

    #[arg(
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        default_values_t = [DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT],
        value_parser = clap::value_parser!(i32).range(1..),
        help = "The initial window size"
    )]
    pub window_size: Vec<i32>,

    #[arg(
        long,
        short,
        default_value_t = VerbosityLevel::Normal,
        value_name = "LEVEL",
        help = "Set the verbosity level"
    )]
    pub verbose: VerbosityLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the scene and print it without opening a window
    Headless,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VerbosityLevel {
    Quiet,
    Normal,
    Verbose,
}

impl std::fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            VerbosityLevel::Quiet => write!(f, "quiet"),
            VerbosityLevel::Normal => write!(f, "normal"),
            VerbosityLevel::Verbose => write!(f, "verbose"),
        }
    }
}

impl From<VerbosityLevel> for Verbosity {
    fn from(level: VerbosityLevel) -> Self {
        match level {
            VerbosityLevel::Quiet => Verbosity::Quiet,
            VerbosityLevel::Normal => Verbosity::Normal,
            VerbosityLevel::Verbose => Verbosity::Verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tableau"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.scene, PathBuf::from("objects.lng"));
        assert_eq!(args.audio, PathBuf::from("audio.wav"));
        assert!(!args.no_audio);
        assert_eq!(args.font, PathBuf::from("arimo.ttf"));
        assert_eq!(args.font_size, 24.0);
        assert_eq!(args.window_size, vec![800, 600]);
        assert!(matches!(args.verbose, VerbosityLevel::Normal));
    }

    #[test]
    fn headless_with_options() {
        let args = Args::try_parse_from([
            "tableau",
            "--scene",
            "demo.lng",
            "--window-size",
            "320",
            "240",
            "-v",
            "verbose",
            "headless",
        ])
        .unwrap();
        assert!(matches!(args.command, Some(Commands::Headless)));
        assert_eq!(args.scene, PathBuf::from("demo.lng"));
        assert_eq!(args.window_size, vec![320, 240]);
        assert!(matches!(args.verbose, VerbosityLevel::Verbose));
    }

    #[test]
    fn rejects_bad_window_size() {
        assert!(Args::try_parse_from(["tableau", "--window-size", "0", "600"]).is_err());
        assert!(Args::try_parse_from(["tableau", "--window-size", "800"]).is_err());
    }
}

#![deny(unsafe_code)]

mod cli;

use clap::Parser as _;

use cli::Commands::Headless;
use tableau::{Config, Runner, Verbosity};

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let verbosity: Verbosity = args.verbose.into();
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .init();

    let (w, h) = match args.window_size.as_slice() {
        [w, h, ..] => (*w, *h),
        _ => unreachable!(),
    };

    let config = Config {
        scene_path: args.scene,
        audio_path: (!args.no_audio).then_some(args.audio),
        font_path: args.font,
        font_size: args.font_size,
        window_size: (w, h),
        is_headless: matches!(args.command, Some(Headless)),
        verbosity,
    };

    Runner::new(config).run()?;
    Ok(())
}

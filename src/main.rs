use std::io;

use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info, warn};

use space_garbage::Game;
use space_garbage::assets::{BuiltinAssets, DirAssets, FrameSource};
use space_garbage::config::{Args, GameConfig};
use space_garbage::error::Result;
use space_garbage::rendering::{OutputTarget, ScreenBuffer};
use space_garbage::terminal_io::{Controls, KeyboardInput, ScriptedInput};

const HEADLESS_DEFAULT_TICKS: u64 = 100;

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logging::log_to_file(&args.log_file, args.log_level)?;
    info!("Starting space-garbage.");

    let mut config = GameConfig::from(&args);
    let assets: Box<dyn FrameSource> = match &args.assets {
        Some(dir) => Box::new(DirAssets::new(dir)),
        None => Box::new(BuiltinAssets),
    };

    if let Some(size) = args.headless {
        info!("Headless mode on a {}x{} buffer.", size.width, size.height);
        if config.max_ticks.is_none() {
            warn!("No --max-ticks in headless mode, stopping after {}.", HEADLESS_DEFAULT_TICKS);
            config.max_ticks = Some(HEADLESS_DEFAULT_TICKS);
        }
        let output = OutputTarget::ScreenBuffer(ScreenBuffer::new());
        let input = ScriptedInput::constant(Controls::default());
        let mut game = Game::new(config, assets.as_ref(), size.width, size.height, output, input)?;
        return game.run();
    }

    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
    let mut output = OutputTarget::Stdout(io::stdout());
    let result = play(config, assets.as_ref(), &mut output);

    // Restore the terminal whatever happened in the game.
    if let Err(e) = output.execute_other_command(Show) {
        error!("Failed to show cursor: {}", e);
    }
    if let Err(e) = output.execute_other_command(LeaveAlternateScreen) {
        error!("Failed to leave alternate screen: {}", e);
    }
    if let Err(e) = disable_raw_mode() {
        error!("Failed to disable raw mode: {}", e);
    }

    match &result {
        Ok(()) => info!("Exited cleanly."),
        Err(e) => error!("Exited with error: {}", e),
    }
    result
}

fn play(config: GameConfig, assets: &dyn FrameSource, output: &mut OutputTarget) -> Result<()> {
    output.execute_other_command(EnterAlternateScreen)?;
    output.execute_other_command(Hide)?;
    output.execute_other_command(Clear(ClearType::All))?;
    let (width, height) = terminal::size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
    info!("Terminal size: {}x{}", width, height);

    let target = OutputTarget::Stdout(io::stdout());
    let mut game = Game::new(config, assets, width, height, target, KeyboardInput)?;
    game.run()
}

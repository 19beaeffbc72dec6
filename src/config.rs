use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::constants::*;

/// Terminal size given on the command line as `WIDTHxHEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = width.trim().parse().map_err(|e| format!("bad width '{}': {}", width, e))?;
        let height = height.trim().parse().map_err(|e| format!("bad height '{}': {}", height, e))?;
        Ok(Size { width, height })
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>().map_err(|e| format!("bad log level '{}': {}", s, e))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "space-garbage")]
#[command(about = "Dodge and shoot the garbage falling out of orbit", long_about = None)]
pub struct Args {
    /// Real milliseconds slept between two scheduling ticks
    #[arg(long, default_value_t = TIC_TIMEOUT_MS)]
    pub tick_ms: u64,

    /// Number of twinkling stars
    #[arg(long, default_value_t = STARS_COUNT)]
    pub stars: usize,

    /// Seed for star placement and garbage spawns (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Year the calendar starts at
    #[arg(long, default_value_t = START_YEAR)]
    pub start_year: u32,

    /// Year the plasma gun becomes available
    #[arg(long, default_value_t = WEAPONS_YEAR)]
    pub weapons_year: u32,

    /// Rows per tick the garbage falls
    #[arg(long, default_value_t = GARBAGE_SPEED)]
    pub garbage_speed: f64,

    /// Directory with sprite files instead of the built-in ones
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Outline every obstacle's bounding box
    #[arg(long, default_value_t = false)]
    pub show_obstacles: bool,

    /// Run without a terminal on a WIDTHxHEIGHT buffer, logging every frame
    #[arg(long)]
    pub headless: Option<Size>,

    /// Stop after this many ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,

    #[arg(long, default_value = "space-garbage.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

/// Settings the simulation itself cares about.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub tick_interval: Duration,
    pub stars: usize,
    pub seed: Option<u64>,
    pub start_year: u32,
    pub weapons_year: u32,
    pub garbage_speed: f64,
    pub show_obstacles: bool,
    pub max_ticks: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tick_interval: Duration::from_millis(TIC_TIMEOUT_MS),
            stars: STARS_COUNT,
            seed: None,
            start_year: START_YEAR,
            weapons_year: WEAPONS_YEAR,
            garbage_speed: GARBAGE_SPEED,
            show_obstacles: false,
            max_ticks: None,
        }
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        GameConfig {
            tick_interval: Duration::from_millis(args.tick_ms),
            stars: args.stars,
            seed: args.seed,
            start_year: args.start_year,
            weapons_year: args.weapons_year,
            garbage_speed: args.garbage_speed,
            show_obstacles: args.show_obstacles,
            max_ticks: args.max_ticks,
        }
    }
}

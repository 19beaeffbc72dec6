use std::rc::Rc;
use std::thread;

use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assets::FrameSource;
use crate::config::GameConfig;
use crate::constants::*;
use crate::error::{GameError, Result};
use crate::frame::Frame;
use crate::rendering::{GameGrid, OutputTarget};
use crate::scheduler::{Scheduler, World};
use crate::tasks::{ObstacleOverlay, Spaceship, Spawner, generate_stars};
use crate::terminal_io::InputSource;
use crate::timeline::{Timeline, YearBanner, YearCounter};

/// Owns the canvas, the shared world and every running task, and drives them
/// one tick at a time.
pub struct Game<I: InputSource> {
    config: GameConfig,
    scheduler: Scheduler,
    world: World,
    canvas: GameGrid,
    output: OutputTarget,
    input: I,
}

impl<I: InputSource> Game<I> {
    /// Loads the sprites, checks the viewport can hold them and spawns the
    /// initial task set.
    pub fn new(
        config: GameConfig,
        assets: &dyn FrameSource,
        terminal_width: u16,
        terminal_height: u16,
        output: OutputTarget,
        input: I,
    ) -> Result<Self> {
        let rocket: Vec<Rc<Frame>> = assets
            .load_frame_set(ROCKET_CATEGORY)
            .map_err(|e| GameError::Configuration(format!("cannot load rocket frames: {}", e)))?
            .into_iter()
            .map(Rc::new)
            .collect();
        let game_over = assets
            .load_frame(GAME_OVER_FRAME)
            .map_err(|e| GameError::Configuration(format!("cannot load game over frame: {}", e)))?;
        let garbage: Vec<Rc<Frame>> = match assets.load_frame_set(GARBAGE_CATEGORY) {
            Ok(frames) => frames.into_iter().map(Rc::new).collect(),
            Err(e) => {
                warn!("No garbage will fall: {}", e);
                Vec::new()
            }
        };

        let rocket_rows = rocket.iter().map(|frame| frame.rows()).max().unwrap_or(0);
        let rocket_columns = rocket.iter().map(|frame| frame.columns()).max().unwrap_or(0);
        let min_height = rocket_rows + 2 * BORDER_SIZE as usize + INFO_STRIP_HEIGHT as usize;
        let min_width = rocket_columns + 2 * BORDER_SIZE as usize;
        if (terminal_height as usize) < min_height || (terminal_width as usize) < min_width {
            let message = format!(
                "terminal is {}x{}, need at least {}x{}",
                terminal_width, terminal_height, min_width, min_height
            );
            error!("{}", message);
            return Err(GameError::Configuration(message));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut world = World::new(Timeline::new(config.start_year, config.weapons_year), rng);
        let mut canvas = GameGrid::new(terminal_width, terminal_height);
        canvas.draw_border();

        let mut scheduler = Scheduler::new();
        for star in generate_stars(&mut world.rng, terminal_height, terminal_width, config.stars) {
            scheduler.spawn(star);
        }
        let spaceship = Spaceship::new(
            (terminal_height / 2) as f64,
            (terminal_width / 2) as f64,
            rocket,
            Rc::new(game_over),
        )?;
        scheduler.spawn(spaceship);
        scheduler.spawn(Spawner::new(garbage, config.garbage_speed));
        if config.show_obstacles {
            scheduler.spawn(ObstacleOverlay::new());
        }
        scheduler.spawn(YearCounter::new());
        scheduler.spawn(YearBanner::new());

        info!(
            "Game ready on {}x{} with {} tasks, starting in year {}.",
            terminal_width,
            terminal_height,
            scheduler.len(),
            world.timeline.year()
        );
        Ok(Game { config, scheduler, world, canvas, output, input })
    }

    /// Runs until the player quits or `max_ticks` is reached, sleeping the
    /// tick interval between ticks.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {
            if self.config.max_ticks.is_some_and(|max| self.scheduler.ticks() >= max) {
                info!("Reached {} ticks, stopping.", self.scheduler.ticks());
                break;
            }
            thread::sleep(self.config.tick_interval);
        }
        info!("Game ended in year {} after {} ticks.", self.world.timeline.year(), self.scheduler.ticks());
        Ok(())
    }

    /// One tick: read controls, resume every task once, push the canvas out.
    /// Returns `false` once the player asked to quit.
    pub fn step(&mut self) -> Result<bool> {
        let controls = self.input.read_controls(self.scheduler.ticks())?;
        if controls.quit {
            return Ok(false);
        }
        self.scheduler.tick(&mut self.canvas, &mut self.world, controls);
        self.canvas.draw_border();
        self.output.refresh(&self.canvas).map_err(|e| {
            error!("Failed to refresh screen: {}", e);
            e
        })?;
        Ok(true)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn canvas(&self) -> &GameGrid {
        &self.canvas
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::assets::BuiltinAssets;
    use crate::rendering::ScreenBuffer;
    use crate::terminal_io::{Controls, ScriptedInput};

    fn config() -> GameConfig {
        GameConfig { tick_interval: Duration::ZERO, seed: Some(3), ..GameConfig::default() }
    }

    fn headless(config: GameConfig, width: u16, height: u16, input: ScriptedInput) -> Result<Game<ScriptedInput>> {
        Game::new(config, &BuiltinAssets, width, height, OutputTarget::ScreenBuffer(ScreenBuffer::new()), input)
    }

    struct NoGarbage;

    impl FrameSource for NoGarbage {
        fn load_frame(&self, id: &str) -> Result<Frame> {
            BuiltinAssets.load_frame(id)
        }

        fn load_frame_set(&self, category: &str) -> Result<Vec<Frame>> {
            match category {
                GARBAGE_CATEGORY => Err(GameError::AssetMissing(category.to_string())),
                _ => BuiltinAssets.load_frame_set(category),
            }
        }
    }

    #[test]
    fn spawns_the_initial_tasks() {
        let game = headless(config(), 80, 24, ScriptedInput::constant(Controls::default())).unwrap();
        let scheduler = game.scheduler();
        assert_eq!(scheduler.count("blink"), STARS_COUNT);
        assert_eq!(scheduler.count("spaceship"), 1);
        assert_eq!(scheduler.count("spawner"), 1);
        assert_eq!(scheduler.count("year_counter"), 1);
        assert_eq!(scheduler.count("year_banner"), 1);
        assert_eq!(scheduler.count("obstacle_overlay"), 0);
        assert_eq!(game.world().timeline.year(), START_YEAR);
    }

    #[test]
    fn too_small_viewport_is_a_configuration_error() {
        let result = headless(config(), 6, 8, ScriptedInput::constant(Controls::default()));
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    struct TallRocket;

    impl FrameSource for TallRocket {
        fn load_frame(&self, id: &str) -> Result<Frame> {
            BuiltinAssets.load_frame(id)
        }

        fn load_frame_set(&self, category: &str) -> Result<Vec<Frame>> {
            match category {
                ROCKET_CATEGORY => Ok(vec![Frame::new(&"|\n".repeat(usize::from(u16::MAX)))]),
                _ => BuiltinAssets.load_frame_set(category),
            }
        }
    }

    #[test]
    fn rocket_taller_than_any_terminal_is_a_configuration_error() {
        let result = Game::new(
            config(),
            &TallRocket,
            80,
            24,
            OutputTarget::ScreenBuffer(ScreenBuffer::new()),
            ScriptedInput::constant(Controls::default()),
        );
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn missing_garbage_sprites_only_warn() {
        let game = Game::new(
            config(),
            &NoGarbage,
            80,
            24,
            OutputTarget::ScreenBuffer(ScreenBuffer::new()),
            ScriptedInput::constant(Controls::default()),
        )
        .unwrap();
        assert_eq!(game.scheduler().count("spawner"), 1);
    }

    #[test]
    fn run_stops_after_max_ticks() {
        let config = GameConfig { max_ticks: Some(40), show_obstacles: true, ..config() };
        let mut game = headless(config, 80, 24, ScriptedInput::constant(Controls::default())).unwrap();
        game.run().unwrap();
        assert_eq!(game.scheduler().ticks(), 40);
        assert_eq!(game.world().timeline.year(), START_YEAR + 2);
        assert!(game.canvas().lines()[22].contains("Year 1959."));
        assert_eq!(game.canvas().char_at(0, 0), '+');
    }

    #[test]
    fn quit_stops_before_ticking() {
        let mut script = HashMap::new();
        script.insert(5, Controls { quit: true, ..Controls::default() });
        let mut game = headless(config(), 80, 24, ScriptedInput::new(script)).unwrap();
        game.run().unwrap();
        assert_eq!(game.scheduler().ticks(), 5);
    }

    #[test]
    fn garbage_falls_once_the_calendar_allows() {
        let config = GameConfig { start_year: 2020, weapons_year: 2020, ..config() };
        let mut game = headless(config, 80, 40, ScriptedInput::constant(Controls::default())).unwrap();
        for _ in 0..10 {
            assert!(game.step().unwrap());
        }
        assert!(game.scheduler().count("debris") > 0);
        assert!(!game.world().obstacles.is_empty());
    }
}

use std::rc::Rc;

use log::info;

use crate::constants::{BORDER_SIZE, SPACESHIP_FRAME_REPEAT, SPACESHIP_TICK_SECS};
use crate::error::{GameError, Result};
use crate::frame::Frame;
use crate::scheduler::{Countdown, Task, TaskStatus, TickContext};
use crate::tasks::{Explosion, GameOver, Projectile};
use crate::types::{Position, Velocity};

/// The player's rocket. Steered by the controls with inertia, kept inside the
/// border, and able to shoot once the calendar reaches the weapons year.
/// Touching debris ends the game: the rocket hands over to [`GameOver`] and
/// never moves again.
pub struct Spaceship {
    frames: Vec<Rc<Frame>>,
    game_over: Rc<Frame>,
    frame_index: usize,
    repeats: u32,
    position: Position,
    velocity: Velocity,
    wait: Countdown,
    drawn: Option<(Position, usize)>,
}

impl Spaceship {
    pub fn new(row: f64, column: f64, frames: Vec<Rc<Frame>>, game_over: Rc<Frame>) -> Result<Self> {
        if frames.is_empty() || frames.iter().any(|frame| frame.is_empty()) {
            return Err(GameError::Configuration("spaceship needs at least one non-empty frame".into()));
        }
        Ok(Spaceship {
            frames,
            game_over,
            frame_index: 0,
            repeats: 0,
            position: Position::new(row, column),
            velocity: Velocity::default(),
            wait: Countdown::default(),
            drawn: None,
        })
    }

    fn animate(&mut self) {
        self.repeats += 1;
        if self.repeats >= SPACESHIP_FRAME_REPEAT {
            self.repeats = 0;
            self.frame_index = (self.frame_index + 1) % self.frames.len();
        }
    }
}

impl Task for Spaceship {
    fn name(&self) -> &'static str {
        "spaceship"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if self.wait.pending() {
            return TaskStatus::Live;
        }
        if let Some((position, index)) = self.drawn.take() {
            ctx.canvas.draw(position.row, position.column, &self.frames[index], true);
        }

        let frame = Rc::clone(&self.frames[self.frame_index]);
        let (rows, columns) = (frame.rows(), frame.columns());
        let controls = ctx.controls;

        if controls.fire && ctx.world.timeline.weapons_unlocked() {
            let muzzle = self.position.column + (columns / 2) as f64;
            ctx.spawn(Projectile::new(self.position.row, muzzle));
        }

        self.velocity = self.velocity.steer(controls.row_direction, controls.column_direction);
        let (height, width) = ctx.canvas.bounds();
        let border = BORDER_SIZE as f64;
        let max_row = height as f64 - rows as f64 - border;
        let max_column = width as f64 - columns as f64 - border;
        let next = self.position.advance(self.velocity);
        self.position = Position::new(
            next.row.max(border).min(max_row),
            next.column.max(border).min(max_column),
        );

        let obstacles = &mut ctx.world.obstacles;
        if let Some(obstacle) = obstacles.overlaps_region(self.position.row, self.position.column, rows, columns) {
            let (id, row, column) = (obstacle.id, obstacle.row, obstacle.column);
            let year = ctx.world.timeline.year();
            info!("Spaceship hit {:?} in year {}. Game over.", id, year);
            if obstacles.mark_hit(id) {
                ctx.spawn(Explosion::new(row, column));
            }
            ctx.spawn(GameOver::new(Rc::clone(&self.game_over)));
            return TaskStatus::Done;
        }

        ctx.canvas.draw(self.position.row, self.position.column, &frame, false);
        self.drawn = Some((self.position, self.frame_index));
        self.animate();
        self.wait = Countdown::seconds(SPACESHIP_TICK_SECS);
        TaskStatus::Live
    }
}

use std::rc::Rc;

use log::debug;

use crate::frame::Frame;
use crate::obstacles::ObstacleId;
use crate::scheduler::{Task, TaskStatus, TickContext};

/// A piece of garbage falling straight down. Owns exactly one obstacle for
/// as long as it flies and removes it itself when it leaves the screen or
/// finds it marked as hit.
pub struct Debris {
    frame: Rc<Frame>,
    row: f64,
    column: f64,
    speed: f64,
    obstacle: Option<ObstacleId>,
    drawn: bool,
}

impl Debris {
    pub fn new(column: f64, frame: Rc<Frame>, speed: f64) -> Self {
        Self::at(0.0, column, frame, speed)
    }

    pub fn at(row: f64, column: f64, frame: Rc<Frame>, speed: f64) -> Self {
        Debris { frame, row, column, speed, obstacle: None, drawn: false }
    }
}

impl Task for Debris {
    fn name(&self) -> &'static str {
        "debris"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        let (height, width) = ctx.canvas.bounds();
        let obstacles = &mut ctx.world.obstacles;

        let id = match self.obstacle {
            Some(id) => {
                if self.drawn {
                    ctx.canvas.draw(self.row, self.column, &self.frame, true);
                    self.drawn = false;
                }
                self.row += self.speed;
                obstacles.set_row(id, self.row);
                id
            }
            None => {
                self.column = self.column.clamp(0.0, width.saturating_sub(1) as f64);
                let id = obstacles.register(self.row, self.column, self.frame.rows(), self.frame.columns());
                self.obstacle = Some(id);
                id
            }
        };

        if self.row >= height as f64 || obstacles.was_hit(id) {
            debug!("Debris {:?} gone at row {:.1} (hit: {})", id, self.row, obstacles.was_hit(id));
            obstacles.unregister(id);
            return TaskStatus::Done;
        }

        ctx.canvas.draw(self.row, self.column, &self.frame, false);
        self.drawn = true;
        TaskStatus::Live
    }
}

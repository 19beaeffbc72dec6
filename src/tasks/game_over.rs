use std::rc::Rc;

use crate::frame::Frame;
use crate::scheduler::{Task, TaskStatus, TickContext};

/// Keeps the game-over banner centered on screen for the rest of the run.
pub struct GameOver {
    frame: Rc<Frame>,
}

impl GameOver {
    pub fn new(frame: Rc<Frame>) -> Self {
        GameOver { frame }
    }
}

impl Task for GameOver {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        let (height, width) = ctx.canvas.bounds();
        let row = (height / 2) as f64 - (self.frame.rows() / 2) as f64;
        let column = (width / 2) as f64 - (self.frame.columns() / 2) as f64;
        // Redrawn every tick since passing debris erases over it.
        ctx.canvas.draw(row, column, &self.frame, false);
        TaskStatus::Live
    }
}

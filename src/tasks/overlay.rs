use crate::frame::Frame;
use crate::scheduler::{Task, TaskStatus, TickContext};

/// Debug view: outlines every registered obstacle, refreshed each tick.
#[derive(Default)]
pub struct ObstacleOverlay {
    drawn: Vec<(f64, f64, Frame)>,
}

impl ObstacleOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for ObstacleOverlay {
    fn name(&self) -> &'static str {
        "obstacle_overlay"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        for (row, column, frame) in self.drawn.drain(..) {
            ctx.canvas.draw(row, column, &frame, true);
        }
        self.drawn = ctx.world.obstacles.iter().map(|obstacle| obstacle.bounding_box()).collect();
        for (row, column, frame) in &self.drawn {
            ctx.canvas.draw(*row, *column, frame, false);
        }
        TaskStatus::Live
    }
}

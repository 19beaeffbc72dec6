use std::sync::LazyLock;

use crate::frame::Frame;
use crate::scheduler::{Task, TaskStatus, TickContext};

static EXPLOSION_FRAMES: LazyLock<Vec<Frame>> = LazyLock::new(|| {
    [
        "    (_)\n(  (   (  (\n () (  (  )\n  ( )  ()",
        "    (_)\n(  (   (\n  (  (  )\n   )  (",
        "     (\n   (   (\n  (     (\n   )  (",
        "     (\n       (\n     (",
    ]
    .iter()
    .map(|text| Frame::new(text))
    .collect()
});

/// Cosmetic blast centered on a point: each frame is drawn for one tick and
/// erased on the next, then the task ends. Hits explode around the
/// obstacle's position, its top-left corner.
pub struct Explosion {
    corner_row: f64,
    corner_column: f64,
    index: usize,
    drawn: bool,
}

impl Explosion {
    pub fn new(center_row: f64, center_column: f64) -> Self {
        let first = &EXPLOSION_FRAMES[0];
        Explosion {
            corner_row: center_row - first.rows() as f64 / 2.0,
            corner_column: center_column - first.columns() as f64 / 2.0,
            index: 0,
            drawn: false,
        }
    }
}

impl Task for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if self.drawn {
            ctx.canvas.draw(self.corner_row, self.corner_column, &EXPLOSION_FRAMES[self.index], true);
            self.drawn = false;
            self.index += 1;
            return TaskStatus::Live;
        }
        match EXPLOSION_FRAMES.get(self.index) {
            Some(frame) => {
                ctx.canvas.draw(self.corner_row, self.corner_column, frame, false);
                self.drawn = true;
                TaskStatus::Live
            }
            None => TaskStatus::Done,
        }
    }
}

use std::rc::Rc;

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::constants::{BORDER_SIZE, GARBAGE_CATEGORY};
use crate::error::{GameError, Result};
use crate::frame::Frame;
use crate::scheduler::{Countdown, Task, TaskStatus, TickContext};
use crate::tasks::Debris;

/// Fills the orbit with garbage at the cadence the calendar dictates.
pub struct Spawner {
    frames: Vec<Rc<Frame>>,
    speed: f64,
    armed: Option<Rc<Frame>>,
    wait: Countdown,
}

impl Spawner {
    pub fn new(frames: Vec<Rc<Frame>>, speed: f64) -> Self {
        Spawner { frames, speed, armed: None, wait: Countdown::default() }
    }

    fn pick(&self, rng: &mut impl Rng) -> Result<Rc<Frame>> {
        self.frames
            .choose(rng)
            .cloned()
            .ok_or_else(|| GameError::AssetMissing(format!("no '{}' frames to spawn", GARBAGE_CATEGORY)))
    }
}

impl Task for Spawner {
    fn name(&self) -> &'static str {
        "spawner"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if self.wait.pending() {
            return TaskStatus::Live;
        }

        if let Some(frame) = self.armed.take() {
            let (_, width) = ctx.canvas.bounds();
            let border = BORDER_SIZE as i32;
            let last_column = width as i32 - frame.columns() as i32 - border;
            let column = if last_column > border {
                ctx.world.rng.gen_range(border..=last_column)
            } else {
                border
            };
            debug!("Garbage falls at column {} in year {}", column, ctx.world.timeline.year());
            ctx.spawn(Debris::new(column as f64, frame, self.speed));
        }

        match ctx.world.timeline.garbage_delay_ticks() {
            None => self.wait = Countdown::ticks(1),
            Some(delay) => {
                match self.pick(&mut ctx.world.rng) {
                    Ok(frame) => self.armed = Some(frame),
                    Err(e) => warn!("Skipping garbage spawn: {}", e),
                }
                self.wait = Countdown::ticks(delay);
            }
        }
        TaskStatus::Live
    }
}

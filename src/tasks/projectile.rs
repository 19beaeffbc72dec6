use log::info;

use crate::constants::{PROJECTILE_COLUMN_SPEED, PROJECTILE_ROW_SPEED};
use crate::rendering::Style;
use crate::scheduler::{Task, TaskStatus, TickContext};
use crate::tasks::Explosion;
use crate::types::{Position, Velocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flight {
    Spark,
    Flare,
    Cruise,
}

/// A single shot. Flashes at the muzzle, then flies in a straight line until
/// it leaves the screen or hits the first obstacle in its way.
pub struct Projectile {
    position: Position,
    velocity: Velocity,
    flight: Flight,
    drawn: Option<Position>,
}

impl Projectile {
    pub fn new(row: f64, column: f64) -> Self {
        Self::with_velocity(row, column, Velocity::new(PROJECTILE_ROW_SPEED, PROJECTILE_COLUMN_SPEED))
    }

    pub fn with_velocity(row: f64, column: f64, velocity: Velocity) -> Self {
        Projectile {
            position: Position::new(row, column),
            velocity,
            flight: Flight::Spark,
            drawn: None,
        }
    }

    fn symbol(&mut self) -> char {
        match self.flight {
            Flight::Spark => {
                self.flight = Flight::Flare;
                '*'
            }
            Flight::Flare => {
                self.flight = Flight::Cruise;
                'O'
            }
            Flight::Cruise => {
                self.position = self.position.advance(self.velocity);
                if self.velocity.column_speed != 0.0 { '-' } else { '|' }
            }
        }
    }
}

impl Task for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if let Some(drawn) = self.drawn.take() {
            ctx.canvas.draw_symbol(drawn.row, drawn.column, ' ', Style::Normal);
        }
        let symbol = self.symbol();
        let Position { row, column } = self.position;

        let (height, width) = ctx.canvas.bounds();
        let (max_row, max_column) = (height as f64 - 1.0, width as f64 - 1.0);
        if !(0.0 < row && row < max_row && 0.0 < column && column < max_column) {
            return TaskStatus::Done;
        }

        let obstacles = &mut ctx.world.obstacles;
        if let Some(obstacle) = obstacles.overlaps(row, column) {
            let (id, at_row, at_column) = (obstacle.id, obstacle.row, obstacle.column);
            // A box already marked this tick still stops the shot, but only
            // the first hit gets an explosion.
            if obstacles.mark_hit(id) {
                info!("Projectile hit {:?} at ({:.1}, {:.1})", id, row, column);
                ctx.spawn(Explosion::new(at_row, at_column));
            }
            return TaskStatus::Done;
        }

        ctx.canvas.draw_symbol(row, column, symbol, Style::Normal);
        self.drawn = Some(self.position);
        TaskStatus::Live
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::frame::Frame;
    use crate::rendering::GameGrid;
    use crate::scheduler::Scheduler;
    use crate::scheduler::tests::world;
    use crate::tasks::Debris;
    use crate::terminal_io::Controls;

    fn target() -> Rc<Frame> {
        Rc::new(Frame::new("######\n######"))
    }

    #[test]
    fn flashes_then_flies_up_and_leaves() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Projectile::with_velocity(3.0, 5.0, Velocity::new(-1.0, 0.0)));
        let mut canvas = GameGrid::new(10, 10);
        let mut world = world();

        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert_eq!(canvas.char_at(3, 5), '*');
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert_eq!(canvas.char_at(3, 5), 'O');
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert_eq!(canvas.char_at(3, 5), ' ');
        assert_eq!(canvas.char_at(2, 5), '|');
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert_eq!(canvas.char_at(1, 5), '|');
        // Row 0 is the border.
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert!(scheduler.is_empty());
        assert!(canvas.lines().iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn hit_at_the_muzzle_marks_once_and_explodes_once() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Debris::at(5.0, 10.0, target(), 0.0));
        let mut canvas = GameGrid::new(40, 20);
        let mut world = world();
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        let id = world.obstacles.iter().next().map(|o| o.id).unwrap();

        scheduler.spawn(Projectile::with_velocity(5.0, 10.0, Velocity::new(-1.0, 0.0)));
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert!(world.obstacles.was_hit(id));
        assert_eq!(scheduler.count("projectile"), 0);
        assert_eq!(scheduler.count("explosion"), 1);
        assert_eq!(scheduler.count("debris"), 1);

        // The owner removes its box on its next resume.
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert!(world.obstacles.is_empty());
        assert_eq!(scheduler.count("debris"), 0);
        assert_eq!(scheduler.count("explosion"), 1);
        // First explosion frame is centered on the obstacle's corner (5, 10).
        assert_eq!(canvas.char_at(3, 10), '_');
    }

    #[test]
    fn hit_lands_on_the_tick_the_shot_enters_the_box() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Debris::at(5.0, 10.0, target(), 0.0));
        let mut canvas = GameGrid::new(40, 20);
        let mut world = world();
        scheduler.tick(&mut canvas, &mut world, Controls::default());

        // Spark and flare at row 8, then rows 7 (outside [5, 7)) and 6.
        scheduler.spawn(Projectile::with_velocity(8.0, 12.0, Velocity::new(-1.0, 0.0)));
        for _ in 0..3 {
            scheduler.tick(&mut canvas, &mut world, Controls::default());
            assert_eq!(scheduler.count("projectile"), 1);
            assert_eq!(scheduler.count("explosion"), 0);
        }
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert_eq!(scheduler.count("projectile"), 0);
        assert_eq!(scheduler.count("explosion"), 1);
    }

    #[test]
    fn two_shots_on_one_obstacle_make_one_explosion() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Debris::at(5.0, 10.0, target(), 0.0));
        let mut canvas = GameGrid::new(40, 20);
        let mut world = world();
        scheduler.tick(&mut canvas, &mut world, Controls::default());

        scheduler.spawn(Projectile::with_velocity(5.0, 11.0, Velocity::new(-1.0, 0.0)));
        scheduler.spawn(Projectile::with_velocity(6.0, 14.0, Velocity::new(-1.0, 0.0)));
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert_eq!(scheduler.count("projectile"), 0);
        assert_eq!(scheduler.count("explosion"), 1);
    }
}

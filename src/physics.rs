use crate::constants::{ACCELERATION, FADING, SPEED_EPSILON, SPEED_LIMIT};
use crate::types::Velocity;

fn update_axis(speed: f64, direction: i8) -> f64 {
    match direction.signum() {
        0 => {
            let faded = speed * FADING;
            if faded.abs() < SPEED_EPSILON { 0.0 } else { faded }
        }
        d => (speed + ACCELERATION * d as f64).clamp(-SPEED_LIMIT, SPEED_LIMIT),
    }
}

/// Next speed pair for the given input directions. A pressed direction
/// accelerates that axis up to the speed limit; a released one fades towards
/// zero and snaps to zero once it drops below the epsilon.
pub fn update_speed(row_speed: f64, column_speed: f64, row_direction: i8, column_direction: i8) -> (f64, f64) {
    (update_axis(row_speed, row_direction), update_axis(column_speed, column_direction))
}

impl Velocity {
    pub fn steer(self, row_direction: i8, column_direction: i8) -> Velocity {
        let (row_speed, column_speed) =
            update_speed(self.row_speed, self.column_speed, row_direction, column_direction);
        Velocity::new(row_speed, column_speed)
    }
}

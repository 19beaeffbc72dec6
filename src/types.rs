/// Per-resume displacement in cells, rows first like the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub row_speed: f64,
    pub column_speed: f64,
}

impl Velocity {
    pub fn new(row_speed: f64, column_speed: f64) -> Self {
        Velocity { row_speed, column_speed }
    }

    pub fn is_still(&self) -> bool {
        self.row_speed == 0.0 && self.column_speed == 0.0
    }
}

/// Fractional screen position; rounded to a cell only when drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub row: f64,
    pub column: f64,
}

impl Position {
    pub fn new(row: f64, column: f64) -> Self {
        Position { row, column }
    }

    pub fn advance(&self, velocity: Velocity) -> Self {
        Position::new(self.row + velocity.row_speed, self.column + velocity.column_speed)
    }
}

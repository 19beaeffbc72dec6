//! Live bounding boxes of in-flight debris and the set of boxes that were hit.
//!
//! Each debris task registers exactly one obstacle and is the only one that
//! ever unregisters it. Hitters only mark; the owner notices the mark on its
//! next resume and removes its own box.

use std::collections::HashSet;

use crate::frame::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub row: f64,
    pub column: f64,
    pub rows_size: usize,
    pub columns_size: usize,
}

fn point_inside(row: f64, column: f64, rows_size: f64, columns_size: f64, point_row: f64, point_column: f64) -> bool {
    (row..row + rows_size).contains(&point_row) && (column..column + columns_size).contains(&point_column)
}

impl Obstacle {
    pub fn contains(&self, row: f64, column: f64) -> bool {
        point_inside(self.row, self.column, self.rows_size as f64, self.columns_size as f64, row, column)
    }

    /// Whether a box of the given size anchored at (row, column) touches this
    /// one: a corner of either box lies inside the other.
    pub fn collides(&self, row: f64, column: f64, rows_size: usize, columns_size: usize) -> bool {
        let (own_rows, own_columns) = (self.rows_size as f64, self.columns_size as f64);
        let (rows, columns) = (rows_size.max(1) as f64, columns_size.max(1) as f64);
        self.contains(row, column)
            || self.contains(row + rows - 1.0, column + columns - 1.0)
            || point_inside(row, column, rows, columns, self.row, self.column)
            || point_inside(
                row,
                column,
                rows,
                columns,
                self.row + own_rows - 1.0,
                self.column + own_columns - 1.0,
            )
    }

    /// Outline one cell outside the box, padded by a cell to cover movement
    /// between resumes. Anchored at (row - 1, column - 1).
    pub fn bounding_box(&self) -> (f64, f64, Frame) {
        let rows = self.rows_size + 1;
        let columns = self.columns_size + 1;
        let edge = format!(" {} ", "-".repeat(columns));
        let side = format!("|{}|", " ".repeat(columns));
        let mut lines = Vec::with_capacity(rows + 2);
        lines.push(edge.clone());
        lines.extend(std::iter::repeat_n(side, rows));
        lines.push(edge);
        (self.row - 1.0, self.column - 1.0, Frame::new(&lines.join("\n")))
    }
}

#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    hits: HashSet<ObstacleId>,
    next_id: u64,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, row: f64, column: f64, rows_size: usize, columns_size: usize) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push(Obstacle { id, row, column, rows_size, columns_size });
        id
    }

    /// Drops the obstacle together with its hit mark.
    pub fn unregister(&mut self, id: ObstacleId) {
        self.obstacles.retain(|obstacle| obstacle.id != id);
        self.hits.remove(&id);
    }

    pub fn set_row(&mut self, id: ObstacleId, row: f64) {
        if let Some(obstacle) = self.obstacles.iter_mut().find(|obstacle| obstacle.id == id) {
            obstacle.row = row;
        }
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|obstacle| obstacle.id == id)
    }

    /// First registered obstacle containing the point.
    pub fn overlaps(&self, row: f64, column: f64) -> Option<&Obstacle> {
        self.obstacles.iter().find(|obstacle| obstacle.contains(row, column))
    }

    pub fn overlaps_region(&self, row: f64, column: f64, rows_size: usize, columns_size: usize) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|obstacle| obstacle.collides(row, column, rows_size, columns_size))
    }

    /// Records a hit. Returns true only for the first mark of a live obstacle,
    /// which is the caller's cue to spawn the one explosion it gets.
    pub fn mark_hit(&mut self, id: ObstacleId) -> bool {
        self.get(id).is_some() && self.hits.insert(id)
    }

    pub fn was_hit(&self, id: ObstacleId) -> bool {
        self.hits.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

//! Space garbage: steer a rocket through falling orbital debris in the
//! terminal. Every moving thing is a cooperative task resumed once per tick
//! by a single-threaded round-robin [`scheduler::Scheduler`].

pub mod assets;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod game;
pub mod obstacles;
pub mod physics;
pub mod rendering;
pub mod scheduler;
pub mod tasks;
pub mod terminal_io;
pub mod timeline;
pub mod types;

pub use error::{GameError, Result};
pub use game::Game;
pub use physics::update_speed;
pub use scheduler::{Scheduler, Task, TaskStatus, TickContext, World};

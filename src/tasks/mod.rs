//! Behavior tasks run by the scheduler: stars, rocket, shots, garbage and the
//! cosmetic effects they trigger.

mod blink;
mod debris;
mod explosion;
mod game_over;
mod overlay;
mod projectile;
mod spaceship;
mod spawner;

pub use blink::{Blink, BlinkPhase, generate_stars};
pub use debris::Debris;
pub use explosion::Explosion;
pub use game_over::GameOver;
pub use overlay::ObstacleOverlay;
pub use projectile::Projectile;
pub use spaceship::Spaceship;
pub use spawner::Spawner;

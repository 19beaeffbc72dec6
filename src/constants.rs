// --- Scheduler ---
pub const TIC_TIMEOUT_MS: u64 = 100; // Real sleep between scheduling ticks
pub const TICKS_PER_SECOND: f64 = 10.0; // Granularity of task suspension

// --- Viewport ---
pub const BORDER_SIZE: u16 = 1;
pub const INFO_STRIP_HEIGHT: u16 = 3; // Bottom strip holding the year banner

// --- Stars ---
pub const STARS_COUNT: usize = 50;
pub const STAR_SYMBOLS: &[char] = &['+', '*', '.', ':'];

// --- Spaceship ---
pub const SPACESHIP_TICK_SECS: f64 = 0.1;
pub const SPACESHIP_FRAME_REPEAT: u32 = 2; // Resumes per sprite before switching

// --- Motion model ---
pub const ACCELERATION: f64 = 0.75;
pub const SPEED_LIMIT: f64 = 2.0;
pub const FADING: f64 = 0.8;
pub const SPEED_EPSILON: f64 = 0.1;

// --- Projectile ---
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;
pub const PROJECTILE_COLUMN_SPEED: f64 = 0.0;

// --- Debris ---
pub const GARBAGE_SPEED: f64 = 0.5;

// --- Timeline ---
pub const START_YEAR: u32 = 1957;
pub const WEAPONS_YEAR: u32 = 2020;
pub const YEAR_DURATION_SECS: f64 = 1.5;

// --- Asset ids ---
pub const ROCKET_CATEGORY: &str = "rocket";
pub const GARBAGE_CATEGORY: &str = "garbage";
pub const GAME_OVER_FRAME: &str = "game_over";

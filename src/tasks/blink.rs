use rand::Rng;

use crate::constants::STAR_SYMBOLS;
use crate::rendering::Style;
use crate::scheduler::{Countdown, Task, TaskStatus, TickContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkPhase {
    Dim,
    Rising,
    Bold,
    Fading,
}

impl BlinkPhase {
    pub const ALL: [BlinkPhase; 4] = [BlinkPhase::Dim, BlinkPhase::Rising, BlinkPhase::Bold, BlinkPhase::Fading];

    /// Style shown in this phase, how long it is held, and what follows.
    pub fn transition(self) -> (Style, f64, BlinkPhase) {
        match self {
            BlinkPhase::Dim => (Style::Dim, 2.0, BlinkPhase::Rising),
            BlinkPhase::Rising => (Style::Normal, 0.3, BlinkPhase::Bold),
            BlinkPhase::Bold => (Style::Bold, 0.5, BlinkPhase::Fading),
            BlinkPhase::Fading => (Style::Normal, 0.3, BlinkPhase::Dim),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// One twinkling star. Runs forever.
pub struct Blink {
    row: f64,
    column: f64,
    symbol: char,
    phase: BlinkPhase,
    wait: Countdown,
}

impl Blink {
    pub fn new(row: f64, column: f64, symbol: char, phase: BlinkPhase) -> Self {
        Blink { row, column, symbol, phase, wait: Countdown::default() }
    }
}

impl Task for Blink {
    fn name(&self) -> &'static str {
        "blink"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if self.wait.pending() {
            return TaskStatus::Live;
        }
        let (style, dwell, next) = self.phase.transition();
        ctx.canvas.draw_symbol(self.row, self.column, self.symbol, style);
        self.wait = Countdown::seconds(dwell);
        self.phase = next;
        TaskStatus::Live
    }
}

/// Stars scattered over the interior of a bordered viewport, each starting
/// at a random phase so they do not blink in unison.
pub fn generate_stars(rng: &mut impl Rng, height: u16, width: u16, count: usize) -> Vec<Blink> {
    if height < 3 || width < 3 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let row = rng.gen_range(1..=height - 2);
            let column = rng.gen_range(1..=width - 2);
            let symbol = STAR_SYMBOLS[rng.gen_range(0..STAR_SYMBOLS.len())];
            Blink::new(row as f64, column as f64, symbol, BlinkPhase::random(rng))
        })
        .collect()
}

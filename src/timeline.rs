//! In-game calendar. The year gates weapons and sets how often garbage falls.

use log::info;

use crate::constants::{INFO_STRIP_HEIGHT, YEAR_DURATION_SECS};
use crate::scheduler::{Countdown, Task, TaskStatus, TickContext};

const PHRASES: &[(u32, &str)] = &[
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    year: u32,
    weapons_year: u32,
}

impl Timeline {
    pub fn new(year: u32, weapons_year: u32) -> Self {
        Timeline { year, weapons_year }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn advance(&mut self) {
        self.year += 1;
    }

    pub fn weapons_unlocked(&self) -> bool {
        self.year >= self.weapons_year
    }

    pub fn phrase(&self) -> Option<&'static str> {
        PHRASES
            .iter()
            .find(|&&(year, _)| year == self.year)
            .map(|&(_, phrase)| phrase)
    }

    /// Ticks between two garbage spawns, or `None` while space is still clean.
    pub fn garbage_delay_ticks(&self) -> Option<u32> {
        match self.year {
            ..1961 => None,
            1961..1969 => Some(20),
            1969..1981 => Some(14),
            1981..1995 => Some(10),
            1995..2010 => Some(8),
            2010..2020 => Some(6),
            _ => Some(2),
        }
    }

    pub fn caption(&self) -> String {
        match self.phrase() {
            Some(phrase) => format!("Year {}. {}", self.year, phrase),
            None => format!("Year {}. ", self.year),
        }
    }
}

/// Moves the calendar one year forward every `YEAR_DURATION_SECS`, forever.
#[derive(Debug, Default)]
pub struct YearCounter {
    wait: Countdown,
    started: bool,
}

impl YearCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for YearCounter {
    fn name(&self) -> &'static str {
        "year_counter"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if self.wait.pending() {
            return TaskStatus::Live;
        }
        if self.started {
            let timeline = &mut ctx.world.timeline;
            timeline.advance();
            if let Some(phrase) = timeline.phrase() {
                info!("Year {}: {}", timeline.year(), phrase);
            }
        }
        self.started = true;
        self.wait = Countdown::seconds(YEAR_DURATION_SECS);
        TaskStatus::Live
    }
}

/// Shows the current year and its phrase centered in the bottom strip.
#[derive(Debug, Default)]
pub struct YearBanner {
    drawn: Option<(f64, f64, String)>,
}

impl YearBanner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for YearBanner {
    fn name(&self) -> &'static str {
        "year_banner"
    }

    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if let Some((row, column, text)) = self.drawn.take() {
            ctx.canvas.draw_text(row, column, &text, true);
        }
        let (height, width) = ctx.canvas.bounds();
        let text = ctx.world.timeline.caption();
        let row = (height.saturating_sub(INFO_STRIP_HEIGHT) + 1) as f64;
        let column = (width / 2) as f64 - (text.chars().count() / 2) as f64;
        ctx.canvas.draw_text(row, column, &text, false);
        self.drawn = Some((row, column, text));
        TaskStatus::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::GameGrid;
    use crate::scheduler::Scheduler;
    use crate::scheduler::tests::world;
    use crate::terminal_io::Controls;

    #[test]
    fn delay_table_follows_the_calendar() {
        let delay = |year| Timeline::new(year, 2020).garbage_delay_ticks();
        assert_eq!(delay(1957), None);
        assert_eq!(delay(1960), None);
        assert_eq!(delay(1961), Some(20));
        assert_eq!(delay(1975), Some(14));
        assert_eq!(delay(1981), Some(10));
        assert_eq!(delay(2000), Some(8));
        assert_eq!(delay(2019), Some(6));
        assert_eq!(delay(2020), Some(2));
        assert_eq!(delay(2100), Some(2));
    }

    #[test]
    fn weapons_unlock_at_configured_year() {
        let mut timeline = Timeline::new(2018, 2020);
        assert!(!timeline.weapons_unlocked());
        timeline.advance();
        timeline.advance();
        assert!(timeline.weapons_unlocked());
    }

    #[test]
    fn caption_includes_phrase_when_known() {
        assert_eq!(Timeline::new(1961, 2020).caption(), "Year 1961. Gagarin flew!");
        assert_eq!(Timeline::new(1962, 2020).caption(), "Year 1962. ");
    }

    #[test]
    fn counter_adds_one_year_every_fifteen_ticks() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn(YearCounter::new());
        let mut canvas = GameGrid::new(10, 10);
        let mut world = world();
        let start = world.timeline.year();

        let mut years = Vec::new();
        for _ in 0..46 {
            scheduler.tick(&mut canvas, &mut world, Controls::default());
            years.push(world.timeline.year() - start);
        }
        assert_eq!(years[14], 0);
        assert_eq!(years[15], 1);
        assert_eq!(years[29], 1);
        assert_eq!(years[30], 2);
        assert_eq!(years[45], 3);
        assert!(years.windows(2).all(|pair| pair[1] == pair[0] || pair[1] == pair[0] + 1));
    }

    #[test]
    fn banner_redraws_on_year_change() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn(YearBanner::new());
        let mut canvas = GameGrid::new(60, 10);
        let mut world = world();
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        assert!(canvas.lines()[8].contains("Year 2020. Take the plasma gun!"));

        world.timeline.advance();
        scheduler.tick(&mut canvas, &mut world, Controls::default());
        let line = &canvas.lines()[8];
        assert_eq!(line.trim(), "Year 2021.");
    }
}

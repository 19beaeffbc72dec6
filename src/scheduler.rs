//! Single-threaded round-robin executor for cooperative tasks.
//!
//! A task is an explicit state machine advanced by [`Task::step`]. Returning
//! [`TaskStatus::Live`] is a yield back to the scheduler; the task is resumed
//! once on every following tick until it returns [`TaskStatus::Done`].

use log::debug;
use rand::rngs::StdRng;

use crate::constants::TICKS_PER_SECOND;
use crate::obstacles::ObstacleRegistry;
use crate::rendering::GameGrid;
use crate::terminal_io::Controls;
use crate::timeline::Timeline;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Live,
    Done,
}

pub trait Task {
    fn name(&self) -> &'static str;
    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus;
}

/// State shared by every task. Only touched between suspension points, so a
/// task never sees it half-updated.
pub struct World {
    pub obstacles: ObstacleRegistry,
    pub timeline: Timeline,
    pub rng: StdRng,
}

impl World {
    pub fn new(timeline: Timeline, rng: StdRng) -> Self {
        World { obstacles: ObstacleRegistry::new(), timeline, rng }
    }
}

/// Everything a task may touch during one resume.
pub struct TickContext<'a> {
    pub canvas: &'a mut GameGrid,
    pub world: &'a mut World,
    pub controls: Controls,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl TickContext<'_> {
    /// Queues a task; it is first resumed on the next tick.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        debug!("Spawning task {}", task.name());
        self.spawned.push(Box::new(task));
    }
}

/// Number of yields a suspension of `seconds` takes: ten per second, rounded
/// down, and never less than one.
pub fn ticks_for(seconds: f64) -> u32 {
    ((seconds * TICKS_PER_SECOND).floor() as u32).max(1)
}

/// A pending suspension. The resume that arms it counts as its first yield;
/// [`Countdown::pending`] swallows the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn ticks(ticks: u32) -> Self {
        Countdown { remaining: ticks.max(1) - 1 }
    }

    pub fn seconds(seconds: f64) -> Self {
        Self::ticks(ticks_for(seconds))
    }

    /// True while the task should keep yielding without doing any work.
    pub fn pending(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.tasks.push(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn count(&self, name: &str) -> usize {
        self.tasks.iter().filter(|task| task.name() == name).count()
    }

    /// Resumes every task present at the start of the tick exactly once, in
    /// order, dropping the ones that finish. Tasks spawned meanwhile join the
    /// end of the queue afterwards.
    pub fn tick(&mut self, canvas: &mut GameGrid, world: &mut World, controls: Controls) {
        let mut spawned: Vec<Box<dyn Task>> = Vec::new();
        self.tasks.retain_mut(|task| {
            let mut ctx = TickContext {
                canvas: &mut *canvas,
                world: &mut *world,
                controls,
                spawned: &mut spawned,
            };
            match task.step(&mut ctx) {
                TaskStatus::Live => true,
                TaskStatus::Done => {
                    debug!("Task {} finished", task.name());
                    false
                }
            }
        });
        self.tasks.append(&mut spawned);
        self.ticks += 1;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;

    use super::*;

    pub(crate) fn world() -> World {
        World::new(Timeline::new(2020, 2020), StdRng::seed_from_u64(7))
    }

    /// Records every resume and finishes after `lifetime` of them.
    struct Probe {
        id: u32,
        lifetime: u32,
        log: Rc<RefCell<Vec<(u64, u32)>>>,
        tick: Rc<RefCell<u64>>,
        children: Vec<Probe>,
    }

    impl Task for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
            self.log.borrow_mut().push((*self.tick.borrow(), self.id));
            for child in self.children.drain(..) {
                ctx.spawn(child);
            }
            self.lifetime -= 1;
            if self.lifetime == 0 { TaskStatus::Done } else { TaskStatus::Live }
        }
    }

    fn run(scheduler: &mut Scheduler, tick: &Rc<RefCell<u64>>, ticks: u64) {
        let mut canvas = GameGrid::new(10, 10);
        let mut world = world();
        for _ in 0..ticks {
            scheduler.tick(&mut canvas, &mut world, Controls::default());
            *tick.borrow_mut() += 1;
        }
    }

    #[test]
    fn each_live_task_resumes_once_per_tick_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tick = Rc::new(RefCell::new(0));
        let mut scheduler = Scheduler::new();
        for (id, lifetime) in [(1, 3), (2, 1), (3, 2)] {
            scheduler.spawn(Probe { id, lifetime, log: log.clone(), tick: tick.clone(), children: Vec::new() });
        }
        run(&mut scheduler, &tick, 5);

        assert_eq!(
            *log.borrow(),
            vec![(0, 1), (0, 2), (0, 3), (1, 1), (1, 3), (2, 1)]
        );
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.ticks(), 5);
    }

    #[test]
    fn spawned_tasks_start_next_tick_at_the_end() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tick = Rc::new(RefCell::new(0));
        let child = Probe { id: 9, lifetime: 2, log: log.clone(), tick: tick.clone(), children: Vec::new() };
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Probe { id: 1, lifetime: 1, log: log.clone(), tick: tick.clone(), children: vec![child] });
        scheduler.spawn(Probe { id: 2, lifetime: 3, log: log.clone(), tick: tick.clone(), children: Vec::new() });
        run(&mut scheduler, &tick, 3);

        assert_eq!(
            *log.borrow(),
            vec![(0, 1), (0, 2), (1, 2), (1, 9), (2, 2), (2, 9)]
        );
    }

    #[test]
    fn ticks_for_rounds_down_with_floor_of_one() {
        assert_eq!(ticks_for(2.0), 20);
        assert_eq!(ticks_for(0.3), 3);
        assert_eq!(ticks_for(0.5), 5);
        assert_eq!(ticks_for(1.5), 15);
        assert_eq!(ticks_for(0.1), 1);
        assert_eq!(ticks_for(0.05), 1);
        assert_eq!(ticks_for(0.0), 1);
    }

    #[test]
    fn countdown_yields_requested_number_of_times() {
        let mut countdown = Countdown::seconds(0.3);
        // The arming resume was the first yield.
        assert!(countdown.pending());
        assert!(countdown.pending());
        assert!(!countdown.pending());

        let mut zero = Countdown::ticks(0);
        assert!(!zero.pending());
    }
}

//! Loop scheduler
//!
//! Drives the physics tick at a cadence supplied by a `TickDriver`, then
//! hands the post-tick state to a frame callback. Each iteration runs
//! strictly in order: wait, snapshot input, tick, frame.

use std::thread;
use std::time::{Duration, Instant};

use crate::sim::{InputSource, PlayerBody, StepEvents, TileGrid, World, tick};

/// State handed to the renderer after each tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a TileGrid,
    pub player: &'a PlayerBody,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub tick: u64,
    pub events: StepEvents,
}

/// Source of scheduling opportunities
///
/// `wait_next` is the only place the loop suspends. Returning `false`
/// stops the loop.
pub trait TickDriver {
    fn wait_next(&mut self) -> bool;
}

/// Runs exactly `remaining` ticks back to back without sleeping
#[derive(Debug, Clone, Copy)]
pub struct StepCount {
    remaining: u64,
}

impl StepCount {
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl TickDriver for StepCount {
    fn wait_next(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Sleeps to hold a steady tick rate
///
/// If a tick overruns its slot the next deadline is reset from now instead
/// of trying to catch up.
#[derive(Debug, Clone)]
pub struct FixedRate {
    period: Duration,
    next: Option<Instant>,
    limit: Option<u64>,
    ticks: u64,
}

impl FixedRate {
    /// A zero rate is treated as 1 Hz
    pub fn new(hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / hz.max(1),
            next: None,
            limit: None,
            ticks: 0,
        }
    }

    /// Stop after `ticks` opportunities
    pub fn with_limit(mut self, ticks: u64) -> Self {
        self.limit = Some(ticks);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickDriver for FixedRate {
    fn wait_next(&mut self) -> bool {
        if self.limit.is_some_and(|limit| self.ticks >= limit) {
            return false;
        }

        let now = Instant::now();
        match self.next {
            Some(deadline) if deadline > now => {
                thread::sleep(deadline - now);
                self.next = Some(deadline + self.period);
            }
            _ => self.next = Some(now + self.period),
        }

        self.ticks += 1;
        true
    }
}

/// Run the loop until the driver stops. Returns the number of ticks executed.
pub fn run<I, D, F>(world: &mut World, input: &I, driver: &mut D, mut on_frame: F) -> u64
where
    I: InputSource + ?Sized,
    D: TickDriver + ?Sized,
    F: FnMut(Frame<'_>),
{
    run_with_viewport(world, input, driver, (0.0, 0.0), &mut on_frame)
}

/// Like [`run`], reporting a viewport size with every frame
pub fn run_with_viewport<I, D, F>(
    world: &mut World,
    input: &I,
    driver: &mut D,
    viewport: (f32, f32),
    mut on_frame: F,
) -> u64
where
    I: InputSource + ?Sized,
    D: TickDriver + ?Sized,
    F: FnMut(Frame<'_>),
{
    log::debug!("Scheduler starting at tick {}", world.time_ticks);
    let mut executed = 0;

    while driver.wait_next() {
        let snapshot = input.snapshot();
        let events = tick(world, &snapshot);
        executed += 1;

        on_frame(Frame {
            grid: &world.grid,
            player: &world.player,
            viewport_width: viewport.0,
            viewport_height: viewport.1,
            tick: world.time_ticks,
            events,
        });
    }

    log::debug!("Scheduler stopped after {} ticks", executed);
    executed
}

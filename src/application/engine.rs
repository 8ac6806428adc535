//! Autoplay driver for the board.
//!
//! The engine models a self-rescheduling deferred callback with a single
//! timer slot that the frame loop polls through [`SimulationEngine::advance`].
//! Stopping is lazy: an armed tick is never cancelled, it checks the running
//! flag when it fires and drops out without stepping or re-arming.

use std::time::Duration;

use tracing::debug;

use super::GridStore;
use crate::domain::Grid;

/// Slowest allowed rate in generations per second
pub const MIN_RATE: u32 = 1;

/// Fastest allowed rate in generations per second
pub const MAX_RATE: u32 = 10;

/// Rate used when nothing else is configured
pub const DEFAULT_RATE: u32 = 2;

/// Most ticks a single `advance` call may fire; any further backlog is dropped
const MAX_TICKS_PER_ADVANCE: u32 = 5;

/// Engine state: Stopped is initial, nothing is terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug)]
pub struct SimulationEngine {
    state: RunState,
    rate: u32,
    /// Remaining delay of the armed tick, if any
    pending: Option<Duration>,
}

impl SimulationEngine {
    pub fn new(rate: u32) -> Self {
        Self {
            state: RunState::Stopped,
            rate,
            pending: None,
        }
    }

    /// Pure successor of `grid`
    pub fn step(grid: &Grid) -> Grid {
        grid.step()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Set generations per second. Callers clamp to
    /// [`MIN_RATE`]..=[`MAX_RATE`]; the armed tick keeps its delay and the
    /// new rate applies from the next re-arm.
    pub fn set_rate(&mut self, rate: u32) {
        if rate != self.rate {
            debug!(from = self.rate, to = rate, "rate changed");
        }
        self.rate = rate;
    }

    /// Delay between ticks at the current rate
    pub fn interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.rate.max(1)))
    }

    /// Remaining delay of the armed tick, `None` when nothing is armed
    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending
    }

    /// Begin autoplay. Only a Stopped -> Running transition arms a tick,
    /// and it fires on the next poll. A stale tick left over from an
    /// earlier `stop` is replaced rather than kept alongside.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = RunState::Running;
        self.pending = Some(Duration::ZERO);
    }

    /// End autoplay. Any armed tick stays armed and no-ops when it fires.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Advance the timer by `elapsed`, firing every tick whose delay runs
    /// out. Returns the number of generations produced.
    pub fn advance(&mut self, store: &mut GridStore, elapsed: Duration) -> u32 {
        let mut budget = elapsed;
        let mut fired = 0;
        let mut generations = 0;

        while let Some(remaining) = self.pending {
            if remaining > budget {
                self.pending = Some(remaining - budget);
                break;
            }
            if fired == MAX_TICKS_PER_ADVANCE {
                // Drop the backlog; the armed tick fires on the next poll
                self.pending = Some(Duration::ZERO);
                break;
            }
            budget -= remaining;
            self.pending = None;
            fired += 1;
            if self.tick(store) {
                generations += 1;
            }
        }

        generations
    }

    /// Timer callback. Returns whether a generation was produced.
    fn tick(&mut self, store: &mut GridStore) -> bool {
        if !self.is_running() {
            debug!("stale tick ignored after stop");
            return false;
        }

        let next = Self::step(store.current());
        store.replace(next);
        self.pending = Some(self.interval());
        true
    }

    /// Manual single step, only honoured while stopped.
    /// Returns whether a generation was produced.
    pub fn step_once(&mut self, store: &mut GridStore) -> bool {
        if self.is_running() {
            debug!("manual step rejected while running");
            return false;
        }

        let next = Self::step(store.current());
        store.replace(next);
        true
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn blinker_store() -> GridStore {
        GridStore::with_grid(Grid::with_live_cells(&[(8, 9), (8, 10), (8, 11)]))
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_initial_state() {
        let engine = SimulationEngine::default();
        assert_eq!(engine.state(), RunState::Stopped);
        assert_eq!(engine.rate(), DEFAULT_RATE);
        assert_eq!(engine.pending_delay(), None);
        assert_eq!(engine.interval(), ms(500));
    }

    #[test]
    fn test_stopped_engine_never_steps() {
        let mut store = blinker_store();
        let before = store.get();
        let mut engine = SimulationEngine::default();

        assert_eq!(engine.advance(&mut store, Duration::from_secs(10)), 0);
        assert!(Arc::ptr_eq(&before, &store.get()));
    }

    #[test]
    fn test_start_fires_on_next_poll_then_rearms() {
        let mut store = blinker_store();
        let initial = store.get();
        let mut engine = SimulationEngine::default();

        engine.start();
        assert_eq!(engine.pending_delay(), Some(Duration::ZERO));

        assert_eq!(engine.advance(&mut store, Duration::ZERO), 1);
        assert_eq!(*store.get(), initial.step());
        assert_eq!(engine.pending_delay(), Some(ms(500)));
    }

    #[test]
    fn test_ticks_follow_rate() {
        let mut store = blinker_store();
        let mut engine = SimulationEngine::default();
        engine.start();
        engine.advance(&mut store, Duration::ZERO);

        assert_eq!(engine.advance(&mut store, ms(499)), 0);
        assert_eq!(engine.pending_delay(), Some(ms(1)));
        assert_eq!(engine.advance(&mut store, ms(1)), 1);
        assert_eq!(engine.advance(&mut store, ms(1000)), 2);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut store = blinker_store();
        let mut engine = SimulationEngine::new(MAX_RATE);
        engine.start();

        let generations = engine.advance(&mut store, Duration::from_secs(60));

        assert_eq!(generations, MAX_TICKS_PER_ADVANCE);
        assert_eq!(engine.pending_delay(), Some(Duration::ZERO));
    }

    #[test]
    fn test_start_twice_does_not_rearm() {
        let mut store = blinker_store();
        let mut engine = SimulationEngine::default();
        engine.start();
        engine.advance(&mut store, ms(100));

        engine.start();
        assert_eq!(engine.pending_delay(), Some(ms(400)));
    }

    #[test]
    fn test_tick_after_stop_does_not_step_or_rearm() {
        let mut store = blinker_store();
        let mut engine = SimulationEngine::default();
        engine.start();
        engine.advance(&mut store, Duration::ZERO);
        let after_first = store.get();

        engine.stop();
        assert_eq!(engine.pending_delay(), Some(ms(500)));

        assert_eq!(engine.advance(&mut store, ms(500)), 0);
        assert!(Arc::ptr_eq(&after_first, &store.get()));
        assert_eq!(engine.pending_delay(), None);
        assert_eq!(engine.advance(&mut store, Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_restart_replaces_stale_tick() {
        let mut store = blinker_store();
        let mut engine = SimulationEngine::default();
        engine.start();
        engine.advance(&mut store, Duration::ZERO);
        engine.stop();

        engine.start();
        assert_eq!(engine.pending_delay(), Some(Duration::ZERO));
        assert_eq!(engine.advance(&mut store, Duration::ZERO), 1);
        assert_eq!(engine.pending_delay(), Some(ms(500)));
    }

    #[test]
    fn test_rate_change_applies_to_next_tick_only() {
        let mut store = blinker_store();
        let mut engine = SimulationEngine::default();
        engine.start();
        engine.advance(&mut store, Duration::ZERO);

        engine.set_rate(10);
        assert_eq!(engine.pending_delay(), Some(ms(500)));

        assert_eq!(engine.advance(&mut store, ms(499)), 0);
        assert_eq!(engine.advance(&mut store, ms(1)), 1);
        assert_eq!(engine.pending_delay(), Some(ms(100)));
    }

    #[test]
    fn test_step_once_only_while_stopped() {
        let mut store = blinker_store();
        let initial = store.get();
        let mut engine = SimulationEngine::default();

        assert!(engine.step_once(&mut store));
        assert_eq!(*store.get(), initial.step());

        engine.start();
        let running_snapshot = store.get();
        assert!(!engine.step_once(&mut store));
        assert!(Arc::ptr_eq(&running_snapshot, &store.get()));
    }

    #[test]
    fn test_step_is_pure() {
        let grid = Grid::with_live_cells(&[(0, 0), (0, 1), (1, 0)]);
        let copy = grid.clone();
        assert_eq!(SimulationEngine::step(&grid), SimulationEngine::step(&grid));
        assert_eq!(grid, copy);
    }
}

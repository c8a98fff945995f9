// simulation.rs - Driver state: current generation, play flag and speed

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::engine::next_generation;
use crate::error::LifeError;
use crate::grid::{Grid, create_initial_grid};

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 9;
pub const STARTING_SPEED: u8 = 6;

/// Playback speed, always within `MIN_SPEED..=MAX_SPEED`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    /// Clamps `value` into the supported range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Pause between two generations: `1001 - speed * 100` ms.
    pub fn delay(self) -> Duration {
        Duration::from_millis(1001 - u64::from(self.0) * 100)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(STARTING_SPEED)
    }
}

/// State behind the play/pause loop.
///
/// The UI polls [`Simulation::tick`] once per frame; nothing here owns a
/// timer, so stopping playback just means no further advances happen.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    is_running: bool,
    speed: Speed,
    last_update: Instant,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            grid: create_initial_grid(),
            generation: 0,
            is_running: false,
            speed: Speed::default(),
            last_update: Instant::now(),
        }
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paused simulation starting from `grid` at generation 0.
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid, ..Self::default() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self) -> bool {
        self.is_running
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn delay(&self) -> Duration {
        self.speed.delay()
    }

    pub fn set_speed(&mut self, speed: Speed) {
        if speed != self.speed {
            debug!("speed {} -> {}", self.speed.get(), speed.get());
            self.speed = speed;
        }
    }

    pub fn toggle_playing(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
        }
        debug!("playback {} at generation {}", if self.is_running { "started" } else { "paused" }, self.generation);
    }

    /// Replaces the grid with the next generation.
    pub fn advance(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation = self.generation.wrapping_add(1);
        debug!("generation {} ({} alive)", self.generation, self.grid.population());
    }

    /// Advances once if playing and a full delay has passed since the last
    /// advance. Returns whether a generation was produced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.saturating_duration_since(self.last_update) < self.delay() {
            return false;
        }
        self.advance();
        self.last_update = now;
        true
    }

    /// Brings a cell to life. Refused (`Ok(false)`) while playing.
    pub fn edit_cell(&mut self, row: usize, col: usize) -> Result<bool, LifeError> {
        if self.is_running {
            warn!("ignoring edit of ({row}, {col}) while playing");
            return Ok(false);
        }
        self.grid.try_set_cell(row, col, true)?;
        Ok(true)
    }
}

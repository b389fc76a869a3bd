// session.rs - Simulation state held by a front end between frames

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{LifeError, Result};
use crate::patterns::{self, Pattern};
use crate::{Cell, Grid, Snapshot, Viewport, ascii, engine};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    /// Time between generations while running.
    pub interval: Duration,
    /// How many recent generations are remembered for repeat detection.
    pub history_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 18,
            interval: Duration::from_millis(250),
            history_len: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    Left,
    Right,
    Up,
    Down,
}

/// One running simulation: the current generation, the window it is viewed
/// through, and the play/draw state of whoever is driving it.
///
/// Nothing here schedules itself. The owner calls [`Session::poll`] from its
/// frame loop (or [`Session::advance`] directly) to move time forward.
pub struct Session {
    grid: Grid,
    viewport: Viewport,
    tick_count: u64,
    running: bool,
    drawing: bool,
    interval: Duration,
    last_advance: Instant,
    history: VecDeque<u64>,
    history_len: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            grid: Grid::new(),
            viewport: Viewport::new(config.width, config.height, Cell::ORIGIN),
            tick_count: 0,
            running: false,
            drawing: false,
            interval: config.interval,
            last_advance: Instant::now(),
            history: VecDeque::with_capacity(config.history_len),
            history_len: config.history_len,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn population(&self) -> usize {
        self.grid.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Moves to the next generation. Returns `true` when the new generation
    /// repeats one seen recently, in which case the session also pauses.
    pub fn advance(&mut self) -> bool {
        self.grid = engine::tick(&self.grid);
        self.tick_count += 1;

        let fingerprint = fingerprint(&self.grid);
        if self.history.contains(&fingerprint) {
            if self.running {
                info!(tick_count = self.tick_count, "generation repeats, pausing");
            }
            self.running = false;
            return true;
        }
        self.remember(fingerprint);
        false
    }

    /// Advances once if running and a full interval has passed since the
    /// previous generation. Returns whether a generation was produced.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running || now.saturating_duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.last_advance = now;
        self.advance();
        true
    }

    /// Single manual step; ignored while running.
    pub fn step(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.advance()
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        if self.running {
            self.drawing = false;
            self.last_advance = Instant::now();
            self.history.clear();
            self.remember(fingerprint(&self.grid));
        }
        debug!(running = self.running, "toggled running");
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Draw mode can only be entered while paused.
    pub fn toggle_drawing(&mut self) {
        if self.running {
            return;
        }
        self.drawing = !self.drawing;
    }

    /// Left and Up shift the window towards larger coordinates, so the
    /// pattern appears to slide left or up.
    pub fn pan(&mut self, direction: Pan) {
        let dx = i64::from(self.viewport.width.div_ceil(4));
        let dy = i64::from(self.viewport.height.div_ceil(4));
        let center = self.viewport.center;
        self.viewport.center = match direction {
            Pan::Left => center.offset(dx, 0),
            Pan::Right => center.offset(-dx, 0),
            Pan::Up => center.offset(0, dy),
            Pan::Down => center.offset(0, -dy),
        };
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.running {
            return Err(LifeError::Running);
        }
        self.viewport.width = width;
        self.viewport.height = height;
        Ok(())
    }

    /// Toggles the cell under window position (`column`, `row`) while in
    /// draw mode. Returns the plane cell that changed, if any.
    pub fn click(&mut self, column: u32, row: u32) -> Option<Cell> {
        if !self.drawing {
            return None;
        }
        let cell = self.viewport.cell_at(column, row)?;
        self.grid = self.grid.toggle(cell);
        Some(cell)
    }

    /// The current window as ASCII art.
    pub fn render(&self) -> String {
        ascii::render(&self.grid, &self.viewport)
    }

    pub fn load_ascii(&mut self, text: &str) {
        let grid = ascii::parse(text);
        info!(population = grid.len(), "loaded ascii pattern");
        self.replace(grid, 0);
    }

    /// Restores grid, tick count and viewport from a snapshot. On error the
    /// session is left exactly as it was.
    pub fn load_snapshot(&mut self, text: &str) -> Result<()> {
        let snapshot = Snapshot::decode(text)?;
        info!(
            tick_count = snapshot.tick_count,
            population = snapshot.grid.len(),
            "loaded snapshot"
        );
        self.viewport = snapshot.viewport;
        self.replace(snapshot.grid, snapshot.tick_count);
        Ok(())
    }

    pub fn save_ascii(&self) -> String {
        info!(
            width = self.viewport.width,
            height = self.viewport.height,
            "saving ascii window"
        );
        self.render()
    }

    pub fn save_snapshot(&self) -> Result<String> {
        info!(tick_count = self.tick_count, population = self.grid.len(), "saving snapshot");
        self.snapshot().encode()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick_count: self.tick_count,
            viewport: self.viewport,
            grid: self.grid.clone(),
        }
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        info!(pattern = pattern.name, "applying pattern");
        self.replace(pattern.grid(), 0);
    }

    pub fn randomize(&mut self, seed: u64) {
        let grid = patterns::random_fill(&self.viewport, seed);
        self.replace(grid, 0);
    }

    pub fn clear(&mut self) {
        self.replace(Grid::new(), 0);
    }

    fn replace(&mut self, grid: Grid, tick_count: u64) {
        self.running = false;
        self.grid = grid;
        self.tick_count = tick_count;
        self.history.clear();
    }

    fn remember(&mut self, fingerprint: u64) {
        if self.history_len == 0 {
            return;
        }
        if self.history.len() == self.history_len {
            self.history.pop_front();
        }
        self.history.push_back(fingerprint);
    }
}

fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(SessionConfig::default())
    }

    #[test]
    fn advance_counts_ticks() {
        let mut s = session();
        s.load_ascii("***");
        assert!(!s.advance());
        assert_eq!(s.tick_count(), 1);
        assert_eq!(s.render().matches('*').count(), 3);
    }

    #[test]
    fn still_life_pauses_running_session() {
        let mut s = session();
        s.load_ascii("**\n**");
        s.toggle_running();
        assert!(s.is_running());
        assert!(s.advance());
        assert!(!s.is_running());
    }

    #[test]
    fn oscillator_is_detected_within_history() {
        let mut s = session();
        s.apply_pattern(patterns::find("Blinker").unwrap());
        s.toggle_running();
        assert!(!s.advance());
        assert!(s.advance());
        assert!(!s.is_running());
        assert_eq!(s.tick_count(), 2);
    }

    #[test]
    fn poll_respects_interval() {
        let mut s = Session::new(SessionConfig {
            interval: Duration::from_millis(100),
            ..SessionConfig::default()
        });
        s.load_ascii("*.*\n.*.\n*.*");
        let start = Instant::now();
        assert!(!s.poll(start + Duration::from_secs(1)), "paused sessions never advance");

        s.toggle_running();
        let started = Instant::now();
        assert!(!s.poll(started));
        assert!(s.poll(started + Duration::from_millis(150)));
        assert_eq!(s.tick_count(), 1);
    }

    #[test]
    fn pan_moves_by_quarter_of_window() {
        let mut s = session(); // 20 x 18
        s.pan(Pan::Left);
        assert_eq!(s.viewport().center, Cell::new(5, 0));
        s.pan(Pan::Up);
        assert_eq!(s.viewport().center, Cell::new(5, 5));
        s.pan(Pan::Right);
        s.pan(Pan::Down);
        assert_eq!(s.viewport().center, Cell::ORIGIN);
    }

    #[test]
    fn click_only_edits_in_draw_mode() {
        let mut s = session();
        assert_eq!(s.click(10, 9), None);
        assert!(s.grid().is_empty());

        s.toggle_drawing();
        assert_eq!(s.click(10, 9), Some(Cell::ORIGIN));
        assert!(s.grid().is_alive(Cell::ORIGIN));
        assert_eq!(s.click(0, 0), Some(Cell::new(-10, -9)));
        assert_eq!(s.click(10, 9), Some(Cell::ORIGIN));
        assert!(!s.grid().is_alive(Cell::ORIGIN));
        assert_eq!(s.click(20, 0), None);
    }

    #[test]
    fn starting_leaves_draw_mode() {
        let mut s = session();
        s.toggle_drawing();
        s.toggle_running();
        assert!(!s.is_drawing());
        s.toggle_drawing();
        assert!(!s.is_drawing());
    }

    #[test]
    fn resize_rejected_while_running() {
        let mut s = session();
        s.toggle_running();
        assert!(matches!(s.resize(5, 5), Err(LifeError::Running)));
        s.pause();
        s.resize(5, 5).unwrap();
        assert_eq!(s.render(), ".....\n.....\n.....\n.....\n.....");
    }

    #[test]
    fn snapshot_round_trip_restores_session() {
        let mut s = session();
        s.apply_pattern(patterns::find("Glider").unwrap());
        s.advance();
        s.advance();
        s.pan(Pan::Down);
        let saved = s.save_snapshot().unwrap();

        let mut restored = session();
        restored.load_snapshot(&saved).unwrap();
        assert_eq!(restored.grid(), s.grid());
        assert_eq!(restored.tick_count(), 2);
        assert_eq!(restored.viewport(), s.viewport());
    }

    #[test]
    fn bad_snapshot_leaves_state_untouched() {
        let mut s = session();
        s.load_ascii("*.*\n***");
        s.advance();
        let grid = s.grid().clone();
        let viewport = *s.viewport();

        assert!(s.load_snapshot("{\"tickCount\": 1}").is_err());
        assert_eq!(s.grid(), &grid);
        assert_eq!(s.viewport(), &viewport);
        assert_eq!(s.tick_count(), 1);
    }

    #[test]
    fn clear_resets_everything_but_viewport() {
        let mut s = session();
        s.randomize(3);
        s.advance();
        s.clear();
        assert!(s.grid().is_empty());
        assert_eq!(s.tick_count(), 0);
        assert_eq!(s.population(), 0);
    }
}

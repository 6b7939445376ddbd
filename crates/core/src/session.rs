//! Game session - the single owner of grid, pieces and score
//!
//! The session ties together the grid, the piece controller, scoring and the
//! background reveal. It runs the `Idle -> Running -> GameOver | Won` state
//! machine, applies at most one gravity step per tick, and reports every lock
//! as a [`LockOutcome`] value instead of calling into the host.

use log::{debug, info};

use crate::controller::{ActivePiece, DropOutcome};
use crate::grid::Grid;
use crate::reveal::BackgroundReveal;
use crate::rng::PieceSource;
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_reward};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Cell, Direction, GameAction, Phase, PieceKind, DEFAULT_REVEAL_GOAL, ROWS};

/// Session construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Piece RNG seed
    pub seed: u32,
    /// Revealed background rows that win the game; `None` never wins
    pub reveal_goal: Option<u8>,
    /// Number of loaded photos; when non-zero locked cells are photo tiles
    pub photo_count: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            reveal_goal: Some(DEFAULT_REVEAL_GOAL),
            photo_count: 0,
        }
    }
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub level_changed: bool,
    pub triggered_win: bool,
    pub triggered_game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    current: Option<ActivePiece>,
    next: Option<PieceKind>,
    source: PieceSource,
    config: SessionConfig,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u8,
    drop_interval_ms: u32,
    drop_counter_ms: u32,
    /// Pieces locked this session (drives photo cycling)
    locks: u32,
    reveal: BackgroundReveal,
    /// Last lock event (consumed by observers).
    last_event: Option<LockOutcome>,
}

impl GameSession {
    /// Create an idle session with default settings and the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(SessionConfig {
            seed,
            ..SessionConfig::default()
        })
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            grid: Grid::new(),
            current: None,
            next: None,
            source: PieceSource::new(config.seed),
            config,
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: drop_interval_ms(1),
            drop_counter_ms: 0,
            locks: 0,
            reveal: BackgroundReveal::new(config.reveal_goal),
            last_event: None,
        }
    }

    /// Start (or restart) a game on an empty grid
    pub fn start(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_interval_ms = drop_interval_ms(1);
        self.drop_counter_ms = 0;
        self.locks = 0;
        self.reveal.reset();
        self.last_event = None;

        self.current = Some(ActivePiece::spawn(self.source.draw()));
        self.next = Some(self.source.draw());
        self.phase = Phase::Running;
        info!(
            "session started: current={:?} next={:?}",
            self.current.map(|p| p.kind),
            self.next
        );
    }

    /// Stop ticking and ignore input; the board is kept for display
    pub fn stop(&mut self) {
        if self.phase.is_running() {
            self.phase = Phase::Idle;
            info!("session stopped at score {}", self.score);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> Option<ActivePiece> {
        self.current
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn reveal(&self) -> &BackgroundReveal {
        &self.reveal
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockOutcome> {
        self.last_event.take()
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Advance the session clock by `elapsed_ms`.
    ///
    /// Applies at most one gravity step however much time has passed; a long
    /// frame does not queue up extra drops.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<LockOutcome> {
        if matches!(self.phase, Phase::Running | Phase::Won) {
            self.reveal.advance(elapsed_ms);
        }
        if !self.phase.is_running() {
            return None;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms < self.drop_interval_ms {
            return None;
        }
        self.drop_counter_ms = 0;
        self.gravity_step()
    }

    /// Shift the active piece one column
    pub fn move_piece(&mut self, dir: Direction) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.shift(&self.grid, dir),
            None => false,
        }
    }

    /// Rotate the active piece with the kick ladder
    pub fn rotate(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.rotate(&self.grid),
            None => false,
        }
    }

    /// Move down one row, locking if the piece has landed
    pub fn soft_drop(&mut self) -> Option<LockOutcome> {
        if !self.phase.is_running() {
            return None;
        }
        self.gravity_step()
    }

    /// Drop straight to the landing row and lock immediately
    pub fn hard_drop(&mut self) -> Option<LockOutcome> {
        if !self.phase.is_running() {
            return None;
        }
        let piece = self.current.as_mut()?;
        piece.hard_drop(&self.grid);
        Some(self.lock())
    }

    /// Apply a game action; returns the lock outcome if it locked a piece
    pub fn apply_action(&mut self, action: GameAction) -> Option<LockOutcome> {
        match action {
            GameAction::MoveLeft => {
                self.move_piece(Direction::Left);
                None
            }
            GameAction::MoveRight => {
                self.move_piece(Direction::Right);
                None
            }
            GameAction::Rotate => {
                self.rotate();
                None
            }
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Start => {
                self.start();
                None
            }
        }
    }

    fn gravity_step(&mut self) -> Option<LockOutcome> {
        let piece = self.current.as_mut()?;
        match piece.soft_drop(&self.grid) {
            DropOutcome::Moved => None,
            DropOutcome::Locked => Some(self.lock()),
        }
    }

    /// Merge the active piece, sweep, score, then promote the next piece
    fn lock(&mut self) -> LockOutcome {
        let Some(piece) = self.current.take() else {
            return LockOutcome::default();
        };

        let cell = self.merge_cell(&piece);
        self.grid.merge_with(&piece, cell);
        self.locks = self.locks.wrapping_add(1);
        self.drop_counter_ms = 0;

        let cleared = self.grid.sweep();
        let score_delta = line_clear_reward(cleared);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(cleared as u32);

        let level = level_for_lines(self.lines);
        let level_changed = level != self.level;
        if level_changed {
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(level);
            info!(
                "level {} reached, drop interval {}ms",
                level, self.drop_interval_ms
            );
        }

        let mut outcome = LockOutcome {
            lines_cleared: cleared as u32,
            score_delta,
            level_changed,
            triggered_win: false,
            triggered_game_over: false,
        };

        if self.reveal.observe_clear(cleared) {
            self.phase = Phase::Won;
            outcome.triggered_win = true;
            info!(
                "background revealed ({} rows), game won with score {}",
                self.reveal.requested_rows(),
                self.score
            );
        } else {
            let kind = match self.next.take() {
                Some(kind) => kind,
                None => self.source.draw(),
            };
            let spawned = ActivePiece::spawn(kind);
            self.next = Some(self.source.draw());
            if self.grid.collide(&spawned) {
                self.phase = Phase::GameOver;
                outcome.triggered_game_over = true;
                info!("spawn blocked for {:?}, game over with score {}", kind, self.score);
            }
            self.current = Some(spawned);
        }

        debug!(
            "locked {:?} at ({}, {}): {:?}",
            piece.kind, piece.x, piece.y, outcome
        );
        self.last_event = Some(outcome);
        outcome
    }

    fn merge_cell(&self, piece: &ActivePiece) -> Cell {
        match self.config.photo_count {
            0 => Cell::Block(piece.kind),
            n => Cell::Photo((self.locks % n as u32) as u16),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in out.grid.iter_mut().enumerate() {
            row.copy_from_slice(self.grid.row(y));
        }
        out.active = self.current.map(ActiveSnapshot::from);
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.revealed_rows = self.reveal.revealed_rows();
        out.reveal_goal = self.reveal.goal();
        for (y, alpha) in out.reveal_alpha.iter_mut().enumerate().take(ROWS) {
            *alpha = self.reveal.alpha(y);
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Game state module - manages the complete game state
//!
//! This module ties together the board, piece generator, collision predicate,
//! progression rules and the gravity scheduler. Every mutation goes through one of
//! the command methods; collaborators read [`GameSnapshot`]s.
//!
//! Commands are inert (return `false`, change nothing) unless the game has been
//! started, is not paused and is not over. `new_game` is always accepted, and
//! `toggle_pause` is accepted while paused.

use crate::board::Board;
use crate::collision::{drop_distance, is_valid_move, try_rotate};
use crate::pieces::Tetromino;
use crate::rng::{PieceGenerator, RandomSource, SimpleRng};
use crate::scheduler::TickScheduler;
use crate::scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, get_drop_interval_ms,
};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    generator: PieceGenerator<R>,
    scheduler: TickScheduler,
    /// Monotonic episode id (increments on every new game).
    episode_id: u32,
    /// Last lock outcome (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState<SimpleRng> {
    /// Create an idle game with the default RNG seeded by `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create an idle game drawing pieces from `rng`.
    ///
    /// The board is empty and both pieces are dealt, but nothing moves until
    /// [`new_game`](Self::new_game) is called.
    pub fn with_rng(rng: R) -> Self {
        let mut generator = PieceGenerator::new(rng);
        let current = generator.generate();
        let next = generator.generate();

        Self {
            board: Board::new(),
            current,
            next,
            generator,
            scheduler: TickScheduler::new(),
            episode_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            level: calculate_level(0),
            paused: false,
            game_over: false,
            started: false,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether commands and ticks currently affect the game
    pub fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    /// Row the current piece would come to rest on (ghost position)
    pub fn ghost_y(&self) -> i8 {
        self.current.y + drop_distance(&self.current, &self.board) as i8
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_grid(),
            current: self.current,
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level,
            drop_interval_ms: self.drop_interval_ms(),
            game_over: self.game_over,
            paused: self.paused,
            started: self.started,
            episode_id: self.episode_id,
        }
    }

    /// Reset everything and start playing.
    ///
    /// Accepted in any state. Any pending gravity baseline from the previous game is
    /// discarded, so a late tick cannot land on the fresh board.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.current = self.generator.generate();
        self.next = self.generator.generate();
        self.scheduler.reset();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        self.score = 0;
        self.lines = 0;
        self.level = calculate_level(0);
        self.paused = false;
        self.game_over = false;
        self.started = true;
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row, +1 point. A blocked soft drop does not lock; the next
    /// gravity tick does.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.score += calculate_drop_score(1, false);
        }
        moved
    }

    /// Rotate clockwise in place; rejected without any offset retry if it collides
    pub fn rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        match try_rotate(&self.current, &self.board) {
            Some(rotated) => {
                self.current = rotated;
                true
            }
            None => false,
        }
    }

    /// Move the piece straight to its landing row, +2 points per row.
    ///
    /// The piece stays active; the next gravity tick finds it blocked and locks it.
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let distance = drop_distance(&self.current, &self.board);
        self.current.y += distance as i8;
        self.score += calculate_drop_score(distance as u32, true);
        true
    }

    /// Pause or resume. Resuming restarts the gravity clock from the next tick.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        if !self.paused {
            self.scheduler.reset();
        }
        true
    }

    /// Scheduler callback with a monotonic timestamp in milliseconds.
    ///
    /// Returns true when a gravity step (descent or lock) happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        if !self.scheduler.poll(now_ms, self.drop_interval_ms()) {
            return false;
        }
        self.step_down();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::NewGame => {
                self.new_game();
                true
            }
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => self.toggle_pause(),
        }
    }

    /// Try to move the current piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        if !is_valid_move(&self.current, &self.board, dx, dy) {
            return false;
        }
        self.current = self.current.shifted(dx, dy);
        true
    }

    /// One gravity step: descend, or lock when the row below is blocked
    fn step_down(&mut self) {
        if is_valid_move(&self.current, &self.board, 0, 1) {
            self.current.y += 1;
        } else {
            self.lock_piece();
        }
    }

    /// Lock the current piece onto the board and handle line clears.
    ///
    /// A piece whose anchor never left the top row ends the game: the board keeps
    /// the locked cells and cleared rows, but score, lines and pieces stay as they were.
    /// The next piece is promoted without a fit check; an overlapping spawn is caught
    /// by its own first blocked descent.
    fn lock_piece(&mut self) {
        let piece = self.current;
        self.board.lock_piece(&piece);

        let lines_cleared = self.board.clear_full_rows().len() as u32;

        if piece.y <= 0 {
            self.game_over = true;
            self.last_event = Some(LockEvent {
                lines_cleared,
                line_clear_score: 0,
                game_over: true,
            });
            return;
        }

        let line_clear_score = calculate_line_score(lines_cleared, self.level);
        self.score += line_clear_score;
        self.lines += lines_cleared;
        self.level = calculate_level(self.lines);

        self.last_event = Some(LockEvent {
            lines_cleared,
            line_clear_score,
            game_over: false,
        });

        self.current = self.next;
        self.next = self.generator.generate();
    }
}

//! One game session: the well, the falling piece, the score, and the gravity clock.
//!
//! The session never schedules anything itself. A driver calls `advance` with the time that
//! passed since the previous call and `apply` for each key press, both from the same thread,
//! and reacts to the returned events.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::clock::DropClock;
use crate::config::GameConfig;
use crate::input::Action;
use crate::piece::ActivePiece;
use crate::score::Score;
use crate::tetrimino::TetriminoKind;


/// Where the session is in the life of the current piece.
/// `Falling` and `GameOver` are the only states a session rests in between calls.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Phase
{
    Falling,
    Locking,
    Spawning,
    GameOver
}


#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum GameEvent
{
    /// The falling piece froze into the well.
    PieceLocked { lines_cleared: u32 },
    /// Lines were cleared and the score went up.
    ScoreChanged { score: u32 },
    /// A new piece had no room. Sent once; the session is finished after this.
    GameOver { score: u32 }
}


pub struct Session
{
    board: Board,
    piece: ActivePiece,
    score: Score,
    clock: DropClock,
    phase: Phase,
    rng: StdRng,
    pending: Vec<GameEvent>    // Raised outside a tick, handed out by the next one.
}


impl Session
{
    /// A new session, seeded from the config or from the OS if no seed was given.
    pub fn new(config: &GameConfig) -> Self
    {
        let rng = match config.seed
        {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };

        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Self
    {
        // Placeholder until the first spawn replaces it.
        let piece = ActivePiece::spawn(TetriminoKind::O, config.cols);

        let mut session = Session { board: Board::new(config.rows, config.cols),
                                    piece,
                                    score: Score::new(),
                                    clock: DropClock::new(config.drop_interval_ms),
                                    phase: Phase::Spawning,
                                    rng,
                                    pending: Vec::new() };
        session.spawn_first();
        session
    }

    /// Runs the opening spawn like any other, so a well with no room ends the game at once.
    /// A game over found here is reported by the next `advance` or `gravity_tick`.
    fn spawn_first(&mut self)
    {
        let mut events = Vec::new();
        self.phase = Phase::Spawning;
        self.phase = self.transition(&mut events);
        self.pending = events;
    }

    pub fn board(&self) -> &Board
    {
        &self.board
    }

    pub fn piece(&self) -> &ActivePiece
    {
        &self.piece
    }

    pub fn score(&self) -> &Score
    {
        &self.score
    }

    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    pub fn is_over(&self) -> bool
    {
        self.phase == Phase::GameOver
    }

    /// Moves time forward by `dt_ms` and lets gravity act if a drop is due.
    /// Once the game is over this does nothing.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<GameEvent>
    {
        let mut events = std::mem::take(&mut self.pending);
        if self.is_over() { return events; }

        if self.clock.advance(dt_ms) {
            self.gravity_tick(&mut events);
        }

        events
    }

    /// Lets gravity act right now, regardless of the clock.
    pub fn gravity_tick(&mut self, events: &mut Vec<GameEvent>)
    {
        events.append(&mut self.pending);
        if self.is_over() { return; }

        loop {
            self.phase = self.transition(events);
            if self.phase == Phase::Falling || self.phase == Phase::GameOver { break; }
        }
    }

    /// One step of the piece life cycle, starting from the current phase.
    fn transition(&mut self, events: &mut Vec<GameEvent>) -> Phase
    {
        match self.phase
        {
            Phase::Falling => {
                if self.piece.try_move(&self.board, 0, 1) { Phase::Falling } else { Phase::Locking }
            }

            Phase::Locking => {
                self.piece.lock_into(&mut self.board);
                let lines_cleared = self.board.clear_full_lines();
                debug!("{:?} locked at ({}, {}), {} line(s) cleared",
                       self.piece.kind, self.piece.x, self.piece.y, lines_cleared);

                events.push(GameEvent::PieceLocked { lines_cleared });
                if lines_cleared > 0 {
                    self.score.add_lines(lines_cleared);
                    events.push(GameEvent::ScoreChanged { score: self.score.value() });
                }
                Phase::Spawning
            }

            Phase::Spawning => {
                let kind = TetriminoKind::random(&mut self.rng);
                self.piece = ActivePiece::spawn(kind, self.board.cols());
                trace!("spawned {:?} at column {}", kind, self.piece.x);

                if self.piece.fits(&self.board) {
                    Phase::Falling
                } else {
                    info!("no room for {:?}, game over with {} points", kind, self.score.value());
                    events.push(GameEvent::GameOver { score: self.score.value() });
                    Phase::GameOver
                }
            }

            Phase::GameOver => Phase::GameOver
        }
    }

    /// Applies a player action right away. Returns false if it was blocked or the game is over.
    pub fn apply(&mut self, action: Action) -> bool
    {
        if self.phase != Phase::Falling { return false; }

        match action
        {
            Action::MoveLeft  => self.piece.try_move(&self.board, -1, 0),
            Action::MoveRight => self.piece.try_move(&self.board, 1, 0),
            Action::SoftDrop  => self.piece.try_move(&self.board, 0, 1),
            Action::Rotate    => self.piece.try_rotate(&self.board)
        }
    }

    /// Throws everything away and starts over with an empty well and zero points.
    pub fn restart(&mut self)
    {
        let rows = self.board.rows();
        let cols = self.board.cols();

        self.board = Board::new(rows, cols);
        self.score.reset();
        self.clock.reset();
        self.spawn_first();
    }
}


// Position setup for tests. Play never swaps the piece or edits the well directly.
#[doc(hidden)]
impl Session
{
    pub fn set_piece(&mut self, piece: ActivePiece)
    {
        self.piece = piece;
    }

    pub fn board_mut(&mut self) -> &mut Board
    {
        &mut self.board
    }
}

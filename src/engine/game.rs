//! The game engine.

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::opponent::RandomOpponent;
use super::{GameResult, MoveOutcome};
use crate::core::config::MAX_BOARD_SIZE;
use crate::core::{Board, EngineConfig, GameRng, Mark, TurnState};
use crate::display::{turn_text, win_text, DisplaySink, DRAW_TEXT};
use crate::input::Command;
use crate::schedule::{Clock, Scheduler, TimerAction, TimerHandle};
use crate::scores::{ScoreStore, Scores};

/// Tic-tac-toe engine owning board, turn, mode and session scores.
///
/// Collaborators are injected:
/// - `D`: receives render commands
/// - `S`: provides delayed timers
/// - `K`: persists cumulative scores
///
/// Every mutation goes through `&mut self`, so calls are serialized and
/// the engine is never reentered.
pub struct GameEngine<D, S, K> {
    config: EngineConfig,
    board: Board,
    turn: TurnState,
    solo_mode: bool,
    scores: Scores,
    rng: GameRng,
    opponent: RandomOpponent,
    display: D,
    scheduler: S,
    store: K,
    /// Outstanding timers and what each stands for.
    timers: FxHashMap<TimerHandle, TimerAction>,
}

impl<D: DisplaySink, S: Scheduler, K: ScoreStore> GameEngine<D, S, K> {
    /// Create an engine, load persisted scores and render the first board.
    pub fn new(config: EngineConfig, display: D, scheduler: S, store: K) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let scores = store.load();
        let board = Board::try_new(config.board_size).unwrap_or_else(|| {
            warn!(
                board_size = config.board_size,
                max = MAX_BOARD_SIZE,
                "Configured board size too large, using default"
            );
            Board::default()
        });

        let mut engine = Self {
            board,
            turn: TurnState::new(),
            solo_mode: config.solo_mode,
            scores,
            rng,
            opponent: RandomOpponent,
            display,
            scheduler,
            store,
            timers: FxHashMap::default(),
            config,
        };

        engine.initialize(engine.board.size());
        engine.display.set_score_text(engine.scores.x, engine.scores.o);

        info!(
            seed = engine.rng.seed(),
            board_size = engine.board.size(),
            solo = engine.solo_mode,
            x = engine.scores.x,
            o = engine.scores.o,
            "Engine ready"
        );
        engine
    }

    // === Game Operations ===

    /// Allocate a fresh `n`×`n` board with X to move.
    ///
    /// Sizes above `MAX_BOARD_SIZE` are ignored and the current board kept.
    pub fn initialize(&mut self, n: usize) {
        let Some(board) = Board::try_new(n) else {
            warn!(board_size = n, max = MAX_BOARD_SIZE, "Ignoring oversized board");
            return;
        };
        self.cancel_pending();
        self.board = board;
        self.turn = TurnState::new();
        self.display.render_board(self.board.cells());
    }

    /// Place the active player's mark at `index`.
    ///
    /// Out-of-range indices, occupied cells and finished games are ignored
    /// without any state change or render command.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if !self.turn.active {
            debug!(index, "Ignoring move: game is over");
            return MoveOutcome::Ignored;
        }

        let mark = self.turn.active_player;
        if !self.board.place(index, mark) {
            debug!(index, %mark, "Ignoring move: cell unavailable");
            return MoveOutcome::Ignored;
        }

        debug!(index, %mark, "Mark placed");
        self.display.render_cell(index, mark.into());

        if let Some(winner) = self.board.winner() {
            self.turn.finish();
            self.scores.increment(winner);
            self.store.save(&self.scores);
            self.display.set_score_text(self.scores.x, self.scores.o);
            self.display.set_status_text(&win_text(winner));
            self.schedule(TimerAction::Reset, self.config.reset_delay_ms);

            info!(%winner, x = self.scores.x, o = self.scores.o, "Game won");
            return MoveOutcome::Finished(GameResult::Winner(winner));
        }

        if self.board.is_full() {
            self.turn.finish();
            self.display.set_status_text(DRAW_TEXT);
            self.schedule(TimerAction::Reset, self.config.reset_delay_ms);

            info!(board_size = self.board.size(), "Game drawn");
            return MoveOutcome::Finished(GameResult::Draw);
        }

        self.turn.advance();
        let next = self.turn.active_player;
        self.display.set_status_text(&turn_text(next));

        if self.solo_mode && next == Mark::O {
            self.schedule(TimerAction::ComputerMove, self.config.computer_move_delay_ms);
        }

        MoveOutcome::Continue
    }

    /// Play a uniformly random empty cell for the active player.
    pub fn computer_move(&mut self) -> MoveOutcome {
        match self.opponent.choose_cell(&self.board, &mut self.rng) {
            Some(index) => {
                debug!(index, "Computer chose cell");
                self.apply_move(index)
            }
            None => MoveOutcome::Ignored,
        }
    }

    /// Clear the board and hand the move to X. Scores are kept.
    ///
    /// Pending timers keep running: an auto-reset or computer move
    /// scheduled before the reset still fires.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = TurnState::new();
        self.display.render_board(self.board.cells());
        self.display.set_status_text(&turn_text(Mark::X));
        info!(board_size = self.board.size(), "Board reset");
    }

    /// Abandon the current game and switch to an `n`×`n` board.
    pub fn set_board_size(&mut self, n: usize) {
        if n > MAX_BOARD_SIZE {
            warn!(board_size = n, max = MAX_BOARD_SIZE, "Ignoring oversized board");
            return;
        }
        info!(from = self.board.size(), to = n, "Changing board size");
        self.cancel_pending();
        self.reset();
        self.initialize(n);
    }

    /// Switch between solo and two-player mode, abandoning the current game.
    pub fn set_solo_mode(&mut self, solo: bool) {
        info!(solo, "Changing mode");
        self.cancel_pending();
        self.solo_mode = solo;
        self.reset();
    }

    /// Run the action behind a fired timer.
    ///
    /// Returns `false` for handles the engine no longer tracks, such as
    /// timers cancelled by a reset whose host callback fired anyway.
    pub fn fire_timer(&mut self, handle: TimerHandle) -> bool {
        match self.timers.remove(&handle) {
            Some(TimerAction::Reset) => {
                debug!(%handle, "Auto-reset firing");
                self.reset();
                true
            }
            Some(TimerAction::ComputerMove) => {
                debug!(%handle, "Computer move firing");
                self.computer_move();
                true
            }
            None => {
                debug!(%handle, "Ignoring stale timer");
                false
            }
        }
    }

    /// Route an input-adapter command.
    ///
    /// Only `Command::Move` has an outcome to report.
    pub fn dispatch(&mut self, command: Command) -> Option<MoveOutcome> {
        match command {
            Command::Move(index) => return Some(self.apply_move(index)),
            Command::SetBoardSize(n) => self.set_board_size(n),
            Command::SetSoloMode(solo) => self.set_solo_mode(solo),
            Command::Reset => self.reset(),
        }
        None
    }

    fn schedule(&mut self, action: TimerAction, delay_ms: u64) {
        let handle = self.scheduler.schedule_after(delay_ms);
        debug!(%handle, ?action, delay_ms, "Timer scheduled");
        self.timers.insert(handle, action);
    }

    fn cancel_pending(&mut self) {
        for (handle, action) in self.timers.drain() {
            debug!(%handle, ?action, "Timer cancelled");
            self.scheduler.cancel(handle);
        }
    }

    // === Accessors ===

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current side length N.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Current turn state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Session scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// True in single-player mode.
    pub fn solo_mode(&self) -> bool {
        self.solo_mode
    }

    /// Outstanding timers, ordered by handle.
    pub fn pending_timers(&self) -> Vec<(TimerHandle, TimerAction)> {
        let mut timers: Vec<_> = self.timers.iter().map(|(&h, &a)| (h, a)).collect();
        timers.sort_by_key(|&(h, _)| h);
        timers
    }

    /// Display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable display sink.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Score store.
    pub fn store(&self) -> &K {
        &self.store
    }
}

impl<D: DisplaySink, S: Clock, K: ScoreStore> GameEngine<D, S, K> {
    /// Move the clock forward by `ms`, firing every timer that falls due.
    ///
    /// Timers scheduled by fired timers are honored if they also fall inside
    /// the window, so a long advance can play out several delayed steps.
    pub fn advance(&mut self, ms: u64) {
        let deadline = self.scheduler.now_ms().saturating_add(ms);
        while let Some(handle) = self.scheduler.pop_due(deadline) {
            self.fire_timer(handle);
        }
        self.scheduler.advance_to(deadline);
    }

    /// Current clock time.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }
}

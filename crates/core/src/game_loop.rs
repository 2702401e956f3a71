//! Game loop - owns the session and drives gravity, input and landing
//!
//! One [`GameLoop`] owns the grid, the active and next pieces and the score.
//! Everything that mutates them goes through `&mut self`, so input actions
//! and gravity ticks form a single sequence. Hosts apply the input gathered
//! for a frame before delivering that frame's tick.
//!
//! Lifecycle: `Idle -> Running -> GameOver`. A reset returns to `Idle`.
//!
//! # Example
//!
//! ```
//! use blocktris_core::{FrameScheduler, GameLoop, NullRenderer, PieceFactory, Rules};
//! use blocktris_core::types::{GameAction, GameStatus};
//!
//! let mut game = GameLoop::new(
//!     Rules::default(),
//!     PieceFactory::random(12345),
//!     FrameScheduler::new(),
//!     NullRenderer,
//! )
//! .unwrap();
//! game.play(0).unwrap();
//!
//! game.handle_action(GameAction::HardDrop, 5).unwrap();
//! assert!(game.points() > 0);
//!
//! // Deliver the scheduled tick once the gravity interval has passed.
//! let tick = game.scheduler_mut().take_due().unwrap();
//! game.on_tick(tick, 1_000).unwrap();
//! assert_eq!(game.status(), GameStatus::Running);
//! ```

use log::{debug, info, trace};

use crate::collision::valid;
use crate::factory::PieceFactory;
use crate::grid::Grid;
use crate::piece::{rotate, Piece};
use crate::rules::{Rules, RulesError};
use crate::scheduler::{Scheduler, TickHandle};
use crate::scoring::{LineClear, ScoreKeeper};
use crate::snapshot::{Frame, GameSnapshot, Renderer};
use crate::types::{GameAction, GameStatus};

/// State of one game, from reset to the next reset
#[derive(Debug, Clone)]
struct GameSession {
    grid: Grid,
    active: Option<Piece>,
    next: Option<Piece>,
    score: ScoreKeeper,
    /// Timestamp of the last gravity step
    tick_anchor_ms: u64,
}

impl GameSession {
    fn new(rules: &Rules) -> Self {
        Self {
            grid: Grid::new(rules.rows, rules.cols),
            active: None,
            next: None,
            score: ScoreKeeper::new(rules),
            tick_anchor_ms: 0,
        }
    }

    fn frame(&self, status: GameStatus) -> Frame<'_> {
        Frame {
            grid: &self.grid,
            active: self.active.as_ref(),
            next: self.next.as_ref(),
            points: self.score.points(),
            lines: self.score.lines(),
            level: self.score.level(),
            status,
        }
    }
}

/// Result of one downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece landed; the next piece is now active
    Landed(LineClear),
    /// The piece landed on its spawn row; the game is over
    GameOver,
    /// No game is running
    Ignored,
}

/// Result of delivering a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not the pending tick, or no game running; nothing happened
    Stale,
    /// Gravity interval not reached yet; frame rendered, next tick scheduled
    Waiting,
    /// Gravity step taken
    Dropped(DropOutcome),
}

/// Spatial transform of a move request; `None` for requests that do not move
/// the piece.
fn transform(action: GameAction, piece: &Piece) -> Option<Piece> {
    match action {
        GameAction::MoveLeft => Some(piece.shifted(-1, 0)),
        GameAction::MoveRight => Some(piece.shifted(1, 0)),
        GameAction::SoftDrop | GameAction::HardDrop => Some(piece.shifted(0, 1)),
        GameAction::Rotate => Some(rotate(piece)),
        GameAction::Abort | GameAction::Restart => None,
    }
}

/// Game loop controller
pub struct GameLoop<S, R> {
    rules: Rules,
    factory: PieceFactory,
    session: GameSession,
    status: GameStatus,
    scheduler: S,
    renderer: R,
    /// The only tick `on_tick` will accept
    pending: Option<TickHandle>,
    next_handle: u64,
}

impl<S: Scheduler, R: Renderer> GameLoop<S, R> {
    /// Build an idle game loop. Fails if `rules` do not validate.
    pub fn new(
        rules: Rules,
        factory: PieceFactory,
        scheduler: S,
        renderer: R,
    ) -> Result<Self, RulesError> {
        rules.validate()?;
        let session = GameSession::new(&rules);
        Ok(Self {
            rules,
            factory,
            session,
            status: GameStatus::Idle,
            scheduler,
            renderer,
            pending: None,
            next_handle: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn points(&self) -> u32 {
        self.session.score.points()
    }

    /// Lines cleared since the last level-up
    pub fn lines(&self) -> u32 {
        self.session.score.lines()
    }

    pub fn total_lines(&self) -> u32 {
        self.session.score.total_lines()
    }

    pub fn level(&self) -> u32 {
        self.session.score.level()
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.session.score.gravity_interval_ms()
    }

    pub fn grid(&self) -> &Grid {
        &self.session.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.session.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.session.next.as_ref()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Tick the loop is waiting for
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn frame(&self) -> Frame<'_> {
        self.session.frame(self.status)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.frame().to_snapshot()
    }

    /// Render the current frame again (e.g. after a terminal resize)
    pub fn redraw(&mut self) -> Result<(), R::Error> {
        let frame = self.session.frame(self.status);
        self.renderer.render(&frame)
    }

    /// Cancel any pending tick and start over with an empty session.
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.session = GameSession::new(&self.rules);
        self.status = GameStatus::Idle;
        debug!("session reset");
    }

    /// Spawn the first pieces and start gravity at `now_ms`. Only from `Idle`.
    pub fn start(&mut self, now_ms: u64) -> Result<(), R::Error> {
        if self.status != GameStatus::Idle {
            return Ok(());
        }

        self.session.active = Some(self.factory.spawn(self.rules.cols));
        self.session.next = Some(self.factory.spawn(self.rules.cols));
        self.session.tick_anchor_ms = now_ms;
        self.status = GameStatus::Running;
        info!(
            "game started on {}x{} grid",
            self.rules.rows, self.rules.cols
        );

        self.schedule_next();
        self.redraw()
    }

    /// Reset, then start.
    pub fn play(&mut self, now_ms: u64) -> Result<(), R::Error> {
        self.reset();
        self.start(now_ms)
    }

    /// Deliver a scheduled tick.
    ///
    /// Runs one gravity step when more than the gravity interval has passed
    /// since the previous step, then schedules the next tick and renders.
    /// After game over nothing is scheduled. A render error leaves the next
    /// tick scheduled.
    pub fn on_tick(&mut self, handle: TickHandle, now_ms: u64) -> Result<TickOutcome, R::Error> {
        if self.status != GameStatus::Running || self.pending != Some(handle) {
            trace!("ignoring stale tick {}", handle.id());
            return Ok(TickOutcome::Stale);
        }
        self.pending = None;

        let mut outcome = TickOutcome::Waiting;
        let elapsed = now_ms.saturating_sub(self.session.tick_anchor_ms);
        if elapsed > u64::from(self.gravity_interval_ms()) {
            self.session.tick_anchor_ms = now_ms;
            let dropped = self.drop_step();
            if dropped == DropOutcome::GameOver {
                self.redraw()?;
                return Ok(TickOutcome::Dropped(dropped));
            }
            outcome = TickOutcome::Dropped(dropped);
        }

        self.schedule_next();
        self.redraw()?;
        Ok(outcome)
    }

    /// Move the active piece down one row, or land it.
    ///
    /// Landing freezes the piece, clears full rows as one clear, and then
    /// either ends the game (the piece never left its spawn row) or promotes
    /// the next piece and spawns a new one. Does not render.
    pub fn drop_step(&mut self) -> DropOutcome {
        if self.status != GameStatus::Running {
            return DropOutcome::Ignored;
        }
        let Some(active) = self.session.active.clone() else {
            return DropOutcome::Ignored;
        };

        let candidate = active.shifted(0, 1);
        if valid(&candidate, &self.session.grid) {
            self.session.active = Some(candidate);
            return DropOutcome::Moved;
        }

        self.session.grid.freeze(&active);
        let cleared = self.session.grid.clear_full_rows();
        let clear = self.session.score.record_clear(cleared);
        debug!(
            "{:?} landed at ({}, {}), cleared {} line(s) for {} points",
            active.kind, active.x, active.y, clear.lines, clear.points
        );
        if clear.leveled_up {
            info!(
                "level {} reached, gravity {}ms",
                self.level(),
                self.gravity_interval_ms()
            );
        }

        // Stack reached the top: the piece could not leave its spawn row.
        if active.y == 0 {
            self.session.active = None;
            self.finish();
            return DropOutcome::GameOver;
        }

        let promoted = match self.session.next.take() {
            Some(next) => next,
            None => self.factory.spawn(self.rules.cols),
        };
        let next = self.factory.spawn(self.rules.cols);
        debug!("{:?} spawned, {:?} next", promoted.kind, next.kind);
        self.session.active = Some(promoted);
        self.session.next = Some(next);
        DropOutcome::Landed(clear)
    }

    /// Apply one input request.
    ///
    /// Returns whether the request had an effect. Moves that would collide
    /// are dropped silently. While no game is running only `Abort` and
    /// `Restart` are considered.
    pub fn handle_action(&mut self, action: GameAction, now_ms: u64) -> Result<bool, R::Error> {
        match action {
            GameAction::Restart => {
                self.play(now_ms)?;
                return Ok(true);
            }
            GameAction::Abort => {
                if self.status != GameStatus::Running {
                    return Ok(false);
                }
                self.finish();
                self.redraw()?;
                return Ok(true);
            }
            _ => {}
        }

        if self.status != GameStatus::Running {
            return Ok(false);
        }

        if action == GameAction::HardDrop {
            let mut rows = 0;
            while self.try_commit(action) {
                rows += 1;
            }
            self.session.score.add_drop(rows);
            if self.drop_step() == DropOutcome::GameOver {
                self.redraw()?;
            }
            return Ok(true);
        }

        let moved = self.try_commit(action);
        if moved && action == GameAction::SoftDrop {
            self.session.score.add_drop(1);
        }
        Ok(moved)
    }

    /// Commit the action's candidate if it is a valid placement.
    fn try_commit(&mut self, action: GameAction) -> bool {
        let Some(candidate) = self
            .session
            .active
            .as_ref()
            .and_then(|active| transform(action, active))
        else {
            return false;
        };

        if !valid(&candidate, &self.session.grid) {
            return false;
        }
        self.session.active = Some(candidate);
        true
    }

    fn schedule_next(&mut self) {
        let handle = TickHandle::new(self.next_handle);
        self.next_handle += 1;
        self.pending = Some(handle);
        self.scheduler.schedule_next(handle);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn finish(&mut self) {
        self.cancel_pending();
        self.status = GameStatus::GameOver;
        info!(
            "game over: {} points, {} lines, level {}",
            self.points(),
            self.total_lines(),
            self.level()
        );
    }
}

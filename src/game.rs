use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::{GridSpec, SessionConfig};
use crate::food::spawn_position;
use crate::input::{direction_change_is_valid, Direction};
use crate::scheduler::Scheduler;
use crate::snake::{Position, Snake};
use crate::tempo::Tempo;
use crate::wall::WallOutcome;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Fresh state, not ticking yet.
    Idle,
    Running,
    /// Terminal until [`GameEngine::reset`].
    GameOver,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The engine is not running; nothing happened and nothing was emitted.
    Skipped,
    /// Running but no direction chosen yet; the snake stays put.
    Waiting,
    Moved { ate: bool },
    Ended(DeathReason),
}

/// Full observable state handed to the rendering collaborator.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub direction: Option<Direction>,
    pub tick: u64,
    pub interval: Duration,
    pub grid: GridSpec,
}

/// Receives engine output: frames for rendering and score reports for
/// best-score tracking. Observers only ever see shared borrows.
pub trait GameObserver {
    /// Called once per processed tick, including the tick that ends a run.
    fn on_frame(&mut self, snapshot: &Snapshot<'_>);

    /// Called after every score increase with the new score.
    fn on_score(&mut self, _score: u32) {}
}

/// Observer that ignores everything.
impl GameObserver for () {
    fn on_frame(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// Mutable state of one run, replaced wholesale on reset.
#[derive(Debug, Clone)]
struct Run {
    snake: Snake,
    food: Position,
    score: u32,
    direction: Option<Direction>,
    tempo: Tempo,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    tick_count: u64,
}

/// Owns one game session and advances it one tick at a time.
#[derive(Debug)]
pub struct GameEngine<S: Scheduler> {
    session: SessionConfig,
    scheduler: S,
    rng: StdRng,
    run: Run,
}

impl<S: Scheduler> GameEngine<S> {
    /// Creates an idle engine seeded from system entropy.
    #[must_use]
    pub fn new(session: SessionConfig, scheduler: S) -> Self {
        Self::with_rng(session, scheduler, StdRng::from_entropy())
    }

    /// Creates a deterministic idle engine for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(session: SessionConfig, scheduler: S, seed: u64) -> Self {
        Self::with_rng(session, scheduler, StdRng::seed_from_u64(seed))
    }

    fn with_rng(session: SessionConfig, scheduler: S, mut rng: StdRng) -> Self {
        let run = fresh_run(session, &mut rng);
        Self {
            session,
            scheduler,
            rng,
            run,
        }
    }

    /// `Idle -> Running`: schedules the first tick at the starting tempo.
    ///
    /// Returns false and does nothing in any other state.
    pub fn start(&mut self) -> bool {
        if self.run.status != GameStatus::Idle {
            return false;
        }

        self.run.status = GameStatus::Running;
        if self.session.auto_start {
            self.run.direction = Some(Direction::Right);
        }
        self.scheduler.schedule(self.run.tempo.interval());

        log::info!(
            "run started on {}x{} grid, {:?} walls, {}ms tempo",
            self.session.grid.cols(),
            self.session.grid.rows(),
            self.session.wall_mode,
            self.run.tempo.interval_ms()
        );
        true
    }

    /// Discards the current run and prepares a fresh idle one.
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.run = fresh_run(self.session, &mut self.rng);
    }

    /// Resets and immediately starts a new run.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Switches level, wall mode or auto-start. Always begins a fresh idle run.
    pub fn reconfigure(&mut self, session: SessionConfig) {
        self.session = session;
        self.reset();
    }

    /// Offers a new direction from the input collaborator.
    ///
    /// Only accepted while running and only when it passes the axis lock. The
    /// latest accepted proposal is the one the next tick uses.
    pub fn propose_direction(&mut self, direction: Direction) -> bool {
        if self.run.status != GameStatus::Running {
            return false;
        }

        if !direction_change_is_valid(self.run.direction, direction) {
            log::trace!(
                "dropped {direction:?} while moving {:?}",
                self.run.direction
            );
            return false;
        }

        self.run.direction = Some(direction);
        true
    }

    /// Advances the simulation by one tick and emits the resulting frame.
    pub fn tick<O: GameObserver + ?Sized>(&mut self, observer: &mut O) -> TickOutcome {
        if self.run.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        self.run.tick_count += 1;
        let outcome = self.step(observer);
        observer.on_frame(&self.snapshot());
        outcome
    }

    fn step<O: GameObserver + ?Sized>(&mut self, observer: &mut O) -> TickOutcome {
        let Some(direction) = self.run.direction else {
            return TickOutcome::Waiting;
        };

        let raw_head = self.run.snake.head().stepped(Some(direction));
        let head = match self.session.wall_mode.resolve(raw_head, self.session.grid) {
            WallOutcome::Valid(head) => head,
            WallOutcome::Blocked => return self.end(DeathReason::WallCollision),
        };

        let ate = head == self.run.food;
        self.run.snake.advance(head, ate);

        if ate {
            self.run.score += 1;
            observer.on_score(self.run.score);
            self.run.food = spawn_position(&mut self.rng, self.session.grid, &self.run.snake);

            if let Some(interval_ms) = self.run.tempo.update(self.run.score) {
                log::debug!("score {} moves tempo to {interval_ms}ms", self.run.score);
                self.scheduler.cancel();
                self.scheduler.schedule(Duration::from_millis(interval_ms));
            }
        }

        if self.run.snake.collides_with_self(head) {
            return self.end(DeathReason::SelfCollision);
        }

        TickOutcome::Moved { ate }
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.run.status = GameStatus::GameOver;
        self.run.death_reason = Some(reason);
        self.scheduler.cancel();

        log::info!(
            "run over after {} ticks: {reason:?}, score {}",
            self.run.tick_count,
            self.run.score
        );
        TickOutcome::Ended(reason)
    }

    /// Borrows the current observable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.run.snake,
            food: self.run.food,
            score: self.run.score,
            status: self.run.status,
            death_reason: self.run.death_reason,
            direction: self.run.direction,
            tick: self.run.tick_count,
            interval: self.run.tempo.interval(),
            grid: self.session.grid,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.run.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.run.death_reason
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.run.score
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.run.snake
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.run.food
    }

    /// Moves the food to `position`, bypassing the spawner.
    ///
    /// Meant for scripted scenarios that need a known food cell.
    pub fn place_food(&mut self, position: Position) {
        self.run.food = position;
    }

    /// Replaces the snake body, for scripted scenarios.
    pub fn place_snake(&mut self, snake: Snake) {
        self.run.snake = snake;
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.run.direction
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.run.tempo.interval_ms()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.run.tick_count
    }

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.session.grid
    }

    #[must_use]
    pub fn session(&self) -> SessionConfig {
        self.session
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

fn fresh_run(session: SessionConfig, rng: &mut StdRng) -> Run {
    let snake = Snake::new(Position::center_of(session.grid));
    let food = spawn_position(rng, session.grid, &snake);

    Run {
        snake,
        food,
        score: 0,
        direction: None,
        tempo: Tempo::new(session.tempo),
        status: GameStatus::Idle,
        death_reason: None,
        tick_count: 0,
    }
}

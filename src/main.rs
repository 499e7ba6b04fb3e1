use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tempo_snake::config::{Level, SessionConfig, DEFAULT_MAX_TICKS};
use tempo_snake::error::AppError;
use tempo_snake::game::{GameEngine, GameObserver, GameStatus, Snapshot};
use tempo_snake::input::{parse_script, Direction};
use tempo_snake::renderer::JsonLinesRenderer;
use tempo_snake::scheduler::{IntervalTimer, Scheduler};
use tempo_snake::score::BestScore;
use tempo_snake::wall::WallMode;

/// Headless snake runner: plays one scripted session and prints every frame
/// as a JSON line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Level row to play.
    #[arg(long, value_enum, default_value_t = Level::Classic)]
    level: Level,

    /// Boundary behaviour.
    #[arg(long, value_enum, default_value_t = WallMode::Wrap)]
    wall: WallMode,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// One move per tick: U, D, L, R, or `.` for no input.
    #[arg(long, default_value = "")]
    moves: String,

    /// Stop after this many ticks even if the snake is still alive.
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Start moving right without waiting for the first move.
    #[arg(long)]
    auto_start: bool,

    /// Wait out each tick interval instead of stepping as fast as possible.
    #[arg(long)]
    realtime: bool,
}

/// Fans engine output out to the frame printer and the best-score tracker.
struct Host<W: io::Write> {
    renderer: JsonLinesRenderer<W>,
    best: BestScore,
}

impl<W: io::Write> GameObserver for Host<W> {
    fn on_frame(&mut self, snapshot: &Snapshot<'_>) {
        self.renderer.on_frame(snapshot);
    }

    fn on_score(&mut self, score: u32) {
        self.best.on_score(score);
    }
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let moves = parse_script(&cli.moves)?;
    let session = SessionConfig::for_level(cli.level, cli.wall).with_auto_start(cli.auto_start);
    let mut engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(session, IntervalTimer::new(), seed),
        None => GameEngine::new(session, IntervalTimer::new()),
    };

    let mut host = Host {
        renderer: JsonLinesRenderer::new(io::stdout().lock()),
        best: BestScore::default(),
    };

    engine.start();
    let realtime = cli.realtime;
    drive(&mut engine, moves, cli.max_ticks, &mut host, |timer| {
        if realtime {
            wait_for_tick(timer);
        }
    });

    log::info!(
        "{} level finished: {:?}, score {}, best {}, {} frames",
        cli.level.name(),
        engine.death_reason(),
        engine.score(),
        host.best.value(),
        host.renderer.frames()
    );

    drop(host.renderer.finish()?);
    Ok(())
}

/// Feeds one scripted move per tick until the run ends, `max_ticks` is
/// reached, or the script runs out while the snake has no direction.
fn drive<S, O, F>(
    engine: &mut GameEngine<S>,
    moves: Vec<Option<Direction>>,
    max_ticks: u64,
    observer: &mut O,
    mut before_tick: F,
) where
    S: Scheduler,
    O: GameObserver + ?Sized,
    F: FnMut(&mut S),
{
    let mut moves = moves.into_iter();
    while engine.status() == GameStatus::Running && engine.tick_count() < max_ticks {
        let next = moves.next();
        if next.is_none() && engine.direction().is_none() {
            log::info!("move script exhausted before the snake started moving");
            break;
        }

        before_tick(engine.scheduler_mut());
        if let Some(Some(direction)) = next {
            engine.propose_direction(direction);
        }
        engine.tick(observer);
    }
}

fn wait_for_tick(timer: &mut IntervalTimer) {
    loop {
        let now = Instant::now();
        if timer.poll(now) {
            return;
        }

        match timer.remaining(now) {
            Some(remaining) => thread::sleep(remaining.max(Duration::from_millis(1))),
            None => return,
        }
    }
}

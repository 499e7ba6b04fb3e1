use std::time::Duration;

use tempo_snake::config::{Level, SessionConfig};
use tempo_snake::game::{DeathReason, GameEngine, GameStatus, TickOutcome};
use tempo_snake::input::Direction;
use tempo_snake::scheduler::{ManualScheduler, ScheduleRequest};
use tempo_snake::score::BestScore;
use tempo_snake::snake::Position;
use tempo_snake::wall::WallMode;

fn classic(wall_mode: WallMode, seed: u64) -> GameEngine<ManualScheduler> {
    GameEngine::new_with_seed(
        SessionConfig::for_level(Level::Classic, wall_mode),
        ManualScheduler::new(),
        seed,
    )
}

#[test]
fn first_bite_on_classic_wrap_speeds_tempo_to_ninety() {
    let mut engine = classic(WallMode::Wrap, 42);
    engine.start();
    engine.place_food(Position::new(11, 10));
    assert_eq!(engine.snake().head(), Position::new(10, 10));
    assert_eq!(engine.direction(), None);

    assert!(engine.propose_direction(Direction::Right));
    let outcome = engine.tick(&mut ());

    assert_eq!(outcome, TickOutcome::Moved { ate: true });
    assert_eq!(engine.score(), 1);
    assert_eq!(
        engine.snake().segments().copied().collect::<Vec<_>>(),
        vec![Position::new(11, 10), Position::new(10, 10)]
    );
    assert_eq!(engine.interval_ms(), 90);
    assert_eq!(
        engine.scheduler().requests(),
        &[
            ScheduleRequest::Schedule(Duration::from_millis(80)),
            ScheduleRequest::Cancel,
            ScheduleRequest::Schedule(Duration::from_millis(90)),
        ]
    );
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut engine = classic(WallMode::Solid, 7);
    let mut best = BestScore::default();
    engine.start();
    engine.place_food(Position::new(10, 9));

    engine.propose_direction(Direction::Up);
    assert_eq!(engine.tick(&mut best), TickOutcome::Moved { ate: true });
    assert_eq!(best.value(), 1);

    // Nine more cells up reaches row 0; the tenth leaves the grid.
    for _ in 0..9 {
        engine.place_food(Position::new(0, 19));
        assert_eq!(engine.tick(&mut best), TickOutcome::Moved { ate: false });
        assert_eq!(engine.snake().len(), 2);
    }
    assert_eq!(engine.snake().head(), Position::new(10, 0));

    assert_eq!(
        engine.tick(&mut best),
        TickOutcome::Ended(DeathReason::WallCollision)
    );
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(engine.snake().head(), Position::new(10, 0));
    assert_eq!(engine.scheduler().active(), None);
}

#[test]
fn best_score_survives_a_reset() {
    let mut engine = classic(WallMode::Wrap, 9);
    let mut best = BestScore::default();
    engine.start();
    engine.propose_direction(Direction::Left);

    for x in [9, 8] {
        engine.place_food(Position::new(x, 10));
        engine.tick(&mut best);
    }
    assert_eq!(best.value(), 2);

    engine.restart();
    engine.propose_direction(Direction::Left);
    engine.place_food(Position::new(9, 10));
    engine.tick(&mut best);

    assert_eq!(engine.score(), 1);
    assert_eq!(best.value(), 2);
}

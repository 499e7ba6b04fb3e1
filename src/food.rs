use rand::Rng;

use crate::config::{GridSpec, FOOD_SPAWN_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Picks a food cell not occupied by the snake.
///
/// Samples uniformly random cells until a free one turns up or
/// [`FOOD_SPAWN_ATTEMPTS`] samples have been drawn. When the attempts run out
/// the last sample is returned even if the snake covers it, so a nearly full
/// board can end up with food under the snake.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: GridSpec, snake: &Snake) -> Position {
    let mut candidate = random_cell(rng, grid);
    for _ in 1..FOOD_SPAWN_ATTEMPTS {
        if !snake.occupies(candidate) {
            return candidate;
        }
        candidate = random_cell(rng, grid);
    }

    if snake.occupies(candidate) {
        log::debug!(
            "no free food cell after {FOOD_SPAWN_ATTEMPTS} attempts, placing at ({}, {})",
            candidate.x,
            candidate.y
        );
    }
    candidate
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridSpec) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(grid.cols())),
        y: rng.gen_range(0..i32::from(grid.rows())),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSpec;
    use crate::snake::{Position, Snake};

    use super::spawn_position;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);
        let grid = GridSpec::new(8, 6, 1);

        for _ in 0..100 {
            let food = spawn_position(&mut rng, grid, &snake);
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(grid));
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = GridSpec::new(2, 2, 1);
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);

        assert_eq!(spawn_position(&mut rng, grid, &snake), Position::new(0, 1));
    }

    #[test]
    fn full_board_returns_an_occupied_cell_instead_of_failing() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = GridSpec::new(2, 1, 1);
        let snake = Snake::from_segments(vec![Position::new(0, 0), Position::new(1, 0)]);

        let food = spawn_position(&mut rng, grid, &snake);

        assert!(snake.occupies(food));
    }

    #[test]
    fn zero_sized_grid_spawns_on_the_only_cell() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = GridSpec::new(0, 3, 1);
        let snake = Snake::new(Position::new(0, 1));

        let food = spawn_position(&mut rng, grid, &snake);

        assert_eq!(food.x, 0);
        assert!(food.is_within_bounds(grid));
        assert!(!snake.occupies(food));
    }

    #[test]
    fn stuck_random_source_gives_up_after_bounded_attempts() {
        // A constant source keeps sampling the occupied origin.
        let mut rng = StepRng::new(0, 0);
        let grid = GridSpec::new(5, 5, 1);
        let snake = Snake::new(Position::new(0, 0));

        assert_eq!(spawn_position(&mut rng, grid, &snake), Position::new(0, 0));
    }
}

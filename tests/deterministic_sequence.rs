use grid_snake::apple::Apple;
use grid_snake::config::GridSize;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::Direction;
use grid_snake::snake::{MoveOutcome, Position, Snake};

const MAP: GridSize = GridSize {
    width: 20,
    height: 20,
};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn pieces(state: &GameState) -> Vec<Position> {
    state.snake_pieces().copied().collect()
}

fn lone_snake(bounds: GridSize, wraps: bool, start: Position, apple: Position) -> GameState {
    GameState::from_parts(
        Snake::with_start(bounds, wraps, start),
        Apple::at(bounds, apple),
    )
    .with_seed(42)
}

/// Grows a lone snake at the origin to the right by eating a trail of apples.
fn snake_stretched_right(extra_segments: i32) -> Snake {
    let mut snake = Snake::with_start(MAP, true, p(0, 0));
    for i in 1..=extra_segments {
        assert_eq!(snake.advance(Direction::Right, p(i, 0)), MoveOutcome::AteApple);
    }
    snake
}

#[test]
fn running_off_each_edge_ends_the_game_at_the_border() {
    let cases = [
        (Direction::Up, 11, p(10, 0)),
        (Direction::Down, 10, p(10, 19)),
        (Direction::Left, 11, p(0, 10)),
        (Direction::Right, 10, p(19, 10)),
    ];

    for (direction, ticks, last_cell) in cases {
        let mut state = lone_snake(MAP, false, p(10, 10), p(0, 0));
        state.change_direction(direction);

        for _ in 0..ticks {
            assert!(state.is_running(), "{direction:?} ended too early");
            state.update();
        }

        assert_eq!(state.status(), GameStatus::GameOver, "{direction:?}");
        assert_eq!(pieces(&state), vec![last_cell], "{direction:?}");
    }
}

#[test]
fn wrapping_snake_crosses_each_edge_and_keeps_running() {
    let cases = [
        (Direction::Up, 11, p(10, 19)),
        (Direction::Down, 10, p(10, 0)),
        (Direction::Left, 11, p(19, 10)),
        (Direction::Right, 10, p(0, 10)),
    ];

    for (direction, ticks, last_cell) in cases {
        let mut state = lone_snake(MAP, true, p(10, 10), p(0, 0));
        state.change_direction(direction);

        for _ in 0..ticks {
            state.update();
        }

        assert!(state.is_running(), "{direction:?}");
        assert_eq!(pieces(&state), vec![last_cell], "{direction:?}");
    }
}

#[test]
fn lone_snake_may_turn_back_on_itself() {
    let mut state = lone_snake(MAP, false, p(10, 10), p(0, 0));

    state.update();
    state.change_direction(Direction::Down);
    state.update();

    assert!(state.is_running());
    assert_eq!(pieces(&state), vec![p(10, 10)]);
}

#[test]
fn longer_snake_keeps_going_when_asked_to_reverse() {
    let mut snake = Snake::with_start(MAP, false, p(10, 19));
    for i in 1..=4 {
        snake.advance(Direction::Up, p(10, 19 - i));
    }
    let mut state = GameState::from_parts(snake, Apple::at(MAP, p(0, 0)));
    assert_eq!(state.score(), 4);

    state.update();
    state.change_direction(Direction::Down);
    state.update();

    assert!(state.is_running());
    assert_eq!(
        pieces(&state),
        vec![p(10, 13), p(10, 14), p(10, 15), p(10, 16), p(10, 17)]
    );
}

#[test]
fn tight_loop_chases_its_own_tail_safely() {
    let snake = snake_stretched_right(3);
    let mut state = GameState::from_parts(snake, Apple::at(MAP, p(19, 19)));

    for direction in [Direction::Down, Direction::Left, Direction::Up] {
        state.change_direction(direction);
        state.update();
        assert!(state.is_running(), "{direction:?}");
    }

    assert_eq!(state.snake().head(), p(2, 0));
}

#[test]
fn turning_into_the_body_from_the_side_ends_the_game() {
    for extra_segments in [4, 5] {
        let snake = snake_stretched_right(extra_segments);
        let mut state = GameState::from_parts(snake, Apple::at(MAP, p(19, 19)));

        state.change_direction(Direction::Down);
        state.update();
        state.change_direction(Direction::Left);
        state.update();
        assert!(state.is_running());

        let before = pieces(&state);
        state.change_direction(Direction::Up);
        state.update();

        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(pieces(&state), before);
    }
}

#[test]
fn single_row_wrap_eats_then_bites_itself() {
    let bounds = GridSize {
        width: 5,
        height: 1,
    };
    let mut state = lone_snake(bounds, true, p(0, 0), p(1, 0));

    state.change_direction(Direction::Right);
    state.update();

    assert_eq!(pieces(&state), vec![p(1, 0), p(0, 0)]);
    assert_ne!(state.apple_position(), p(1, 0));
    assert!(!state.snake().occupies(state.apple_position()));
    assert_eq!(state.score(), 1);
    assert!(state.is_running());

    state.change_direction(Direction::Down);
    state.update();

    assert_eq!(pieces(&state), vec![p(1, 0), p(0, 0)]);
    assert!(!state.is_running());
}

#[test]
fn every_apple_lands_on_a_free_cell() {
    let bounds = GridSize {
        width: 6,
        height: 6,
    };
    let mut state = GameState::from_parts(
        Snake::with_start(bounds, true, p(0, 0)),
        Apple::at(bounds, p(1, 0)),
    )
    .with_seed(7);
    state.change_direction(Direction::Right);

    // Sweep right with a step down every sixth tick until the snake dies.
    for tick in 0..400 {
        if !state.is_running() {
            break;
        }
        if tick % 6 == 5 {
            state.change_direction(Direction::Down);
        } else {
            state.change_direction(Direction::Right);
        }

        let length_before = state.snake().len();
        let score_before = state.score();
        let outcome = state.update();

        if outcome == MoveOutcome::AteApple {
            assert_eq!(state.snake().len(), length_before + 1);
            assert_eq!(state.score(), score_before + 1);
            if state.is_running() {
                assert!(!state.snake().occupies(state.apple_position()));
            }
        }
    }

    assert!(state.score() >= 1);
}

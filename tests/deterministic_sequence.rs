use frame_snake::apple::Apple;
use frame_snake::config::GameConfig;
use frame_snake::engine::CollisionKind;
use frame_snake::events::GameEvent;
use frame_snake::game::{GameSession, SessionStatus};
use frame_snake::grid::Cell;
use frame_snake::input::{Direction, GameInput};
use frame_snake::snake::Snake;

#[test]
fn stepwise_apple_collection_and_wall_collision() {
    let mut state = GameSession::new_with_seed(
        GameConfig {
            grid_width: 6,
            grid_height: 4,
            cell_size: 10,
            bonus_chance: 0.0,
            ..GameConfig::default()
        },
        42,
    )
    .expect("valid config");

    state.snake = Snake::from_segments(vec![Cell::new(10, 10)], Direction::Right, 10)
        .expect("segments");
    state.apple = Apple::normal(Cell::new(20, 10));

    state.tick();
    assert_eq!(state.status, SessionStatus::Running);
    assert_eq!(state.score, 1);
    assert_eq!(state.frame_limit, 17);
    assert_eq!(state.snake.target_length(), 2);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Cell::new(20, 10));

    state.apple = Apple::normal(Cell::new(50, 30));
    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.status, SessionStatus::Running);
    assert_eq!(state.snake.head(), Cell::new(20, 0));
    assert_eq!(state.snake.len(), 2);

    let events = state.tick();
    assert_eq!(state.status, SessionStatus::Over);
    assert_eq!(state.snake.head(), Cell::new(20, -10));
    assert!(events.contains(&GameEvent::GameOver {
        final_score: 1,
        reason: CollisionKind::Boundary,
    }));

    state.reset();
    assert_eq!(state.status, SessionStatus::Running);
    assert_eq!(state.score, 0);
}

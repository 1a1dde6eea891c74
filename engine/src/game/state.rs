use crate::log;
use crate::rng::GameRng;

use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteApple,
}

/// The candidate head ran into the snake. Not an error condition: the caller
/// resets the game and keeps playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
    pub cell: Point,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Point,
    pub field_size: FieldSize,
}

impl GameState {
    /// Fresh game: snake at the field center pointing up, body trailing
    /// down, apple on a free cell.
    pub fn new(settings: &GameSettings, rng: &mut GameRng) -> Self {
        let field_size = settings.field_size;
        let center = Point::new(field_size.width / 2, field_size.height / 2);
        let snake = Snake::new(
            center,
            Direction::Up,
            settings.initial_snake_length,
            &field_size,
        );
        let apple = Self::spawn_apple(&snake, &field_size, rng);

        Self {
            snake,
            apple,
            field_size,
        }
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max {
            0
        } else {
            value + 1
        }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 {
            max - 1
        } else {
            value - 1
        }
    }

    /// Commits `direction` for the next tick. A request that is the exact
    /// reverse of the current direction is dropped.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.snake.direction) {
            self.snake.pending_direction = Some(direction);
        }
    }

    /// Advances the game by one cell.
    pub fn tick(&mut self, rng: &mut GameRng) -> Result<TickOutcome, Collision> {
        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = self.next_head_position();

        // Every snake cell counts, the current tail included, even though
        // the tail would move away this very tick.
        if self.snake.occupies(next_head) {
            return Err(Collision { cell: next_head });
        }

        self.snake.body.push_front(next_head);
        self.snake.body_set.insert(next_head);

        if next_head == self.apple {
            self.snake.score += 1;
            log!(
                "Ate apple at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.snake.score
            );
            self.apple = Self::spawn_apple(&self.snake, &self.field_size, rng);
            Ok(TickOutcome::AteApple)
        } else {
            let tail = self
                .snake
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.snake.body_set.remove(&tail);
            Ok(TickOutcome::Moved)
        }
    }

    fn next_head_position(&self) -> Point {
        let head = self.snake.head();
        match self.snake.direction {
            Direction::Up => Point::new(
                head.x,
                Self::wrapping_dec(head.y, self.field_size.height),
            ),
            Direction::Down => Point::new(
                head.x,
                Self::wrapping_inc(head.y, self.field_size.height),
            ),
            Direction::Left => Point::new(
                Self::wrapping_dec(head.x, self.field_size.width),
                head.y,
            ),
            Direction::Right => Point::new(
                Self::wrapping_inc(head.x, self.field_size.width),
                head.y,
            ),
        }
    }

    // Rejection sampling; relies on the snake covering a small share of the
    // field, which holds for any realistic run on the default 20x20 mesh.
    fn spawn_apple(snake: &Snake, field_size: &FieldSize, rng: &mut GameRng) -> Point {
        loop {
            let x = rng.random_range(0..field_size.width);
            let y = rng.random_range(0..field_size.height);
            let pos = Point::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}

use std::collections::{HashSet, VecDeque};

use super::types::{Direction, FieldSize, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub score: u32,
}

impl Snake {
    /// Builds a snake of `length` segments with the head at `start_pos` and
    /// the body trailing away from the movement direction, wrapping if the
    /// tail crosses a field edge.
    pub fn new(
        start_pos: Point,
        direction: Direction,
        length: usize,
        field_size: &FieldSize,
    ) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();

        let (dx, dy) = match direction {
            Direction::Up => (0i32, 1i32),
            Direction::Down => (0i32, -1i32),
            Direction::Left => (1i32, 0i32),
            Direction::Right => (-1i32, 0i32),
        };

        let width = field_size.width as i32;
        let height = field_size.height as i32;

        let mut segment = start_pos;
        for _ in 0..length {
            body.push_back(segment);
            body_set.insert(segment);
            segment = Point::new(
                ((segment.x as i32 + dx + width) % width) as usize,
                ((segment.y as i32 + dy + height) % height) as usize,
            );
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
            score: 0,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }
}

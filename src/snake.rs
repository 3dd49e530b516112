use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

/// Cardinal movement direction on the board.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The offset of one `step`-sized move in this direction.
    pub fn offset(self, step: i32) -> Coords {
        match self {
            North => (0, -step),
            South => (0, step),
            East => (step, 0),
            West => (-step, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }
}

/// The snake body as an ordered, head-first sequence of cell positions.
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
}

impl Snake {
    /// Builds a snake of `len` segments with its head at `head`, trailing
    /// away from the movement direction in `step`-sized cells.
    pub fn new(head: Coords, len: usize, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.offset(step);
        let body = (0..len as i32)
            .map(|i| (head.0 - dx * i, head.1 - dy * i))
            .collect();
        Snake { body, direction }
    }

    pub fn head(&self) -> Coords {
        // Invariant: the body is never empty
        *self.body.front().unwrap()
    }

    pub fn segments(&self) -> impl Iterator<Item = Coords> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Points the snake in a new direction. Requests to reverse straight
    /// back into the body are ignored.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    /// Moves the head to `new_head`. Unless the snake is growing this step,
    /// the tail cell is released, so every other segment ends up where its
    /// predecessor was.
    pub fn advance_to(&mut self, new_head: Coords, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// True if the head occupies the same cell as any other segment.
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[Coords], direction: Direction) -> Self {
        Snake { body: segments.iter().copied().collect(), direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake_trails_away_from_its_heading() {
        let snake = Snake::new((100, 100), 3, East, 20);
        let body: Vec<Coords> = snake.segments().collect();
        assert_eq!(body, vec![(100, 100), (80, 100), (60, 100)]);
        assert_eq!(snake.head(), (100, 100));
    }

    #[test]
    fn reversal_requests_are_ignored() {
        let mut snake = Snake::new((100, 100), 3, East, 20);

        snake.set_direction(West);
        assert_eq!(snake.direction(), East);

        snake.set_direction(North);
        assert_eq!(snake.direction(), North);
        snake.set_direction(South);
        assert_eq!(snake.direction(), North);
    }

    #[test]
    fn opposites_pair_up() {
        for &(a, b) in [(North, South), (East, West)].iter() {
            assert_eq!(a.opposite(), b);
            assert_eq!(b.opposite(), a);
        }
    }

    #[test]
    fn growing_keeps_the_tail_for_one_step() {
        let mut snake = Snake::new((100, 100), 3, East, 20);

        snake.advance_to((120, 100), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), (120, 100));

        snake.advance_to((140, 100), false);
        assert_eq!(snake.len(), 4);
        let body: Vec<Coords> = snake.segments().collect();
        assert_eq!(body, vec![(140, 100), (120, 100), (100, 100), (80, 100)]);
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = Snake::from_segments(&[(100, 100), (80, 100)], East);
        assert!(!snake.head_overlaps_body());

        let looped = Snake::from_segments(&[(100, 100), (80, 100), (100, 100)], East);
        assert!(looped.head_overlaps_body());
    }
}

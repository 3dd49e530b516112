use crate::canvas::{self, Canvas};
use crate::snake::{Direction, Snake};
use crate::Coords;

use rand::Rng;

pub const BOARD_WIDTH: i32 = 400;
pub const BOARD_HEIGHT: i32 = 400;
pub const CELL_SIZE: i32 = 20;
const SPEED_MS: u64 = 150;

const INITIAL_SNAKE_LENGTH: usize = 3;
const START_POS: Coords = (100, 100);
const START_DIRECTION: Direction = Direction::East;
const SCORE_POS: Coords = (10, 20);

/// Static board and timing parameters.
#[derive(Copy, Clone, Debug)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
    pub speed_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            speed_ms: SPEED_MS,
        }
    }
}

/// Everything that changes over the course of one session.
struct GameState {
    snake: Snake,
    food: Coords,
    score: u32,
    last_move_time: u64,
}

impl GameState {
    fn initial(config: &GameConfig) -> Self {
        GameState {
            snake: Snake::new(START_POS, INITIAL_SNAKE_LENGTH, START_DIRECTION, config.cell_size),
            food: random_food_cell(config),
            score: 0,
            last_move_time: 0,
        }
    }
}

/// Reported by `tick` for the host layer to react to. The engine has already
/// reset itself by the time the event is observed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameEvent {
    GameOver { score: u32 },
}

/// Owns the whole game state and steps it at a fixed simulation rate,
/// independent of how often the host's display refreshes.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::initial(&config);
        GameEngine { config, state }
    }

    /// Turns the snake. Takes effect on the next simulation step; reversal
    /// requests and repeated directions are absorbed silently.
    pub fn set_direction(&mut self, direction: Direction) {
        self.state.snake.set_direction(direction);
    }

    /// Frame driver, called once per display frame with a monotonically
    /// increasing millisecond timestamp. Runs at most one simulation step,
    /// and only once `speed_ms` has elapsed since the previous one.
    pub fn tick(&mut self, now: u64) -> Option<GameEvent> {
        if now.saturating_sub(self.state.last_move_time) <= self.config.speed_ms {
            return None;
        }

        let event = self.advance();
        self.state.last_move_time = now;
        event
    }

    /// One discrete simulation step: move the head one cell with toroidal
    /// wraparound, handle food, then check for collisions.
    fn advance(&mut self) -> Option<GameEvent> {
        let (dx, dy) = self.state.snake.direction().offset(self.config.cell_size);
        let (hx, hy) = self.state.snake.head();
        let new_head = self.wrap((hx + dx, hy + dy));

        let ate = new_head == self.state.food;
        self.state.snake.advance_to(new_head, ate);

        if ate {
            self.state.score += 1;
            // The new cell may land on the snake itself; it is not re-rolled
            self.state.food = random_food_cell(&self.config);
            log::debug!("food eaten at {:?}, score {}", new_head, self.state.score);
        }

        if self.out_of_bounds(new_head) || self.state.snake.head_overlaps_body() {
            let score = self.state.score;
            log::info!("game over, final score {}", score);
            self.state = GameState::initial(&self.config);
            return Some(GameEvent::GameOver { score });
        }

        None
    }

    /// Draws the committed state: background, food, snake, score. Reads the
    /// state without mutating it, so repeated calls between steps produce
    /// identical frames.
    pub fn render(&self, surface: &mut dyn Canvas) -> crossterm::Result<()> {
        let cell = self.config.cell_size;

        surface.clear()?;
        surface.fill_rect((0, 0), self.config.board_width, self.config.board_height, canvas::BACKGROUND)?;
        surface.fill_rect(self.state.food, cell, cell, canvas::FOOD)?;

        for segment in self.state.snake.segments() {
            surface.fill_rect(segment, cell, cell, canvas::SNAKE)?;
        }

        surface.fill_text(&format!("Score: {}", self.state.score), SCORE_POS, canvas::TEXT)?;
        Ok(())
    }

    /// Positions leaving one edge re-enter from the opposite one, each axis
    /// independently.
    fn wrap(&self, (x, y): Coords) -> Coords {
        let wrap_axis = |v: i32, limit: i32| {
            if v < 0 {
                limit - self.config.cell_size
            } else if v >= limit {
                0
            } else {
                v
            }
        };

        (wrap_axis(x, self.config.board_width), wrap_axis(y, self.config.board_height))
    }

    fn out_of_bounds(&self, (x, y): Coords) -> bool {
        x < 0 || x >= self.config.board_width || y < 0 || y >= self.config.board_height
    }
}

/// Picks a cell uniformly at random over the whole grid, aligned to the cell
/// size. Cells occupied by the snake are not excluded.
fn random_food_cell(config: &GameConfig) -> Coords {
    let mut rng = rand::thread_rng();
    let cols = config.board_width / config.cell_size;
    let rows = config.board_height / config.cell_size;

    (rng.gen_range(0..cols) * config.cell_size, rng.gen_range(0..rows) * config.cell_size)
}

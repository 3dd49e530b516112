mod canvas;
mod engine;
mod snake;
mod term;

/// A board position in pixels, x then y.
pub type Coords = (i32, i32);

use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use canvas::Canvas;
use engine::{GameConfig, GameEngine, GameEvent};
use snake::Direction;
use term::TermCanvas;

/// Delay between display frames, roughly 60 Hz.
const FRAME_INTERVAL_MS: u64 = 16;
/// How long the game-over banner stays up while the fresh session runs.
const BANNER_MS: u64 = 1500;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = GameConfig::default();
    let mut engine = GameEngine::new(config);
    let mut canvas = TermCanvas::new(config.cell_size);

    if !canvas.fits_board(config.board_width, config.board_height)? {
        anyhow::bail!(
            "terminal too small for a {}x{} board, enlarge the window and retry",
            config.board_width / config.cell_size,
            config.board_height / config.cell_size
        );
    }

    canvas.setup()?;
    let result = run(&config, &mut engine, &mut canvas);
    canvas.restore()?;
    result
}

/// Host loop: drain input, tick the engine with a monotonic millisecond
/// timestamp, draw, then wait out the frame. Runs until the user quits.
fn run(config: &GameConfig, engine: &mut GameEngine, canvas: &mut TermCanvas) -> anyhow::Result<()> {
    let started = Instant::now();
    let mut banner_until = 0;

    loop {
        sleep(Duration::from_millis(FRAME_INTERVAL_MS));

        for key in canvas.poll_keys()? {
            if is_quit(&key) {
                return Ok(());
            }
            if let Some(direction) = direction_for_key(&key) {
                engine.set_direction(direction);
            }
        }

        let now = started.elapsed().as_millis() as u64;
        if let Some(GameEvent::GameOver { .. }) = engine.tick(now) {
            banner_until = now + BANNER_MS;
        }

        engine.render(canvas)?;
        if now < banner_until {
            let pos = (config.board_width / 2 - 5 * config.cell_size, config.board_height / 2);
            canvas.fill_text("Game Over!", pos, canvas::TEXT)?;
        }
        canvas.present()?;
    }
}

fn direction_for_key(ev: &KeyEvent) -> Option<Direction> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Direction::North),
        KeyCode::Char('s') | KeyCode::Down => Some(Direction::South),
        KeyCode::Char('a') | KeyCode::Left => Some(Direction::West),
        KeyCode::Char('d') | KeyCode::Right => Some(Direction::East),
        _ => None,
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
        || ev.code == KeyCode::Char('q')
}

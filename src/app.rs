use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::constants::{ui, LOOP_TIME, WORLD_SIZE};
use crate::error::{GameError, GameResult};
use crate::game::Game;

/// Main application wrapper that manages SDL initialization, window
/// lifecycle, and the fixed-cadence game loop.
pub struct App {
    pub game: Game,
    last_tick: Instant,
    // Keep SDL alive for the app lifetime so subsystems are not shut down
    _sdl_context: sdl2::Sdl,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up
    /// the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        let window = video_subsystem
            .window(ui::WINDOW_TITLE, WORLD_SIZE.x as u32, WORLD_SIZE.y as u32)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let game = Game::new(canvas, event_pump);

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            last_tick: Instant::now(),
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame of the game loop with consistent timing.
    ///
    /// Runs game logic via `Game::tick`, then sleeps for whatever remains
    /// of the target frame time.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if an exit was
    /// requested.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = start;

        if self.game.tick(dt) {
            return false;
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!(behind = ?(start.elapsed() - LOOP_TIME), "Game loop behind schedule");
        }

        true
    }
}

//! Dino Run entry point
//!
//! Native builds run a headless session at 60 Hz with the autopilot pressing
//! the keys, then print the final snapshot as JSON. Usage:
//!
//! ```text
//! dino-run [easy|normal|hard] [--seed N] [--seconds S] [--fast]
//!          [--config PATH] [--highscore PATH]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use clap::Parser;
    use dino_run::consts::{FRAME_DT, MAX_FRAME_DT};
    use dino_run::highscore::DEFAULT_HIGHSCORE_FILE;
    use dino_run::platform::{InputEvent, Key, MenuLayout, translate};
    use dino_run::sim::{self, TickEvent};
    use dino_run::{Command, Difficulty, FileStore, GameConfig, SessionController, SessionState};

    /// Headless Dino Run: the autopilot plays one run and the final snapshot
    /// is printed as JSON.
    #[derive(Debug, Parser)]
    #[command(author, version, about, long_about = None)]
    struct Options {
        /// Difficulty preset (easy, normal or hard)
        #[arg(value_name = "DIFFICULTY", default_value = "normal", value_parser = parse_difficulty)]
        difficulty: Difficulty,

        /// Spawner seed; random when omitted
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Longest run to simulate
        #[arg(long, value_name = "S", default_value_t = 60.0, value_parser = parse_seconds)]
        seconds: f32,

        /// Step simulated time without sleeping
        #[arg(long)]
        fast: bool,

        /// JSON file overriding the game constants
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// High score file
        #[arg(long, value_name = "PATH", default_value = DEFAULT_HIGHSCORE_FILE)]
        highscore: PathBuf,
    }

    fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
        Difficulty::parse(s).ok_or_else(|| format!("unknown difficulty {:?}, expected easy, normal or hard", s))
    }

    fn parse_seconds(s: &str) -> Result<f32, String> {
        let seconds: f32 = s.parse().map_err(|e| format!("{}", e))?;
        if seconds.is_finite() && seconds > 0.0 {
            Ok(seconds)
        } else {
            Err(format!("{} is not a positive number of seconds", s))
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Dino Run (native, headless) starting...");

        let options = Options::parse();
        let config = options
            .config
            .as_ref()
            .map(GameConfig::load)
            .unwrap_or_default();
        let seed = options.seed.unwrap_or_else(rand::random);
        let layout = MenuLayout::new(config.screen_width);

        let mut game = SessionController::new(config, FileStore::new(&options.highscore), seed);
        let press = |game: &SessionController<FileStore>, event: InputEvent| {
            translate(event, game.state(), &layout)
        };

        game.handle(Command::SelectDifficulty(options.difficulty));
        if let Some(command) = press(&game, InputEvent::KeyDown(Key::Enter)) {
            game.handle(command);
        }

        let frame = Duration::from_secs_f32(FRAME_DT);
        let mut last = Instant::now();
        let mut elapsed = 0.0;
        while elapsed < options.seconds && game.state() == SessionState::Running {
            let dt = if options.fast {
                FRAME_DT
            } else {
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
                last = now;
                dt
            };

            let mut commands = Vec::new();
            if sim::should_jump(game.run(), game.config()) {
                commands.extend(press(&game, InputEvent::KeyDown(Key::Space)));
            }

            if let TickEvent::Collision { obstacle_id, score } = game.frame(&commands, dt) {
                log::info!("Hit obstacle {} after {:.1}s, score {}", obstacle_id, elapsed, score);
            }
            elapsed += dt;

            if !options.fast {
                let spent = last.elapsed();
                if spent < frame {
                    std::thread::sleep(frame - spent);
                }
            }
        }

        match serde_json::to_string_pretty(&game.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize snapshot: {}", e),
        }

        if let Some(command) = press(&game, InputEvent::KeyDown(Key::Enter)) {
            game.handle(command);
        }
        log::info!("Finished on {:?}, high score {}", game.state(), game.high_score());
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use dino_run::highscore::LocalStorageStore;
    use dino_run::{GameConfig, SessionController};

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Dino Run starting...");

    // The browser host drives frames; this only proves the store and core wire up
    let game = SessionController::new(GameConfig::default(), LocalStorageStore, rand::random());
    log::info!("High score: {}", game.high_score());
}

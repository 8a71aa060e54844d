//! Session state machine
//!
//! ```text
//! Selecting --ConfirmStart--> Running --collision--> GameOver --ConfirmReturn--> Selecting
//! ```
//!
//! The controller owns the config, the current run and the high score store.
//! Commands that make no sense in the current state are ignored.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::difficulty::{Difficulty, Tuning};
use crate::highscore::HighScoreStore;
use crate::sim::{self, Rect, RunState, Spawner, TickEvent};

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Choosing a difficulty
    Selecting,
    /// Active gameplay
    Running,
    /// Run ended, waiting to return to the menu
    GameOver,
}

/// Abstract input produced by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Jump,
    ConfirmStart,
    ConfirmReturn,
    SelectDifficulty(Difficulty),
}

/// Everything the presentation layer needs to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: SessionState,
    pub difficulty: Difficulty,
    pub player: Rect,
    /// Obstacle rects in creation order
    pub obstacles: Vec<Rect>,
    pub score: u64,
    pub high_score: u64,
}

/// Top-level game controller
#[derive(Debug)]
pub struct SessionController<S: HighScoreStore> {
    config: GameConfig,
    state: SessionState,
    difficulty: Difficulty,
    tuning: Tuning,
    run: RunState,
    spawner: Spawner,
    store: S,
    high_score: u64,
}

impl<S: HighScoreStore> SessionController<S> {
    /// Create a controller on the selection screen.
    ///
    /// The high score is read from `store` once, here.
    pub fn new(config: GameConfig, store: S, seed: u64) -> Self {
        let high_score = store.load();
        let difficulty = Difficulty::default();
        let tuning = Tuning::for_difficulty(&config, difficulty);
        let run = RunState::new(&config);
        log::info!("Session ready (seed {}, high score {})", seed, high_score);
        Self {
            config,
            state: SessionState::Selecting,
            difficulty,
            tuning,
            run,
            spawner: Spawner::new(seed),
            store,
            high_score,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    /// Mutable run access, for scripted scenarios and tests
    pub fn run_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a single command
    pub fn handle(&mut self, command: Command) {
        match (self.state, command) {
            (SessionState::Selecting, Command::SelectDifficulty(difficulty)) => {
                self.select_difficulty(difficulty);
            }
            (SessionState::Selecting, Command::ConfirmStart) => self.start_run(),
            (SessionState::Running, Command::Jump) => {
                sim::jump(&mut self.run, &self.config);
            }
            (SessionState::GameOver, Command::ConfirmReturn) => {
                log::info!("Back to difficulty selection");
                self.state = SessionState::Selecting;
            }
            (state, command) => {
                log::trace!("Ignoring {:?} in {:?}", command, state);
            }
        }
    }

    /// Select a difficulty by name (unknown names select normal)
    pub fn select_difficulty_by_name(&mut self, name: &str) {
        self.handle(Command::SelectDifficulty(Difficulty::from_name(name)));
    }

    fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.tuning = Tuning::for_difficulty(&self.config, difficulty);
        log::info!(
            "Difficulty {} (speed {:.0}, spawn every {:.3}s)",
            difficulty.as_str(),
            self.tuning.speed,
            self.tuning.spawn_interval
        );
    }

    fn start_run(&mut self) {
        self.run.reset(&self.config);
        self.state = SessionState::Running;
        log::info!("Run started on {}", self.difficulty.as_str());
    }

    /// Advance the simulation by `dt`. Does nothing outside a live run.
    pub fn update(&mut self, dt: f32) -> TickEvent {
        if self.state != SessionState::Running {
            return TickEvent::Continue;
        }

        let event = sim::tick(&mut self.run, &mut self.spawner, &self.tuning, &self.config, dt);
        if let TickEvent::Collision { score, .. } = event {
            self.end_run(score);
        }
        event
    }

    fn end_run(&mut self, score: u64) {
        self.state = SessionState::GameOver;
        log::info!("Game over with score {}", score);
        if score > self.high_score {
            self.high_score = score;
            self.store.save(score);
            log::info!("New high score: {}", score);
        }
    }

    /// One frame: apply the frame's commands in order, then advance once
    pub fn frame(&mut self, commands: &[Command], dt: f32) -> TickEvent {
        for &command in commands {
            self.handle(command);
        }
        self.update(dt)
    }

    /// Render-ready view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            difficulty: self.difficulty,
            player: self.run.player.rect(),
            obstacles: self.run.obstacles.iter().map(|ob| ob.rect).collect(),
            score: self.run.score_int(),
            high_score: self.high_score,
        }
    }
}

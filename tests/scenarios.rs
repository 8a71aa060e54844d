//! End-to-end session scenarios

use dino_run::consts::FRAME_DT;
use dino_run::sim::{Obstacle, TickEvent};
use dino_run::{
    Command, Difficulty, FileStore, GameConfig, HighScoreStore, MemoryStore, SessionController,
    SessionState,
};
use glam::Vec2;

fn controller(high: u64) -> SessionController<MemoryStore> {
    SessionController::new(GameConfig::default(), MemoryStore::with_high(high), 2024)
}

/// Put a motionless obstacle right on top of the player
fn place_blocker<S: HighScoreStore>(game: &mut SessionController<S>) {
    let ground_y = game.config().ground_y;
    let run = game.run_mut();
    let id = run.next_obstacle_id();
    run.obstacles
        .push(Obstacle::on_ground(id, 90.0, Vec2::new(28.0, 40.0), 0.0, ground_y));
}

/// Start a run, set its score, then crash it
fn crash_with_score<S: HighScoreStore>(game: &mut SessionController<S>, score: f32) {
    game.handle(Command::ConfirmStart);
    assert_eq!(game.state(), SessionState::Running);
    game.run_mut().score = score;
    place_blocker(game);
    assert!(matches!(game.update(FRAME_DT), TickEvent::Collision { .. }));
    assert_eq!(game.state(), SessionState::GameOver);
    game.handle(Command::ConfirmReturn);
}

#[test]
fn test_hard_run_survives_ten_seconds() {
    let mut game = controller(0);
    game.handle(Command::SelectDifficulty(Difficulty::Hard));
    assert_eq!(game.state(), SessionState::Selecting);
    game.handle(Command::ConfirmStart);

    assert_eq!(game.state(), SessionState::Running);
    assert!((game.tuning().speed - 378.0).abs() < 1e-3);
    assert!((game.tuning().spawn_interval - 0.975).abs() < 1e-5);
    assert_eq!(game.run().score, 0.0);

    let mut spawned = 0;
    for _ in 0..600 {
        assert_eq!(game.frame(&[], FRAME_DT), TickEvent::Continue);
        spawned += game.run().obstacles.len();
        for ob in &game.run().obstacles {
            assert!(ob.rect.left() > 700.0);
            assert!(ob.speed >= 378.0 * 0.8 - 1e-3);
        }
        // Sweep obstacles away long before they can reach the player
        game.run_mut().obstacles.clear();
    }

    assert!(spawned > 0);
    assert!((game.run().score - 100.0).abs() < 0.01, "score {}", game.run().score);
    assert_eq!(game.snapshot().score, game.run().score_int());
    assert_eq!(game.state(), SessionState::Running);
}

#[test]
fn test_collision_then_return_keeps_difficulty() {
    let mut game = controller(0);
    game.handle(Command::SelectDifficulty(Difficulty::Hard));
    game.handle(Command::ConfirmStart);
    for _ in 0..30 {
        game.frame(&[], FRAME_DT);
    }

    place_blocker(&mut game);
    assert!(matches!(game.update(FRAME_DT), TickEvent::Collision { .. }));
    assert_eq!(game.state(), SessionState::GameOver);

    // Frozen: no jumping, no ticking, no scoring
    let vy = game.run().player.vy;
    let score = game.run().score;
    game.handle(Command::Jump);
    assert_eq!(game.run().player.vy, vy);
    assert!(game.run().player.grounded);
    game.update(1.0);
    assert_eq!(game.run().score, score);
    assert_eq!(game.state(), SessionState::GameOver);

    game.handle(Command::ConfirmReturn);
    assert_eq!(game.state(), SessionState::Selecting);
    assert_eq!(game.difficulty(), Difficulty::Hard);
}

#[test]
fn test_restart_resets_run() {
    let mut game = controller(0);
    game.handle(Command::ConfirmStart);
    game.handle(Command::Jump);
    for _ in 0..100 {
        game.frame(&[], FRAME_DT);
        if game.state() != SessionState::Running {
            break;
        }
    }
    place_blocker(&mut game);
    game.update(FRAME_DT);
    game.handle(Command::ConfirmReturn);
    game.handle(Command::ConfirmStart);

    let run = game.run();
    assert_eq!(run.score, 0.0);
    assert_eq!(run.spawn_timer, 0.0);
    assert!(run.obstacles.is_empty());
    assert!(run.player.grounded);
    assert_eq!(run.player.vy, 0.0);
    assert_eq!(run.player.pos.y, game.config().resting_y());
}

#[test]
fn test_high_score_only_grows() {
    let mut game = controller(3);

    crash_with_score(&mut game, 57.9);
    assert_eq!(game.high_score(), 57);
    assert_eq!(game.store().high, 57);
    assert_eq!(game.store().saves, 1);

    crash_with_score(&mut game, 12.0);
    assert_eq!(game.high_score(), 57);
    assert_eq!(game.store().saves, 1);

    // Equal is not greater
    crash_with_score(&mut game, 57.99);
    assert_eq!(game.store().saves, 1);

    crash_with_score(&mut game, 58.0);
    assert_eq!(game.high_score(), 58);
    assert_eq!(game.store().saves, 2);
}

#[test]
fn test_high_score_survives_restart() {
    let path = std::env::temp_dir().join(format!("dino_run_session_{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut game = SessionController::new(GameConfig::default(), FileStore::new(&path), 1);
    assert_eq!(game.high_score(), 0);
    crash_with_score(&mut game, 88.4);

    let game = SessionController::new(GameConfig::default(), FileStore::new(&path), 2);
    assert_eq!(game.high_score(), 88);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_changing_difficulty_keeps_existing_speeds() {
    let mut game = controller(0);
    game.handle(Command::SelectDifficulty(Difficulty::Easy));
    assert!((game.tuning().speed - 224.0).abs() < 1e-3);
    game.handle(Command::SelectDifficulty(Difficulty::Normal));
    assert!((game.tuning().speed - 280.0).abs() < 1e-3);
    assert!((game.tuning().spawn_interval - 1.3).abs() < 1e-6);

    game.handle(Command::ConfirmStart);
    while game.run().obstacles.is_empty() {
        game.frame(&[], FRAME_DT);
    }
    let speeds: Vec<f32> = game.run().obstacles.iter().map(|o| o.speed).collect();

    // Selection is locked while running
    game.handle(Command::SelectDifficulty(Difficulty::Hard));
    assert_eq!(game.difficulty(), Difficulty::Normal);
    game.frame(&[], FRAME_DT);
    let after: Vec<f32> = game.run().obstacles.iter().map(|o| o.speed).collect();
    assert_eq!(speeds, after);
}

#[test]
fn test_snapshot_serializes() {
    let mut game = controller(9);
    game.handle(Command::ConfirmStart);
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["state"], "Running");
    assert_eq!(json["difficulty"], "normal");
    assert_eq!(json["high_score"], 9);
    assert_eq!(json["score"], 0);
}

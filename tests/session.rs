//! End-to-end session scenarios

use glam::Vec2;

use mini_golf::consts::*;
use mini_golf::levels::{HoleSpec, LevelSpec, ObstacleSpec};
use mini_golf::platform::{InputEvent, putt_input};
use mini_golf::render::{DrawCommand, RecordingCanvas, draw_frame};
use mini_golf::sim::{Ball, GameEvent, GamePhase, GameState, TickInput, tick};
use mini_golf::{DampingModel, PhysicsConfig, default_levels};

fn open_level(spawn: Vec2, radius: f32, hole: Vec2) -> LevelSpec {
    LevelSpec {
        name: "test".to_string(),
        spawn,
        ball_radius: radius,
        max_shots: None,
        obstacles: Vec::new(),
        hole: HoleSpec {
            center: hole,
            radius: 25.0,
        },
    }
}

fn idle() -> TickInput {
    TickInput::default()
}

#[test]
fn shot_from_rest_moves_ball_and_counts() {
    let config = PhysicsConfig::default();
    let mut ball = Ball::new(Vec2::new(800.0, 450.0), 20.0, None);

    ball.shoot(Vec2::new(-500.0, 0.0), &config);

    assert!(ball.vel.x < 0.0);
    assert_eq!(ball.shots_taken, 1);
}

#[test]
fn fourth_shot_with_limit_three_resets_to_spawn() {
    let config = PhysicsConfig::default();
    let spawn = Vec2::new(800.0, 450.0);
    let mut ball = Ball::new(spawn, 20.0, Some(3));

    for _ in 0..4 {
        ball.shoot(Vec2::new(-3.0, 1.0), &config);
        for _ in 0..3 {
            ball.update(&config);
        }
    }
    // The 4th shot resets, the following updates leave it still
    assert_eq!(ball.pos, spawn);
    assert_eq!(ball.vel, Vec2::ZERO);
    assert_eq!(ball.acc, Vec2::ZERO);
    assert_eq!(ball.shots_taken, 0);
    assert!(ball.stopped);
}

#[test]
fn shot_limit_reset_is_reported_by_the_session() {
    let mut spec = open_level(Vec2::new(400.0, 450.0), 15.0, Vec2::new(1500.0, 100.0));
    spec.max_shots = Some(1);
    let mut state = GameState::new(vec![spec], PhysicsConfig::default());

    let mut resets = 0;
    for _ in 0..2 {
        let ball = &state.level.ball;
        let input = TickInput {
            events: vec![
                InputEvent::DragStart(ball.pos),
                InputEvent::DragMove(ball.pos + Vec2::new(0.0, 0.1)),
                InputEvent::DragEnd,
            ],
        };
        tick(&mut state, &input, SIM_DT);
        resets += state.events.iter().filter(|e| **e == GameEvent::BallReset).count();
        while !state.level.ball.stopped {
            tick(&mut state, &idle(), SIM_DT);
        }
    }

    assert_eq!(resets, 1);
    assert_eq!(state.total_shots, 2);
    assert_eq!(state.level.ball.pos, Vec2::new(400.0, 450.0));
}

#[test]
fn ball_on_hole_advances_after_delay() {
    let config = PhysicsConfig::default();
    let levels = vec![
        open_level(Vec2::new(800.0, 800.0), 20.0, Vec2::new(800.0, 800.0)),
        open_level(Vec2::new(200.0, 600.0), 17.5, Vec2::new(1200.0, 100.0)),
    ];
    let mut state = GameState::new(levels, config.clone());
    assert!(state.level.hole.contains(state.level.ball.pos));

    tick(&mut state, &idle(), SIM_DT);
    assert!(matches!(state.phase, GamePhase::Sinking { .. }));

    for _ in 0..config.sink_delay_ticks {
        tick(&mut state, &idle(), SIM_DT);
    }
    assert_eq!(state.level_index, 1);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn ball_bounces_off_left_edge() {
    let r = 20.0;
    let mut spec = open_level(Vec2::new(r + 5.0, 450.0), r, Vec2::new(1500.0, 100.0));
    spec.hole.radius = 10.0;
    let mut state = GameState::new(vec![spec], PhysicsConfig::default());
    state.level.ball.vel = Vec2::new(-10.0, 0.0);
    state.level.ball.stopped = false;

    tick(&mut state, &idle(), SIM_DT);

    let ball = &state.level.ball;
    assert_eq!(ball.pos.x, r);
    assert!((ball.vel.x - 10.0 * DAMPING * WALL_BOUNCE).abs() < 1e-4);
}

#[test]
fn ball_bounces_off_obstacle_without_losing_speed() {
    let mut spec = open_level(Vec2::new(500.0, 450.0), 15.0, Vec2::new(100.0, 100.0));
    spec.obstacles.push(ObstacleSpec {
        center: Vec2::new(560.0, 450.0),
        width: 40.0,
        height: 200.0,
        rotation: 0.0,
    });
    let config = PhysicsConfig {
        damping: 1.0,
        ..PhysicsConfig::default()
    };
    let mut state = GameState::new(vec![spec], config);
    // Touching the left face, heading into it
    state.level.ball.pos = Vec2::new(530.0, 450.0);
    state.level.ball.vel = Vec2::new(6.0, 2.0);

    tick(&mut state, &idle(), SIM_DT);

    let vel = state.level.ball.vel;
    assert!((vel - Vec2::new(-6.0, 2.0)).length() < 1e-5);
    assert!(state.events.contains(&GameEvent::Collision { contacts: 1 }));
}

#[test]
fn speed_scaled_putt_settles_on_default_course() {
    let config = PhysicsConfig {
        damping_model: DampingModel::SpeedScaled,
        ..PhysicsConfig::default()
    };
    let mut state = GameState::new(default_levels(), config);
    let pos = state.level.ball.pos;
    let input = TickInput {
        events: vec![
            InputEvent::DragStart(pos),
            InputEvent::DragMove(pos + Vec2::new(20.0, 0.0)),
            InputEvent::DragEnd,
        ],
    };
    tick(&mut state, &input, SIM_DT);

    for _ in 0..5000 {
        if state.level.ball.stopped || state.phase != GamePhase::Playing {
            break;
        }
        tick(&mut state, &idle(), SIM_DT);
        let ball = &state.level.ball;
        assert!(ball.pos.is_finite() && ball.vel.is_finite());
    }
    assert!(state.level.ball.stopped || state.phase != GamePhase::Playing);
}

#[test]
fn levels_are_fresh_on_every_entry() {
    let levels = vec![open_level(Vec2::new(300.0, 300.0), 20.0, Vec2::new(1500.0, 800.0))];
    let mut state = GameState::new(levels, PhysicsConfig::default());

    let putt = putt_input(&state.level.ball, Vec2::new(600.0, 300.0), 0.0, &state.config);
    tick(&mut state, &putt, SIM_DT);
    for _ in 0..30 {
        tick(&mut state, &idle(), SIM_DT);
    }
    assert_eq!(state.level.ball.shots_taken, 1);

    let restart = TickInput {
        events: vec![InputEvent::Restart],
    };
    tick(&mut state, &restart, SIM_DT);
    assert_eq!(state.level.ball, Ball::new(Vec2::new(300.0, 300.0), 20.0, None));
    assert_eq!(state.level_spec().spawn, Vec2::new(300.0, 300.0));
}

#[test]
fn autoplay_clears_default_course() {
    let mut state = GameState::new(default_levels(), PhysicsConfig::default());
    let mut canvas = RecordingCanvas::new();
    let mut sunk = Vec::new();

    for _ in 0..20_000 {
        if state.phase == GamePhase::Won {
            break;
        }
        let input = if state.phase == GamePhase::Playing && state.level.ball.stopped {
            let hole = state.level.hole;
            putt_input(&state.level.ball, hole.center, hole.radius, &state.config)
        } else {
            idle()
        };
        tick(&mut state, &input, SIM_DT);
        draw_frame(&state, &mut canvas, true);

        for event in &state.events {
            if let GameEvent::Sunk { level, .. } = event {
                sunk.push(*level);
            }
        }
    }

    assert_eq!(state.phase, GamePhase::Won);
    assert_eq!(sunk, vec![0, 1, 2]);
    assert!(state.total_shots >= 3);
    assert!(matches!(canvas.frame()[0], DrawCommand::Clear { .. }));
}

//! Fixed timestep simulation tick
//!
//! One call advances the session by one frame: queued input is applied, the
//! ball is resolved against obstacles, integrated, kept in bounds, and checked
//! against the hole.

use glam::Vec2;

use super::collision::resolve_obstacles;
use super::state::{GameEvent, GamePhase, GameState};
use crate::platform::InputEvent;

/// Input gathered since the previous tick, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Advance the game by one tick.
///
/// `dt` is only bookkeeping: physics constants are per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // Focus changes are the only thing a paused game listens to
    for event in &input.events {
        match event {
            InputEvent::Blur if !state.paused => {
                state.paused = true;
                state.drag.cancel();
                log::info!("Paused (window blur)");
                state.events.push(GameEvent::Paused);
            }
            InputEvent::Focus if state.paused => {
                state.paused = false;
                log::info!("Resumed (window focus)");
                state.events.push(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    if state.paused {
        return;
    }

    for event in &input.events {
        handle_input(state, *event);
    }

    if state.phase == GamePhase::Won {
        return;
    }

    state.time_ticks += 1;
    state.elapsed_secs += dt as f64;

    match state.phase {
        GamePhase::Playing => step_ball(state),
        GamePhase::Sinking { ticks_left } => {
            if ticks_left <= 1 {
                state.advance_level();
            } else {
                state.phase = GamePhase::Sinking {
                    ticks_left: ticks_left - 1,
                };
            }
        }
        GamePhase::Won => {}
    }
}

fn handle_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::DragStart(at) => {
            if state.phase == GamePhase::Playing && state.level.ball.contains_point(at) {
                state.drag.begin(at);
            }
        }
        InputEvent::DragMove(at) => state.drag.track(at),
        InputEvent::DragEnd => {
            let Some(impulse) = state.drag.release() else {
                return;
            };
            if state.phase != GamePhase::Playing {
                return;
            }
            if !state.level.ball.stopped {
                log::debug!("Ignoring shot, ball still rolling");
                return;
            }
            shoot(state, impulse);
        }
        InputEvent::Restart => state.restart_level(),
        InputEvent::Blur | InputEvent::Focus => {}
    }
}

fn shoot(state: &mut GameState, impulse: Vec2) {
    state.level.ball.shoot(impulse, &state.config);
    state.record_shot();

    let shots_taken = state.level.ball.shots_taken;
    log::info!(
        "Shot {} on level {}: impulse ({:.1}, {:.1})",
        state.total_shots,
        state.level_index + 1,
        impulse.x,
        impulse.y
    );
    state.events.push(GameEvent::Shot {
        impulse,
        shots_taken,
    });
    if shots_taken == 0 {
        state.events.push(GameEvent::BallReset);
    }
}

fn step_ball(state: &mut GameState) {
    let config = &state.config;
    let level = &mut state.level;

    let contacts = resolve_obstacles(&mut level.ball, &level.obstacles);

    level.ball.update(config);
    level
        .ball
        .clamp_to_bounds(config.world_size, config.wall_bounce, config.rest_speed);

    if contacts > 0 {
        state.events.push(GameEvent::Collision { contacts });
    }

    if state.level.hole.contains(state.level.ball.pos) {
        let shots = state.level.ball.shots_taken;
        log::info!("Level {} holed in {} shots", state.level_index + 1, shots);
        state.phase = GamePhase::Sinking {
            ticks_left: state.config.sink_delay_ticks,
        };
        state.drag.cancel();
        state.events.push(GameEvent::Sunk {
            level: state.level_index,
            shots,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::levels::{HoleSpec, LevelSpec, ObstacleSpec, default_levels};
    use crate::settings::PhysicsConfig;

    fn level(spawn: Vec2, hole: Vec2) -> LevelSpec {
        LevelSpec {
            name: String::new(),
            spawn,
            ball_radius: 20.0,
            max_shots: None,
            obstacles: Vec::new(),
            hole: HoleSpec {
                center: hole,
                radius: 25.0,
            },
        }
    }

    fn drag(from: Vec2, to: Vec2) -> TickInput {
        TickInput {
            events: vec![
                InputEvent::DragStart(from),
                InputEvent::DragMove(to),
                InputEvent::DragEnd,
            ],
        }
    }

    #[test]
    fn test_drag_shoots_ball() {
        let mut state = GameState::new(default_levels(), PhysicsConfig::default());
        let ball_pos = state.level.ball.pos;

        // Pull to the right, ball goes left
        tick(&mut state, &drag(ball_pos, ball_pos + Vec2::new(20.0, 0.0)), SIM_DT);

        assert_eq!(state.level.ball.shots_taken, 1);
        assert_eq!(state.total_shots, 1);
        assert!(state.level.ball.vel.x < 0.0);
        assert!(state.level.ball.pos.x < ball_pos.x);
        assert!(state.events.iter().any(|e| matches!(e, GameEvent::Shot { .. })));
    }

    #[test]
    fn test_drag_outside_ball_ignored() {
        let mut state = GameState::new(default_levels(), PhysicsConfig::default());
        let far = state.level.ball.pos + Vec2::new(100.0, 0.0);

        tick(&mut state, &drag(far, far + Vec2::new(300.0, 0.0)), SIM_DT);

        assert_eq!(state.level.ball.shots_taken, 0);
        assert_eq!(state.level.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_rolling_ball_cannot_be_shot() {
        let mut state = GameState::new(default_levels(), PhysicsConfig::default());
        let pos = state.level.ball.pos;
        tick(&mut state, &drag(pos, pos + Vec2::new(0.0, -1.0)), SIM_DT);
        assert!(!state.level.ball.stopped);

        let pos = state.level.ball.pos;
        tick(&mut state, &drag(pos, pos + Vec2::new(0.0, -1.0)), SIM_DT);
        assert_eq!(state.level.ball.shots_taken, 1);
    }

    #[test]
    fn test_pause_short_circuits() {
        let mut state = GameState::new(default_levels(), PhysicsConfig::default());
        let pos = state.level.ball.pos;
        tick(&mut state, &drag(pos, pos + Vec2::new(-50.0, 0.0)), SIM_DT);
        let ticks = state.time_ticks;

        let blur = TickInput {
            events: vec![InputEvent::Blur],
        };
        tick(&mut state, &blur, SIM_DT);
        assert!(state.paused);
        assert_eq!(state.events, vec![GameEvent::Paused]);

        let frozen = state.level.ball.clone();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.level.ball, frozen);
        assert_eq!(state.time_ticks, ticks);

        let focus = TickInput {
            events: vec![InputEvent::Focus],
        };
        tick(&mut state, &focus, SIM_DT);
        assert!(!state.paused);
        assert_eq!(state.time_ticks, ticks + 1);
        assert_ne!(state.level.ball.pos, frozen.pos);
    }

    #[test]
    fn test_blur_cancels_drag() {
        let mut state = GameState::new(default_levels(), PhysicsConfig::default());
        let pos = state.level.ball.pos;

        let start = TickInput {
            events: vec![
                InputEvent::DragStart(pos),
                InputEvent::DragMove(pos + Vec2::new(30.0, 0.0)),
            ],
        };
        tick(&mut state, &start, SIM_DT);
        assert!(state.drag.active);

        for event in [InputEvent::Blur, InputEvent::Focus, InputEvent::DragEnd] {
            tick(&mut state, &TickInput { events: vec![event] }, SIM_DT);
        }

        assert!(!state.drag.active);
        assert_eq!(state.level.ball.shots_taken, 0);
        assert_eq!(state.total_shots, 0);
        assert_eq!(state.level.ball.pos, pos);
    }

    #[test]
    fn test_ball_on_hole_sinks_then_advances() {
        let config = PhysicsConfig::default();
        let delay = config.sink_delay_ticks;
        let levels = vec![
            level(Vec2::new(800.0, 800.0), Vec2::new(800.0, 800.0)),
            level(Vec2::new(200.0, 600.0), Vec2::new(1200.0, 100.0)),
        ];
        let mut state = GameState::new(levels, config);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Sinking { ticks_left: delay });
        assert!(state.events.contains(&GameEvent::Sunk { level: 0, shots: 0 }));

        for _ in 1..delay {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert_eq!(state.level_index, 0);
        }
        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.level_index, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level.ball.pos, Vec2::new(200.0, 600.0));
        assert!(state.events.contains(&GameEvent::LevelStarted { level: 1 }));
    }

    #[test]
    fn test_sinking_freezes_ball_and_input() {
        let levels = vec![level(Vec2::new(800.0, 800.0), Vec2::new(800.0, 800.0))];
        let mut state = GameState::new(levels, PhysicsConfig::default());
        tick(&mut state, &TickInput::default(), SIM_DT);

        let pos = state.level.ball.pos;
        tick(&mut state, &drag(pos, pos + Vec2::new(10.0, 0.0)), SIM_DT);
        assert_eq!(state.level.ball.shots_taken, 0);
        assert_eq!(state.level.ball.pos, pos);
    }

    #[test]
    fn test_last_level_wins_and_stops() {
        let config = PhysicsConfig {
            sink_delay_ticks: 2,
            ..PhysicsConfig::default()
        };
        let levels = vec![level(Vec2::new(800.0, 800.0), Vec2::new(800.0, 800.0))];
        let mut state = GameState::new(levels, config);

        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::Won);
        assert!(state.events.contains(&GameEvent::Won { total_shots: 0 }));

        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_restart_rebuilds_level() {
        let mut spec = level(Vec2::new(400.0, 400.0), Vec2::new(1500.0, 100.0));
        spec.obstacles.push(ObstacleSpec {
            center: Vec2::new(700.0, 400.0),
            width: 50.0,
            height: 50.0,
            rotation: 0.3,
        });
        let mut state = GameState::new(vec![spec], PhysicsConfig::default());

        tick(&mut state, &drag(Vec2::new(400.0, 400.0), Vec2::new(390.0, 400.0)), SIM_DT);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_ne!(state.level.ball.pos, Vec2::new(400.0, 400.0));

        let restart = TickInput {
            events: vec![InputEvent::Restart],
        };
        tick(&mut state, &restart, SIM_DT);

        assert_eq!(state.level.ball.shots_taken, 0);
        assert_eq!(state.total_shots, 0);
        assert_eq!(state.level.ball.pos, Vec2::new(400.0, 400.0));
        assert_eq!(state.level.obstacles.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(default_levels(), PhysicsConfig::default());
        let mut state2 = GameState::new(default_levels(), PhysicsConfig::default());
        let pos = state1.level.ball.pos;

        let inputs = [
            drag(pos, pos + Vec2::new(-300.0, -120.0)),
            TickInput::default(),
            TickInput::default(),
        ];

        for input in &inputs {
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }
        for _ in 0..200 {
            tick(&mut state1, &TickInput::default(), SIM_DT);
            tick(&mut state2, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.level.ball, state2.level.ball);
    }
}

//! State machine tests - full frames through `GameStateMachine::step`

use tui_pacman::core::{
    FrameEnv, GameConfig, GameStateMachine, LevelData, StepOutcome, CLASSIC_LAYOUT,
};
use tui_pacman::types::{
    tile, ColorMod, Direction, GameState, InputSnapshot, TileCoord, TOTAL_PELLETS,
};

/// Two pellets right of the start, wall on the left.
const POCKET: [&str; 3] = ["#####", "#P..#", "#####"];

/// Corridor whose middle row is a wrap-around tunnel.
const TUNNEL: [&str; 5] = [
    "#######", //
    "#.....#", //
    "  .P.  ", //
    "#.....#", //
    "#######",
];

struct Driver {
    machine: GameStateMachine,
    now: u64,
    visited: Vec<GameState>,
}

impl Driver {
    fn new(layout: &[&str], config: GameConfig) -> Self {
        let level = LevelData::from_ascii(layout).unwrap();
        Self {
            machine: GameStateMachine::new(level, config),
            now: 0,
            visited: Vec::new(),
        }
    }

    fn step_with(&mut self, input: InputSnapshot) -> StepOutcome {
        self.now += 16;
        let outcome = self.machine.step(&FrameEnv::new(self.now, input)).unwrap();
        self.visited.push(self.machine.state());
        outcome
    }

    fn step(&mut self) -> StepOutcome {
        self.step_with(InputSnapshot::default())
    }

    fn hold(&mut self, direction: Direction) -> StepOutcome {
        self.step_with(InputSnapshot::default().with_direction(direction))
    }

    /// Step until `state` is reached, failing after `max` frames.
    fn step_until(&mut self, state: GameState, max: usize) {
        for _ in 0..max {
            if self.machine.state() == state {
                return;
            }
            self.step();
        }
        assert_eq!(self.machine.state(), state, "not reached in {max} frames");
    }

    fn player_velocity(&self) -> (f64, f64) {
        self.machine.player().unwrap().velocity()
    }
}

fn quick_start() -> GameConfig {
    GameConfig {
        start_delay_ms: 0,
        ..GameConfig::default()
    }
}

#[test]
fn test_classic_startup_sequence() {
    let level = LevelData::classic().unwrap();
    let mut m = GameStateMachine::new(level, GameConfig::default());
    assert_eq!(m.state(), GameState::Title);
    assert!(m.maze().is_none());

    m.step(&FrameEnv::idle(0)).unwrap();
    assert_eq!(m.state(), GameState::LoadingLevel);

    m.step(&FrameEnv::idle(16)).unwrap();
    assert_eq!(m.state(), GameState::WaitingToStartLevel);

    let maze = m.maze().unwrap();
    let player = m.player().unwrap();
    assert_eq!(maze.pellets_remaining(), 244);
    assert_eq!(player.position(), maze.to_screen(TileCoord::new(23, 13)));
    assert_eq!(player.facing(), Direction::Left);
    assert_eq!(player.velocity(), (-1.5, 0.0));
    assert_eq!(m.render_state().clip, Some(maze.map_bounds()));
    assert_eq!(m.render_state().tile_color, ColorMod::IDENTITY);

    // Start delay is 2000ms, measured from entry at t=16.
    m.step(&FrameEnv::idle(2016)).unwrap();
    assert_eq!(m.state(), GameState::WaitingToStartLevel);
    m.step(&FrameEnv::idle(2017)).unwrap();
    assert_eq!(m.state(), GameState::Running);
    assert!(!m.context().start_timer.is_started());
}

#[test]
fn test_first_pellet_is_counted_on_classic_maze() {
    let level = LevelData::classic().unwrap();
    let mut m = GameStateMachine::new(level, quick_start());
    for t in 0..3 {
        m.step(&FrameEnv::idle(t * 16)).unwrap();
    }
    assert_eq!(m.state(), GameState::Running);

    // 108px -> below 104px after three frames: tile (23, 12).
    for t in 3..5 {
        m.step(&FrameEnv::idle(t * 16)).unwrap();
    }
    assert_eq!(m.pellets_eaten(), 0);
    m.step(&FrameEnv::idle(5 * 16)).unwrap();
    assert_eq!(m.pellets_eaten(), 1);

    let maze = m.maze().unwrap();
    assert!(!maze.is_pellet(TileCoord::new(23, 12)));
    assert_eq!(maze.pellets_remaining(), 243);
}

#[test]
fn test_blocked_player_ignores_turns_into_walls() {
    let mut d = Driver::new(&POCKET, quick_start());
    d.step_until(GameState::Running, 5);

    // First running frame: leading edge enters the left wall.
    d.step();
    assert_eq!(d.player_velocity(), (0.0, 0.0));

    d.hold(Direction::Up);
    assert_eq!(d.player_velocity(), (0.0, 0.0));
    assert_eq!(d.machine.player().unwrap().facing(), Direction::Left);

    d.hold(Direction::Down);
    d.hold(Direction::Left);
    assert_eq!(d.player_velocity(), (0.0, 0.0));
    assert_eq!(d.machine.player().unwrap().facing(), Direction::Left);
    assert_eq!(d.machine.state(), GameState::Running);
}

#[test]
fn test_last_pellet_completes_level_and_resets_counter() {
    let mut d = Driver::new(&POCKET, quick_start());
    d.step_until(GameState::Running, 5);
    d.step();

    // Turn right: snap onto (1, 2) and eat its pellet the same frame.
    d.hold(Direction::Right);
    assert_eq!(d.player_velocity(), (1.5, 0.0));
    assert_eq!(d.machine.pellets_eaten(), 1);
    assert_eq!(d.machine.state(), GameState::Running);

    d.hold(Direction::Right);
    assert_eq!(d.machine.state(), GameState::Running);
    d.hold(Direction::Right);
    assert_eq!(d.machine.state(), GameState::LevelComplete);
    assert_eq!(d.machine.pellets_eaten(), 0);
    assert!(d.machine.context().complete_timer.is_started());
    assert_eq!(d.machine.maze().unwrap().pellets_remaining(), 0);
}

#[test]
fn test_classic_level_completes_on_pellet_244() {
    let mut d = Driver::new(&CLASSIC_LAYOUT, quick_start());
    d.step_until(GameState::Running, 5);

    let pellets: Vec<TileCoord> = d
        .machine
        .maze()
        .unwrap()
        .grid()
        .iter()
        .filter(|&(_, index)| tile::is_pellet(index))
        .map(|(coord, _)| coord)
        .collect();
    assert_eq!(pellets.len(), TOTAL_PELLETS as usize);

    // Stand still on each pellet in turn; one pellet per frame.
    for (i, &coord) in pellets.iter().enumerate() {
        let center = d.machine.maze().unwrap().to_screen(coord);
        let player = d.machine.player_mut().unwrap();
        player.reset_position(center);
        player.stop();
        d.step();

        if i + 1 < pellets.len() {
            assert_eq!(d.machine.state(), GameState::Running, "after pellet {coord}");
            assert_eq!(d.machine.pellets_eaten() as usize, i + 1);
        }
    }

    assert_eq!(d.machine.state(), GameState::LevelComplete);
    assert_eq!(d.machine.pellets_eaten(), 0);
    assert_eq!(d.machine.maze().unwrap().pellets_remaining(), 0);
    assert!(d.machine.context().complete_timer.is_started());
}

#[test]
fn test_level_complete_flashes_then_reloads() {
    let config = GameConfig {
        start_delay_ms: 0,
        complete_delay_ms: 1000,
        ..GameConfig::default()
    };
    let mut d = Driver::new(&POCKET, config);
    d.step_until(GameState::Running, 5);
    d.step();
    for _ in 0..3 {
        d.hold(Direction::Right);
    }
    assert_eq!(d.machine.state(), GameState::LevelComplete);

    for _ in 0..59 {
        d.step();
    }
    assert_eq!(d.machine.render_state().tile_color, ColorMod::IDENTITY);
    d.step();
    assert_eq!(
        d.machine.render_state().tile_color,
        ColorMod::new(255, 255, 100)
    );
    assert!(d.machine.context().flash_on);

    // 60 frames is 960ms; the timer fires once more than 1000ms elapsed.
    d.step_until(GameState::LoadingLevel, 10);
    assert!(!d.machine.context().complete_timer.is_started());

    d.step();
    assert_eq!(d.machine.state(), GameState::WaitingToStartLevel);
    assert_eq!(d.machine.render_state().tile_color, ColorMod::IDENTITY);
    assert_eq!(d.machine.maze().unwrap().pellets_remaining(), 2);
    assert_eq!(d.machine.pellets_eaten(), 0);
}

#[test]
fn test_warp_round_trip_preserves_velocity() {
    let config = GameConfig {
        warp_row: 2,
        ..quick_start()
    };
    let mut d = Driver::new(&TUNNEL, config);
    d.step_until(GameState::Running, 5);

    // 28px start, tile 0 begins below 8px: 14 frames.
    for _ in 0..13 {
        d.step();
    }
    assert_eq!(d.machine.state(), GameState::Running);
    d.step();
    assert_eq!(d.machine.state(), GameState::PlayerWarpingOut);

    // Fully off the left edge below -8px: 11 more frames.
    for _ in 0..10 {
        d.step();
    }
    assert_eq!(d.machine.state(), GameState::PlayerWarpingOut);
    d.step();
    assert_eq!(d.machine.state(), GameState::PlayerWarpingIn);
    assert_eq!(d.machine.player().unwrap().x(), 64.0);
    assert_eq!(d.player_velocity(), (-1.5, 0.0));

    // Back inside once column 5 is reached (below 48px): 11 frames.
    for _ in 0..10 {
        d.step();
    }
    assert_eq!(d.machine.state(), GameState::PlayerWarpingIn);
    d.step();
    assert_eq!(d.machine.state(), GameState::Running);
    assert_eq!(d.player_velocity(), (-1.5, 0.0));

    // Movement rules apply again: the pellet at (2, 4) is eaten.
    assert_eq!(d.machine.pellets_eaten(), 1);
    for _ in 0..6 {
        d.step();
    }
    assert_eq!(d.machine.pellets_eaten(), 2);
}

#[test]
fn test_turns_are_ignored_inside_tunnel() {
    let config = GameConfig {
        warp_row: 2,
        ..quick_start()
    };
    let mut d = Driver::new(&TUNNEL, config);
    d.step_until(GameState::Running, 5);
    d.step_until(GameState::PlayerWarpingOut, 20);

    d.hold(Direction::Up);
    d.hold(Direction::Right);
    assert_eq!(d.player_velocity(), (-1.5, 0.0));
    assert_eq!(d.machine.player().unwrap().facing(), Direction::Left);
}

#[test]
fn test_cancel_exits_from_any_reachable_state() {
    let cancel = InputSnapshot {
        cancel: true,
        ..InputSnapshot::default()
    };

    for frames_before in 0..6 {
        let mut d = Driver::new(&POCKET, quick_start());
        for _ in 0..frames_before {
            d.step();
        }
        let before = d.machine.state();
        assert_eq!(d.step_with(cancel), StepOutcome::Continue);
        assert_eq!(d.machine.state(), GameState::Exiting, "from {before}");
        assert_eq!(d.step(), StepOutcome::Quit);
        assert_eq!(d.step(), StepOutcome::Quit);
    }
}

#[test]
fn test_close_request_matches_cancel_key() {
    let mut d = Driver::new(&POCKET, quick_start());
    d.step_until(GameState::Running, 5);

    d.now += 16;
    let env = FrameEnv {
        now_ms: d.now,
        input: InputSnapshot::default(),
        close_requested: true,
    };
    assert_eq!(d.machine.step(&env).unwrap(), StepOutcome::Continue);
    assert_eq!(d.machine.state(), GameState::Exiting);
    assert_eq!(d.step(), StepOutcome::Quit);
}

#[test]
fn test_placeholder_states_are_never_entered() {
    let mut d = Driver::new(&TUNNEL, GameConfig {
        warp_row: 2,
        ..quick_start()
    });
    let script = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];
    for frame in 0..600 {
        let direction = script[(frame / 37) % script.len()];
        d.hold(direction);
    }
    assert!(!d.visited.contains(&GameState::PlayerDying));
    assert!(!d.visited.contains(&GameState::GameOver));
    assert!(d.visited.contains(&GameState::Running));
}

//! Game state machine - the per-frame orchestrator
//!
//! Each frame the caller samples its environment into a [`FrameEnv`] and
//! calls [`GameStateMachine::step`] exactly once. The machine runs the
//! current state's handler, validates the resulting transition against
//! [`TRANSITIONS`], and runs entry/exit hooks for the state-scoped data held
//! in [`StateContext`].
//!
//! # Lifecycle
//!
//! ```text
//! Title -> LoadingLevel -> WaitingToStartLevel -> Running
//!                 ^                                 |  ^
//!                 |                                 v  |
//!           LevelComplete <----------------- PlayerWarpingOut -> PlayerWarpingIn
//! ```
//!
//! Cancellation (window close or the cancel key) routes every state to
//! `Exiting`, whose handler tells the caller to stop the loop.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{CoreError, CoreResult};
use crate::frame::{FrameView, RenderState};
use crate::level::LevelData;
use crate::maze::Maze;
use crate::movement::MovementController;
use crate::player::Player;
use crate::timer::StateTimer;
use crate::types::{ColorMod, GameState, InputSnapshot};

use GameState::*;

/// Legal targets for every state. Staying in place is always legal.
///
/// `PlayerDying` and `GameOver` are not the target of any transition.
pub const TRANSITIONS: [(GameState, &[GameState]); 10] = [
    (Title, &[LoadingLevel, Exiting]),
    (LoadingLevel, &[WaitingToStartLevel, Exiting]),
    (WaitingToStartLevel, &[Running, Exiting]),
    (Running, &[LevelComplete, PlayerWarpingOut, Exiting]),
    (PlayerWarpingOut, &[PlayerWarpingIn, Exiting]),
    (PlayerWarpingIn, &[Running, Exiting]),
    (PlayerDying, &[Exiting]),
    (LevelComplete, &[LoadingLevel, Exiting]),
    (GameOver, &[Exiting]),
    (Exiting, &[]),
];

/// Legal targets of `state`
pub fn successors(state: GameState) -> &'static [GameState] {
    TRANSITIONS
        .iter()
        .find(|(from, _)| *from == state)
        .map(|(_, to)| *to)
        .unwrap_or(&[])
}

pub fn is_legal_transition(from: GameState, to: GameState) -> bool {
    from == to || successors(from).contains(&to)
}

/// Everything the machine needs to know about the outside world this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameEnv {
    /// Monotonic ticks sampled at the top of the frame
    pub now_ms: u64,
    pub input: InputSnapshot,
    /// Window/terminal close observed this frame
    pub close_requested: bool,
}

impl FrameEnv {
    pub fn new(now_ms: u64, input: InputSnapshot) -> Self {
        Self {
            now_ms,
            input,
            close_requested: false,
        }
    }

    pub fn idle(now_ms: u64) -> Self {
        Self::new(now_ms, InputSnapshot::default())
    }

    /// Single cancellation signal: close request or cancel key.
    pub fn cancelled(&self) -> bool {
        self.close_requested || self.input.cancel
    }
}

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

/// Data whose lifetime matches one state's active duration.
///
/// Each field is reset on entry to (or exit from) the state that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateContext {
    /// Pellets eaten this level; reset on entering `LevelComplete`
    pub pellets_eaten: u16,
    /// `WaitingToStartLevel` countdown
    pub start_timer: StateTimer,
    /// `LevelComplete` countdown
    pub complete_timer: StateTimer,
    /// Frames since the last flash toggle
    pub flash_frames: u16,
    pub flash_on: bool,
}

type Handler = fn(&mut GameStateMachine, &FrameEnv) -> CoreResult<GameState>;

#[derive(Debug, Clone)]
pub struct GameStateMachine {
    state: GameState,
    level: LevelData,
    config: GameConfig,
    movement: MovementController,
    maze: Option<Maze>,
    player: Option<Player>,
    ctx: StateContext,
    render: RenderState,
    frames: u64,
}

impl GameStateMachine {
    pub fn new(level: LevelData, config: GameConfig) -> Self {
        Self {
            state: Title,
            level,
            movement: MovementController::new(&config),
            config,
            maze: None,
            player: None,
            ctx: StateContext::default(),
            render: RenderState::default(),
            frames: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> &LevelData {
        &self.level
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Mutable maze access for scripted setups and tools.
    pub fn maze_mut(&mut self) -> Option<&mut Maze> {
        self.maze.as_mut()
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Mutable player access for scripted setups and tools.
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn context(&self) -> &StateContext {
        &self.ctx
    }

    pub fn pellets_eaten(&self) -> u16 {
        self.ctx.pellets_eaten
    }

    pub fn pellet_total(&self) -> u16 {
        self.level.pellet_total()
    }

    pub fn render_state(&self) -> RenderState {
        self.render
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Borrowed view for the renderer
    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            state: self.state,
            maze: self.maze.as_ref(),
            player: self.player.as_ref(),
            render: self.render,
            pellets_eaten: self.ctx.pellets_eaten,
            pellet_total: self.level.pellet_total(),
        }
    }

    /// Handler table. States without a handler idle in place.
    fn handler(state: GameState) -> Option<Handler> {
        match state {
            Title => Some(Self::on_title),
            LoadingLevel => Some(Self::on_loading_level),
            WaitingToStartLevel => Some(Self::on_waiting_to_start),
            Running => Some(Self::on_running),
            PlayerWarpingOut => Some(Self::on_warping_out),
            PlayerWarpingIn => Some(Self::on_warping_in),
            LevelComplete => Some(Self::on_level_complete),
            PlayerDying | GameOver | Exiting => None,
        }
    }

    /// Advance one frame.
    pub fn step(&mut self, env: &FrameEnv) -> CoreResult<StepOutcome> {
        let from = self.state;
        if from == Exiting {
            return Ok(StepOutcome::Quit);
        }

        let next = if env.cancelled() {
            Exiting
        } else {
            match Self::handler(from) {
                Some(handler) => handler(self, env)?,
                None => from,
            }
        };

        if next != from {
            self.transition(from, next, env.now_ms)?;
        }
        self.frames += 1;
        Ok(StepOutcome::Continue)
    }

    fn transition(&mut self, from: GameState, to: GameState, now_ms: u64) -> CoreResult<()> {
        if !is_legal_transition(from, to) {
            return Err(CoreError::IllegalTransition { from, to });
        }
        self.on_exit(from);
        self.on_enter(to, now_ms)?;
        self.state = to;
        debug!(%from, %to, frame = self.frames, "state transition");
        Ok(())
    }

    fn on_enter(&mut self, state: GameState, now_ms: u64) -> CoreResult<()> {
        match state {
            WaitingToStartLevel => {
                self.ctx
                    .start_timer
                    .start(now_ms, self.config.start_delay_ms)?;
            }
            LevelComplete => {
                self.ctx.pellets_eaten = 0;
                self.ctx.flash_frames = 0;
                self.ctx.flash_on = false;
                self.ctx
                    .complete_timer
                    .start(now_ms, self.config.complete_delay_ms)?;
                info!(frame = self.frames, "level complete");
            }
            PlayerWarpingOut => info!("player entered warp tunnel"),
            Exiting => info!("exit requested"),
            _ => {}
        }
        Ok(())
    }

    fn on_exit(&mut self, state: GameState) {
        match state {
            WaitingToStartLevel => self.ctx.start_timer.reset(),
            LevelComplete => self.ctx.complete_timer.reset(),
            _ => {}
        }
    }

    fn loaded(&mut self) -> CoreResult<(&mut Maze, &mut Player)> {
        match (self.maze.as_mut(), self.player.as_mut()) {
            (Some(maze), Some(player)) => Ok((maze, player)),
            _ => Err(CoreError::NotLoaded { state: self.state }),
        }
    }

    fn on_title(&mut self, _env: &FrameEnv) -> CoreResult<GameState> {
        Ok(LoadingLevel)
    }

    fn on_loading_level(&mut self, _env: &FrameEnv) -> CoreResult<GameState> {
        let maze = Maze::new(&self.level)?;

        let direction = self.config.start_direction;
        let mut player = Player::new(maze.to_screen(self.level.start()), direction);
        let (dx, dy) = direction.velocity(self.config.player_speed);
        player.set_velocity(dx, dy);

        self.render = RenderState {
            clip: Some(maze.map_bounds()),
            tile_color: ColorMod::IDENTITY,
        };
        info!(
            rows = maze.rows(),
            cols = maze.cols(),
            pellets = self.level.pellet_total(),
            "level loaded"
        );

        self.maze = Some(maze);
        self.player = Some(player);
        Ok(WaitingToStartLevel)
    }

    fn on_waiting_to_start(&mut self, env: &FrameEnv) -> CoreResult<GameState> {
        if self.ctx.start_timer.is_done(env.now_ms) {
            return Ok(Running);
        }
        Ok(WaitingToStartLevel)
    }

    fn on_running(&mut self, env: &FrameEnv) -> CoreResult<GameState> {
        let movement = self.movement;
        let total = self.level.pellet_total();
        let eaten_before = self.ctx.pellets_eaten;
        let (maze, player) = self.loaded()?;

        if let Some(direction) = env.input.direction() {
            movement.try_turn(maze, player, direction);
        }

        player.update();

        let eaten = eaten_before + movement.eat_pellet(maze, player)?;
        let complete = eaten >= total;
        let warping = !complete && movement.is_warping_out(maze, player);
        if !complete && !warping {
            movement.bounds_check(maze, player);
        }

        self.ctx.pellets_eaten = eaten;
        if complete {
            Ok(LevelComplete)
        } else if warping {
            Ok(PlayerWarpingOut)
        } else {
            Ok(Running)
        }
    }

    fn on_warping_out(&mut self, _env: &FrameEnv) -> CoreResult<GameState> {
        let movement = self.movement;
        let (maze, player) = self.loaded()?;
        player.update();
        if movement.wrap_around(maze, player) {
            return Ok(PlayerWarpingIn);
        }
        Ok(PlayerWarpingOut)
    }

    fn on_warping_in(&mut self, _env: &FrameEnv) -> CoreResult<GameState> {
        let movement = self.movement;
        let (maze, player) = self.loaded()?;
        player.update();
        if movement.has_warped_in(maze, player) {
            info!("player left warp tunnel");
            return Ok(Running);
        }
        Ok(PlayerWarpingIn)
    }

    fn on_level_complete(&mut self, env: &FrameEnv) -> CoreResult<GameState> {
        self.ctx.flash_frames += 1;
        if self.ctx.flash_frames >= self.config.flash_period_frames {
            self.ctx.flash_frames = 0;
            self.ctx.flash_on = !self.ctx.flash_on;
        }

        let blue = if self.ctx.flash_on {
            self.config.flash_blue_mod
        } else {
            255
        };
        self.render.tile_color = ColorMod::new(255, 255, blue);

        if self.ctx.complete_timer.is_done(env.now_ms) {
            return Ok(LoadingLevel);
        }
        Ok(LevelComplete)
    }
}

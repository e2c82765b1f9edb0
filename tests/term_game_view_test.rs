use tui_pacman::core::{FrameEnv, GameConfig, GameStateMachine, LevelData};
use tui_pacman::term::{FrameBuffer, GameView, Rgb, Viewport};
use tui_pacman::types::{ColorMod, Direction, GameState, InputSnapshot, ScreenPoint};

const POCKET: [&str; 3] = ["#####", "#P..#", "#####"];

fn machine(layout: &[&str], config: GameConfig) -> GameStateMachine {
    GameStateMachine::new(LevelData::from_ascii(layout).unwrap(), config)
}

fn quick_start() -> GameConfig {
    GameConfig {
        start_delay_ms: 0,
        ..GameConfig::default()
    }
}

fn steps(m: &mut GameStateMachine, n: u64, input: InputSnapshot) {
    let start = m.frames() * 16;
    for i in 1..=n {
        m.step(&FrameEnv::new(start + i * 16, input)).unwrap();
    }
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_shows_banner_before_level_loads() {
    let m = machine(&POCKET, quick_start());
    let fb = GameView::default().render(&m.frame_view(), Viewport::new(40, 10));

    assert!(fb.row_text(5).contains("PAC-MAN"));
    assert!(!all_text(&fb).contains('█'));
}

#[test]
fn term_view_draws_tiles_two_chars_wide() {
    let mut m = machine(&POCKET, quick_start());
    steps(&mut m, 3, InputSnapshot::default());
    assert_eq!(m.state(), GameState::Running);

    // 5x3 maze -> 10x3 cells, centered in 40x10 at (15, 3).
    let fb = GameView::default().render(&m.frame_view(), Viewport::new(40, 10));
    assert_eq!(fb.get(15, 3).unwrap().ch, '█');
    assert_eq!(fb.get(16, 3).unwrap().ch, '█');

    // Player on (1, 1), facing left; pellet on (1, 2).
    assert_eq!(fb.get(17, 4).unwrap().ch, '>');
    assert_eq!(fb.get(18, 4).unwrap().ch, ')');
    assert_eq!(fb.get(19, 4).unwrap().ch, '·');
    assert_eq!(fb.get(20, 4).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut m = machine(&POCKET, quick_start());
    steps(&mut m, 3, InputSnapshot::default());

    let fb = GameView::default().render(&m.frame_view(), Viewport::new(40, 10));
    assert!(fb.row_text(3).contains("PELLETS"));
    assert!(fb.row_text(4).contains("0/2"));
    assert!(all_text(&fb).contains("running"));

    let narrow = GameView::default().render(&m.frame_view(), Viewport::new(20, 10));
    assert!(!all_text(&narrow).contains("PELLETS"));
}

#[test]
fn term_view_overlays_ready_while_waiting() {
    let mut m = machine(&POCKET, GameConfig::default());
    steps(&mut m, 2, InputSnapshot::default());
    assert_eq!(m.state(), GameState::WaitingToStartLevel);

    let fb = GameView::default().render(&m.frame_view(), Viewport::new(40, 10));
    assert!(fb.row_text(4).contains("READY!"));
}

#[test]
fn term_view_tints_walls_while_level_complete_flashes() {
    let mut m = machine(&POCKET, quick_start());
    steps(&mut m, 4, InputSnapshot::default());
    steps(&mut m, 3, InputSnapshot::default().with_direction(Direction::Right));
    assert_eq!(m.state(), GameState::LevelComplete);

    steps(&mut m, 60, InputSnapshot::default());
    assert_eq!(m.render_state().tile_color, ColorMod::new(255, 255, 100));

    let fb = GameView::default().render(&m.frame_view(), Viewport::new(40, 10));
    let wall = fb.get(15, 3).unwrap();
    assert_eq!(wall.ch, '█');
    assert_eq!(wall.style.fg, Rgb::new(33, 33, 87));
    assert!(fb.row_text(4).contains("LEVEL CLEAR"));
}

#[test]
fn term_view_clips_player_outside_maze() {
    let tunnel = ["#######", "#.....#", "  .P.  ", "#.....#", "#######"];
    let config = GameConfig {
        warp_row: 2,
        ..quick_start()
    };
    let mut m = machine(&tunnel, config);
    steps(&mut m, 3, InputSnapshot::default());
    let view = GameView::default();
    let vp = Viewport::new(40, 10);

    m.player_mut().unwrap().reset_position(ScreenPoint::new(-4.0, 20.0));
    let fb = view.render(&m.frame_view(), vp);
    assert!(!all_text(&fb).contains('>'));

    // 7x5 maze -> origin (13, 2); tile (2, 0) is row 4.
    m.player_mut().unwrap().reset_position(ScreenPoint::new(4.0, 20.0));
    let fb = view.render(&m.frame_view(), vp);
    assert_eq!(fb.get(13, 4).unwrap().ch, '>');
}

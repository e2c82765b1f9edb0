//! Crossterm-backed [`Platform`]: keyboard in, framebuffer out.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use tracing::{debug, warn};

use crate::core::FrameView;
use crate::harness::{Platform, PlatformSample};
use crate::input::{is_close_request, KeyboardState};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    keyboard: KeyboardState,
    view: GameView,
    fb: FrameBuffer,
    release_events: bool,
}

impl TerminalPlatform {
    pub fn new(key_release_ms: u64) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            keyboard: KeyboardState::new().with_key_release_timeout_ms(key_release_ms),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            release_events: false,
        }
    }
}

impl Platform for TerminalPlatform {
    fn initialize(&mut self) -> Result<()> {
        self.renderer.enter()?;

        // Terminals with the kitty protocol report key releases; others rely
        // on the keyboard state's timeout.
        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.release_events = true;
        }
        debug!(release_events = self.release_events, "terminal ready");
        Ok(())
    }

    fn sample(&mut self, now_ms: u64) -> Result<PlatformSample> {
        let mut close_requested = false;

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if is_close_request(key) {
                            close_requested = true;
                        } else {
                            self.keyboard.handle_key_press(key.code, now_ms);
                        }
                    }
                    KeyEventKind::Release => self.keyboard.handle_key_release(key.code),
                },
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }

        Ok(PlatformSample {
            input: self.keyboard.snapshot(now_ms),
            close_requested,
        })
    }

    fn present(&mut self, frame: &FrameView<'_>) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view.render_into(frame, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.release_events {
            if let Err(err) = execute!(io::stdout(), PopKeyboardEnhancementFlags) {
                warn!(error = %err, "failed to pop keyboard flags");
            }
            self.release_events = false;
        }
        self.renderer.exit()
    }
}

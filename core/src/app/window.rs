//! winit host for the frame loop.
//!
//! Platform events are queued as they arrive and handed to
//! [`FrameLoop::tick`] in `about_to_wait`, after winit has delivered every
//! pending event, so each iteration sees the complete batch.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key as LogicalKey, NamedKey};
use winit::window::{Window, WindowId};

use super::{AppError, FrameLoop, LoopEvent, LoopState};
use crate::config::ViewerConfig;
use crate::gpu::SurfacePresenter;
use crate::input::Key;

/// Open the viewer window and run until it is closed.
///
/// Returns the first fatal error, after everything acquired so far has been
/// released.
pub fn run(config: ViewerConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut host = WindowHost::new(config);
    event_loop.run_app(&mut host)?;

    match host.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Translate a winit logical key into the viewer's key set.
pub fn map_key(key: &LogicalKey) -> Key {
    match key {
        LogicalKey::Named(NamedKey::ArrowUp) => Key::Up,
        LogicalKey::Named(NamedKey::ArrowDown) => Key::Down,
        LogicalKey::Named(NamedKey::ArrowLeft) => Key::Left,
        LogicalKey::Named(NamedKey::ArrowRight) => Key::Right,
        _ => Key::Other,
    }
}

struct WindowHost {
    frame_loop: FrameLoop,
    pending: Vec<LoopEvent>,
    presenter: Option<SurfacePresenter>,
    error: Option<AppError>,
}

impl WindowHost {
    fn new(config: ViewerConfig) -> Self {
        Self {
            frame_loop: FrameLoop::new(config),
            pending: Vec::new(),
            presenter: None,
            error: None,
        }
    }

    fn create_presenter(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<SurfacePresenter, AppError> {
        let config = self.frame_loop.config();
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(true);

        let window = Arc::new(event_loop.create_window(attributes)?);
        let presenter = SurfacePresenter::new(window, config.width, config.height)?;
        Ok(presenter)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{} ({:?} failure)", err, err.kind());
        // Release the surface and window before the loop unwinds.
        self.presenter = None;
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for WindowHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() || self.error.is_some() {
            return;
        }

        match self.create_presenter(event_loop) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.pending.push(LoopEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.pending.push(LoopEvent::KeyPress(map_key(&logical_key))),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(presenter) = self.presenter.as_mut() else {
            return;
        };

        let events = std::mem::take(&mut self.pending);
        match self.frame_loop.tick(events, presenter) {
            Ok(LoopState::Running) => {}
            Ok(LoopState::Terminating) => {
                self.presenter = None;
                event_loop.exit();
            }
            Err(err) => self.fail(event_loop, err.into()),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.presenter = None;
        log::info!("Viewer closed after {} frames", self.frame_loop.frames());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_viewer_keys() {
        assert_eq!(map_key(&LogicalKey::Named(NamedKey::ArrowUp)), Key::Up);
        assert_eq!(map_key(&LogicalKey::Named(NamedKey::ArrowDown)), Key::Down);
        assert_eq!(map_key(&LogicalKey::Named(NamedKey::ArrowLeft)), Key::Left);
        assert_eq!(map_key(&LogicalKey::Named(NamedKey::ArrowRight)), Key::Right);
    }

    #[test]
    fn test_other_keys_are_unbound() {
        assert_eq!(map_key(&LogicalKey::Named(NamedKey::Escape)), Key::Other);
        assert_eq!(map_key(&LogicalKey::Character("w".into())), Key::Other);
    }
}

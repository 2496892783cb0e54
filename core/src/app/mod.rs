//! The frame loop.
//!
//! [`FrameLoop`] owns everything that changes from frame to frame (the
//! pixel buffer and the wave parameters) and runs one iteration per
//! [`FrameLoop::tick`]: advance phase, drain events, regenerate, present.
//! The window host in [`window`] feeds it platform events and a surface.

pub mod window;

use crate::config::ViewerConfig;
use crate::frame::PixelBuffer;
use crate::gpu::{FrameSink, GpuError, PresentError};
use crate::input::{InputController, Key};
use crate::wave::{draw_sine_wave, WaveParameters};

pub use window::run;

/// Loop lifecycle. Only a quit event leaves `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// Events consumed by the loop. Everything else is dropped by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    KeyPress(Key),
    Quit,
}

/// Failure category, used to report why the viewer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Window, event loop, adapter or device setup failed.
    Initialization,
    /// A surface, texture or pipeline could not be created.
    ResourceCreation,
    /// The graphics context failed while running.
    FatalRuntime,
}

/// Errors that stop the viewer. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    #[error("Presentation error: {0}")]
    Present(#[from] PresentError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EventLoop(_) | Self::Window(_) => ErrorKind::Initialization,
            Self::Gpu(GpuError::UnsupportedSurface | GpuError::Pipeline(_)) => {
                ErrorKind::ResourceCreation
            }
            Self::Gpu(_) => ErrorKind::Initialization,
            Self::Present(PresentError::FrameSize { .. }) => ErrorKind::ResourceCreation,
            Self::Present(_) => ErrorKind::FatalRuntime,
        }
    }
}

/// Per-frame state of the viewer.
pub struct FrameLoop {
    config: ViewerConfig,
    buffer: PixelBuffer,
    params: WaveParameters,
    input: InputController,
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new(config: ViewerConfig) -> Self {
        let buffer = PixelBuffer::new(config.width, config.height);
        let params = WaveParameters::from_config(&config);
        Self {
            config,
            buffer,
            params,
            input: InputController::new(),
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// Run one iteration.
    ///
    /// Drains every event in `events` before drawing. A [`LoopEvent::Quit`]
    /// moves the loop to [`LoopState::Terminating`] and returns immediately:
    /// remaining events are discarded and nothing is generated or presented.
    /// Once terminating, further ticks do nothing.
    pub fn tick<I, S>(&mut self, events: I, sink: &mut S) -> Result<LoopState, PresentError>
    where
        I: IntoIterator<Item = LoopEvent>,
        S: FrameSink + ?Sized,
    {
        if self.state == LoopState::Terminating {
            return Ok(self.state);
        }

        self.params.advance(self.config.phase_step);

        for event in events {
            match event {
                LoopEvent::KeyPress(key) => {
                    self.input.handle_key(key, &mut self.params);
                }
                LoopEvent::Quit => {
                    log::info!("Quit requested after {} frames", self.frames);
                    self.state = LoopState::Terminating;
                    return Ok(self.state);
                }
            }
        }

        self.render();
        sink.present(&self.buffer)?;
        self.frames += 1;

        Ok(self.state)
    }

    /// Regenerate the buffer from the current parameters.
    fn render(&mut self) {
        self.buffer.clear();
        let plotted = draw_sine_wave(
            &mut self.buffer,
            self.params.amplitude(&self.config),
            self.params.frequency(&self.config),
            self.params.phase,
            self.config.trace_color,
        );
        log::trace!("frame {}: plotted {} pixels", self.frames, plotted);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

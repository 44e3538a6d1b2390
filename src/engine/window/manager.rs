//! Window management implementation.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Icon, Window, WindowAttributes, WindowId};

use crate::engine::backend::InputSource;
use crate::engine::input::{InputEvent, InputHandler, KeyState};
use crate::error::StartupError;

/// Pumps allowed for the platform to deliver `resumed` before giving up.
const RESUME_ATTEMPTS: usize = 8;

/// Receives winit callbacks during a pump.
struct WindowState {
    attributes: Option<WindowAttributes>,
    window: Option<Arc<Window>>,
    create_error: Option<winit::error::OsError>,
    input: InputHandler,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                info!("Window created at {}x{}", size.width, size.height);
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                error!("Failed to create window: {:?}", e);
                self.create_error = Some(e);
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.input.handle_close_requested();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    self.input.handle_keyboard_input_event(keycode, pressed, event.repeat);
                }
            }
            WindowEvent::Focused(focused) => {
                self.input.handle_window_focus(focused);
            }
            _ => (),
        }
    }
}

/// Owns the winit event loop and the scene's window, and serves input to the
/// scene loop by pumping the event loop without blocking.
pub struct WindowManager {
    state: WindowState,
    exited: bool,
    // Dropped last: the window must go before the event loop that made it.
    event_loop: EventLoop<()>,
}

impl WindowManager {
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        icon: Option<Icon>,
    ) -> Result<Self, StartupError> {
        let event_loop = EventLoop::new().map_err(|e| {
            error!("Failed to create event loop: {:?}", e);
            e
        })?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false)
            .with_window_icon(icon);

        let mut manager = Self {
            state: WindowState {
                attributes: Some(attributes),
                window: None,
                create_error: None,
                input: InputHandler::new(),
            },
            exited: false,
            event_loop,
        };

        for _ in 0..RESUME_ATTEMPTS {
            manager.pump();
            if let Some(e) = manager.state.create_error.take() {
                return Err(e.into());
            }
            if manager.state.window.is_some() {
                return Ok(manager);
            }
        }
        Err(StartupError::NoWindow)
    }

    pub fn window(&self) -> Option<&Arc<Window>> {
        self.state.window.as_ref()
    }

    /// Handles whatever the platform has queued, without waiting for more.
    fn pump(&mut self) {
        if self.exited {
            return;
        }
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(code) = status {
            debug!("Event loop exited with code {}", code);
            self.exited = true;
            self.state.input.handle_close_requested();
        }
    }
}

impl InputSource for WindowManager {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if !self.state.input.has_pending() {
            self.pump();
        }
        self.state.input.next_event()
    }

    fn key_state(&self) -> KeyState {
        self.state.input.key_state()
    }
}

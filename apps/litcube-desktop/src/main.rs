use anyhow::{Context, Result};
use clap::Parser;
use litcube_input::{InputEvent, InputHandler, Key, LoopControl};
use litcube_render::{Lighting, RenderView, Renderer};
use litcube_render_wgpu::{GpuContext, WgpuRenderer};
use litcube_scene::SceneState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "litcube-desktop", about = "Lit cube on a platform, rotated with I/J/K/L")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Window width in physical pixels
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Window height in physical pixels
    #[arg(long, default_value_t = 500)]
    height: u32,
}

/// Translate a winit key code into the keys the demo knows.
fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Window events the input handler cares about.
fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state,
                    ..
                },
            ..
        } => {
            let key = map_key(*code);
            Some(match state {
                ElementState::Pressed => InputEvent::KeyDown(key),
                ElementState::Released => InputEvent::KeyUp(key),
            })
        }
        _ => None,
    }
}

struct CubeApp {
    size: PhysicalSize<u32>,
    scene: SceneState,
    input: InputHandler,
    /// Set once a quit has been handled; no further frames are drawn.
    quitting: bool,
    // Dropped before the window it renders into.
    renderer: Option<WgpuRenderer>,
    window: Option<Arc<Window>>,
    /// Startup or render failure that ended the loop.
    fatal: Option<anyhow::Error>,
}

impl CubeApp {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: PhysicalSize::new(width, height),
            scene: SceneState::new(),
            input: InputHandler::new(),
            quitting: false,
            renderer: None,
            window: None,
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("litcube")
            .with_inner_size(self.size)
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let size = window.inner_size();
        let context = GpuContext::new(&instance, surface, size.width, size.height)
            .context("failed to initialize GPU")?;
        let renderer = WgpuRenderer::new(context, Lighting::FIXED, RenderView::default())
            .context("failed to build renderer")?;

        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    /// Apply one input event to the scene as it arrives, without waiting for a
    /// redraw.
    fn handle_input(&mut self, input: InputEvent) -> LoopControl {
        if self.quitting {
            return LoopControl::Exit;
        }
        let control = self.input.drain([input], &mut self.scene);
        if control == LoopControl::Exit {
            self.quitting = true;
        }
        control
    }

    /// Draw one frame of the current scene unless a quit was requested.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.quitting {
            return;
        }
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        if let Err(e) = renderer.render_frame(&self.scene) {
            self.fail(event_loop, anyhow::Error::new(e).context("frame failed"));
        }
    }
}

impl ApplicationHandler for CubeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = translate(&event) {
            if self.handle_input(input) == LoopControl::Exit {
                event_loop.exit();
            }
            return;
        }

        match event {
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.quitting {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("litcube-desktop starting");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CubeApp::new(cli.width, cli.height);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    if let Some(err) = app.fatal.take() {
        return Err(err);
    }

    tracing::info!(
        pitch = app.scene.pitch,
        yaw = app.scene.yaw,
        steps = app.input.applied(),
        "litcube-desktop exiting"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_keys_map() {
        assert_eq!(map_key(KeyCode::KeyI), Key::I);
        assert_eq!(map_key(KeyCode::KeyJ), Key::J);
        assert_eq!(map_key(KeyCode::KeyK), Key::K);
        assert_eq!(map_key(KeyCode::KeyL), Key::L);
        assert_eq!(map_key(KeyCode::Escape), Key::Escape);
        assert_eq!(map_key(KeyCode::KeyW), Key::Other);
    }

    #[test]
    fn close_request_is_quit() {
        assert_eq!(translate(&WindowEvent::CloseRequested), Some(InputEvent::Quit));
    }

    #[test]
    fn focus_changes_are_not_input() {
        assert_eq!(translate(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn close_request_exits_without_a_redraw() {
        let mut app = CubeApp::new(500, 500);
        let quit = translate(&WindowEvent::CloseRequested).unwrap();
        assert_eq!(app.handle_input(quit), LoopControl::Exit);
        assert!(app.quitting);
    }

    #[test]
    fn input_after_quit_is_not_applied() {
        let mut app = CubeApp::new(500, 500);
        assert_eq!(app.handle_input(InputEvent::KeyDown(Key::I)), LoopControl::Continue);
        assert_eq!(app.handle_input(InputEvent::KeyDown(Key::Escape)), LoopControl::Exit);
        assert_eq!(app.handle_input(InputEvent::KeyDown(Key::I)), LoopControl::Exit);
        assert_eq!(app.scene.pitch, 2.0);
        assert_eq!(app.input.applied(), 1);
    }

    #[test]
    fn cli_defaults_to_fixed_window() {
        let cli = Cli::parse_from(["litcube-desktop"]);
        assert_eq!((cli.width, cli.height), (500, 500));
        assert!(!cli.verbose);
    }
}

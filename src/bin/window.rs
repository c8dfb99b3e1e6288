//! NEOVIA 窗口运行器 - 在桌面上用键盘/鼠标模拟手柄运行壳程序界面

mod app_window;

use std::sync::Arc;
use std::time::{Duration, Instant};

use app_window::events::{map_key, to_canvas_point};
use app_window::WindowPlatform;
use clap::Parser;
use log::{error, info};
use neovia_gui::config::{RunnerConfig, ShellConfig};
use neovia_gui::frame::{FrameController, FrameOutcome};
use neovia_gui::shell::Gui;
use neovia_gui::{logging, palette, Size, SCREEN_HEIGHT, SCREEN_WIDTH};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{WindowAttributes, WindowId};

struct NeoviaWindow {
    runner: RunnerConfig,
    gui: Gui,
    controller: FrameController,
    platform: Option<WindowPlatform>,
    frame_interval: Duration,
    next_frame: Instant,
}

impl NeoviaWindow {
    fn new(runner: RunnerConfig) -> Self {
        let config = ShellConfig::load(&runner.config);
        let gui = Gui::new(
            config,
            Some(runner.config.clone()),
            Size::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32),
        );
        let frame_interval = Duration::from_secs_f32(runner.frame_time());

        Self {
            runner,
            gui,
            controller: FrameController::new(palette::BACKGROUND_DARK),
            platform: None,
            frame_interval,
            next_frame: Instant::now(),
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(platform) = self.platform.as_mut() else { return };
        match self.controller.run_frame(platform, &mut self.gui) {
            Ok(FrameOutcome::Continue) => {}
            Ok(FrameOutcome::Exit) => {
                self.controller.shutdown();
                event_loop.exit();
            }
            Err(err) => {
                error!("frame failed: {}", err);
                self.controller.shutdown();
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for NeoviaWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.platform.is_some() {
            return;
        }

        let scale = self.runner.scale.max(0.25);
        let window_attrs = WindowAttributes::default()
            .with_title("NEOVIA")
            .with_inner_size(winit::dpi::LogicalSize::new(
                SCREEN_WIDTH as f64 * scale,
                SCREEN_HEIGHT as f64 * scale,
            ))
            .with_resizable(true);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("failed to create window: {}", err);
                event_loop.exit();
                return;
            }
        };

        let platform = match WindowPlatform::new(window, (SCREEN_WIDTH, SCREEN_HEIGHT)) {
            Ok(platform) => platform,
            Err(err) => {
                error!("{}", err);
                event_loop.exit();
                return;
            }
        };

        if let Err(err) = self.controller.initialize(&platform) {
            error!("{}", err);
            event_loop.exit();
            return;
        }

        platform.window().request_redraw();
        self.platform = Some(platform);
        info!("window ready, arrows to navigate, Z/Enter to select, X/Esc to go back, P to quit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(platform) = self.platform.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => {
                platform.request_exit();
                self.frame(event_loop);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let Some(button) = map_key(event.physical_key) {
                        platform.press(button);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let size = platform.window().inner_size();
                let point = to_canvas_point(
                    position.x,
                    position.y,
                    size.width,
                    size.height,
                    SCREEN_WIDTH,
                    SCREEN_HEIGHT,
                );
                platform.move_cursor(point);
            }

            WindowEvent::CursorLeft { .. } => platform.move_cursor(None),

            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                platform.click();
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(platform) = &self.platform {
                platform.window().request_redraw();
            }
            self.next_frame = now + self.frame_interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

fn main() -> anyhow::Result<()> {
    let runner = RunnerConfig::parse();
    logging::init_logger(runner.log_level(), runner.log_file.as_deref())?;
    info!("NEOVIA starting, config {}", runner.config.display());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = NeoviaWindow::new(runner);
    event_loop.run_app(&mut app)?;
    Ok(())
}

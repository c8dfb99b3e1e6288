//! winit + softbuffer 平台实现

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use neovia_gui::frame::{FrameInput, Platform};
use neovia_gui::input::{Button, InputCollector};
use neovia_gui::{Canvas, Error, Point, Result};
use winit::window::Window;

use super::render::present_to_buffer;

pub struct WindowPlatform {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    canvas_size: (u32, u32),
    input: InputCollector,
    exit_requested: bool,
    last_frame: Instant,
}

impl WindowPlatform {
    pub fn new(window: Arc<Window>, canvas_size: (u32, u32)) -> Result<Self> {
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| Error::SurfaceUnavailable(e.to_string()))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| Error::SurfaceUnavailable(e.to_string()))?;

        Ok(Self {
            window,
            surface,
            canvas_size,
            input: InputCollector::new(),
            exit_requested: false,
            last_frame: Instant::now(),
        })
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn press(&mut self, button: Button) {
        self.input.press(button);
    }

    pub fn move_cursor(&mut self, point: Option<Point>) {
        self.input.move_cursor(point);
    }

    pub fn click(&mut self) {
        self.input.click();
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}

impl Platform for WindowPlatform {
    fn surface_size(&self) -> Result<(u32, u32)> {
        Ok(self.canvas_size)
    }

    fn poll(&mut self) -> FrameInput {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        FrameInput {
            input: self.input.take(),
            dt,
            exit_requested: self.exit_requested,
        }
    }

    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            // 最小化时跳过
            return Ok(());
        };

        self.surface
            .resize(width, height)
            .map_err(|e| Error::Present(e.to_string()))?;
        let mut buffer = self.surface.buffer_mut().map_err(|e| Error::Present(e.to_string()))?;
        present_to_buffer(&mut buffer, size.width, size.height, canvas);
        buffer.present().map_err(|e| Error::Present(e.to_string()))?;
        Ok(())
    }
}

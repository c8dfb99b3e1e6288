//! 帧控制器
//!
//! 每帧固定顺序：取输入和 dt → 更新 → 分发输入 → 清屏 → 渲染 → 呈现。
//! 单线程，帧内不会挂起；退出请求只在两帧之间被观察到。

use std::collections::VecDeque;

use log::{debug, info};

use crate::input::InputState;
use crate::{Canvas, Color, Error, Result};

/// 单帧允许的最大时间步长（秒），防止卡顿后动画跳变
pub const MAX_FRAME_DT: f32 = 0.25;

/// 帧控制器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Uninitialized,
    Ready,
    Updating,
    Rendering,
    Presenting,
    ShuttingDown,
}

/// 平台每帧提供的数据
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub input: InputState,
    /// 距上一帧的秒数
    pub dt: f32,
    pub exit_requested: bool,
}

/// 平台：提供输出表面尺寸、输入和呈现
pub trait Platform {
    /// 输出像素缓冲的尺寸，无法获得时返回错误
    fn surface_size(&self) -> Result<(u32, u32)>;

    fn poll(&mut self) -> FrameInput;

    fn present(&mut self, canvas: &Canvas) -> Result<()>;
}

/// 由帧控制器驱动的场景
pub trait Scene {
    fn update(&mut self, dt: f32);

    fn handle_input(&mut self, input: &InputState);

    fn render(&self, canvas: &mut Canvas);

    fn wants_exit(&self) -> bool {
        false
    }
}

/// 单帧结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

pub struct FrameController {
    state: FrameState,
    clear_color: Color,
    canvas: Option<Canvas>,
    frame_count: u64,
}

impl FrameController {
    pub fn new(clear_color: Color) -> Self {
        Self {
            state: FrameState::Uninitialized,
            clear_color,
            canvas: None,
            frame_count: 0,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    fn transition(&mut self, next: FrameState) {
        if self.state != next {
            debug!("frame state {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// 申请画布。已初始化时什么都不做
    pub fn initialize<P: Platform>(&mut self, platform: &P) -> Result<()> {
        if self.state != FrameState::Uninitialized {
            return Ok(());
        }

        let (width, height) = platform.surface_size()?;
        if width == 0 || height == 0 {
            return Err(Error::SurfaceUnavailable(format!(
                "surface has zero area ({}x{})",
                width, height
            )));
        }

        info!("frame controller ready, surface {}x{}", width, height);
        self.canvas = Some(Canvas::new(width, height));
        self.frame_count = 0;
        self.state = FrameState::Ready;
        Ok(())
    }

    /// 运行一帧
    pub fn run_frame<P: Platform, S: Scene>(&mut self, platform: &mut P, scene: &mut S) -> Result<FrameOutcome> {
        if self.state != FrameState::Ready {
            return Err(Error::SurfaceUnavailable(format!(
                "frame requested in state {:?}",
                self.state
            )));
        }

        let frame = platform.poll();
        if frame.exit_requested {
            return Ok(FrameOutcome::Exit);
        }
        let dt = clamp_dt(frame.dt);

        self.state = FrameState::Updating;
        scene.update(dt);
        scene.handle_input(&frame.input);

        let Some(canvas) = self.canvas.as_mut() else {
            self.state = FrameState::Uninitialized;
            return Err(Error::SurfaceUnavailable("canvas released".into()));
        };

        self.state = FrameState::Rendering;
        canvas.reset_state();
        canvas.clear(self.clear_color);
        scene.render(canvas);

        self.state = FrameState::Presenting;
        let presented = platform.present(canvas);
        self.state = FrameState::Ready;
        presented?;

        self.frame_count += 1;
        if scene.wants_exit() {
            return Ok(FrameOutcome::Exit);
        }
        Ok(FrameOutcome::Continue)
    }

    /// 循环运行直到平台或场景请求退出，返回已呈现的帧数
    pub fn run<P: Platform, S: Scene>(&mut self, platform: &mut P, scene: &mut S) -> Result<u64> {
        self.initialize(platform)?;
        loop {
            match self.run_frame(platform, scene) {
                Ok(FrameOutcome::Continue) => {}
                Ok(FrameOutcome::Exit) => break,
                Err(err) => {
                    self.shutdown();
                    return Err(err);
                }
            }
        }
        let frames = self.frame_count;
        self.shutdown();
        Ok(frames)
    }

    /// 释放画布回到未初始化状态
    pub fn shutdown(&mut self) {
        if self.state == FrameState::Uninitialized {
            return;
        }
        self.transition(FrameState::ShuttingDown);
        info!("frame controller shutting down after {} frames", self.frame_count);
        self.canvas = None;
        self.transition(FrameState::Uninitialized);
    }
}

/// 负数和 NaN 当作 0，过大的步长截断
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, MAX_FRAME_DT)
    }
}

/// 无窗口平台：按脚本提供输入，固定步长，保留最后一帧
pub struct HeadlessPlatform {
    width: u32,
    height: u32,
    dt: f32,
    script: VecDeque<InputState>,
    frame_limit: Option<u64>,
    polled: u64,
    presented: u64,
    last_frame: Option<Canvas>,
}

impl HeadlessPlatform {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dt: 1.0 / 60.0,
            script: VecDeque::new(),
            frame_limit: None,
            polled: 0,
            presented: 0,
            last_frame: None,
        }
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// 每帧消费一个输入
    pub fn with_script(mut self, inputs: impl IntoIterator<Item = InputState>) -> Self {
        self.script.extend(inputs);
        self
    }

    /// 设置总帧数；未设置时脚本耗尽即退出
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn push_input(&mut self, input: InputState) {
        self.script.push_back(input);
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn last_frame(&self) -> Option<&Canvas> {
        self.last_frame.as_ref()
    }
}

impl Platform for HeadlessPlatform {
    fn surface_size(&self) -> Result<(u32, u32)> {
        Ok((self.width, self.height))
    }

    fn poll(&mut self) -> FrameInput {
        let exhausted = match self.frame_limit {
            Some(limit) => self.polled >= limit,
            None => self.script.is_empty(),
        };
        if exhausted {
            return FrameInput { exit_requested: true, ..FrameInput::default() };
        }

        self.polled += 1;
        FrameInput {
            input: self.script.pop_front().unwrap_or_default(),
            dt: self.dt,
            exit_requested: false,
        }
    }

    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.presented += 1;
        match self.last_frame.as_mut() {
            Some(last) => last.clone_from(canvas),
            None => self.last_frame = Some(canvas.clone()),
        }
        Ok(())
    }
}

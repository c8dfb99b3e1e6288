//! 帧控制器单元测试

use std::cell::{Cell, RefCell};

use crate::frame::{clamp_dt, FrameController, FrameOutcome, FrameState, HeadlessPlatform, Scene, MAX_FRAME_DT};
use crate::input::{Button, InputState};
use crate::{Canvas, Color, Error};

/// 记录调用顺序的场景
#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<&'static str>>,
    dts: Vec<f32>,
    inputs: Vec<InputState>,
    exit_after: Option<usize>,
}

impl Scene for Recorder {
    fn update(&mut self, dt: f32) {
        self.calls.borrow_mut().push("update");
        self.dts.push(dt);
    }

    fn handle_input(&mut self, input: &InputState) {
        self.calls.borrow_mut().push("input");
        self.inputs.push(*input);
    }

    fn render(&self, canvas: &mut Canvas) {
        self.calls.borrow_mut().push("render");
        canvas.draw_pixel(0, 0, Color::RED);
    }

    fn wants_exit(&self) -> bool {
        self.exit_after.is_some_and(|n| self.dts.len() >= n)
    }
}

#[test]
fn test_clamp_dt() {
    assert_eq!(clamp_dt(0.016), 0.016);
    assert_eq!(clamp_dt(-1.0), 0.0);
    assert_eq!(clamp_dt(f32::NAN), 0.0);
    assert_eq!(clamp_dt(3.0), MAX_FRAME_DT);
}

/// 未初始化时请求帧返回错误
#[test]
fn test_frame_before_initialize_fails() {
    let mut controller = FrameController::new(Color::BLACK);
    let mut platform = HeadlessPlatform::new(8, 8);
    let mut scene = Recorder::default();

    let result = controller.run_frame(&mut platform, &mut scene);
    assert!(matches!(result, Err(Error::SurfaceUnavailable(_))));
    assert!(scene.calls.borrow().is_empty());
}

/// 零面积表面无法初始化
#[test]
fn test_zero_surface_is_rejected() {
    let mut controller = FrameController::new(Color::BLACK);
    let platform = HeadlessPlatform::new(0, 720);

    assert!(matches!(controller.initialize(&platform), Err(Error::SurfaceUnavailable(_))));
    assert_eq!(controller.state(), FrameState::Uninitialized);
    assert!(controller.canvas().is_none());
}

/// 每帧固定顺序：更新、输入、渲染
#[test]
fn test_frame_order() {
    let mut controller = FrameController::new(Color::BLACK);
    let mut platform = HeadlessPlatform::new(8, 8).with_frame_limit(2);
    let mut scene = Recorder::default();

    let frames = controller.run(&mut platform, &mut scene).unwrap();
    assert_eq!(frames, 2);
    assert_eq!(platform.presented(), 2);
    assert_eq!(
        *scene.calls.borrow(),
        vec!["update", "input", "render", "update", "input", "render"]
    );
    assert_eq!(controller.state(), FrameState::Uninitialized);
}

/// 过大的步长被截断
#[test]
fn test_large_dt_is_clamped() {
    let mut controller = FrameController::new(Color::BLACK);
    let mut platform = HeadlessPlatform::new(8, 8).with_dt(2.0).with_frame_limit(1);
    let mut scene = Recorder::default();

    controller.run(&mut platform, &mut scene).unwrap();
    assert_eq!(scene.dts, vec![MAX_FRAME_DT]);
}

/// 脚本按帧消费，耗尽后退出
#[test]
fn test_script_drives_input() {
    let mut controller = FrameController::new(Color::BLACK);
    let mut platform = HeadlessPlatform::new(8, 8)
        .with_script([InputState::press(Button::Down), InputState::press(Button::A)]);
    let mut scene = Recorder::default();

    let frames = controller.run(&mut platform, &mut scene).unwrap();
    assert_eq!(frames, 2);
    assert!(scene.inputs[0].is_pressed(Button::Down));
    assert!(scene.inputs[1].activated());
}

/// 场景请求退出时当前帧仍然呈现
#[test]
fn test_scene_requests_exit() {
    let mut controller = FrameController::new(Color::BLACK);
    let mut platform = HeadlessPlatform::new(8, 8).with_frame_limit(100);
    let mut scene = Recorder { exit_after: Some(3), ..Recorder::default() };

    let frames = controller.run(&mut platform, &mut scene).unwrap();
    assert_eq!(frames, 3);
    assert_eq!(platform.presented(), 3);
}

/// 每帧开始都会清屏
#[test]
fn test_canvas_is_cleared_each_frame() {
    struct FirstFrameOnly {
        frames: Cell<u32>,
    }

    impl Scene for FirstFrameOnly {
        fn update(&mut self, _dt: f32) {}
        fn handle_input(&mut self, _input: &InputState) {}
        fn render(&self, canvas: &mut Canvas) {
            if self.frames.get() == 0 {
                canvas.draw_pixel(1, 1, Color::RED);
            }
            self.frames.set(self.frames.get() + 1);
        }
    }

    let mut controller = FrameController::new(Color::BLUE);
    let mut platform = HeadlessPlatform::new(4, 4).with_frame_limit(2);
    let mut scene = FirstFrameOnly { frames: Cell::new(0) };
    controller.run(&mut platform, &mut scene).unwrap();

    let last = platform.last_frame().unwrap();
    assert_eq!(last.get_pixel(1, 1), Color::BLUE);
}

/// 上一帧遗留的平移不会带到下一帧
#[test]
fn test_canvas_state_is_reset_each_frame() {
    struct Drifting;

    impl Scene for Drifting {
        fn update(&mut self, _dt: f32) {}
        fn handle_input(&mut self, _input: &InputState) {}
        fn render(&self, canvas: &mut Canvas) {
            canvas.translate(2.0, 0.0);
            canvas.draw_pixel(0, 0, Color::RED);
        }
    }

    let mut controller = FrameController::new(Color::BLACK);
    let mut platform = HeadlessPlatform::new(8, 1).with_frame_limit(3);
    controller.run(&mut platform, &mut Drifting).unwrap();

    let last = platform.last_frame().unwrap();
    assert_eq!(last.get_pixel(2, 0), Color::RED);
    assert_eq!(last.get_pixel(4, 0), Color::BLACK);
}

/// 单步运行，退出请求在两帧之间生效
#[test]
fn test_manual_frames_and_shutdown() {
    let mut controller = FrameController::new(Color::BLACK);
    let mut platform = HeadlessPlatform::new(8, 8).with_frame_limit(1);
    let mut scene = Recorder::default();

    controller.initialize(&platform).unwrap();
    assert_eq!(controller.state(), FrameState::Ready);
    assert_eq!(controller.run_frame(&mut platform, &mut scene).unwrap(), FrameOutcome::Continue);
    assert_eq!(controller.frame_count(), 1);
    assert_eq!(controller.canvas().map(|c| c.get_pixel(0, 0)), Some(Color::RED));

    // 平台的帧数已用完，下一次轮询请求退出，场景不会被调用
    assert_eq!(controller.run_frame(&mut platform, &mut scene).unwrap(), FrameOutcome::Exit);
    assert_eq!(scene.dts.len(), 1);

    controller.shutdown();
    assert_eq!(controller.state(), FrameState::Uninitialized);
    assert!(controller.canvas().is_none());
}

//! NEOVIA 无窗口快照 - 用脚本输入跑若干帧并把最后一帧写成 PNG

use anyhow::Context;
use clap::Parser;
use log::info;
use neovia_gui::config::{RunnerConfig, ShellConfig};
use neovia_gui::frame::{FrameController, HeadlessPlatform};
use neovia_gui::input::{Button, InputState};
use neovia_gui::shell::{Gui, TRANSITION_SECONDS};
use neovia_gui::{logging, palette, Size, SCREEN_HEIGHT, SCREEN_WIDTH};

/// 等过场动画结束后把焦点移到第一个按钮
fn demo_script(fps: u32) -> Vec<InputState> {
    let settle = (TRANSITION_SECONDS * fps as f32).ceil() as usize + 1;
    let mut script = vec![InputState::default(); settle];
    script.push(InputState::press(Button::Down));
    script
}

fn main() -> anyhow::Result<()> {
    let runner = RunnerConfig::parse();
    logging::init_logger(runner.log_level(), runner.log_file.as_deref())?;

    let config = ShellConfig::load(&runner.config);
    // 快照不回写配置
    let mut gui = Gui::new(config, None, Size::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32));

    let mut platform = HeadlessPlatform::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        .with_dt(runner.frame_time())
        .with_script(demo_script(runner.fps))
        .with_frame_limit(runner.frames);

    let mut controller = FrameController::new(palette::BACKGROUND_DARK);
    let frames = controller.run(&mut platform, &mut gui)?;
    info!("rendered {} frames on screen {:?}", frames, gui.screen());

    let canvas = platform
        .last_frame()
        .context("no frame was presented, raise --frames")?;
    canvas
        .save_png(&runner.output)
        .with_context(|| format!("writing {}", runner.output.display()))?;
    info!("snapshot written to {}", runner.output.display());
    Ok(())
}

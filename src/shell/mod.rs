//! NEOVIA 壳程序：屏幕、切屏动画和模拟增强任务

pub mod games;
mod gui;
mod job;
pub mod screens;

pub use gui::{Gui, TRANSITION_SECONDS};
pub use games::GameInfo;
pub use job::EnhancementJob;
pub use screens::{Screen, ShellMessage};

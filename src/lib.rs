//! NEOVIA GUI - 软件渲染的即时模式 2D 界面框架
//! 包含像素光栅化、补间动画、控件树和帧控制器，以及基于它们的 NEOVIA 壳程序界面

mod bitmap;
mod canvas;
mod color;
mod error;
mod geometry;

pub use bitmap::Bitmap;
pub use canvas::Canvas;
pub use color::{palette, Color};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};

// 8x8 位图字体
pub mod font;

// 阴影、发光等组合效果
pub mod effects;

// 背景粒子
pub mod particles;

// 补间动画
pub mod animation;

// 输入快照
pub mod input;

// UI 控件系统
pub mod ui;

// 帧控制器
pub mod frame;

// 配置与日志
pub mod config;
pub mod logging;

// NEOVIA 壳程序
pub mod shell;

/// 所有屏幕使用的输出尺寸
pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

// 单元测试
#[cfg(test)]
mod tests;

//! 窗口模块 - 把 winit 事件转换成手柄输入，把画布呈现到 softbuffer

pub mod events;
pub mod platform;
pub mod render;

pub use platform::WindowPlatform;

//! 事件处理模块

pub mod keyboard;
pub mod mouse;

pub use keyboard::*;
pub use mouse::*;

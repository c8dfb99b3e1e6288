//! 错误类型
//!
//! 绘制与控件操作本身不会失败（非法几何一律钳制/裁剪），
//! 这里只覆盖平台表面、配置读写和截图导出。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// 平台无法提供输出像素缓冲
    #[error("output surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// 呈现到平台失败
    #[error("failed to present frame: {0}")]
    Present(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

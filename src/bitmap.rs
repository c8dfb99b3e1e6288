//! 位图资源（图标等）

use crate::Color;

/// RGBA 位图
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// 创建透明位图
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    /// 逐像素生成
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Color,
    {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    /// 从 RGBA 字节数据创建，长度不足返回 None
    pub fn from_rgba(data: &[u8], width: u32, height: u32) -> Option<Self> {
        let len = (width * height) as usize;
        if data.len() < len * 4 {
            return None;
        }
        let pixels = data
            .chunks_exact(4)
            .take(len)
            .map(|c| Color::new(c[0], c[1], c[2], c[3]))
            .collect();
        Some(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// 越界返回透明
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }
}

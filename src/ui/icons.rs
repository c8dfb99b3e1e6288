//! 图标集 - 名字到位图的映射，内置一组程序生成的几何图标

use std::collections::HashMap;

use crate::color::palette;
use crate::{Bitmap, Color};

/// 几何图标形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Ring,
    Diamond,
    Star,
    Hexagon,
}

impl Shape {
    /// 相对中心的偏移 `(dx, dy)` 是否落在形状内
    fn covers(self, dx: f32, dy: f32, radius: f32) -> bool {
        let dist = (dx * dx + dy * dy).sqrt();
        match self {
            Shape::Circle => dist <= radius,
            Shape::Ring => dist <= radius && dist >= radius * 0.7,
            Shape::Diamond => dx.abs() + dy.abs() <= radius,
            Shape::Star => {
                let angle = dy.atan2(dx);
                dist <= radius * (0.6 + 0.4 * (angle * 5.0).sin())
            }
            Shape::Hexagon => {
                const COS30: f32 = 0.866;
                dx.abs() <= radius * COS30
                    && dy.abs() <= radius
                    && (dx * COS30 + dy * 0.5).abs() <= radius
                    && (dx * COS30 - dy * 0.5).abs() <= radius
            }
        }
    }
}

/// 生成几何图标：形状内由中心向外逐渐变暗 30%
pub fn geometric_icon(size: u32, color: Color, shape: Shape) -> Bitmap {
    let center = size as f32 / 2.0;
    let radius = size as f32 * 0.4;
    Bitmap::from_fn(size, size, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if radius <= 0.0 || !shape.covers(dx, dy, radius) {
            return Color::TRANSPARENT;
        }
        let dist = (dx * dx + dy * dy).sqrt();
        color.darken(1.0 - (dist / radius) * 0.3)
    })
}

/// 生成纵向渐变图标
pub fn gradient_icon(size: u32, top: Color, bottom: Color) -> Bitmap {
    Bitmap::from_fn(size, size, |_, y| Color::lerp(top, bottom, y as f32 / size as f32))
}

/// 图标集，由持有者显式传入渲染流程
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: HashMap<String, Bitmap>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带内置图标
    pub fn with_defaults() -> Self {
        use Shape::*;

        let mut set = Self::new();
        set.insert("neovia_logo", geometric_icon(64, palette::PRIMARY, Hexagon));
        set.insert("neovia_gradient", gradient_icon(64, palette::PRIMARY, palette::SECONDARY));

        let entries: [(&str, u32, Color, Shape); 10] = [
            ("settings", 32, palette::GRAY_LIGHT, Star),
            ("info", 32, palette::ACCENT, Circle),
            ("game", 32, palette::SUCCESS, Diamond),
            ("download", 32, palette::WARNING, Ring),
            ("tools", 32, palette::SECONDARY, Hexagon),
            ("exit", 32, palette::ERROR, Circle),
            ("success", 24, palette::SUCCESS, Circle),
            ("warning", 24, palette::WARNING, Diamond),
            ("error", 24, palette::ERROR, Circle),
            ("loading", 24, palette::PRIMARY, Ring),
        ];
        for (name, size, color, shape) in entries {
            set.insert(name, geometric_icon(size, color, shape));
        }
        set
    }

    pub fn insert(&mut self, name: &str, bitmap: Bitmap) {
        self.icons.insert(name.to_string(), bitmap);
    }

    pub fn get(&self, name: &str) -> Option<&Bitmap> {
        self.icons.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }
}

//! 颜色模块
//!
//! 统一使用 8 位 RGBA 通道，浮点颜色只在边界处转换。

/// RGBA 颜色
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// 从浮点通道创建（先钳制到 [0, 1]）
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit_to_u8(r),
            g: unit_to_u8(g),
            b: unit_to_u8(b),
            a: unit_to_u8(a),
        }
    }

    /// 转换为浮点通道
    pub fn to_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// 0xRRGGBBAA
    pub const fn from_u32_rgba(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    pub const fn to_u32_rgba(&self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }

    /// softbuffer 使用的 0x00RRGGBB
    pub const fn to_u32_xrgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn with_alpha(&self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// alpha 乘以系数
    pub fn scale_alpha(&self, factor: f32) -> Self {
        self.with_alpha(unit_to_u8(self.a as f32 / 255.0 * factor))
    }

    /// RGB 乘以系数（按下态变暗）
    pub fn darken(&self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::new(
            (self.r as f32 * f) as u8,
            (self.g as f32 * f) as u8,
            (self.b as f32 * f) as u8,
            self.a,
        )
    }

    /// 线性插值，t 钳制到 [0, 1]
    pub fn lerp(from: Color, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        };
        Color::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b), mix(from.a, to.a))
    }

    /// Alpha 混合：把 `src` 叠加到 `dst` 上
    #[inline]
    pub fn blend(dst: Color, src: Color) -> Color {
        if src.a == 255 { return src; }
        if src.a == 0 { return dst; }

        let alpha = src.a as u32;
        let inv_alpha = 255 - alpha;
        let mix = |s: u8, d: u8| -> u8 {
            ((s as u32 * alpha + d as u32 * inv_alpha + 127) / 255) as u8
        };

        // out_a = src_a + dst_a * (1 - src_a)
        let out_a = alpha + (dst.a as u32 * inv_alpha + 127) / 255;

        Color {
            r: mix(src.r, dst.r),
            g: mix(src.g, dst.g),
            b: mix(src.b, dst.b),
            a: out_a.min(255) as u8,
        }
    }

    // 预定义颜色
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn unit_to_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// 界面调色板
pub mod palette {
    use super::Color;

    pub const BACKGROUND_LIGHT: Color = Color::rgb(245, 245, 245);
    pub const BACKGROUND_DARK: Color = Color::rgb(18, 18, 24);
    pub const SURFACE: Color = Color::rgb(32, 32, 44);
    pub const PRIMARY: Color = Color::rgb(0, 122, 255);
    pub const SECONDARY: Color = Color::rgb(88, 86, 214);
    pub const ACCENT: Color = Color::rgb(255, 45, 85);
    pub const SUCCESS: Color = Color::rgb(52, 199, 89);
    pub const WARNING: Color = Color::rgb(255, 149, 0);
    pub const ERROR: Color = Color::rgb(255, 59, 48);
    pub const GRAY_LIGHT: Color = Color::rgb(235, 235, 235);
    pub const GRAY_MEDIUM: Color = Color::rgb(200, 200, 200);
    pub const GRAY_DARK: Color = Color::rgb(80, 80, 80);
    pub const TEXT_PRIMARY: Color = Color::rgb(0, 0, 0);
    pub const TEXT_SECONDARY: Color = Color::rgb(128, 128, 128);
}

//! 视觉效果 - 全部由圆角矩形/圆组合而成，没有独立的像素路径

use crate::{Canvas, Color, Rect};

/// 默认阴影层数
pub const SHADOW_LAYERS: u32 = 8;

/// 投影：逐层向右下偏移，越外层越淡
pub fn draw_shadow(canvas: &mut Canvas, rect: &Rect, radius: f32, layers: u32, opacity: f32) {
    if layers == 0 || opacity <= 0.0 {
        return;
    }
    let opacity = opacity.min(1.0);
    for i in (1..=layers).rev() {
        let alpha = opacity * (1.0 - i as f32 / layers as f32);
        if alpha <= 0.0 {
            continue;
        }
        let offset = i as f32;
        let layer = rect.offset(offset, offset);
        canvas.draw_rounded_rect(&layer, radius, Color::BLACK.scale_alpha(alpha));
    }
}

/// 外发光：5 层向外扩展，由外向内叠加
pub fn draw_glow(canvas: &mut Canvas, rect: &Rect, radius: f32, color: Color, intensity: f32) {
    if intensity <= 0.0 {
        return;
    }
    let intensity = intensity.min(1.0);
    for i in (1..=5).rev() {
        let spread = i as f32;
        let alpha = intensity * i as f32 / 5.0;
        canvas.draw_rounded_rect(&rect.outset(spread), radius + spread, color.scale_alpha(alpha));
    }
}

/// 淡入：从 80% 缩放到原尺寸，同时 alpha 随进度增加
pub fn draw_fade_in(canvas: &mut Canvas, rect: &Rect, radius: f32, progress: f32, color: Color) {
    let progress = progress.clamp(0.0, 1.0);
    if progress <= 0.0 {
        return;
    }
    let scale = 0.8 + 0.2 * progress;
    let w = rect.width * scale;
    let h = rect.height * scale;
    let center = rect.center();
    let scaled = Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h);
    canvas.draw_rounded_rect(&scaled, radius * scale, color.scale_alpha(progress));
}

/// 脉冲圆：半径按 `time` 正弦起伏 ±20%
pub fn draw_pulse(canvas: &mut Canvas, cx: f32, cy: f32, radius: f32, time: f32, color: Color) {
    let factor = 1.0 + 0.2 * (time * std::f32::consts::TAU).sin();
    canvas.draw_circle(cx, cy, radius * factor, color);
}

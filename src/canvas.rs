//! Canvas 画布模块 - 软件光栅化核心
//!
//! 所有图元都按像素裁剪到 `[0, width) x [0, height)`（以及可选的裁剪矩形），
//! 越界坐标静默丢弃，非法尺寸直接不绘制。

use crate::{font, Bitmap, Color, Rect, Result};

/// 设备坐标的钳制范围，超出部分一定在任何画布之外
const COORD_LIMIT: f32 = (1u64 << 40) as f32;

/// 逻辑坐标取整为设备坐标，NaN 不可绘制
fn to_device(v: f32) -> Option<i64> {
    if v.is_nan() {
        return None;
    }
    Some(v.floor().clamp(-COORD_LIMIT, COORD_LIMIT) as i64)
}

/// Liang-Barsky 裁剪，把线段截到 `[min, max]` 闭区间内
fn clip_segment(
    start: (i64, i64),
    end: (i64, i64),
    min: (i64, i64),
    max: (i64, i64),
) -> Option<((i64, i64), (i64, i64))> {
    let inside = |p: (i64, i64)| p.0 >= min.0 && p.0 <= max.0 && p.1 >= min.1 && p.1 <= max.1;
    if inside(start) && inside(end) {
        return Some((start, end));
    }

    let (x0, y0) = (start.0 as f64, start.1 as f64);
    let dx = end.0 as f64 - x0;
    let dy = end.1 as f64 - y0;
    let (mut t0, mut t1) = (0.0f64, 1.0f64);

    let edges = [
        (-dx, x0 - min.0 as f64),
        (dx, max.0 as f64 - x0),
        (-dy, y0 - min.1 as f64),
        (dy, max.1 as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let point = |t: f64| {
        let x = (x0 + t * dx).round().clamp(min.0 as f64, max.0 as f64) as i64;
        let y = (y0 + t * dy).round().clamp(min.1 as f64, max.1 as f64) as i64;
        (x, y)
    };
    Some((point(t0), point(t1)))
}

/// 画布状态
#[derive(Clone)]
struct CanvasState {
    clip_rect: Option<Rect>,
    translation: (f32, f32),
}

/// 画布 - 一帧的像素缓冲
#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    clip_rect: Option<Rect>,
    translation: (f32, f32),
    state_stack: Vec<CanvasState>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
            clip_rect: None,
            translation: (0.0, 0.0),
            state_stack: Vec::new(),
        }
    }

    /// 保存当前状态（裁剪区域和变换）
    pub fn save(&mut self) {
        self.state_stack.push(CanvasState {
            clip_rect: self.clip_rect,
            translation: self.translation,
        });
    }

    /// 恢复上一次保存的状态
    pub fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.clip_rect = state.clip_rect;
            self.translation = state.translation;
        }
    }

    /// 丢弃保存的状态、平移和裁剪（每帧开始时调用）
    pub fn reset_state(&mut self) {
        self.state_stack.clear();
        self.clip_rect = None;
        self.translation = (0.0, 0.0);
    }

    /// 平移坐标系
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.translation.0 += dx;
        self.translation.1 += dy;
    }

    pub fn translation(&self) -> (f32, f32) {
        self.translation
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// 获取像素数据引用
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 清空画布（忽略裁剪和变换）
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 设置裁剪区域（使用当前坐标系，与已有区域求交）
    pub fn clip_rect(&mut self, rect: Rect) {
        let rect = rect.offset(self.translation.0, self.translation.1);
        self.clip_rect = Some(match self.clip_rect {
            Some(current) => current.intersection(&rect),
            None => rect,
        });
    }

    /// 重置裁剪区域
    pub fn reset_clip(&mut self) {
        self.clip_rect = None;
    }

    /// 获取像素
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置单个像素（带 alpha 混合，坐标已是设备坐标）
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        // 检查裁剪区域
        if let Some(clip) = &self.clip_rect {
            let (fx, fy) = (x as f32, y as f32);
            if fx < clip.x.floor() || fx >= clip.right().floor() ||
               fy < clip.y.floor() || fy >= clip.bottom().floor() {
                return;
            }
        }

        if color.a == 0 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = Color::blend(self.pixels[idx], color);
    }

    /// 绘制像素
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        let (tx, ty) = self.device_offset();
        self.blend_pixel(x.saturating_add(tx), y.saturating_add(ty), color);
    }

    /// 平移量取整后的设备偏移
    fn device_offset(&self) -> (i32, i32) {
        (self.translation.0.round() as i32, self.translation.1.round() as i32)
    }

    /// 填充设备坐标下的半开区间 [x0, x1) x [y0, y1)
    fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let x0 = x0.max(0) as i32;
        let y0 = y0.max(0) as i32;
        let x1 = x1.min(self.width as i64) as i32;
        let y1 = y1.min(self.height as i64) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// 逻辑矩形转设备像素范围
    fn device_span(&self, rect: &Rect) -> Option<(i64, i64, i64, i64)> {
        if rect.is_empty() {
            return None;
        }
        let tx = self.translation.0;
        let ty = self.translation.1;
        Some((
            to_device(rect.x + tx)?,
            to_device(rect.y + ty)?,
            to_device(rect.right() + tx)?,
            to_device(rect.bottom() + ty)?,
        ))
    }

    /// 绘制填充矩形
    pub fn draw_rect(&mut self, rect: &Rect, color: Color) {
        if let Some((x0, y0, x1, y1)) = self.device_span(rect) {
            self.fill_span(x0, y0, x1, y1, color);
        }
    }

    /// 绘制矩形边框（向内描边）
    pub fn draw_rect_outline(&mut self, rect: &Rect, color: Color, thickness: f32) {
        if rect.is_empty() || thickness <= 0.0 {
            return;
        }
        let w = thickness.min(rect.width / 2.0).min(rect.height / 2.0);
        // 上边
        self.draw_rect(&Rect::new(rect.x, rect.y, rect.width, w), color);
        // 下边
        self.draw_rect(&Rect::new(rect.x, rect.bottom() - w, rect.width, w), color);
        // 左边
        self.draw_rect(&Rect::new(rect.x, rect.y + w, w, rect.height - 2.0 * w), color);
        // 右边
        self.draw_rect(&Rect::new(rect.right() - w, rect.y + w, w, rect.height - 2.0 * w), color);
    }

    /// 绘制圆角矩形
    ///
    /// 半径钳制到 `min(width, height) / 2`。中间两块矩形直接填充，
    /// 四个角按像素中心到内侧圆心的距离判定（`dist <= radius`）。
    pub fn draw_rounded_rect(&mut self, rect: &Rect, radius: f32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.device_span(rect) else { return };
        let w = x1 - x0;
        let h = y1 - y0;
        if w <= 0 || h <= 0 {
            return;
        }

        let r = (radius.max(0.0) as f64).min(w as f64 / 2.0).min(h as f64 / 2.0);
        let ir = r.floor() as i64;
        if ir == 0 {
            self.fill_span(x0, y0, x1, y1, color);
            return;
        }

        // 中间横竖两块
        self.fill_span(x0 + ir, y0, x1 - ir, y1, color);
        self.fill_span(x0, y0 + ir, x0 + ir, y1 - ir, color);
        self.fill_span(x1 - ir, y0 + ir, x1, y1 - ir, color);

        // 四个角，圆心在靠内的一侧
        let r2 = r * r;
        self.fill_corner(x0, y0, ir, r2, (true, true), color);
        self.fill_corner(x1 - ir, y0, ir, r2, (false, true), color);
        self.fill_corner(x0, y1 - ir, ir, r2, (true, false), color);
        self.fill_corner(x1 - ir, y1 - ir, ir, r2, (false, false), color);
    }

    /// 填充一个 `ir x ir` 的圆角块，只扫描落在画布内的部分
    ///
    /// `near` 表示该轴上圆心位于块的远端（左上角的块圆心在右下）。
    fn fill_corner(&mut self, left: i64, top: i64, ir: i64, r2: f64, near: (bool, bool), color: Color) {
        let offset = |i: i64, near: bool| {
            if near { ir as f64 - (i as f64 + 0.5) } else { i as f64 + 0.5 }
        };

        let xs = left.max(0)..(left + ir).min(self.width as i64);
        let ys = top.max(0)..(top + ir).min(self.height as i64);
        for y in ys {
            let dy = offset(y - top, near.1);
            for x in xs.clone() {
                let dx = offset(x - left, near.0);
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x as i32, y as i32, color);
                }
            }
        }
    }

    /// 绘制实心圆
    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if !(radius > 0.0) {
            return;
        }
        let (Some(cx), Some(cy)) = (
            to_device(cx + self.translation.0),
            to_device(cy + self.translation.1),
        ) else {
            return;
        };
        let r = (radius as f64).min(COORD_LIMIT as f64);
        let ir = r.floor() as i64;
        let r2 = r * r;

        // 只扫描与画布相交的包围盒
        let y_start = (cy - ir).max(0);
        let y_end = (cy + ir).min(self.height as i64 - 1);
        let x_start = (cx - ir).max(0);
        let x_end = (cx + ir).min(self.width as i64 - 1);

        for y in y_start..=y_end {
            let dy = (y - cy) as f64;
            for x in x_start..=x_end {
                let dx = (x - cx) as f64;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x as i32, y as i32, color);
                }
            }
        }
    }

    /// 绘制线段（Bresenham，粗细扩展为以步进点为中心的方块）
    ///
    /// 端点先裁剪到画布外扩一个线宽的范围，只步进可能可见的部分。
    /// 线宽最多按画布长边的两倍处理。
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, thickness: f32) {
        let (tx, ty) = self.device_offset();
        let start = (x1 as i64 + tx as i64, y1 as i64 + ty as i64);
        let end = (x2 as i64 + tx as i64, y2 as i64 + ty as i64);

        let (w, h) = (self.width as i64, self.height as i64);
        let side = (thickness.round() as i64).clamp(1, 2 * w.max(h) + 2);
        let lo = -(side / 2);
        let hi = lo + side - 1;

        let Some(((mut x0, mut y0), (x1, y1))) = clip_segment(start, end, (-side, -side), (w - 1 + side, h - 1 + side))
        else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if side == 1 {
                self.blend_pixel(x0 as i32, y0 as i32, color);
            } else {
                self.fill_span(x0 + lo, y0 + lo, x0 + hi + 1, y0 + hi + 1, color);
            }
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// 绘制线性渐变
    ///
    /// 首行（列）为 `from`，末行（列）为 `to`。
    pub fn draw_gradient(&mut self, rect: &Rect, from: Color, to: Color, vertical: bool) {
        self.draw_rounded_gradient(rect, 0.0, from, to, vertical);
    }

    /// 绘制圆角线性渐变，圆角判定与 [`Canvas::draw_rounded_rect`] 相同
    pub fn draw_rounded_gradient(&mut self, rect: &Rect, radius: f32, from: Color, to: Color, vertical: bool) {
        let Some((x0, y0, x1, y1)) = self.device_span(rect) else { return };
        let steps = if vertical { y1 - y0 } else { x1 - x0 };
        if steps <= 0 || x1 <= x0 || y1 <= y0 {
            return;
        }
        let denom = (steps - 1).max(1) as f32;

        let r = (radius.max(0.0) as f64).min((x1 - x0) as f64 / 2.0).min((y1 - y0) as f64 / 2.0);
        let ir = r.floor() as i64;
        let r2 = r * r;
        // 落在角块里时返回到圆心的距离分量
        let corner_offset = |p: i64, lo: i64, hi: i64| {
            if p < lo + ir {
                Some(ir as f64 - ((p - lo) as f64 + 0.5))
            } else if p >= hi - ir {
                Some((p - (hi - ir)) as f64 + 0.5)
            } else {
                None
            }
        };

        let cx0 = x0.max(0);
        let cy0 = y0.max(0);
        let cx1 = x1.min(self.width as i64);
        let cy1 = y1.min(self.height as i64);

        for y in cy0..cy1 {
            for x in cx0..cx1 {
                if ir > 0 {
                    if let (Some(dx), Some(dy)) = (corner_offset(x, x0, x1), corner_offset(y, y0, y1)) {
                        if dx * dx + dy * dy > r2 {
                            continue;
                        }
                    }
                }
                let step = if vertical { y - y0 } else { x - x0 };
                let color = Color::lerp(from, to, step as f32 / denom);
                self.blend_pixel(x as i32, y as i32, color);
            }
        }
    }

    /// 绘制位图文本（单行，无换行无字距调整）
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, size: f32) {
        if size <= 0.0 || color.a == 0 {
            return;
        }
        let scale = size / 8.0;
        let advance = font::advance(size);

        for (i, ch) in text.chars().enumerate() {
            let gx = x + i as f32 * advance;
            // 整个字符都在画布右侧之外，后面的也不用画了
            if gx + self.translation.0 >= self.width as f32 {
                break;
            }
            let glyph = font::glyph(ch);
            for (row, bits) in glyph.iter().enumerate() {
                if *bits == 0 {
                    continue;
                }
                for col in 0..8 {
                    if bits & (1 << col) != 0 {
                        let cell = Rect::new(
                            gx + col as f32 * scale,
                            y + row as f32 * scale,
                            scale,
                            scale,
                        );
                        self.draw_rect(&cell, color);
                    }
                }
            }
        }
    }

    /// 在给定宽度内水平居中绘制文本
    pub fn draw_text_centered(&mut self, text: &str, x: f32, y: f32, width: f32, color: Color, size: f32) {
        let text_width = font::measure_text(text, size).width;
        self.draw_text(text, x + (width - text_width) / 2.0, y, color, size);
    }

    /// 绘制位图（双线性采样，拉伸到目标矩形）
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: &Rect, opacity: f32) {
        if bitmap.is_empty() || opacity <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.device_span(dest) else { return };

        let img_w = bitmap.width();
        let img_h = bitmap.height();
        let scale_x = (x1 - x0) as f32 / img_w as f32;
        let scale_y = (y1 - y0) as f32 / img_h as f32;
        if scale_x <= 0.0 || scale_y <= 0.0 {
            return;
        }

        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

        for dest_y in y0.max(0)..y1.min(self.height as i64) {
            for dest_x in x0.max(0)..x1.min(self.width as i64) {
                // 计算源图片坐标
                let local_x = ((dest_x - x0) as f32 + 0.5) / scale_x - 0.5;
                let local_y = ((dest_y - y0) as f32 + 0.5) / scale_y - 0.5;
                let local_x = local_x.clamp(0.0, (img_w - 1) as f32);
                let local_y = local_y.clamp(0.0, (img_h - 1) as f32);

                let src_x = local_x.floor() as u32;
                let src_y = local_y.floor() as u32;
                let fx = local_x - src_x as f32;
                let fy = local_y - src_y as f32;

                let sample = |sx: u32, sy: u32| -> [f32; 4] {
                    let c = bitmap.get(sx.min(img_w - 1), sy.min(img_h - 1));
                    [c.r as f32, c.g as f32, c.b as f32, c.a as f32]
                };

                let c00 = sample(src_x, src_y);
                let c10 = sample(src_x + 1, src_y);
                let c01 = sample(src_x, src_y + 1);
                let c11 = sample(src_x + 1, src_y + 1);

                let mut out = [0u8; 4];
                for k in 0..4 {
                    out[k] = lerp(lerp(c00[k], c10[k], fx), lerp(c01[k], c11[k], fx), fy)
                        .round()
                        .clamp(0.0, 255.0) as u8;
                }

                let color = Color::new(out[0], out[1], out[2], out[3]).scale_alpha(opacity);
                self.blend_pixel(dest_x as i32, dest_y as i32, color);
            }
        }
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.push(pixel.r);
            data.push(pixel.g);
            data.push(pixel.b);
            data.push(pixel.a);
        }
        data
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}

//! ProgressBar 进度条

use std::any::Any;

use super::icons::IconSet;
use super::widget::{Style, Widget, WidgetId};
use crate::animation::{Easing, Tween};
use crate::color::palette;
use crate::effects;
use crate::{Canvas, Color, Rect};

const FILL_DURATION: f32 = 0.3;

/// ProgressBar - 0..1 进度，填充宽度带补间
pub struct ProgressBar {
    id: WidgetId,
    style: Style,
    progress: f32,
    fill: Tween,
    fill_color: Color,
    show_percentage: bool,
    glow: bool,
}

impl ProgressBar {
    pub fn new(bounds: Rect) -> Self {
        let mut style = Style::with_bounds(bounds);
        style.background = Some(palette::GRAY_DARK);
        style.corner_radius = bounds.height / 2.0;

        let mut fill = Tween::new(FILL_DURATION, Easing::EaseOutCubic);
        fill.set(0.0);

        Self {
            id: WidgetId::new(),
            style,
            progress: 0.0,
            fill,
            fill_color: palette::PRIMARY,
            show_percentage: false,
            glow: false,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    /// 设置目标进度，钳制到 [0, 1]
    pub fn set_progress(&mut self, value: f32, animate: bool) {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        self.progress = value;
        if animate {
            let current = self.fill.value();
            self.fill.start(current, value);
        } else {
            self.fill.set(value);
        }
    }

    /// 目标进度
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// 当前显示的进度（动画中可能落后于目标）
    pub fn displayed(&self) -> f32 {
        self.fill.value().clamp(0.0, 1.0)
    }
}

impl<M: 'static> Widget<M> for ProgressBar {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn update(&mut self, dt: f32) {
        self.fill.update(dt);
    }

    fn render(&self, canvas: &mut Canvas, _icons: &IconSet) {
        let b = self.style.bounds;
        let radius = self.style.corner_radius;

        if let Some(track) = self.style.background {
            canvas.draw_rounded_rect(&b, radius, self.style.tint(track));
        }

        let shown = self.displayed();
        let fill_width = b.width * shown;
        if fill_width > 0.0 {
            let fill = Rect::new(b.x, b.y, fill_width, b.height);
            if self.glow {
                effects::draw_glow(canvas, &fill, radius, self.fill_color, 0.2);
            }
            canvas.draw_rounded_rect(&fill, radius, self.style.tint(self.fill_color));
        }

        if self.show_percentage {
            let text = format!("{}%", (shown * 100.0).round() as u32);
            let size = (b.height * 0.6).clamp(8.0, 24.0);
            canvas.draw_text_centered(
                &text,
                b.x,
                b.y + (b.height - size) / 2.0,
                b.width,
                self.style.tint(Color::WHITE),
                size,
            );
        }
    }

    fn type_name(&self) -> &'static str {
        "ProgressBar"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

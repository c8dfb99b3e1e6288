//! Button 组件 - 可点击按钮

use std::any::Any;

use super::icons::IconSet;
use super::widget::{Style, Widget, WidgetId};
use crate::animation::{Easing, Tween};
use crate::color::palette;
use crate::effects;
use crate::input::InputState;
use crate::{Canvas, Color, Rect};

const HOVER_DURATION: f32 = 0.15;
const PRESS_DURATION: f32 = 0.2;

/// Button - 按钮组件
pub struct Button<M> {
    id: WidgetId,
    style: Style,
    label: String,
    font_size: f32,
    text_color: Color,
    hovered: bool,
    hover_target: f32,
    hover: Tween,
    press: Tween,
    on_click: Option<Box<dyn FnMut() -> M>>,
}

impl<M> Button<M> {
    pub fn new(label: &str, bounds: Rect) -> Self {
        let mut style = Style::with_bounds(bounds);
        style.background = Some(palette::PRIMARY);
        style.corner_radius = 8.0;
        style.interactive = true;

        let mut press = Tween::new(PRESS_DURATION, Easing::EaseOutCubic);
        press.set(0.0);
        let mut hover = Tween::new(HOVER_DURATION, Easing::EaseOutCubic);
        hover.set(0.0);

        Self {
            id: WidgetId::new(),
            style,
            label: label.to_string(),
            font_size: 16.0,
            text_color: Color::WHITE,
            hovered: false,
            hover_target: 0.0,
            hover,
            press,
            on_click: None,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.style.corner_radius = radius;
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: FnMut() -> M + 'static,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.style.interactive = interactive;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// 按下动画是否正在播放
    pub fn is_pressing(&self) -> bool {
        self.press.is_active()
    }

    /// 按下反馈强度，随动画衰减到 0
    fn press_amount(&self) -> f32 {
        if self.press.is_active() {
            1.0 - self.press.value()
        } else {
            0.0
        }
    }
}

impl<M: 'static> Widget<M> for Button<M> {
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
        let target = if self.hovered || self.style.selected { 1.0 } else { 0.0 };
        if target != self.hover_target {
            self.hover_target = target;
            let current = self.hover.value();
            self.hover.start(current, target);
        }
        self.hover.update(dt);
        self.press.update(dt);
    }

    fn render(&self, canvas: &mut Canvas, _icons: &IconSet) {
        let bounds = self.style.bounds;
        let radius = self.style.corner_radius;
        let highlight = self.hover.value();

        if highlight > 0.0 {
            effects::draw_glow(canvas, &bounds, radius, palette::PRIMARY, 0.15 * highlight);
        }

        // 计算背景颜色
        let base = if self.style.interactive {
            self.style.background.unwrap_or(palette::PRIMARY)
        } else {
            palette::GRAY_MEDIUM
        };
        let bg = Color::lerp(base, base.darken(0.8), self.press_amount());
        canvas.draw_rounded_rect(&bounds, radius, self.style.tint(bg));

        if self.style.selected {
            canvas.draw_rect_outline(&bounds, self.style.tint(Color::WHITE), 2.0);
        } else if let Some(border) = self.style.border_color {
            canvas.draw_rect_outline(&bounds, self.style.tint(border), self.style.border_width);
        }

        let text_y = bounds.y + (bounds.height - self.font_size) / 2.0;
        canvas.draw_text_centered(
            &self.label,
            bounds.x,
            text_y,
            bounds.width,
            self.style.tint(self.text_color),
            self.font_size,
        );
    }

    /// 有指针时要求指针在范围内，没有指针时要求当前被选中；
    /// 两种情况都需要本帧按下 A
    fn handle_input(&mut self, input: &InputState, outbox: &mut Vec<M>) -> bool {
        if !self.style.accepts_input() {
            self.hovered = false;
            return false;
        }

        let targeted = match input.pointer {
            Some(point) => {
                self.hovered = self.hit_test(&point);
                self.hovered
            }
            None => {
                self.hovered = false;
                self.style.selected
            }
        };

        if !targeted || !input.activated() {
            return false;
        }

        self.press.start(0.0, 1.0);
        if let Some(callback) = self.on_click.as_mut() {
            outbox.push(callback());
        }
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn type_name(&self) -> &'static str {
        "Button"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

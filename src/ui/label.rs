//! Label 文本标签

use std::any::Any;

use super::icons::IconSet;
use super::widget::{Style, Widget, WidgetId};
use crate::color::palette;
use crate::{font, Canvas, Color, Rect, Size};

/// Label - 单行文本
pub struct Label {
    id: WidgetId,
    style: Style,
    text: String,
    color: Color,
    font_size: f32,
    centered: bool,
}

impl Label {
    /// 标签的 bounds 按文本尺寸自动设置
    pub fn new(text: &str, x: f32, y: f32) -> Self {
        let font_size = 16.0;
        let size = font::measure_text(text, font_size);
        Self {
            id: WidgetId::new(),
            style: Style::with_bounds(Rect::new(x, y, size.width, size.height)),
            text: text.to_string(),
            color: palette::TEXT_PRIMARY,
            font_size,
            centered: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        if !self.centered {
            self.fit_to_text();
        }
        self
    }

    /// 在 `width` 内水平居中
    pub fn centered_in(mut self, width: f32) -> Self {
        self.centered = true;
        self.style.bounds.width = width;
        self.style.bounds.height = self.font_size;
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        if !self.centered {
            self.fit_to_text();
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn text_size(&self) -> Size {
        font::measure_text(&self.text, self.font_size)
    }

    fn fit_to_text(&mut self) {
        let size = self.text_size();
        self.style.bounds.width = size.width;
        self.style.bounds.height = size.height;
    }
}

impl<M: 'static> Widget<M> for Label {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn render(&self, canvas: &mut Canvas, _icons: &IconSet) {
        let b = self.style.bounds;
        let color = self.style.tint(self.color);
        if self.centered {
            canvas.draw_text_centered(&self.text, b.x, b.y, b.width, color, self.font_size);
        } else {
            canvas.draw_text(&self.text, b.x, b.y, color, self.font_size);
        }
    }

    fn type_name(&self) -> &'static str {
        "Label"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

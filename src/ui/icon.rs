//! Icon 图标控件

use std::any::Any;

use super::icons::IconSet;
use super::widget::{Style, Widget, WidgetId};
use crate::{Canvas, Rect};

/// Icon - 按名字引用图标集中的位图，找不到时什么都不画
pub struct Icon {
    id: WidgetId,
    style: Style,
    name: String,
    scale: f32,
}

impl Icon {
    pub fn new(name: &str, bounds: Rect) -> Self {
        Self {
            id: WidgetId::new(),
            style: Style::with_bounds(bounds),
            name: name.to_string(),
            scale: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// 以中心为基准缩放
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.0);
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(0.0);
    }

    fn dest_rect(&self) -> Rect {
        let b = self.style.bounds;
        let w = b.width * self.scale;
        let h = b.height * self.scale;
        let c = b.center();
        Rect::new(c.x - w / 2.0, c.y - h / 2.0, w, h)
    }
}

impl<M: 'static> Widget<M> for Icon {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn render(&self, canvas: &mut Canvas, icons: &IconSet) {
        if let Some(bitmap) = icons.get(&self.name) {
            canvas.draw_bitmap(bitmap, &self.dest_rect(), self.style.opacity);
        }
    }

    fn type_name(&self) -> &'static str {
        "Icon"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

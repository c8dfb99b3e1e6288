//! Panel 容器

use std::any::Any;

use log::debug;

use super::icons::IconSet;
use super::widget::{render_widget, Style, Widget, WidgetId};
use crate::effects;
use crate::input::InputState;
use crate::{Canvas, Color, Rect};

/// Panel - 容器，先画自己再按添加顺序画子控件
pub struct Panel<M> {
    id: WidgetId,
    style: Style,
    gradient: Option<(Color, Color)>,
    shadow: bool,
    children: Vec<Box<dyn Widget<M>>>,
}

impl<M> Panel<M> {
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: WidgetId::new(),
            style: Style::with_bounds(bounds),
            gradient: None,
            shadow: false,
            children: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    /// 纵向渐变背景，优先于纯色背景
    pub fn with_gradient(mut self, top: Color, bottom: Color) -> Self {
        self.gradient = Some((top, bottom));
        self
    }

    pub fn with_border(mut self, color: Color, width: f32) -> Self {
        self.style.border_color = Some(color);
        self.style.border_width = width;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.style.corner_radius = radius;
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_child(mut self, child: impl Widget<M> + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn add_child(&mut self, child: Box<dyn Widget<M>>) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<M: 'static> Widget<M> for Panel<M> {
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
        for child in &mut self.children {
            child.update(dt);
        }
    }

    fn render(&self, canvas: &mut Canvas, icons: &IconSet) {
        let bounds = self.style.bounds;
        let radius = self.style.corner_radius;

        if self.shadow {
            effects::draw_shadow(canvas, &bounds, radius, effects::SHADOW_LAYERS, 0.3 * self.style.opacity);
        }

        if let Some((top, bottom)) = self.gradient {
            canvas.draw_rounded_gradient(&bounds, radius, self.style.tint(top), self.style.tint(bottom), true);
        } else if let Some(bg) = self.style.background {
            canvas.draw_rounded_rect(&bounds, radius, self.style.tint(bg));
        }

        if let Some(border) = self.style.border_color {
            canvas.draw_rect_outline(&bounds, self.style.tint(border), self.style.border_width);
        }

        for child in &self.children {
            render_widget(child.as_ref(), canvas, icons);
        }
    }

    /// 按添加顺序分发，第一个消费者生效
    fn handle_input(&mut self, input: &InputState, outbox: &mut Vec<M>) -> bool {
        if !self.style.is_drawable() {
            return false;
        }
        for child in &mut self.children {
            if child.handle_input(input, outbox) {
                if child.children().is_empty() {
                    debug!("input consumed by {} {:?}", child.type_name(), child.id());
                }
                return true;
            }
        }
        false
    }

    fn children(&self) -> &[Box<dyn Widget<M>>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget<M>>] {
        &mut self.children
    }

    fn type_name(&self) -> &'static str {
        "Panel"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

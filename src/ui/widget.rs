//! 控件基础定义

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

use super::icons::IconSet;
use crate::input::InputState;
use crate::{Canvas, Color, Point, Rect};

static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 控件 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    pub fn new() -> Self {
        Self(WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// 控件公共样式与状态
#[derive(Debug, Clone)]
pub struct Style {
    pub bounds: Rect,
    pub visible: bool,
    pub interactive: bool,
    /// 手柄导航下当前选中
    pub selected: bool,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f32,
    pub corner_radius: f32,
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            bounds: Rect::default(),
            visible: true,
            interactive: false,
            selected: false,
            background: None,
            border_color: None,
            border_width: 0.0,
            corner_radius: 0.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    pub fn with_bounds(bounds: Rect) -> Self {
        Self { bounds, ..Self::default() }
    }

    /// 可见且面积非零
    pub fn is_drawable(&self) -> bool {
        self.visible && !self.bounds.is_empty()
    }

    /// 可以接收输入
    pub fn accepts_input(&self) -> bool {
        self.is_drawable() && self.interactive
    }

    /// 按不透明度调整颜色
    pub fn tint(&self, color: Color) -> Color {
        if self.opacity >= 1.0 {
            color
        } else {
            color.scale_alpha(self.opacity)
        }
    }
}

/// 控件 trait
///
/// `M` 是点击等操作产生的消息类型。控件不持有上层控制器，
/// 只把消息放进 `outbox`，由拥有控件树的一方在帧末处理。
pub trait Widget<M> {
    fn id(&self) -> WidgetId;
    fn style(&self) -> &Style;
    fn style_mut(&mut self) -> &mut Style;

    /// 推进动画
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// 渲染自身（调用方保证可见且面积非零）
    fn render(&self, canvas: &mut Canvas, icons: &IconSet);

    /// 处理输入，返回是否消费
    fn handle_input(&mut self, input: &InputState, outbox: &mut Vec<M>) -> bool {
        let _ = (input, outbox);
        false
    }

    /// 点击测试
    fn hit_test(&self, point: &Point) -> bool {
        self.style().is_drawable() && self.style().bounds.contains(point)
    }

    fn children(&self) -> &[Box<dyn Widget<M>>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget<M>>] {
        &mut []
    }

    /// 是否参与手柄导航
    fn is_focusable(&self) -> bool {
        false
    }

    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// 渲染一个控件：不可见或零面积时整棵子树跳过
pub fn render_widget<M>(widget: &dyn Widget<M>, canvas: &mut Canvas, icons: &IconSet) {
    if widget.style().is_drawable() {
        widget.render(canvas, icons);
    }
}

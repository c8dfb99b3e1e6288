//! 控件树 - 更新、输入分发、渲染与手柄导航

use super::icons::IconSet;
use super::panel::Panel;
use super::widget::{render_widget, Widget, WidgetId};
use crate::input::{Direction, InputState};
use crate::Canvas;

/// 手柄导航的选中索引，始终在 `[0, len)` 内循环
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// 没有候选时为 None
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 候选数量变化时收紧索引
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    /// 越界时忽略，返回是否生效
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// 控件树，根节点是一个 Panel
pub struct WidgetTree<M> {
    root: Panel<M>,
    selection: Selection,
}

impl<M: 'static> WidgetTree<M> {
    pub fn new(root: Panel<M>) -> Self {
        let mut tree = Self {
            root,
            selection: Selection::default(),
        };
        tree.sync_selection();
        tree
    }

    pub fn root(&self) -> &Panel<M> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Panel<M> {
        &mut self.root
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// 更新所有控件的动画
    pub fn update(&mut self, dt: f32) {
        self.root.update(dt);
    }

    /// 分发一帧输入，返回本帧产生的消息
    ///
    /// 没有指针时方向键先移动选中项；随后深度优先、按添加顺序分发，
    /// 第一个消费输入的控件之后不再传递。
    pub fn dispatch(&mut self, input: &InputState) -> Vec<M> {
        self.sync_selection();
        if input.pointer.is_none() {
            if let Some(direction) = input.direction() {
                self.selection.step(direction);
                self.apply_selection();
            }
        }

        let mut outbox = Vec::new();
        self.root.handle_input(input, &mut outbox);
        outbox
    }

    pub fn render(&self, canvas: &mut Canvas, icons: &IconSet) {
        render_widget(&self.root, canvas, icons);
    }

    /// 可见、可交互、可聚焦的控件，深度优先按添加顺序
    pub fn focusables(&self) -> Vec<WidgetId> {
        let mut out = Vec::new();
        collect_focusables(&self.root, &mut out);
        out
    }

    pub fn selected(&self) -> Option<WidgetId> {
        let index = self.selection.index()?;
        self.focusables().get(index).copied()
    }

    /// 选中指定控件，它不可聚焦时返回 false
    pub fn select(&mut self, id: WidgetId) -> bool {
        let focusables = self.focusables();
        self.selection.set_len(focusables.len());
        match focusables.iter().position(|f| *f == id) {
            Some(index) => {
                self.selection.select(index);
                self.apply_selection();
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: WidgetId) -> Option<&dyn Widget<M>> {
        find_in(&self.root, id)
    }

    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget<M>> {
        find_in_mut(&mut self.root, id)
    }

    /// 按具体类型取控件
    pub fn get<T: 'static>(&self, id: WidgetId) -> Option<&T> {
        self.find(id)?.as_any().downcast_ref::<T>()
    }

    pub fn get_mut<T: 'static>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.find_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// 重新计算候选集并同步 `selected` 标记
    pub fn sync_selection(&mut self) {
        let len = self.focusables().len();
        self.selection.set_len(len);
        self.apply_selection();
    }

    fn apply_selection(&mut self) {
        let selected = self.selected();
        mark_selected(&mut self.root, selected);
    }
}

fn collect_focusables<M>(widget: &dyn Widget<M>, out: &mut Vec<WidgetId>) {
    if !widget.style().is_drawable() {
        return;
    }
    if widget.is_focusable() && widget.style().interactive {
        out.push(widget.id());
    }
    for child in widget.children() {
        collect_focusables(child.as_ref(), out);
    }
}

fn mark_selected<M>(widget: &mut dyn Widget<M>, selected: Option<WidgetId>) {
    widget.style_mut().selected = selected == Some(widget.id());
    for child in widget.children_mut() {
        mark_selected(child.as_mut(), selected);
    }
}

fn find_in<'a, M>(widget: &'a dyn Widget<M>, id: WidgetId) -> Option<&'a dyn Widget<M>> {
    if widget.id() == id {
        return Some(widget);
    }
    widget.children().iter().find_map(|child| find_in(child.as_ref(), id))
}

fn find_in_mut<'a, M>(widget: &'a mut dyn Widget<M>, id: WidgetId) -> Option<&'a mut dyn Widget<M>> {
    if widget.id() == id {
        return Some(widget);
    }
    for child in widget.children_mut() {
        if let Some(found) = find_in_mut(child.as_mut(), id) {
            return Some(found);
        }
    }
    None
}

//! 输入快照 - 每帧一份，不可变

use crate::Point;

/// 手柄按键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
    Up,
    Down,
    Left,
    Right,
    L,
    R,
    Plus,
    Minus,
}

impl Button {
    pub const ALL: [Button; 12] = [
        Button::A, Button::B, Button::X, Button::Y,
        Button::Up, Button::Down, Button::Left, Button::Right,
        Button::L, Button::R, Button::Plus, Button::Minus,
    ];

    #[inline]
    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// 本帧按下的按键集合（位掩码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Buttons(u16);

impl Buttons {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(&self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for Buttons {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = Buttons::empty();
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// 方向导航
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// 一帧的输入状态
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub pressed: Buttons,
    /// 触摸/鼠标位置，没有指针时为 None
    pub pointer: Option<Point>,
}

impl InputState {
    pub fn new(pressed: Buttons, pointer: Option<Point>) -> Self {
        Self { pressed, pointer }
    }

    /// 只按下一个键
    pub fn press(button: Button) -> Self {
        Self {
            pressed: std::iter::once(button).collect(),
            pointer: None,
        }
    }

    /// 在某点按下 A
    pub fn tap(point: Point) -> Self {
        Self {
            pressed: std::iter::once(Button::A).collect(),
            pointer: Some(point),
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed.contains(button)
    }

    /// 主操作键
    pub fn activated(&self) -> bool {
        self.pressed.contains(Button::A)
    }

    /// 下/右 为下一个，上/左 为上一个；同时按下时互相抵消
    pub fn direction(&self) -> Option<Direction> {
        let next = self.is_pressed(Button::Down) || self.is_pressed(Button::Right);
        let prev = self.is_pressed(Button::Up) || self.is_pressed(Button::Left);
        match (next, prev) {
            (true, false) => Some(Direction::Next),
            (false, true) => Some(Direction::Previous),
            _ => None,
        }
    }
}

/// 在两帧之间累积窗口事件，每帧取出一份 [`InputState`]
///
/// 指针在移动或点击后保持有效，直到按下手柄键或光标离开窗口。
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pending: Buttons,
    cursor: Option<Point>,
    pointer_active: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按键切回手柄模式
    pub fn press(&mut self, button: Button) {
        self.pending.insert(button);
        self.pointer_active = false;
    }

    /// `None` 表示光标离开
    pub fn move_cursor(&mut self, point: Option<Point>) {
        self.cursor = point;
        self.pointer_active = point.is_some();
    }

    pub fn click(&mut self) {
        if self.cursor.is_some() {
            self.pending.insert(Button::A);
            self.pointer_active = true;
        }
    }

    /// 取出本帧输入，按键只上报一次
    pub fn take(&mut self) -> InputState {
        let pointer = if self.pointer_active { self.cursor } else { None };
        InputState::new(std::mem::take(&mut self.pending), pointer)
    }
}

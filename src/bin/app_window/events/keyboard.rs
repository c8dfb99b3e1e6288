//! 键盘映射到手柄按键

use neovia_gui::input::Button;
use winit::keyboard::{KeyCode, PhysicalKey};

/// 方向键导航，Z/Enter/Space 为 A，X/Esc/Backspace 为 B，P 或 + 退出
pub fn map_key(physical_key: PhysicalKey) -> Option<Button> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let button = match code {
        KeyCode::ArrowUp => Button::Up,
        KeyCode::ArrowDown => Button::Down,
        KeyCode::ArrowLeft => Button::Left,
        KeyCode::ArrowRight => Button::Right,
        KeyCode::KeyZ | KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => Button::A,
        KeyCode::KeyX | KeyCode::Escape | KeyCode::Backspace => Button::B,
        KeyCode::KeyC => Button::X,
        KeyCode::KeyV => Button::Y,
        KeyCode::KeyQ => Button::L,
        KeyCode::KeyE => Button::R,
        KeyCode::KeyP | KeyCode::Equal | KeyCode::NumpadAdd => Button::Plus,
        KeyCode::Minus | KeyCode::NumpadSubtract => Button::Minus,
        _ => return None,
    };
    Some(button)
}

//! 各屏幕的控件树构建

use super::games;
use crate::color::palette;
use crate::config::ShellConfig;
use crate::ui::{Button, Icon, Label, Panel, ProgressBar, Widget, WidgetId, WidgetTree};
use crate::{Color, Rect, Size};

/// 屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Main,
    Settings,
    About,
    Enhancement,
    Loading,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Main => "main menu",
            Screen::Settings => "settings",
            Screen::About => "about",
            Screen::Enhancement => "game enhancement",
            Screen::Loading => "loading",
        }
    }
}

/// 控件产生的消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMessage {
    Open(Screen),
    StartEnhancement,
    CycleLanguage,
    CyclePriority,
    ToggleDynamicResolution,
    ToggleAutoStart,
    Exit,
}

/// 构建后需要再次访问的控件
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenHandles {
    pub status: Option<WidgetId>,
    pub progress: Option<WidgetId>,
    pub language: Option<WidgetId>,
    pub priority: Option<WidgetId>,
    pub dynamic_resolution: Option<WidgetId>,
    pub auto_start: Option<WidgetId>,
}

pub type ShellButton = Button<ShellMessage>;

/// 构建一个屏幕的控件树
pub fn build(screen: Screen, config: &ShellConfig, status: &str, size: Size) -> (WidgetTree<ShellMessage>, ScreenHandles) {
    let mut root = Panel::new(Rect::new(0.0, 0.0, size.width, size.height));
    let mut handles = ScreenHandles::default();

    match screen {
        Screen::Main => main_menu(&mut root, status, &mut handles),
        Screen::Settings => settings(&mut root, config, &mut handles),
        Screen::About => about(&mut root),
        Screen::Enhancement => enhancement(&mut root, config),
        Screen::Loading => loading(&mut root, &mut handles),
    }

    (WidgetTree::new(root), handles)
}

pub fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

pub fn language_text(config: &ShellConfig) -> String {
    format!("LANGUAGE: {}", config.language.code())
}

pub fn priority_text(config: &ShellConfig) -> String {
    format!("PRIORITY: {}", config.priority.label().to_uppercase())
}

pub fn dynamic_resolution_text(config: &ShellConfig) -> String {
    format!("DYNAMIC RES: {}", on_off(config.dynamic_resolution))
}

pub fn auto_start_text(config: &ShellConfig) -> String {
    format!("AUTO START: {}", on_off(config.auto_start))
}

type Root = Panel<ShellMessage>;

fn card(bounds: Rect) -> Panel<ShellMessage> {
    Panel::new(bounds)
        .with_background(palette::SURFACE.with_alpha(230))
        .with_corner_radius(16.0)
        .with_shadow(true)
}

fn title(text: &str, bounds: Rect, y: f32, color: Color, size: f32) -> Label {
    Label::new(text, bounds.x, y)
        .with_font_size(size)
        .with_color(color)
        .centered_in(bounds.width)
}

fn back_button(x: f32, y: f32) -> ShellButton {
    Button::new("< BACK", Rect::new(x, y, 160.0, 50.0))
        .with_background(palette::WARNING)
        .on_click(|| ShellMessage::Open(Screen::Main))
}

fn main_menu(root: &mut Root, status: &str, handles: &mut ScreenHandles) {
    let area = Rect::new(400.0, 250.0, 480.0, 320.0);

    let status_label = Label::new(status, 440.0, 520.0)
        .with_color(palette::SUCCESS)
        .centered_in(400.0);
    handles.status = Some(status_label.id());

    let panel = card(area)
        .with_child(
            Button::new("ENHANCE GAMES", Rect::new(440.0, 280.0, 400.0, 70.0))
                .with_font_size(24.0)
                .on_click(|| ShellMessage::Open(Screen::Enhancement)),
        )
        .with_child(
            Button::new("SETTINGS", Rect::new(440.0, 370.0, 190.0, 56.0))
                .with_background(palette::SECONDARY)
                .on_click(|| ShellMessage::Open(Screen::Settings)),
        )
        .with_child(
            Button::new("ABOUT", Rect::new(650.0, 370.0, 190.0, 56.0))
                .with_background(palette::ACCENT)
                .on_click(|| ShellMessage::Open(Screen::About)),
        )
        .with_child(
            Button::new("EXIT", Rect::new(440.0, 446.0, 400.0, 48.0))
                .with_background(palette::GRAY_DARK)
                .on_click(|| ShellMessage::Exit),
        )
        .with_child(status_label);

    root.add_child(Box::new(Icon::new("neovia_logo", Rect::new(608.0, 30.0, 64.0, 64.0))));
    root.add_child(Box::new(
        Label::new("NEOVIA", 0.0, 110.0)
            .with_font_size(32.0)
            .with_color(palette::PRIMARY)
            .centered_in(1280.0),
    ));
    root.add_child(Box::new(
        Label::new("Graphics Enhancement System", 0.0, 156.0)
            .with_color(palette::GRAY_LIGHT)
            .centered_in(1280.0),
    ));
    root.add_child(Box::new(
        Label::new("v1.0.0", 0.0, 184.0)
            .with_font_size(8.0)
            .with_color(palette::TEXT_SECONDARY)
            .centered_in(1280.0),
    ));
    root.add_child(Box::new(panel));
}

fn settings(root: &mut Root, config: &ShellConfig, handles: &mut ScreenHandles) {
    let area = Rect::new(200.0, 100.0, 880.0, 520.0);

    let rows: [(&str, String, ShellMessage); 4] = [
        ("Interface language", language_text(config), ShellMessage::CycleLanguage),
        ("Optimization priority", priority_text(config), ShellMessage::CyclePriority),
        ("Dynamic resolution", dynamic_resolution_text(config), ShellMessage::ToggleDynamicResolution),
        ("Start automatically", auto_start_text(config), ShellMessage::ToggleAutoStart),
    ];

    let mut panel = card(area).with_child(title("NEOVIA SETTINGS", area, 130.0, palette::PRIMARY, 24.0));

    for (i, (caption, value, message)) in rows.into_iter().enumerate() {
        let y = 200.0 + i as f32 * 70.0;
        let button = Button::new(&value, Rect::new(660.0, y, 360.0, 44.0))
            .with_background(palette::GRAY_DARK)
            .on_click(move || message);

        let id = button.id();
        match message {
            ShellMessage::CycleLanguage => handles.language = Some(id),
            ShellMessage::CyclePriority => handles.priority = Some(id),
            ShellMessage::ToggleDynamicResolution => handles.dynamic_resolution = Some(id),
            ShellMessage::ToggleAutoStart => handles.auto_start = Some(id),
            _ => {}
        }

        panel = panel
            .with_child(Label::new(caption, 250.0, y + 14.0).with_color(palette::GRAY_LIGHT))
            .with_child(button);
    }

    root.add_child(Box::new(panel.with_child(back_button(250.0, 540.0))));
}

fn about(root: &mut Root) {
    let area = Rect::new(320.0, 120.0, 640.0, 460.0);
    let features = [
        "- Automatic graphics enhancement",
        "- Support for many games",
        "- Performance optimization",
        "- Simple and clean interface",
    ];

    let mut panel = card(area)
        .with_child(title("NEOVIA v1.0.0", area, 150.0, palette::ACCENT, 32.0))
        .with_child(title("Graphics enhancement for Nintendo Switch", area, 200.0, palette::TEXT_SECONDARY, 12.0))
        .with_child(title("Developer: UNIX228", area, 240.0, palette::GRAY_LIGHT, 16.0));

    for (i, line) in features.iter().enumerate() {
        panel = panel.with_child(
            Label::new(line, 370.0, 300.0 + i as f32 * 28.0)
                .with_font_size(12.0)
                .with_color(palette::GRAY_MEDIUM),
        );
    }

    root.add_child(Box::new(panel.with_child(back_button(370.0, 500.0))));
}

fn enhancement(root: &mut Root, config: &ShellConfig) {
    let area = Rect::new(200.0, 100.0, 880.0, 520.0);
    let summary = [
        format!("Priority: {}", config.priority.label()),
        format!("Dynamic resolution: {}", on_off(config.dynamic_resolution)),
        format!("Download all mods: {}", on_off(config.download_all_mods)),
    ];

    let mut panel = card(area)
        .with_child(title("GAME ENHANCEMENT", area, 130.0, palette::SUCCESS, 24.0))
        .with_child(Icon::new("game", Rect::new(624.0, 180.0, 32.0, 32.0)));

    for (i, line) in summary.iter().enumerate() {
        panel = panel.with_child(
            Label::new(line, 250.0, 250.0 + i as f32 * 32.0).with_color(palette::GRAY_LIGHT),
        );
    }

    // 右侧列出扫描到的游戏
    panel = panel.with_child(Label::new("Found games:", 660.0, 250.0).with_color(Color::WHITE));
    for (i, game) in games::scan_installed_games().iter().enumerate() {
        panel = panel.with_child(
            Label::new(game.name, 660.0, 278.0 + i as f32 * 22.0)
                .with_font_size(12.0)
                .with_color(palette::GRAY_LIGHT),
        );
    }

    let start = Button::new("START", Rect::new(440.0, 400.0, 400.0, 60.0))
        .with_background(palette::SUCCESS)
        .with_font_size(24.0)
        .on_click(|| ShellMessage::StartEnhancement);

    root.add_child(Box::new(panel.with_child(start).with_child(back_button(250.0, 540.0))));
}

fn loading(root: &mut Root, handles: &mut ScreenHandles) {
    let area = Rect::new(440.0, 260.0, 400.0, 200.0);

    let progress = ProgressBar::new(Rect::new(480.0, 340.0, 320.0, 24.0))
        .with_percentage(true)
        .with_glow(true);
    let status = Label::new("", 440.0, 390.0)
        .with_font_size(12.0)
        .with_color(palette::GRAY_LIGHT)
        .centered_in(area.width);
    handles.progress = Some(progress.id());
    handles.status = Some(status.id());

    let panel = card(area)
        .with_child(title("LOADING...", area, 290.0, palette::PRIMARY, 20.0))
        .with_child(progress)
        .with_child(status);

    root.add_child(Box::new(panel));
}

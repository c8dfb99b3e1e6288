//! 壳程序界面测试 - 直接驱动 Gui 场景

use crate::config::{Language, Priority, ShellConfig};
use crate::frame::{FrameController, HeadlessPlatform, Scene};
use crate::input::{Button, InputState};
use crate::shell::games::{self, SCAN_LIMIT, UNKNOWN_GAME};
use crate::shell::screens::{ShellButton, ShellMessage};
use crate::shell::{EnhancementJob, Gui, Screen, TRANSITION_SECONDS};
use crate::ui::{Label, Widget};
use crate::{palette, Canvas, Color, Point, Size, SCREEN_HEIGHT, SCREEN_WIDTH};

fn gui_with(config: ShellConfig) -> Gui {
    Gui::new(config, None, Size::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32))
}

/// 推进时间直到过场动画结束
fn settle(gui: &mut Gui) {
    gui.update(TRANSITION_SECONDS + 0.05);
    assert!(!gui.is_transitioning());
}

fn press(gui: &mut Gui, button: Button) {
    gui.handle_input(&InputState::press(button));
}

fn selected_label(gui: &Gui) -> Option<String> {
    let id = gui.tree().selected()?;
    gui.tree().get::<ShellButton>(id).map(|b| b.label().to_string())
}

#[test]
fn test_initial_status() {
    let gui = gui_with(ShellConfig::default());
    assert_eq!(gui.screen(), Screen::Main);
    assert_eq!(gui.status(), "WELCOME TO NEOVIA");
    assert!(!gui.is_transitioning());

    let returning = gui_with(ShellConfig { first_run: false, ..ShellConfig::default() });
    assert_eq!(returning.status(), "SYSTEM READY");
}

/// 主菜单按钮顺序即导航顺序
#[test]
fn test_main_menu_navigation() {
    let mut gui = gui_with(ShellConfig::default());
    assert_eq!(gui.tree().focusables().len(), 4);
    assert_eq!(selected_label(&gui).as_deref(), Some("ENHANCE GAMES"));

    press(&mut gui, Button::Down);
    assert_eq!(selected_label(&gui).as_deref(), Some("SETTINGS"));
    press(&mut gui, Button::Up);
    press(&mut gui, Button::Up);
    assert_eq!(selected_label(&gui).as_deref(), Some("EXIT"));
}

/// X 打开设置，过场期间忽略输入，B 返回
#[test]
fn test_shortcut_screens() {
    let mut gui = gui_with(ShellConfig::default());

    press(&mut gui, Button::X);
    assert_eq!(gui.screen(), Screen::Settings);
    assert_eq!(gui.previous_screen(), Screen::Main);
    assert!(gui.is_transitioning());

    press(&mut gui, Button::B);
    assert_eq!(gui.screen(), Screen::Settings);

    settle(&mut gui);
    press(&mut gui, Button::B);
    assert_eq!(gui.screen(), Screen::Main);

    settle(&mut gui);
    press(&mut gui, Button::Y);
    assert_eq!(gui.screen(), Screen::About);
}

/// 切到当前屏幕无效
#[test]
fn test_switch_to_same_screen_is_ignored() {
    let mut gui = gui_with(ShellConfig::default());
    assert!(!gui.switch_screen(Screen::Main));
    assert!(gui.switch_screen(Screen::About));
    // 动画中再次切换被忽略
    assert!(!gui.switch_screen(Screen::Settings));
    assert_eq!(gui.screen(), Screen::About);
}

/// 点击主菜单按钮
#[test]
fn test_tap_opens_enhancement() {
    let mut gui = gui_with(ShellConfig::default());
    gui.handle_input(&InputState::tap(Point::new(640.0, 315.0)));
    assert_eq!(gui.screen(), Screen::Enhancement);
}

/// 设置项循环切换并更新按钮文字
#[test]
fn test_settings_cycle_language() {
    let mut gui = gui_with(ShellConfig::default());
    press(&mut gui, Button::X);
    settle(&mut gui);

    assert_eq!(gui.tree().focusables().len(), 5);
    assert_eq!(selected_label(&gui).as_deref(), Some("LANGUAGE: RU"));

    press(&mut gui, Button::A);
    assert_eq!(gui.config().language, Language::En);
    assert_eq!(selected_label(&gui).as_deref(), Some("LANGUAGE: EN"));

    press(&mut gui, Button::A);
    press(&mut gui, Button::A);
    assert_eq!(gui.config().language, Language::Ru);

    press(&mut gui, Button::Down);
    press(&mut gui, Button::A);
    assert_eq!(gui.config().priority, Priority::Fps);
    assert_eq!(selected_label(&gui).as_deref(), Some("PRIORITY: FPS"));

    press(&mut gui, Button::Down);
    press(&mut gui, Button::A);
    assert!(!gui.config().dynamic_resolution);
    assert_eq!(selected_label(&gui).as_deref(), Some("DYNAMIC RES: OFF"));

    press(&mut gui, Button::Down);
    press(&mut gui, Button::A);
    assert!(gui.config().auto_start);
    assert_eq!(selected_label(&gui).as_deref(), Some("AUTO START: ON"));

    // 最后一个是返回按钮
    press(&mut gui, Button::Down);
    press(&mut gui, Button::A);
    assert_eq!(gui.screen(), Screen::Main);
}

/// 修改设置后写回配置文件
#[test]
fn test_settings_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neovia").join("config.json");
    let mut gui = Gui::new(
        ShellConfig::default(),
        Some(path.clone()),
        Size::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32),
    );

    press(&mut gui, Button::X);
    settle(&mut gui);
    press(&mut gui, Button::A);

    let saved = ShellConfig::try_load(&path).unwrap();
    assert_eq!(saved.language, Language::En);
}

/// 完整的增强流程：开始、加载、完成后回到主菜单
#[test]
fn test_enhancement_flow() {
    let mut gui = gui_with(ShellConfig::default());

    press(&mut gui, Button::A);
    assert_eq!(gui.screen(), Screen::Enhancement);
    settle(&mut gui);
    assert_eq!(selected_label(&gui).as_deref(), Some("START"));

    press(&mut gui, Button::A);
    assert_eq!(gui.screen(), Screen::Loading);
    assert!(gui.job().is_some());

    // 加载中忽略输入
    settle(&mut gui);
    press(&mut gui, Button::B);
    assert_eq!(gui.screen(), Screen::Loading);

    for _ in 0..40 {
        gui.update(0.25);
        if gui.screen() == Screen::Main {
            break;
        }
    }

    assert_eq!(gui.screen(), Screen::Main);
    assert!(gui.job().is_none());
    assert_eq!(gui.status(), "ENHANCEMENT COMPLETE");
    assert!(!gui.config().first_run);
    assert!(gui.config().extras_installed);
}

#[test]
fn test_plus_requests_exit() {
    let mut gui = gui_with(ShellConfig::default());
    assert!(!gui.wants_exit());
    press(&mut gui, Button::Plus);
    assert!(gui.wants_exit());
}

/// 菜单里的 EXIT 按钮
#[test]
fn test_exit_button() {
    let mut gui = gui_with(ShellConfig::default());
    press(&mut gui, Button::Up);
    press(&mut gui, Button::A);
    assert!(gui.wants_exit());
}

#[test]
fn test_job_stages() {
    let mut job = EnhancementJob::new(&ShellConfig::default());
    assert_eq!(job.stage_count(), 4);
    assert_eq!(job.stage(), "Scanning installed games... 5 found");
    assert_eq!(job.games().len(), SCAN_LIMIT);

    job.advance(1.5);
    assert_eq!(job.stage(), "Downloading mods...");
    assert!(!job.is_finished());

    job.advance(10.0);
    assert!(job.is_finished());
    assert_eq!(job.progress(), 1.0);
    assert_eq!(job.stage(), "Finishing...");

    let lean = EnhancementJob::new(&ShellConfig { download_all_mods: false, ..ShellConfig::default() });
    assert_eq!(lean.stage_count(), 3);
}

/// 每个屏幕都能完整渲染
#[test]
fn test_every_screen_renders() {
    let mut gui = gui_with(ShellConfig::default());
    let screens = [Screen::Settings, Screen::About, Screen::Enhancement, Screen::Loading, Screen::Main];

    for screen in screens {
        assert!(gui.switch_screen(screen));
        gui.update(0.1);

        let mut canvas = Canvas::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        canvas.clear(Color::BLACK);
        gui.render(&mut canvas);
        assert_ne!(canvas.get_pixel(5, 5), Color::BLACK);
        assert_eq!(canvas.translation(), (0.0, 0.0));

        settle(&mut gui);
    }
}

/// 通过帧控制器驱动：脚本按下 Plus 后退出
#[test]
fn test_gui_under_frame_controller() {
    let mut gui = gui_with(ShellConfig::default());
    let mut platform = HeadlessPlatform::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        .with_script([InputState::default(), InputState::default(), InputState::press(Button::Plus)])
        .with_frame_limit(10);
    let mut controller = FrameController::new(palette::BACKGROUND_DARK);

    let frames = controller.run(&mut platform, &mut gui).unwrap();
    assert_eq!(frames, 3);

    let frame = platform.last_frame().unwrap();
    assert_eq!(frame.width(), SCREEN_WIDTH);
    assert_eq!(frame.get_pixel(0, 0).a, 255);
}

/// 扫描结果最多 5 个，且都在支持列表里
#[test]
fn test_scan_is_capped() {
    let found = games::scan_installed_games();
    assert_eq!(found.len(), SCAN_LIMIT);
    assert!(games::supported_games().count() > SCAN_LIMIT);
    assert!(found.iter().all(|game| games::is_game_supported(game.title_id)));
    assert_eq!(found[0].name, "Super Mario Odyssey");
}

#[test]
fn test_supported_game_lookup() {
    // 每个 id 都能查到，二分查找要求表有序
    for id in games::supported_games() {
        assert!(games::is_game_supported(id));
        assert_ne!(games::game_name(id), UNKNOWN_GAME);
    }
    assert_eq!(games::game_name("0100A8C00A5AE000"), "Hades");
    assert_eq!(games::game_info("0100B04011742000").map(|g| g.name), Some("Hollow Knight"));

    assert!(!games::is_game_supported("0123456789ABCDEF"));
    assert!(!games::is_game_supported(""));
    assert_eq!(games::game_name("0123456789ABCDEF"), UNKNOWN_GAME);
    assert!(games::game_info("0123456789ABCDEF").is_none());
}

fn collect_labels(widget: &dyn Widget<ShellMessage>, out: &mut Vec<String>) {
    if let Some(label) = widget.as_any().downcast_ref::<Label>() {
        out.push(label.text().to_string());
    }
    for child in widget.children() {
        collect_labels(child.as_ref(), out);
    }
}

/// 增强页列出扫描到的游戏
#[test]
fn test_enhancement_lists_found_games() {
    let mut gui = gui_with(ShellConfig::default());
    press(&mut gui, Button::A);
    assert_eq!(gui.screen(), Screen::Enhancement);
    settle(&mut gui);

    let mut labels = Vec::new();
    collect_labels(gui.tree().root(), &mut labels);
    assert!(labels.iter().any(|text| text == "Found games:"));
    for game in games::scan_installed_games() {
        assert!(labels.iter().any(|text| text == game.name), "{}", game.name);
    }
}

//! NEOVIA 壳程序界面

use std::path::PathBuf;

use log::{debug, info, warn};

use super::job::EnhancementJob;
use super::screens::{self, Screen, ScreenHandles, ShellButton, ShellMessage};
use crate::animation::{Easing, Tween};
use crate::color::palette;
use crate::config::ShellConfig;
use crate::effects;
use crate::frame::Scene;
use crate::input::{Button, InputState};
use crate::particles::ParticleSystem;
use crate::ui::{IconSet, Label, ProgressBar, WidgetId, WidgetTree};
use crate::{Canvas, Color, Rect, Size};

/// 切屏滑入时长（秒）
pub const TRANSITION_SECONDS: f32 = 0.5;
const PULSE_SECONDS: f32 = 2.0;
const MAX_PARTICLES: usize = 30;
const PARTICLE_SEED: u64 = 0x4E45_4F56;

pub struct Gui {
    config: ShellConfig,
    config_path: Option<PathBuf>,
    size: Size,
    icons: IconSet,
    particles: ParticleSystem,
    screen: Screen,
    previous: Screen,
    tree: WidgetTree<ShellMessage>,
    handles: ScreenHandles,
    transition: Tween,
    pulse: Tween,
    time: f32,
    status: String,
    job: Option<EnhancementJob>,
    exit: bool,
}

impl Gui {
    pub fn new(config: ShellConfig, config_path: Option<PathBuf>, size: Size) -> Self {
        let status = if config.first_run {
            "WELCOME TO NEOVIA".to_string()
        } else {
            "SYSTEM READY".to_string()
        };
        let (tree, handles) = screens::build(Screen::Main, &config, &status, size);

        let mut transition = Tween::new(TRANSITION_SECONDS, Easing::EaseOutCubic);
        transition.set(1.0);
        let mut pulse = Tween::new(PULSE_SECONDS, Easing::Linear);
        pulse.start(0.0, 1.0);

        info!("shell ready on {}", Screen::Main.title());
        Self {
            config,
            config_path,
            size,
            icons: IconSet::with_defaults(),
            particles: ParticleSystem::new(
                Rect::new(0.0, 0.0, size.width, size.height),
                MAX_PARTICLES,
                PARTICLE_SEED,
            ),
            screen: Screen::Main,
            previous: Screen::Main,
            tree,
            handles,
            transition,
            pulse,
            time: 0.0,
            status,
            job: None,
            exit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn previous_screen(&self) -> Screen {
        self.previous
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn tree(&self) -> &WidgetTree<ShellMessage> {
        &self.tree
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    pub fn job(&self) -> Option<&EnhancementJob> {
        self.job.as_ref()
    }

    /// 切换屏幕并同步重建控件树；动画中或目标相同时忽略
    pub fn switch_screen(&mut self, screen: Screen) -> bool {
        if screen == self.screen || self.transition.is_active() {
            return false;
        }

        debug!("switching screen {} -> {}", self.screen.title(), screen.title());
        self.previous = self.screen;
        self.screen = screen;
        let (tree, handles) = screens::build(screen, &self.config, &self.status, self.size);
        self.tree = tree;
        self.handles = handles;
        self.transition.start(0.0, 1.0);
        true
    }

    fn apply(&mut self, message: ShellMessage) {
        debug!("shell message {:?}", message);
        match message {
            ShellMessage::Open(screen) => {
                self.switch_screen(screen);
            }
            ShellMessage::StartEnhancement => self.start_enhancement(),
            ShellMessage::CycleLanguage => {
                self.config.language = self.config.language.cycle();
                self.refresh_setting(self.handles.language, screens::language_text(&self.config));
            }
            ShellMessage::CyclePriority => {
                self.config.priority = self.config.priority.cycle();
                self.refresh_setting(self.handles.priority, screens::priority_text(&self.config));
            }
            ShellMessage::ToggleDynamicResolution => {
                self.config.dynamic_resolution = !self.config.dynamic_resolution;
                self.refresh_setting(
                    self.handles.dynamic_resolution,
                    screens::dynamic_resolution_text(&self.config),
                );
            }
            ShellMessage::ToggleAutoStart => {
                self.config.auto_start = !self.config.auto_start;
                self.refresh_setting(self.handles.auto_start, screens::auto_start_text(&self.config));
            }
            ShellMessage::Exit => {
                info!("exit requested from menu");
                self.exit = true;
            }
        }
    }

    /// 更新设置按钮文字并保存配置
    fn refresh_setting(&mut self, id: Option<WidgetId>, text: String) {
        if let Some(button) = id.and_then(|id| self.tree.get_mut::<ShellButton>(id)) {
            button.set_label(&text);
        }
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = self.config_path.as_deref() else { return };
        if let Err(err) = self.config.save(path) {
            warn!("failed to save config: {}", err);
        }
    }

    fn start_enhancement(&mut self) {
        if self.job.is_some() {
            return;
        }
        if self.switch_screen(Screen::Loading) {
            info!("enhancement started");
            self.job = Some(EnhancementJob::new(&self.config));
            self.sync_job_widgets(false);
        }
    }

    fn sync_job_widgets(&mut self, animate: bool) {
        let Some(job) = self.job.as_ref() else { return };
        let progress = job.progress();
        let stage = job.stage();

        if let Some(bar) = self.handles.progress.and_then(|id| self.tree.get_mut::<ProgressBar>(id)) {
            bar.set_progress(progress, animate);
        }
        if let Some(label) = self.handles.status.and_then(|id| self.tree.get_mut::<Label>(id)) {
            if label.text() != stage {
                label.set_text(stage);
            }
        }
    }

    fn update_job(&mut self, dt: f32) {
        let Some(job) = self.job.as_mut() else { return };
        job.advance(dt);
        let finished = job.is_finished();
        self.sync_job_widgets(true);

        // 等滑入动画结束再离开加载页
        if finished && !self.transition.is_active() {
            self.job = None;
            self.config.first_run = false;
            self.config.extras_installed = true;
            self.persist();
            self.status = "ENHANCEMENT COMPLETE".to_string();
            info!("enhancement finished");
            self.switch_screen(Screen::Main);
        }
    }

    fn render_background(&self, canvas: &mut Canvas) {
        let full = Rect::new(0.0, 0.0, self.size.width, self.size.height);
        canvas.draw_gradient(&full, palette::BACKGROUND_DARK, palette::SURFACE, true);

        let glow = 0.5 + 0.5 * (self.pulse.value() * std::f32::consts::TAU).sin();
        effects::draw_pulse(
            canvas,
            self.size.width / 2.0,
            self.size.height / 2.0,
            240.0,
            self.pulse.value(),
            palette::PRIMARY.with_alpha((8.0 + 10.0 * glow) as u8),
        );
        self.particles.render(canvas);
    }

    fn render_status_indicators(&self, canvas: &mut Canvas) {
        effects::draw_fade_in(
            canvas,
            &Rect::new(60.0, 620.0, 320.0, 60.0),
            12.0,
            self.transition.value(),
            palette::SURFACE.with_alpha(180),
        );
        let indicators = [
            ("success", true),
            ("settings", self.config.dynamic_resolution),
            ("download", self.config.extras_installed),
        ];
        for (i, (icon, active)) in indicators.into_iter().enumerate() {
            let x = 100.0 + i as f32 * 100.0;
            let y = 650.0;
            if let Some(bitmap) = self.icons.get(icon) {
                canvas.draw_bitmap(bitmap, &Rect::new(x - 12.0, y - 12.0, 24.0, 24.0), 0.8);
            }
            let color = if active { palette::SUCCESS } else { palette::ERROR };
            canvas.draw_circle(x + 28.0, y, 12.0, palette::SURFACE);
            if active {
                effects::draw_glow(canvas, &Rect::new(x + 18.0, y - 10.0, 20.0, 20.0), 10.0, color, 0.3);
            }
            canvas.draw_circle(x + 28.0, y, 8.0, color);
        }
    }

    fn render_spinner(&self, canvas: &mut Canvas) {
        let angle = self.time * 2.0;
        let (cx, cy) = (self.size.width / 2.0, 540.0);
        for i in 0..8 {
            let a = angle + i as f32 * std::f32::consts::FRAC_PI_4;
            let alpha = ((angle + i as f32 * 0.5).sin() + 1.0) * 0.5;
            canvas.draw_circle(
                cx + a.cos() * 40.0,
                cy + a.sin() * 40.0,
                8.0,
                palette::PRIMARY.scale_alpha(alpha),
            );
        }
    }

    fn render_about_decor(&self, canvas: &mut Canvas) {
        for i in 0..3 {
            let t = self.time + i as f32;
            let x = 380.0 + i as f32 * 100.0 + t.sin() * 20.0;
            let y = 620.0 + (self.time * 0.8 + i as f32 * 0.7).cos() * 15.0;
            canvas.draw_circle(x, y, 5.0 + t.sin() * 2.0, palette::ACCENT);
        }
    }
}

impl Scene for Gui {
    fn update(&mut self, dt: f32) {
        self.time += dt;
        self.particles.update(dt);
        self.transition.update(dt);
        self.pulse.update(dt);
        self.pulse.restart_if_idle(0.0, 1.0);
        self.update_job(dt);
        self.tree.update(dt);
    }

    fn handle_input(&mut self, input: &InputState) {
        if input.is_pressed(Button::Plus) {
            info!("exit requested");
            self.exit = true;
            return;
        }
        if self.transition.is_active() || self.screen == Screen::Loading {
            return;
        }

        let screen = self.screen;
        for message in self.tree.dispatch(input) {
            self.apply(message);
        }
        if self.screen != screen {
            return;
        }

        match screen {
            Screen::Main => {
                if input.is_pressed(Button::X) {
                    self.switch_screen(Screen::Settings);
                } else if input.is_pressed(Button::Y) {
                    self.switch_screen(Screen::About);
                }
            }
            _ => {
                if input.is_pressed(Button::B) {
                    self.switch_screen(Screen::Main);
                }
            }
        }
    }

    fn render(&self, canvas: &mut Canvas) {
        self.render_background(canvas);

        // 新屏幕从右侧滑入
        let offset = (1.0 - self.transition.value()) * self.size.width;
        canvas.save();
        canvas.translate(offset, 0.0);
        self.tree.render(canvas, &self.icons);
        match self.screen {
            Screen::Main => self.render_status_indicators(canvas),
            Screen::Loading => self.render_spinner(canvas),
            Screen::About => self.render_about_decor(canvas),
            Screen::Settings | Screen::Enhancement => {}
        }
        canvas.restore();

        if self.transition.is_active() {
            let fade = 1.0 - self.transition.value();
            let full = Rect::new(0.0, 0.0, self.size.width, self.size.height);
            canvas.draw_rect(&full, Color::BLACK.scale_alpha(0.3 * fade));
        }
    }

    fn wants_exit(&self) -> bool {
        self.exit
    }
}

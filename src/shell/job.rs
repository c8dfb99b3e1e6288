//! 模拟的增强任务：按阶段推进进度，不做任何真实 I/O

use log::debug;

use super::games::{self, GameInfo};
use crate::config::ShellConfig;

const STAGE_SECONDS: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct EnhancementJob {
    stages: Vec<String>,
    games: Vec<GameInfo>,
    elapsed: f32,
}

impl EnhancementJob {
    pub fn new(config: &ShellConfig) -> Self {
        let games = games::scan_installed_games();
        debug!("scan found {} supported games", games.len());

        let mut stages = vec![format!("Scanning installed games... {} found", games.len())];
        if config.download_all_mods {
            stages.push("Downloading mods...".to_string());
        }
        stages.push("Applying graphics profiles...".to_string());
        stages.push("Finishing...".to_string());
        Self { stages, games, elapsed: 0.0 }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.total());
    }

    pub fn total(&self) -> f32 {
        self.stages.len() as f32 * STAGE_SECONDS
    }

    /// [0, 1]
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.total()).clamp(0.0, 1.0)
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stage(&self) -> &str {
        let index = ((self.elapsed / STAGE_SECONDS) as usize).min(self.stages.len() - 1);
        &self.stages[index]
    }

    /// 本次扫描到的游戏
    pub fn games(&self) -> &[GameInfo] {
        &self.games
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total()
    }
}

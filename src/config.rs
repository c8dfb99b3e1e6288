//! 配置
//!
//! `ShellConfig` 是壳程序的持久化设置（JSON），`RunnerConfig` 是两个可执行文件共用的命令行参数。

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
    Uk,
}

impl Language {
    /// RU → EN → UK → RU
    pub fn cycle(self) -> Self {
        match self {
            Language::Ru => Language::En,
            Language::En => Language::Uk,
            Language::Uk => Language::Ru,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::En => "EN",
            Language::Uk => "UK",
        }
    }
}

/// 增强优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Fps,
    Stability,
    Graphics,
}

impl Priority {
    /// FPS → Stability → Graphics → FPS
    pub fn cycle(self) -> Self {
        match self {
            Priority::Fps => Priority::Stability,
            Priority::Stability => Priority::Graphics,
            Priority::Graphics => Priority::Fps,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Fps => "FPS",
            Priority::Stability => "Stability",
            Priority::Graphics => "Graphics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    pub first_run: bool,
    pub language: Language,
    pub priority: Priority,
    pub dynamic_resolution: bool,
    pub download_all_mods: bool,
    pub auto_start: bool,
    pub extras_installed: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            first_run: true,
            language: Language::Ru,
            priority: Priority::Graphics,
            dynamic_resolution: true,
            download_all_mods: true,
            auto_start: false,
            extras_installed: false,
        }
    }
}

impl ShellConfig {
    /// 读取配置：文件不存在或无法解析时使用默认值
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                debug!("config {} not read ({}), using defaults", path.display(), err);
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                warn!("config {} is invalid ({}), using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// 严格读取，错误向上返回
    pub fn try_load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// 写入配置，必要时创建父目录
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        debug!("config saved to {}", path.display());
        Ok(())
    }
}

/// 命令行参数
#[derive(Parser, Debug, Clone)]
#[command(name = "neovia", version, about = "NEOVIA shell renderer")]
pub struct RunnerConfig {
    /// 设置文件路径
    #[arg(long, default_value = "neovia/config.json")]
    pub config: PathBuf,

    /// 窗口缩放倍数
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// 帧率上限
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// 截图输出路径
    #[arg(long, short, default_value = "neovia.png")]
    pub output: PathBuf,

    /// 截图前运行的帧数
    #[arg(long, default_value_t = 90)]
    pub frames: u64,

    /// 详细日志
    #[arg(long, short)]
    pub verbose: bool,

    /// 日志文件
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl RunnerConfig {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// 每帧目标时长（秒）
    pub fn frame_time(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}

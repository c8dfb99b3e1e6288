//! 配置与日志单元测试

use clap::Parser;

use crate::config::{Language, Priority, RunnerConfig, ShellConfig};
use crate::Error;

#[test]
fn test_defaults() {
    let config = ShellConfig::default();
    assert!(config.first_run);
    assert_eq!(config.language, Language::Ru);
    assert_eq!(config.priority, Priority::Graphics);
    assert!(config.dynamic_resolution);
    assert!(config.download_all_mods);
    assert!(!config.auto_start);
    assert!(!config.extras_installed);
}

#[test]
fn test_setting_cycles() {
    assert_eq!(Language::Ru.cycle(), Language::En);
    assert_eq!(Language::En.cycle(), Language::Uk);
    assert_eq!(Language::Uk.cycle(), Language::Ru);

    assert_eq!(Priority::Fps.cycle(), Priority::Stability);
    assert_eq!(Priority::Stability.cycle(), Priority::Graphics);
    assert_eq!(Priority::Graphics.cycle(), Priority::Fps);
}

/// 文件不存在时使用默认值
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = ShellConfig::load(&dir.path().join("missing.json"));
    assert_eq!(config, ShellConfig::default());
}

/// 保存时创建父目录，读回内容一致
#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neovia").join("config.json");

    let config = ShellConfig {
        first_run: false,
        language: Language::Uk,
        priority: Priority::Fps,
        auto_start: true,
        ..ShellConfig::default()
    };
    config.save(&path).unwrap();

    assert!(path.exists());
    assert_eq!(ShellConfig::try_load(&path).unwrap(), config);
    assert_eq!(ShellConfig::load(&path), config);
}

/// 缺失的字段取默认值，键名是 camelCase
#[test]
fn test_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "language": "en", "autoStart": true, "firstRun": false }"#).unwrap();

    let config = ShellConfig::load(&path);
    assert_eq!(config.language, Language::En);
    assert!(config.auto_start);
    assert!(!config.first_run);
    assert_eq!(config.priority, Priority::Graphics);
    assert!(config.download_all_mods);
}

/// 无法解析的文件：宽松读取回落到默认值，严格读取返回错误
#[test]
fn test_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(ShellConfig::load(&path), ShellConfig::default());
    assert!(matches!(ShellConfig::try_load(&path), Err(Error::Config(_))));
}

#[test]
fn test_try_load_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ShellConfig::try_load(&dir.path().join("nothing.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_runner_defaults() {
    let runner = RunnerConfig::parse_from(["neovia"]);
    assert_eq!(runner.fps, 60);
    assert_eq!(runner.frames, 90);
    assert_eq!(runner.scale, 1.0);
    assert_eq!(runner.log_level(), log::LevelFilter::Info);
    assert!(runner.log_file.is_none());
}

#[test]
fn test_runner_arguments() {
    let runner = RunnerConfig::parse_from([
        "neovia", "--fps", "30", "-v", "-o", "shot.png", "--frames", "5", "--config", "cfg.json",
    ]);
    assert_eq!(runner.frame_time(), 1.0 / 30.0);
    assert_eq!(runner.log_level(), log::LevelFilter::Debug);
    assert_eq!(runner.output.to_str(), Some("shot.png"));
    assert_eq!(runner.frames, 5);
    assert_eq!(runner.config.to_str(), Some("cfg.json"));
}

/// fps 为 0 时按 1 处理
#[test]
fn test_runner_zero_fps() {
    let runner = RunnerConfig::parse_from(["neovia", "--fps", "0"]);
    assert_eq!(runner.frame_time(), 1.0);
}

/// 全局 logger 只能安装一次，这是唯一安装它的测试
#[test]
fn test_init_logger_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neovia.log");

    crate::logging::init_logger(log::LevelFilter::Debug, Some(&path)).unwrap();
    log::info!("logger installed");
    assert!(path.exists());
}

//! 日志初始化（二进制入口调用，库内部只使用 `log` 宏）

use std::path::Path;

/// 安装全局 logger：输出到 stderr，可选同时写入文件
pub fn init_logger(min_level: log::LevelFilter, log_file: Option<&Path>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            // 多线程下取本地时区不可靠，统一用 UTC
            let now = time::OffsetDateTime::now_utc();
            let stamp = now
                .format(&time::macros::format_description!(
                    "[[[year]-[month]-[day]][[[hour]:[minute]:[second].[subsecond digits:3]]"
                ))
                .unwrap_or_default();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                stamp,
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}

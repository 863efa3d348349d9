//! 文件日志
//!
//! 终端被 TUI 占用，日志只写入文件。初始化失败不影响应用运行。

use std::fs;
use std::io;
use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{debug, info};

use crate::config::Config;
use crate::store::{StoreChange, TodoStore};

const LOG_FILE_BASENAME: &str = "todo-hoist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// 启动文件日志，返回的 handle 需要保持存活直到退出
pub fn init_logging(level: &str, log_dir: &Path) -> io::Result<LoggerHandle> {
    fs::create_dir_all(log_dir)?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(io::Error::other)?;

    info!(
        "event=app_start version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );
    Ok(handle)
}

/// 按配置启动日志，失败时只提示一次，应用照常运行
pub fn start_logging(config: &Config) -> Option<LoggerHandle> {
    let dir = config.resolved_log_dir()?;
    match init_logging(&config.log_level, &dir) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("日志初始化失败: {err}");
            None
        }
    }
}

/// 订阅 store，把每次状态变化写入 debug 日志
pub fn log_store_changes(store: &mut TodoStore) {
    store.subscribe(|change| match change {
        StoreChange::ItemAdded(id) => debug!("event=item_added id={id}"),
        StoreChange::ItemRemoved(id) => debug!("event=item_removed id={id}"),
        StoreChange::ItemChanged(id) => debug!("event=item_changed id={id}"),
        StoreChange::EditSelected(Some(id)) => debug!("event=edit_selected id={id}"),
        StoreChange::EditSelected(None) => debug!("event=edit_selected id=none"),
        StoreChange::EditDone => debug!("event=edit_done"),
    });
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::*;
    use crate::models::{TodoIcon, TodoItem};

    #[test]
    fn test_invalid_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_logging("not a level!!", dir.path()).err().expect("expected error");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_uncreatable_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        assert!(init_logging("info", &blocker.join("logs")).is_err());
    }

    #[test]
    fn test_logging_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_level: "not a level!!".to_string(),
            log_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        assert!(start_logging(&config).is_none());
    }

    // 全局 logger 每个进程只能启动一次，只有这个测试真正启动它
    #[test]
    fn test_configured_level_reaches_logger() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_level: "debug".to_string(),
            log_dir: Some(dir.path().join("logs")),
            ..Config::default()
        };
        let handle = start_logging(&config);
        assert!(handle.is_some());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_store_logging_subscription_is_passive() {
        let mut store = TodoStore::new();
        log_store_changes(&mut store);

        let item = TodoItem::new("a", TodoIcon::Default);
        store.add_item(item.clone());
        store.remove_item(&item);
        assert!(store.items().is_empty());
        assert_eq!(store.version(), 2);
    }
}

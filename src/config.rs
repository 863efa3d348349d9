//! 配置文件 (~/.config/todo-hoist/config.toml)

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::TodoIcon;

const APP_DIR: &str = "todo-hoist";
const CONFIG_ENV: &str = "TODO_HOIST_CONFIG";
const MAX_BUTTON_LABEL_CHARS: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Read { .. } => io::Error::other(err),
            ConfigError::Parse { .. } => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

/// 应用配置，所有字段都可省略
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub random_tint: bool,
    pub add_button_label: String,
    pub default_icon: TodoIcon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            random_tint: true,
            add_button_label: "Add".to_string(),
            default_icon: TodoIcon::Default,
        }
    }
}

impl Config {
    /// 从文件加载配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.add_button_label = config
            .add_button_label
            .chars()
            .take(MAX_BUTTON_LABEL_CHARS)
            .collect();
        Ok(config)
    }

    /// 日志目录，未配置时为 ~/.local/share/todo-hoist/logs
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("logs")))
    }
}

/// 配置文件路径，可用 TODO_HOIST_CONFIG 覆盖
pub fn config_path() -> Option<PathBuf> {
    config_path_from(env::var_os(CONFIG_ENV))
}

fn config_path_from(override_path: Option<OsString>) -> Option<PathBuf> {
    override_path
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml")))
}

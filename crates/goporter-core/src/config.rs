//! 应用配置和持久化
//!
//! 记住上次使用的源/目标目录和代理格式，传输开始时保存。
//! 字段名与早期版本的配置文件保持兼容
//! (SourcePath / DestinationPath / SelectedProxyFormat)。

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::media::ProxyFormat;

/// 应用设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// 源目录（存储卡挂载点）
    #[serde(rename = "SourcePath", default)]
    pub source_path: PathBuf,
    /// 目标目录
    #[serde(rename = "DestinationPath", default)]
    pub destination_path: PathBuf,
    /// 代理格式 (0=None, 1=DaVinci, 2=Adobe)
    #[serde(rename = "SelectedProxyFormat", default)]
    pub proxy_format: ProxyFormat,
}

impl AppSettings {
    /// 获取配置文件路径
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("goporter");
        config_dir.join("settings.toml")
    }

    /// 加载设置（如果文件不存在则使用默认值）
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(settings) => {
                        debug!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse settings: {}, using defaults", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read settings file: {}, using defaults", e);
                }
            }
        }
        Self::default()
    }

    /// 保存设置
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }
}

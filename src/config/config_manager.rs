// ==========================================
// 学生实习数据汇总 - 配置管理器
// ==========================================
// 职责: 配置加载 (默认值 → JSON 文件 → 环境变量覆写) 与校验
// ==========================================

use crate::config::consolidator_config::ConsolidatorConfig;
use crate::config::error::ConfigError;
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    /// 最大并发文件数
    pub const ENV_MAX_CONCURRENCY: &str = "INTERNSHIP_CONSOLIDATOR_MAX_CONCURRENCY";
    /// 单文件处理时限 (毫秒)
    pub const ENV_FILE_TIMEOUT_MS: &str = "INTERNSHIP_CONSOLIDATOR_FILE_TIMEOUT_MS";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: ConsolidatorConfig,
}

impl ConfigManager {
    /// 使用全部默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载 (缺省字段取默认值)
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "加载配置文件");
        Self::from_json_str(&raw)
    }

    /// 从 JSON 文本加载
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: ConsolidatorConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(Self { config })
    }

    /// 应用进程环境变量覆写
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// 应用覆写
    ///
    /// # 参数
    /// - lookup: 按键读取覆写值, 返回 None 表示不覆写
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(config_keys::ENV_MAX_CONCURRENCY) {
            let value = parse_number(config_keys::ENV_MAX_CONCURRENCY, &raw)?;
            debug!(max_concurrency = value, "覆写并发度");
            self.config.batch.max_concurrency = Some(value as usize);
        }
        if let Some(raw) = lookup(config_keys::ENV_FILE_TIMEOUT_MS) {
            let value = parse_number(config_keys::ENV_FILE_TIMEOUT_MS, &raw)?;
            debug!(file_timeout_ms = value, "覆写单文件时限");
            self.config.batch.file_timeout_ms = Some(value);
        }
        self.config.validate()?;
        Ok(self)
    }

    pub fn config(&self) -> &ConsolidatorConfig {
        &self.config
    }

    pub fn into_config(self) -> ConsolidatorConfig {
        self.config
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{:?} is not a non-negative integer: {}", raw, e),
        })
}

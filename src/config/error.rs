// ==========================================
// 学生实习数据汇总 - 配置错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("invalid config value (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

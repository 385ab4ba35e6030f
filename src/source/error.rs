// ==========================================
// 学生实习数据汇总 - 源文件收集错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read zip archive: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    #[error("invalid directory pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("failed to scan directory: {0}")]
    GlobError(#[from] glob::GlobError),
}

/// Result 类型别名
pub type SourceResult<T> = Result<T, SourceError>;

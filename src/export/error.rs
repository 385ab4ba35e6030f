// ==========================================
// 学生实习数据汇总 - 导出错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no data to export: the consolidated table is empty")]
    EmptyTable,

    #[error("table too large for a worksheet: {0}")]
    TooLarge(String),

    #[error("failed to write xlsx: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to write csv: {0}")]
    CsvError(#[from] csv::Error),

    #[error("failed to write file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

// ==========================================
// 学生实习数据汇总 - 提取错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 单文件失败的分类原因, 在批次层被捕获, 不会中断其他文件
// ==========================================

use serde::Serialize;
use thiserror::Error;

/// 单文件提取失败原因
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractionError {
    // ===== 文件相关错误 =====
    /// 文件无法解析为电子表格 (损坏/格式不支持/不可读)
    #[error("could not open file as a spreadsheet: {detail}")]
    OpenFailure { detail: String },

    // ===== 提取错误 =====
    /// 学号所在工作表缺失, 或学号单元格为空
    #[error("could not extract student ID from '{sheet}' sheet, cell {cell}")]
    IdentifierNotFound { sheet: String, cell: String },

    /// 任何工作表中都没有找到带数据的表头
    #[error("could not locate category table")]
    CategoryTableNotFound,

    // ===== 并发执行错误 =====
    #[error("processing timed out after {millis} ms")]
    Timeout { millis: u64 },

    #[error("worker failed: {detail}")]
    WorkerFailed { detail: String },
}

impl ExtractionError {
    /// 失败类别代码 (用于报告与国际化键)
    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::OpenFailure { .. } => "OPEN_FAILURE",
            ExtractionError::IdentifierNotFound { .. } => "IDENTIFIER_NOT_FOUND",
            ExtractionError::CategoryTableNotFound => "CATEGORY_TABLE_NOT_FOUND",
            ExtractionError::Timeout { .. } => "TIMEOUT",
            ExtractionError::WorkerFailed { .. } => "WORKER_FAILED",
        }
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ExtractionError {
    fn from(err: calamine::Error) -> Self {
        ExtractionError::OpenFailure {
            detail: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ExtractionResult<T> = Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_reason() {
        let err = ExtractionError::IdentifierNotFound {
            sheet: "Current Semester Advising".to_string(),
            cell: "C5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not extract student ID from 'Current Semester Advising' sheet, cell C5"
        );
        assert_eq!(
            ExtractionError::CategoryTableNotFound.to_string(),
            "could not locate category table"
        );
    }

    #[test]
    fn test_serialized_kind_tag() {
        let json = serde_json::to_value(ExtractionError::Timeout { millis: 500 }).unwrap();
        assert_eq!(json["kind"], "TIMEOUT");
        assert_eq!(json["millis"], 500);
    }
}

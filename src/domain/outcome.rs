// ==========================================
// 学生实习数据汇总 - 批次处理结果
// ==========================================
// 职责: 成功文件列表 / 失败文件列表 (含原因) / 汇总宽表
// 不变量: 每个输入文件恰好出现在 processed 或 failed 之一
// ==========================================

use crate::domain::table::ConsolidatedTable;
use crate::importer::error::ExtractionError;
use serde::Serialize;
use std::fmt;

// ==========================================
// 批次状态 (Batch Status)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    EmptyInput,   // 输入为空
    EmptyBatch,   // 有输入, 但没有任何文件提取成功
    Consolidated, // 至少一个文件提取成功
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchStatus::EmptyInput => write!(f, "EMPTY_INPUT"),
            BatchStatus::EmptyBatch => write!(f, "EMPTY_BATCH"),
            BatchStatus::Consolidated => write!(f, "CONSOLIDATED"),
        }
    }
}

// ==========================================
// FileFailure - 单文件失败记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    pub file_name: String,
    pub reason: ExtractionError,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_name, self.reason)
    }
}

// ==========================================
// ProcessingOutcome - 批次处理结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingOutcome {
    pub processed: Vec<String>,
    pub failed: Vec<FileFailure>,
    pub table: ConsolidatedTable,
}

impl ProcessingOutcome {
    /// 输入文件总数
    pub fn total_files(&self) -> usize {
        self.processed.len() + self.failed.len()
    }

    pub fn status(&self) -> BatchStatus {
        if self.total_files() == 0 {
            BatchStatus::EmptyInput
        } else if self.processed.is_empty() {
            BatchStatus::EmptyBatch
        } else {
            BatchStatus::Consolidated
        }
    }

    /// 是否有可导出的数据
    pub fn has_data(&self) -> bool {
        !self.table.is_empty()
    }
}

// ==========================================
// 学生实习数据汇总 - 处理结果摘要
// ==========================================
// 职责: 将 ProcessingOutcome 整理为可展示 / 可序列化的摘要
// 指标: 成功文件数 / 失败文件数 / 学生总数 / 实习代码数
// ==========================================

use crate::domain::{BatchStatus, FileFailure, ProcessingOutcome};
use crate::i18n::t_in;
use crate::importer::ExtractionError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// 失败文件条目
#[derive(Debug, Clone, Serialize)]
pub struct FailureEntry {
    pub file_name: String,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsolidationSummary {
    pub batch_id: String,
    pub generated_at: DateTime<Utc>,
    pub status: BatchStatus,
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_students: usize,
    pub category_codes_found: usize,
    pub processed: Vec<String>,
    pub failures: Vec<FailureEntry>,
}

impl ConsolidationSummary {
    pub fn from_outcome(outcome: &ProcessingOutcome) -> Self {
        Self {
            batch_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            status: outcome.status(),
            files_processed: outcome.processed.len(),
            files_failed: outcome.failed.len(),
            total_students: outcome.table.len(),
            category_codes_found: outcome.table.category_codes().len(),
            processed: outcome.processed.clone(),
            failures: outcome.failed.iter().map(failure_entry).collect(),
        }
    }

    /// 失败原因改为指定语言
    pub fn localize_failures(mut self, locale: &str, outcome: &ProcessingOutcome) -> Self {
        for (entry, failure) in self.failures.iter_mut().zip(&outcome.failed) {
            entry.message = localized_reason(locale, &failure.reason);
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 按指定语言渲染为文本行
    pub fn render_lines(&self, locale: &str) -> Vec<String> {
        let count = |key: &str, n: usize| t_in(locale, key, &[("count", n.to_string().as_str())]);

        let mut lines = vec![
            t_in(locale, "summary.title", &[]),
            t_in(locale, "summary.batch_id", &[("batch_id", self.batch_id.as_str())]),
            count("summary.files_processed", self.files_processed),
            count("summary.files_failed", self.files_failed),
            count("summary.total_students", self.total_students),
            count("summary.codes_found", self.category_codes_found),
        ];

        if !self.failures.is_empty() {
            lines.push(t_in(locale, "summary.failed_header", &[]));
            for failure in &self.failures {
                lines.push(format!("  - {}: {}", failure.file_name, failure.message));
            }
        }

        if !self.processed.is_empty() {
            lines.push(t_in(locale, "summary.processed_header", &[]));
            for name in &self.processed {
                lines.push(format!("  - {}", name));
            }
        }

        match self.status {
            BatchStatus::EmptyInput => lines.push(t_in(locale, "summary.empty_input", &[])),
            BatchStatus::EmptyBatch => lines.push(t_in(locale, "summary.empty_batch", &[])),
            BatchStatus::Consolidated => {}
        }

        lines
    }
}

fn failure_entry(failure: &FileFailure) -> FailureEntry {
    FailureEntry {
        file_name: failure.file_name.clone(),
        kind: failure.reason.code(),
        message: failure.reason.to_string(),
    }
}

/// 按指定语言描述失败原因
pub fn localized_reason(locale: &str, reason: &ExtractionError) -> String {
    let key = format!("failure.{}", reason.code());
    match reason {
        ExtractionError::OpenFailure { detail } | ExtractionError::WorkerFailed { detail } => {
            t_in(locale, &key, &[("detail", detail.as_str())])
        }
        ExtractionError::IdentifierNotFound { sheet, cell } => {
            t_in(locale, &key, &[("sheet", sheet.as_str()), ("cell", cell.as_str())])
        }
        ExtractionError::CategoryTableNotFound => t_in(locale, &key, &[]),
        ExtractionError::Timeout { millis } => {
            t_in(locale, &key, &[("millis", millis.to_string().as_str())])
        }
    }
}

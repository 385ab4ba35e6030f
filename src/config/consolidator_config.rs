// ==========================================
// 学生实习数据汇总 - 配置项定义
// ==========================================
// 职责: 提取规则 / 批处理 / 导出 三组配置及默认值
// 红线: 只做结构与校验, 不做读取
// ==========================================

use crate::config::error::ConfigError;
use crate::document::CellRef;
use crate::domain::STUDENT_ID_COLUMN;
use serde::{Deserialize, Serialize};

// ==========================================
// ExtractionConfig - 提取规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// 学号所在工作表 (精确匹配, 区分大小写)
    pub identifier_sheet: String,
    /// 学号单元格 (A1 坐标)
    pub identifier_cell: String,
    /// 实习代码列表头 (比较时 trim + 忽略大小写)
    pub code_header: String,
    /// 完成学时列表头 (比较时 trim + 忽略大小写)
    pub count_header: String,
    /// 实习代码列号 (从零开始)
    pub code_column: usize,
    /// 完成学时列号 (从零开始)
    pub count_column: usize,
    /// 表头行与数据行的最小列数
    pub min_row_width: usize,
    /// 汇总表学号列名
    pub id_column_name: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            identifier_sheet: "Current Semester Advising".to_string(),
            identifier_cell: "C5".to_string(),
            code_header: "Internship Code".to_string(),
            count_header: "Completed".to_string(),
            code_column: 0,
            count_column: 2,
            min_row_width: 4,
            id_column_name: STUDENT_ID_COLUMN.to_string(),
        }
    }
}

impl ExtractionConfig {
    /// 解析学号单元格坐标
    pub fn identifier_cell_ref(&self) -> Result<CellRef, ConfigError> {
        CellRef::parse(&self.identifier_cell).map_err(|e| ConfigError::InvalidValue {
            key: "extraction.identifier_cell".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identifier_sheet.is_empty() {
            return Err(invalid("extraction.identifier_sheet", "must not be empty"));
        }
        self.identifier_cell_ref()?;
        if self.code_header.trim().is_empty() {
            return Err(invalid("extraction.code_header", "must not be blank"));
        }
        if self.count_header.trim().is_empty() {
            return Err(invalid("extraction.count_header", "must not be blank"));
        }
        if self.code_column == self.count_column {
            return Err(invalid(
                "extraction.count_column",
                "must differ from extraction.code_column",
            ));
        }
        if self.min_row_width <= self.code_column.max(self.count_column) {
            return Err(invalid(
                "extraction.min_row_width",
                "must cover both the code and count columns",
            ));
        }
        if self.id_column_name.trim().is_empty() {
            return Err(invalid("extraction.id_column_name", "must not be blank"));
        }
        Ok(())
    }
}

// ==========================================
// BatchConfig - 批处理
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// 并发处理的最大文件数 (None = CPU 核数)
    pub max_concurrency: Option<usize>,
    /// 单文件处理时限 (毫秒, None = 不限)
    pub file_timeout_ms: Option<u64>,
    /// 收集源文件时识别的电子表格扩展名 (不区分大小写)
    pub spreadsheet_extensions: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: None,
            file_timeout_ms: None,
            spreadsheet_extensions: vec!["xlsx".to_string(), "xls".to_string()],
        }
    }
}

impl BatchConfig {
    /// 实际并发度, 至少为 1
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == Some(0) {
            return Err(invalid("batch.max_concurrency", "must be at least 1"));
        }
        if self.file_timeout_ms == Some(0) {
            return Err(invalid("batch.file_timeout_ms", "must be at least 1"));
        }
        if self.spreadsheet_extensions.is_empty() {
            return Err(invalid("batch.spreadsheet_extensions", "must not be empty"));
        }
        Ok(())
    }
}

// ==========================================
// ExportConfig - 导出
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub sheet_name: String,
    pub file_stem: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Consolidated_Report".to_string(),
            file_stem: "consolidated_internship_report".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Excel 工作表名上限 31 个字符
        if self.sheet_name.is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(invalid("export.sheet_name", "must be 1 to 31 characters"));
        }
        if self.file_stem.trim().is_empty() {
            return Err(invalid("export.file_stem", "must not be blank"));
        }
        Ok(())
    }
}

// ==========================================
// ConsolidatorConfig - 全部配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidatorConfig {
    pub extraction: ExtractionConfig,
    pub batch: BatchConfig,
    pub export: ExportConfig,
}

impl ConsolidatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.validate()?;
        self.batch.validate()?;
        self.export.validate()
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

// ==========================================
// 学生实习数据汇总 - 学号定位器
// ==========================================
// 规则:
// - 工作表名精确匹配 (默认 "Current Semester Advising")
// - 读取固定单元格 (默认 C5), 转文本后 trim
// - 工作表缺失 / 单元格为空 / trim 后为空 → None
// ==========================================

use crate::config::{ConfigError, ExtractionConfig};
use crate::document::{CellRef, Document};
use crate::domain::StudentId;
use crate::importer::extractor_trait::IdentifierLocator;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SheetCellLocator {
    sheet_name: String,
    cell: CellRef,
}

impl SheetCellLocator {
    pub fn new(sheet_name: impl Into<String>, cell: CellRef) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            cell,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.identifier_sheet.clone(),
            config.identifier_cell_ref()?,
        ))
    }
}

impl Default for SheetCellLocator {
    fn default() -> Self {
        Self::new("Current Semester Advising", CellRef::new(4, 2))
    }
}

impl IdentifierLocator for SheetCellLocator {
    fn locate(&self, document: &Document) -> Option<StudentId> {
        let Some(sheet) = document.sheet(&self.sheet_name) else {
            debug!(sheet = %self.sheet_name, "学号工作表不存在");
            return None;
        };

        let cell = sheet.cell_at(self.cell);
        if cell.is_empty() {
            debug!(sheet = %self.sheet_name, cell = %self.cell, "学号单元格为空");
            return None;
        }

        StudentId::parse(&cell.to_text())
    }

    fn describe_location(&self) -> (String, String) {
        (self.sheet_name.clone(), self.cell.to_string())
    }
}

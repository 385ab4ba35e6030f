// ==========================================
// 学生实习数据汇总 - 实习代码表扫描器
// ==========================================
// 职责: 按表头文本 (而非固定坐标) 搜索数据块并读取其下的连续行
// 流程:
// 1. 按文档顺序遍历工作表, 自上而下扫描行
// 2. 表头行: 列数 ≥ 最小宽度, 代码列 = "internship code", 学时列 = "completed"
//    (两格非空, trim + 忽略大小写比较)
// 3. 表头下方逐行读取, 直到遇到不满足 "列数足够且两格均非缺失值" 的行
//    - 缺失值: 空单元格 / 错误单元格 / "N/A" "NULL" 等标记文本
//    - 学时为其他无法解析的文本时跳过该行, 继续下一行
//    - 同一代码重复出现时后值覆盖
// 4. 读到至少一条记录即返回; 否则继续搜索后续行与后续工作表
// ==========================================

use crate::config::ExtractionConfig;
use crate::document::{CellValue, Document, Sheet};
use crate::domain::CategoryRecord;
use crate::importer::extractor_trait::CategoryTableScanner;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct HeaderPatternScanner {
    code_header: String,
    count_header: String,
    code_column: usize,
    count_column: usize,
    min_row_width: usize,
}

impl HeaderPatternScanner {
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            code_header: fold(&config.code_header),
            count_header: fold(&config.count_header),
            code_column: config.code_column,
            count_column: config.count_column,
            min_row_width: config.min_row_width,
        }
    }

    /// 行是否满足数据块形状: 列数足够且代码列/学时列均非缺失值
    fn is_conforming(&self, row: &[CellValue]) -> bool {
        let filled = |col: usize| row.get(col).is_some_and(|cell| !cell.is_missing());
        row.len() >= self.min_row_width && filled(self.code_column) && filled(self.count_column)
    }

    fn is_header_row(&self, row: &[CellValue]) -> bool {
        self.is_conforming(row)
            && fold(&row[self.code_column].to_text()) == self.code_header
            && fold(&row[self.count_column].to_text()) == self.count_header
    }

    /// 读取表头下方的数据块
    fn read_block(&self, sheet: &Sheet, first_row: usize) -> CategoryRecord {
        let mut record = CategoryRecord::new();

        for (offset, row) in sheet.rows().skip(first_row).enumerate() {
            if !self.is_conforming(row) {
                trace!(sheet = sheet.name(), row = first_row + offset, "数据块结束");
                break;
            }

            let code = row[self.code_column].to_text();
            let code = code.trim();
            let Some(count) = row[self.count_column].as_truncated_int() else {
                debug!(
                    sheet = sheet.name(),
                    row = first_row + offset,
                    value = %row[self.count_column],
                    "学时无法解析, 跳过该行"
                );
                continue;
            };
            if code.is_empty() {
                continue;
            }

            record.insert(code, count);
        }

        record
    }
}

impl Default for HeaderPatternScanner {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl CategoryTableScanner for HeaderPatternScanner {
    fn scan(&self, document: &Document) -> Option<CategoryRecord> {
        for sheet in document.sheets() {
            for (index, row) in sheet.rows().enumerate() {
                if !self.is_header_row(row) {
                    continue;
                }

                debug!(sheet = sheet.name(), row = index, "找到实习表头");
                let record = self.read_block(sheet, index + 1);
                if !record.is_empty() {
                    debug!(sheet = sheet.name(), entries = record.len(), "实习数据块读取完成");
                    return Some(record);
                }
            }
        }

        None
    }
}

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

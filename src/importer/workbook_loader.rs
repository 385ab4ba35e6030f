// ==========================================
// 学生实习数据汇总 - 工作簿加载器
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.xlsb) / OpenDocument (.ods), 按内容自动识别
// 职责: 字节 → Document; 网格以 A1 为原点, 保留已用区域之前的空行空列
// ==========================================

use crate::document::{CellValue, Document, Sheet};
use crate::importer::error::{ExtractionError, ExtractionResult};
use crate::importer::extractor_trait::DocumentLoader;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use tracing::{debug, warn};

pub struct CalamineLoader;

impl DocumentLoader for CalamineLoader {
    fn load(&self, bytes: &[u8]) -> ExtractionResult<Document> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ExtractionError::OpenFailure {
                detail: "workbook has no worksheets".to_string(),
            });
        }

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            match workbook.worksheet_range(&name) {
                Ok(range) => sheets.push(anchor_at_a1(&name, &range)),
                Err(e) => {
                    // 图表页等非数据工作表: 保留名称, 按空表处理
                    warn!(sheet = %name, error = %e, "工作表读取失败, 按空表处理");
                    sheets.push(Sheet::empty(name));
                }
            }
        }

        debug!(sheets = sheets.len(), "工作簿解析完成");
        Ok(Document::new(sheets))
    }
}

/// 将 calamine 的已用区域展开为从 A1 开始的网格
fn anchor_at_a1(name: &str, range: &Range<Data>) -> Sheet {
    let Some((start_row, start_col)) = range.start() else {
        return Sheet::empty(name);
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row];
    for data_row in range.rows() {
        let mut row = vec![CellValue::Empty; start_col];
        row.extend(data_row.iter().map(CellValue::from));
        rows.push(row);
    }

    Sheet::from_rows(name, rows)
}

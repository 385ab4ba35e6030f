// ==========================================
// 学生实习数据汇总 - Excel 导出
// ==========================================
// 格式: 单工作表; 第一行为列名 (加粗), 其后每个学生一行
// 学号写为文本, 学时写为数字
// ==========================================

use crate::domain::{ConsolidatedTable, TableValue};
use crate::export::error::{ExportError, ExportResult};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use std::path::Path;
use tracing::info;

/// 导出为 xlsx 字节
pub fn xlsx_bytes(table: &ConsolidatedTable, sheet_name: &str) -> ExportResult<Vec<u8>> {
    let mut workbook = build_workbook(table, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

/// 导出为 xlsx 文件
pub fn write_xlsx<P: AsRef<Path>>(
    table: &ConsolidatedTable,
    path: P,
    sheet_name: &str,
) -> ExportResult<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook(table, sheet_name)?;
    workbook.save(path)?;
    info!(path = %path.display(), rows = table.len(), "Excel 报表已写出");
    Ok(())
}

fn build_workbook(table: &ConsolidatedTable, sheet_name: &str) -> ExportResult<Workbook> {
    if table.is_empty() {
        return Err(ExportError::EmptyTable);
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, column) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(col)?, column, &header_format)?;
    }

    for row_index in 0..table.len() {
        let row = row_num(row_index + 1)?;
        for col in 0..table.columns().len() {
            match table.cell(row_index, col) {
                Some(TableValue::Text(text)) => {
                    worksheet.write_string(row, col_num(col)?, text)?;
                }
                Some(TableValue::Count(count)) => {
                    worksheet.write_number(row, col_num(col)?, count as f64)?;
                }
                None => {}
            }
        }
    }

    Ok(workbook)
}

fn col_num(index: usize) -> ExportResult<ColNum> {
    ColNum::try_from(index).map_err(|_| ExportError::TooLarge(format!("{} columns", index + 1)))
}

fn row_num(index: usize) -> ExportResult<RowNum> {
    RowNum::try_from(index).map_err(|_| ExportError::TooLarge(format!("{} rows", index + 1)))
}

// ==========================================
// 学生实习数据汇总 - CSV 导出
// ==========================================

use crate::domain::{ConsolidatedTable, TableValue};
use crate::export::error::{ExportError, ExportResult};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 写出 CSV (表头 + 每个学生一行)
pub fn write_csv<W: Write>(table: &ConsolidatedTable, writer: W) -> ExportResult<()> {
    if table.is_empty() {
        return Err(ExportError::EmptyTable);
    }

    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(table.columns())?;

    for row_index in 0..table.len() {
        let record: Vec<String> = (0..table.columns().len())
            .map(|col| match table.cell(row_index, col) {
                Some(TableValue::Text(text)) => text.to_string(),
                Some(TableValue::Count(count)) => count.to_string(),
                None => String::new(),
            })
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 写出 CSV 文件
pub fn write_csv_file<P: AsRef<Path>>(table: &ConsolidatedTable, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    write_csv(table, File::create(path)?)?;
    info!(path = %path.display(), rows = table.len(), "CSV 报表已写出");
    Ok(())
}

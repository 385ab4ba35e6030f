// ==========================================
// 学生实习数据汇总 - 汇总宽表
// ==========================================
// 职责: 以学生为行、实习代码为列的汇总结果
// 不变量:
// - 第一列恒为学号列
// - 每行对每一列都有值 (未上报的实习代码为 0)
// - 行顺序 = 文件成功处理顺序
// ==========================================

use crate::domain::types::StudentId;
use serde::Serialize;

/// 默认学号列名
pub const STUDENT_ID_COLUMN: &str = "Student_ID";

// ==========================================
// TableRow - 汇总表单行
// ==========================================
// counts 与表的实习代码列一一对齐
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    student_id: StudentId,
    counts: Vec<i64>,
}

impl TableRow {
    pub(crate) fn new(student_id: StudentId, counts: Vec<i64>) -> Self {
        Self { student_id, counts }
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    /// 与 `ConsolidatedTable::category_codes` 对齐的学时列表
    pub fn counts(&self) -> &[i64] {
        &self.counts
    }
}

/// 单元格取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableValue<'a> {
    Text(&'a str),
    Count(i64),
}

// ==========================================
// ConsolidatedTable - 汇总宽表
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsolidatedTable {
    columns: Vec<String>,
    rows: Vec<TableRow>,
}

impl ConsolidatedTable {
    /// 空表: 无列无行 (没有任何文件提取成功)
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<TableRow>) -> Self {
        Self { columns, rows }
    }

    /// 全部列名, 学号列在首位
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 学号列之后的实习代码列
    pub fn category_codes(&self) -> &[String] {
        self.columns.get(1..).unwrap_or(&[])
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按行号和列名取值
    ///
    /// # 返回
    /// - Some(TableValue::Text): 学号列
    /// - Some(TableValue::Count): 实习代码列
    /// - None: 行号越界或列不存在
    pub fn value(&self, row: usize, column: &str) -> Option<TableValue<'_>> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.cell(row, index)
    }

    /// 按行号和列号取值 (列号 0 为学号列)
    pub fn cell(&self, row: usize, column: usize) -> Option<TableValue<'_>> {
        let row = self.rows.get(row)?;
        if column == 0 {
            return (!self.columns.is_empty()).then(|| TableValue::Text(row.student_id.as_str()));
        }
        row.counts.get(column - 1).map(|count| TableValue::Count(*count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ConsolidatedTable {
        ConsolidatedTable::from_parts(
            vec![
                STUDENT_ID_COLUMN.to_string(),
                "SPTH290".to_string(),
                "SPTH291".to_string(),
            ],
            vec![
                TableRow::new(StudentId::parse("S1").unwrap(), vec![25, 0]),
                TableRow::new(StudentId::parse("S2").unwrap(), vec![0, 30]),
            ],
        )
    }

    #[test]
    fn test_value_lookup() {
        let table = sample_table();
        assert_eq!(table.value(0, STUDENT_ID_COLUMN), Some(TableValue::Text("S1")));
        assert_eq!(table.value(0, "SPTH290"), Some(TableValue::Count(25)));
        assert_eq!(table.value(1, "SPTH290"), Some(TableValue::Count(0)));
        assert_eq!(table.value(1, "UNKNOWN"), None);
        assert_eq!(table.value(2, "SPTH290"), None);
    }

    #[test]
    fn test_category_codes_skip_id_column() {
        let table = sample_table();
        assert_eq!(table.category_codes(), &["SPTH290", "SPTH291"]);
        assert!(ConsolidatedTable::empty().category_codes().is_empty());
    }
}

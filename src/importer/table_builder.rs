// ==========================================
// 学生实习数据汇总 - 宽表构建
// ==========================================
// 两遍算法:
// - 第一遍: 按记录追加顺序收集实习代码并集 (首次出现顺序)
// - 第二遍: 每条记录按并集逐列查值, 缺失补 0
// 红线: 每次从全部记录重新构建, 不做增量修改
// ==========================================

use crate::domain::{ConsolidatedTable, StudentRecord, TableRow};
use std::collections::HashSet;
use tracing::warn;

/// 由学生记录构建汇总宽表
///
/// # 参数
/// - records: 成功提取的学生记录 (按处理顺序)
/// - id_column: 学号列名
///
/// # 返回
/// - 无记录时返回空表 (无列无行)
pub fn build_table(records: &[StudentRecord], id_column: &str) -> ConsolidatedTable {
    if records.is_empty() {
        return ConsolidatedTable::empty();
    }

    // === 第一遍: 列并集 ===
    let mut seen: HashSet<&str> = HashSet::new();
    let mut codes: Vec<&str> = Vec::new();
    for record in records {
        for code in record.categories().codes() {
            if code == id_column {
                warn!(
                    file = record.source_name(),
                    code, "实习代码与学号列同名, 该列不参与汇总"
                );
                continue;
            }
            if seen.insert(code) {
                codes.push(code);
            }
        }
    }

    // === 第二遍: 逐行取值 ===
    let rows = records
        .iter()
        .map(|record| {
            let counts = codes
                .iter()
                .map(|code| record.categories().get(code).unwrap_or(0))
                .collect();
            TableRow::new(record.student_id().clone(), counts)
        })
        .collect();

    let mut columns = Vec::with_capacity(codes.len() + 1);
    columns.push(id_column.to_string());
    columns.extend(codes.iter().map(|code| code.to_string()));

    ConsolidatedTable::from_parts(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryRecord, StudentId, TableValue, STUDENT_ID_COLUMN};

    fn record(file: &str, id: &str, entries: &[(&str, i64)]) -> StudentRecord {
        StudentRecord::new(
            file,
            StudentId::parse(id).unwrap(),
            entries.iter().map(|(c, n)| (*c, *n)).collect::<CategoryRecord>(),
        )
    }

    #[test]
    fn test_union_in_first_seen_order_with_zero_fill() {
        let records = vec![
            record("a.xlsx", "S1", &[("SPTH290", 25)]),
            record("b.xlsx", "S2", &[("SPTH291", 30), ("SPTH290", 5)]),
        ];
        let table = build_table(&records, STUDENT_ID_COLUMN);

        assert_eq!(table.columns(), &["Student_ID", "SPTH290", "SPTH291"]);
        assert_eq!(table.rows()[0].counts(), &[25, 0]);
        assert_eq!(table.rows()[1].counts(), &[5, 30]);
        assert_eq!(table.value(1, "Student_ID"), Some(TableValue::Text("S2")));
    }

    #[test]
    fn test_empty_records_give_empty_table() {
        let table = build_table(&[], STUDENT_ID_COLUMN);
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_duplicate_students_are_kept() {
        let records = vec![
            record("a.xlsx", "S1", &[("SPTH290", 25)]),
            record("b.xlsx", "S1", &[("SPTH290", 40)]),
        ];
        let table = build_table(&records, STUDENT_ID_COLUMN);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "SPTH290"), Some(TableValue::Count(40)));
    }

    #[test]
    fn test_code_named_like_id_column_is_dropped() {
        let records = vec![record("a.xlsx", "S1", &[("Student_ID", 9), ("SPTH290", 1)])];
        let table = build_table(&records, STUDENT_ID_COLUMN);
        assert_eq!(table.columns(), &["Student_ID", "SPTH290"]);
        assert_eq!(table.value(0, "Student_ID"), Some(TableValue::Text("S1")));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let records = vec![
            record("a.xlsx", "S1", &[("B", 1), ("A", 2)]),
            record("b.xlsx", "S2", &[("C", 3)]),
        ];
        assert_eq!(
            build_table(&records, STUDENT_ID_COLUMN),
            build_table(&records, STUDENT_ID_COLUMN)
        );
    }
}

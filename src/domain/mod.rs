// ==========================================
// 学生实习数据汇总 - 领域模型层
// ==========================================
// 职责: 定义学号、实习代码记录、学生记录、汇总宽表、批次结果
// 红线: 不含文件读取逻辑, 不含提取逻辑
// ==========================================

pub mod outcome;
pub mod student;
pub mod table;
pub mod types;

// 重导出核心类型
pub use outcome::{BatchStatus, FileFailure, ProcessingOutcome};
pub use student::StudentRecord;
pub use table::{ConsolidatedTable, TableRow, TableValue, STUDENT_ID_COLUMN};
pub use types::{CategoryRecord, StudentId};

// ==========================================
// 学生实习数据汇总 - 导出层
// ==========================================
// 职责: 按已确定的行列顺序写出汇总宽表
// 支持: Excel (.xlsx) / CSV
// ==========================================

pub mod csv_writer;
pub mod error;
pub mod xlsx_writer;

pub use csv_writer::{write_csv, write_csv_file};
pub use error::{ExportError, ExportResult};
pub use xlsx_writer::{write_xlsx, xlsx_bytes};

// ==========================================
// 学生实习数据汇总 - 核心库
// ==========================================
// 输入: 每个学生一个 Excel 文件
// 输出: 以学号为行、实习代码为列的汇总宽表
// 技术栈: calamine + tokio + tracing
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与结果
pub mod domain;

// 文档层 - 电子表格内存视图
pub mod document;

// 提取层 - 学号 / 实习表 / 批次汇总
pub mod importer;

// 源文件层 - 压缩包与目录
pub mod source;

// 导出层 - Excel / CSV
pub mod export;

// 配置层
pub mod config;

// 处理结果摘要
pub mod report;

// 命令行参数
pub mod cli;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ConfigManager, ConsolidatorConfig};
pub use document::{CellRef, CellValue, Document, Sheet};
pub use domain::{
    BatchStatus, CategoryRecord, ConsolidatedTable, FileFailure, ProcessingOutcome, StudentId,
    StudentRecord, TableValue, STUDENT_ID_COLUMN,
};
pub use importer::{
    BatchConsolidator, CategoryTableScanner, Consolidator, DocumentLoader, ExtractionError,
    IdentifierLocator,
};
pub use report::ConsolidationSummary;
pub use source::SourceFile;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Student Internship Data Consolidator";

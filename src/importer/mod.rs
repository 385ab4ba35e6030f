// ==========================================
// 学生实习数据汇总 - 提取与汇总层
// ==========================================
// 职责: 打开电子表格, 提取学号与实习代码表, 合并为宽表
// 支持: Excel / OpenDocument (calamine)
// ==========================================

// 模块声明
pub mod batch_consolidator;
pub mod category_scanner;
pub mod error;
pub mod extractor_trait;
pub mod identifier_locator;
pub mod table_builder;
pub mod workbook_loader;

// 重导出核心类型
pub use batch_consolidator::BatchConsolidator;
pub use category_scanner::HeaderPatternScanner;
pub use error::{ExtractionError, ExtractionResult};
pub use identifier_locator::SheetCellLocator;
pub use table_builder::build_table;
pub use workbook_loader::CalamineLoader;

// 重导出 Trait 接口
pub use extractor_trait::{CategoryTableScanner, Consolidator, DocumentLoader, IdentifierLocator};

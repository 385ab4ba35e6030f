// ==========================================
// 学生实习数据汇总 - 提取与汇总 Trait
// ==========================================
// 职责: 定义文档加载 / 学号定位 / 实习表扫描 / 批次汇总接口 (不包含实现)
// ==========================================

use crate::document::Document;
use crate::domain::{CategoryRecord, ProcessingOutcome, StudentId};
use crate::importer::error::ExtractionResult;
use crate::source::SourceFile;
use async_trait::async_trait;

// ==========================================
// DocumentLoader Trait
// ==========================================
// 用途: 将单个文件的字节解析为 Document
// 实现者: CalamineLoader
pub trait DocumentLoader: Send + Sync {
    /// 打开电子表格
    ///
    /// # 返回
    /// - Ok(Document): 解析成功
    /// - Err(ExtractionError::OpenFailure): 文件损坏或格式不支持
    fn load(&self, bytes: &[u8]) -> ExtractionResult<Document>;
}

// ==========================================
// IdentifierLocator Trait
// ==========================================
// 用途: 在文档中定位学号
// 实现者: SheetCellLocator
pub trait IdentifierLocator: Send + Sync {
    /// 定位学号
    ///
    /// # 返回
    /// - Some(StudentId): 找到非空学号
    /// - None: 工作表缺失或单元格为空
    fn locate(&self, document: &Document) -> Option<StudentId>;

    /// 失败时用于报告的 (工作表, 单元格) 描述
    fn describe_location(&self) -> (String, String);
}

// ==========================================
// CategoryTableScanner Trait
// ==========================================
// 用途: 按表头模式搜索实习数据块
// 实现者: HeaderPatternScanner
pub trait CategoryTableScanner: Send + Sync {
    /// 扫描实习代码表
    ///
    /// # 返回
    /// - Some(CategoryRecord): 找到表头且其下至少一条有效数据
    /// - None: 所有工作表都没有可用的数据块
    fn scan(&self, document: &Document) -> Option<CategoryRecord>;
}

// ==========================================
// Consolidator Trait
// ==========================================
// 用途: 批次汇总主接口
// 实现者: BatchConsolidator
#[async_trait]
pub trait Consolidator: Send + Sync {
    /// 按输入顺序逐个处理文件
    fn consolidate(&self, files: Vec<SourceFile>) -> ProcessingOutcome;

    /// 并发处理文件
    ///
    /// # 说明
    /// - 结果按输入顺序重排, 与 `consolidate` 一致
    /// - 单个文件失败/超时不影响其他文件
    async fn consolidate_concurrent(&self, files: Vec<SourceFile>) -> ProcessingOutcome;
}

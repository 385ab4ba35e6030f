// ==========================================
// 学生实习数据汇总 - 批次汇总器
// ==========================================
// 职责: 逐文件 打开 → 定位学号 → 扫描实习表, 失败分类隔离, 最后构建宽表
// 流程: 加载 → 学号 → 实习表 → 记录 / 失败 → 两遍建表
// 红线: 单文件失败不得中断批次; 本组件不写任何文件
// ==========================================

use crate::config::{BatchConfig, ConfigError, ExtractionConfig};
use crate::domain::{FileFailure, ProcessingOutcome, StudentRecord};
use crate::importer::category_scanner::HeaderPatternScanner;
use crate::importer::error::{ExtractionError, ExtractionResult};
use crate::importer::extractor_trait::{
    CategoryTableScanner, Consolidator, DocumentLoader, IdentifierLocator,
};
use crate::importer::identifier_locator::SheetCellLocator;
use crate::importer::table_builder::build_table;
use crate::importer::workbook_loader::CalamineLoader;
use crate::source::SourceFile;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

// ==========================================
// BatchConsolidator - 批次汇总器
// ==========================================
#[derive(Clone)]
pub struct BatchConsolidator {
    // 提取组件
    loader: Arc<dyn DocumentLoader>,
    locator: Arc<dyn IdentifierLocator>,
    scanner: Arc<dyn CategoryTableScanner>,

    // 汇总表学号列名
    id_column: String,

    // 并发参数
    max_concurrency: usize,
    file_timeout: Option<Duration>,
}

impl BatchConsolidator {
    /// 创建新的 BatchConsolidator 实例
    ///
    /// # 参数
    /// - loader: 文档加载器
    /// - locator: 学号定位器
    /// - scanner: 实习表扫描器
    /// - id_column: 汇总表学号列名
    pub fn new(
        loader: Arc<dyn DocumentLoader>,
        locator: Arc<dyn IdentifierLocator>,
        scanner: Arc<dyn CategoryTableScanner>,
        id_column: impl Into<String>,
    ) -> Self {
        Self {
            loader,
            locator,
            scanner,
            id_column: id_column.into(),
            max_concurrency: 1,
            file_timeout: None,
        }
    }

    /// 按配置组装默认组件 (calamine 加载 + 固定单元格学号 + 表头模式扫描)
    pub fn from_config(
        extraction: &ExtractionConfig,
        batch: &BatchConfig,
    ) -> Result<Self, ConfigError> {
        extraction.validate()?;
        batch.validate()?;

        let consolidator = Self::new(
            Arc::new(CalamineLoader),
            Arc::new(SheetCellLocator::from_config(extraction)?),
            Arc::new(HeaderPatternScanner::from_config(extraction)),
            extraction.id_column_name.clone(),
        )
        .with_concurrency(batch.effective_concurrency());

        Ok(match batch.file_timeout_ms {
            Some(ms) => consolidator.with_file_timeout(Duration::from_millis(ms)),
            None => consolidator,
        })
    }

    pub fn with_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_file_timeout(mut self, timeout: Duration) -> Self {
        self.file_timeout = Some(timeout);
        self
    }

    /// 处理单个文件
    ///
    /// # 返回
    /// - Ok(StudentRecord): 学号与实习表均提取成功
    /// - Err(ExtractionError): 分类后的失败原因
    pub fn process_file(&self, file: &SourceFile) -> ExtractionResult<StudentRecord> {
        // === 步骤 1: 打开文档 ===
        let document = self.loader.load(&file.bytes)?;

        // === 步骤 2: 定位学号 ===
        let student_id = self.locator.locate(&document).ok_or_else(|| {
            let (sheet, cell) = self.locator.describe_location();
            ExtractionError::IdentifierNotFound { sheet, cell }
        })?;

        // === 步骤 3: 扫描实习表 ===
        let categories = self
            .scanner
            .scan(&document)
            .ok_or(ExtractionError::CategoryTableNotFound)?;

        debug!(
            file = %file.name,
            student_id = %student_id,
            categories = categories.len(),
            "文件提取成功"
        );
        Ok(StudentRecord::new(file.name.clone(), student_id, categories))
    }

    /// 并发模式下处理单个文件 (阻塞线程池 + 可选时限)
    async fn process_file_blocking(&self, file: SourceFile) -> ExtractionResult<StudentRecord> {
        let worker = self.clone();
        let name = file.name.clone();
        let handle = tokio::task::spawn_blocking(move || worker.process_file(&file));

        let joined = match self.file_timeout {
            Some(limit) => match tokio::time::timeout(limit, handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    return Err(ExtractionError::Timeout {
                        millis: limit.as_millis() as u64,
                    })
                }
            },
            None => handle.await,
        };

        joined.unwrap_or_else(|e| {
            warn!(file = %name, error = %e, "工作线程异常");
            Err(ExtractionError::WorkerFailed {
                detail: e.to_string(),
            })
        })
    }

    /// 汇总各文件结果 (按输入顺序)
    fn assemble<I>(&self, results: I) -> ProcessingOutcome
    where
        I: IntoIterator<Item = (String, ExtractionResult<StudentRecord>)>,
    {
        let mut processed = Vec::new();
        let mut failed = Vec::new();
        let mut records = Vec::new();

        for (file_name, result) in results {
            match result {
                Ok(record) => {
                    processed.push(file_name);
                    records.push(record);
                }
                Err(reason) => {
                    warn!(file = %file_name, reason = %reason, "文件处理失败");
                    failed.push(FileFailure { file_name, reason });
                }
            }
        }

        let table = build_table(&records, &self.id_column);
        info!(
            processed = processed.len(),
            failed = failed.len(),
            columns = table.columns().len(),
            "批次汇总完成"
        );

        ProcessingOutcome {
            processed,
            failed,
            table,
        }
    }
}

impl Default for BatchConsolidator {
    fn default() -> Self {
        Self::new(
            Arc::new(CalamineLoader),
            Arc::new(SheetCellLocator::default()),
            Arc::new(HeaderPatternScanner::default()),
            crate::domain::STUDENT_ID_COLUMN,
        )
    }
}

#[async_trait::async_trait]
impl Consolidator for BatchConsolidator {
    #[instrument(skip_all)]
    fn consolidate(&self, files: Vec<SourceFile>) -> ProcessingOutcome {
        info!(files = files.len(), "开始批次汇总");
        if let Some(limit) = self.file_timeout {
            warn!(
                file_timeout_ms = limit.as_millis() as u64,
                "顺序模式不限制单文件时长, 时限仅在并发模式生效"
            );
        }
        let results = files.into_iter().map(|file| {
            let result = self.process_file(&file);
            (file.name, result)
        });
        self.assemble(results.collect::<Vec<_>>())
    }

    #[instrument(skip_all)]
    async fn consolidate_concurrent(&self, files: Vec<SourceFile>) -> ProcessingOutcome {
        info!(
            files = files.len(),
            concurrency = self.max_concurrency,
            "开始并发批次汇总"
        );

        // buffered 保持输入顺序, 最多 max_concurrency 个文件同时处理
        let results: Vec<(String, ExtractionResult<StudentRecord>)> = stream::iter(files)
            .map(|file| async move {
                let name = file.name.clone();
                let result = self.process_file_blocking(file).await;
                (name, result)
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        self.assemble(results)
    }
}

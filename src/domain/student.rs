// ==========================================
// 学生实习数据汇总 - 学生记录实体
// ==========================================
// 职责: 单个文件成功提取后的结果 (学号 + 实习代码记录)
// 红线: 产生后不可变
// ==========================================

use crate::domain::types::{CategoryRecord, StudentId};
use serde::{Deserialize, Serialize};

// ==========================================
// StudentRecord - 学生记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    source_name: String,
    student_id: StudentId,
    categories: CategoryRecord,
}

impl StudentRecord {
    pub fn new(
        source_name: impl Into<String>,
        student_id: StudentId,
        categories: CategoryRecord,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            student_id,
            categories,
        }
    }

    /// 来源文件的显示名称 (仅用于报告)
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn categories(&self) -> &CategoryRecord {
        &self.categories
    }
}

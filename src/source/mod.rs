// ==========================================
// 学生实习数据汇总 - 源文件收集层
// ==========================================
// 职责: 从压缩包 / 目录 / 路径列表产出 (显示名称, 字节) 序列
// 红线: 按扩展名筛选只在本层进行, 提取层不看扩展名
// ==========================================

pub mod archive;
pub mod directory;
pub mod error;

pub use archive::collect_from_zip;
pub use directory::{collect_from_dir, collect_from_paths};
pub use error::{SourceError, SourceResult};

use std::path::Path;

// ==========================================
// SourceFile - 单个输入文件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// 显示名称 (只用于报告)
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// 文件名是否为待处理的电子表格
///
/// 跳过 Office 锁文件 (`~$` 开头) 和 macOS 元数据 (`._` 开头)
pub(crate) fn is_spreadsheet_name(file_name: &str, extensions: &[String]) -> bool {
    if file_name.starts_with("~$") || file_name.starts_with("._") {
        return false;
    }
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["xlsx".to_string(), "xls".to_string()]
    }

    #[test]
    fn test_is_spreadsheet_name() {
        assert!(is_spreadsheet_name("student1.xlsx", &exts()));
        assert!(is_spreadsheet_name("STUDENT2.XLS", &exts()));
        assert!(!is_spreadsheet_name("notes.txt", &exts()));
        assert!(!is_spreadsheet_name("xlsx", &exts()));
        assert!(!is_spreadsheet_name("~$student1.xlsx", &exts()));
        assert!(!is_spreadsheet_name("._student1.xlsx", &exts()));
    }
}

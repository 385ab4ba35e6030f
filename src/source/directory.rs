// ==========================================
// 学生实习数据汇总 - 目录与路径收集
// ==========================================

use crate::source::error::{SourceError, SourceResult};
use crate::source::{is_spreadsheet_name, SourceFile};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::info;

/// 递归收集目录下的电子表格 (按路径排序)
pub fn collect_from_dir<P: AsRef<Path>>(
    dir: P,
    extensions: &[String],
) -> SourceResult<Vec<SourceFile>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(SourceError::FileNotFound(dir.display().to_string()));
    }

    let pattern = dir.join("**").join("*");
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in glob(&pattern.to_string_lossy())? {
        let path = entry?;
        let is_match = path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| is_spreadsheet_name(name, extensions));
        if is_match {
            paths.push(path);
        }
    }
    paths.sort();

    info!(dir = %dir.display(), spreadsheets = paths.len(), "目录扫描完成");
    collect_from_paths(&paths)
}

/// 按给定顺序读取文件 (不做扩展名筛选)
pub fn collect_from_paths<P: AsRef<Path>>(paths: &[P]) -> SourceResult<Vec<SourceFile>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let bytes = std::fs::read(path).map_err(|source| SourceError::ReadError {
                path: path.display().to_string(),
                source,
            })?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            Ok(SourceFile::new(name, bytes))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["xlsx".to_string()]
    }

    #[test]
    fn test_collect_from_dir_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.xlsx"), b"b").unwrap();
        std::fs::write(dir.path().join("nested").join("c.xlsx"), b"c").unwrap();
        std::fs::write(dir.path().join("a.xlsx"), b"a").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"n").unwrap();

        let files = collect_from_dir(dir.path(), &exts()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx", "c.xlsx"]);
    }

    #[test]
    fn test_collect_from_missing_dir() {
        let result = collect_from_dir("non_existent_dir_for_test", &exts());
        assert!(matches!(result, Err(SourceError::FileNotFound(_))));
    }

    #[test]
    fn test_collect_from_paths_keeps_order() {
        let dir = TempDir::new().unwrap();
        let second = dir.path().join("second.bin");
        let first = dir.path().join("first.bin");
        std::fs::write(&second, b"2").unwrap();
        std::fs::write(&first, b"1").unwrap();

        let files = collect_from_paths(&[second, first]).unwrap();
        assert_eq!(files[0].name, "second.bin");
        assert_eq!(files[1].bytes, b"1");
    }

    #[test]
    fn test_collect_from_paths_missing_file() {
        let result = collect_from_paths(&["missing.xlsx"]);
        assert!(matches!(result, Err(SourceError::ReadError { .. })));
    }
}

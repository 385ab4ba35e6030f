// ==========================================
// 学生实习数据汇总 - 压缩包解包
// ==========================================
// 规则:
// - 内存中解包, 任意层级的文件条目都参与筛选, 目录条目跳过
// - 显示名称取条目的文件名部分
// - 保持压缩包内的条目顺序
// - 跳过 __MACOSX/ 元数据目录
// ==========================================

use crate::source::error::SourceResult;
use crate::source::{is_spreadsheet_name, SourceFile};
use std::io::{Cursor, Read};
use tracing::{debug, info};
use zip::ZipArchive;

/// 从 ZIP 字节中收集电子表格文件
///
/// # 参数
/// - bytes: 压缩包内容
/// - extensions: 识别的扩展名 (不区分大小写)
///
/// # 返回
/// - Ok(Vec<SourceFile>): 可能为空 (压缩包中没有电子表格)
/// - Err(SourceError::ArchiveError): 压缩包损坏
pub fn collect_from_zip(bytes: &[u8], extensions: &[String]) -> SourceResult<Vec<SourceFile>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut files = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        let entry_path = entry.name().replace('\\', "/");
        if entry_path.starts_with("__MACOSX/") || entry_path.contains("/__MACOSX/") {
            continue;
        }

        let file_name = entry_path.rsplit('/').next().unwrap_or(&entry_path).to_string();
        if !is_spreadsheet_name(&file_name, extensions) {
            debug!(entry = %entry_path, "跳过非电子表格条目");
            continue;
        }

        let mut content = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut content)
            .map_err(zip::result::ZipError::Io)?;
        files.push(SourceFile::new(file_name, content));
    }

    info!(entries = archive.len(), spreadsheets = files.len(), "压缩包解包完成");
    Ok(files)
}

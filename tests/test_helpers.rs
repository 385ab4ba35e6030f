// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供集成测试所需的 xlsx 工作簿构建、压缩包打包、临时目录写入
// ==========================================
#![allow(dead_code, unused_imports)]

#[path = "helpers/workbook_builder.rs"]
pub mod workbook_builder;

use internship_consolidator::SourceFile;
use std::error::Error;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub use workbook_builder::{student_workbook, WorkbookBuilder, ADVISING_SHEET};

/// 把 (文件名, 字节) 打包为 zip
pub fn zip_archive(entries: &[(&str, Vec<u8>)]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        writer.start_file(*name, SimpleFileOptions::default())?;
        writer.write_all(bytes)?;
    }
    Ok(writer.finish()?.into_inner())
}

/// 把 (相对路径, 字节) 写入目录
pub fn write_files(dir: &Path, entries: &[(&str, Vec<u8>)]) -> Result<(), Box<dyn Error>> {
    for (name, bytes) in entries {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
    }
    Ok(())
}

/// 构造内存中的源文件
pub fn source(name: &str, bytes: Vec<u8>) -> SourceFile {
    SourceFile::new(name, bytes)
}

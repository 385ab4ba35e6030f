// ==========================================
// 测试工作簿构建器
// ==========================================
// 使用 rust_xlsxwriter 生成真实的 xlsx 字节
// ==========================================

use rust_xlsxwriter::{Workbook, XlsxError};

pub const ADVISING_SHEET: &str = "Current Semester Advising";

enum Value {
    Text(String),
    Number(f64),
}

struct SheetSpec {
    name: String,
    cells: Vec<(u32, u16, Value)>,
}

/// 逐表逐格构建工作簿
#[derive(Default)]
pub struct WorkbookBuilder {
    sheets: Vec<SheetSpec>,
}

impl WorkbookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增工作表, 之后写入的单元格都落在该表
    pub fn sheet(mut self, name: &str) -> Self {
        self.sheets.push(SheetSpec {
            name: name.to_string(),
            cells: Vec::new(),
        });
        self
    }

    pub fn text(self, row: u32, col: u16, value: &str) -> Self {
        self.push(row, col, Value::Text(value.to_string()))
    }

    pub fn number(self, row: u32, col: u16, value: f64) -> Self {
        self.push(row, col, Value::Number(value))
    }

    /// 写入标准四列表头
    pub fn header_row(self, row: u32) -> Self {
        self.text(row, 0, "Internship Code")
            .text(row, 1, "Total Hours")
            .text(row, 2, "Completed")
            .text(row, 3, "Remaining")
    }

    /// 写入一行数据 (代码, 总学时, 已完成, 剩余)
    pub fn data_row(self, row: u32, code: &str, total: f64, completed: f64) -> Self {
        self.text(row, 0, code)
            .number(row, 1, total)
            .number(row, 2, completed)
            .number(row, 3, total - completed)
    }

    fn push(mut self, row: u32, col: u16, value: Value) -> Self {
        if self.sheets.is_empty() {
            self = self.sheet("Sheet1");
        }
        if let Some(sheet) = self.sheets.last_mut() {
            sheet.cells.push((row, col, value));
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.try_build().expect("failed to build test workbook")
    }

    fn try_build(self) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        for layout in self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&layout.name)?;
            for (row, col, value) in layout.cells {
                match value {
                    Value::Text(text) => worksheet.write_string(row, col, &text)?,
                    Value::Number(number) => worksheet.write_number(row, col, number)?,
                };
            }
        }
        workbook.save_to_buffer()
    }
}

/// 标准学生工作簿: 学号在 C5, 实习表在第二张表第 3 行起
pub fn student_workbook(student_id: &str, rows: &[(&str, f64)]) -> Vec<u8> {
    let mut builder = WorkbookBuilder::new()
        .sheet(ADVISING_SHEET)
        .text(0, 0, "Advising Record")
        .text(4, 1, "Student ID")
        .text(4, 2, student_id)
        .sheet("Internships")
        .text(0, 0, "Internship Progress")
        .header_row(2);

    for (offset, (code, completed)) in rows.iter().enumerate() {
        builder = builder.data_row(3 + offset as u32, code, 50.0, *completed);
    }
    builder.build()
}

// ==========================================
// 学生实习数据汇总 - 文档模型
// ==========================================
// 职责: 单个电子表格文件的内存视图 (只读)
// - 工作表按文档顺序排列
// - 每个工作表为从 A1 开始的二维网格, 各行补齐到相同宽度
// 生命周期: 打开文件时创建, 两步提取完成 (或失败) 后丢弃
// ==========================================

pub mod cell;
pub mod coordinate;

pub use cell::CellValue;
pub use coordinate::{CellRef, InvalidCellRef};

static EMPTY_CELL: CellValue = CellValue::Empty;

// ==========================================
// Sheet - 工作表网格
// ==========================================
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    name: String,
    width: usize,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// 由行数据构造工作表, 短行以空单元格补齐到最大宽度
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            name: name.into(),
            width,
            rows,
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::from_rows(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 网格宽度 (列数)
    pub fn width(&self) -> usize {
        self.width
    }

    /// 网格高度 (行数)
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// 按从零开始的坐标取值, 越界返回空单元格
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn cell_at(&self, reference: CellRef) -> &CellValue {
        self.cell(reference.row, reference.col)
    }
}

// ==========================================
// Document - 电子表格文档
// ==========================================
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// 工作表名称 (文档顺序)
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// 按名称精确查找工作表 (区分大小写)
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }
}

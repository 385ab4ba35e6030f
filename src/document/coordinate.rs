// ==========================================
// 学生实习数据汇总 - A1 坐标
// ==========================================
// 职责: "C5" 形式坐标与从零开始的 (行, 列) 互转
// ==========================================

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid cell reference: {0:?}")]
pub struct InvalidCellRef(pub String);

/// 单元格坐标 (从零开始)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 解析 A1 坐标 (不区分大小写, 允许 `$` 绝对引用标记)
    pub fn parse(reference: &str) -> Result<Self, InvalidCellRef> {
        let invalid = || InvalidCellRef(reference.to_string());
        let cleaned: String = reference.trim().chars().filter(|c| *c != '$').collect();

        let split = cleaned
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = cleaned.split_at(split);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut col: usize = 0;
        for c in letters.chars() {
            let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(invalid)?;
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(Self {
            row: row - 1,
            col: col - 1,
        })
    }

    /// 列号转列字母: 0 → "A", 26 → "AA"
    pub fn column_letters(col: usize) -> String {
        let mut n = col + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl FromStr for CellRef {
    type Err = InvalidCellRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellRef::parse(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::column_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a1() {
        assert_eq!(CellRef::parse("C5").unwrap(), CellRef::new(4, 2));
        assert_eq!(CellRef::parse("a1").unwrap(), CellRef::new(0, 0));
        assert_eq!(CellRef::parse("$AA$10").unwrap(), CellRef::new(9, 26));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(CellRef::parse("").is_err());
        assert!(CellRef::parse("C").is_err());
        assert!(CellRef::parse("5").is_err());
        assert!(CellRef::parse("C0").is_err());
        assert!(CellRef::parse("C5X").is_err());
        assert!(CellRef::parse("中5").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(CellRef::new(4, 2).to_string(), "C5");
        assert_eq!(CellRef::new(0, 27).to_string(), "AB1");
    }
}

// ==========================================
// 学生实习数据汇总 - 单元格值
// ==========================================
// 职责: 与具体解析库无关的单元格取值, 以及 calamine 数据的转换
// ==========================================

use calamine::Data;
use std::fmt;

/// 按缺失值处理的文本 (精确匹配, 不 trim)
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Error(String),
}

impl CellValue {
    /// 是否为空单元格 (未填写或空字符串)
    ///
    /// 只含空白的文本不算空, 由调用方 trim 后再判断
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 是否为缺失值: 空单元格 / 错误单元格 / 缺失值标记文本 ("N/A", "NULL" 等)
    ///
    /// 只含空白的文本不算缺失
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty | CellValue::Error(_) => true,
            CellValue::Text(s) => MISSING_MARKERS.contains(&s.as_str()),
            _ => false,
        }
    }

    /// 单元格的文本形式 (未 trim)
    ///
    /// 整数值的数字不带小数部分: 12345.0 → "12345"
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// 解析为数值
    ///
    /// # 规则
    /// - 数字单元格直接取值
    /// - 文本单元格 trim 后按十进制解析 ("25", "25.7", "1e2")
    /// - 布尔值按 1 / 0
    /// - NaN / 无穷大视为无法解析
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            CellValue::Empty | CellValue::Error(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// 解析为整数 (向零截断)
    ///
    /// 超出 i64 范围视为无法解析
    pub fn as_truncated_int(&self) -> Option<i64> {
        let truncated = self.as_number()?.trunc();
        if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return None;
        }
        Some(truncated as i64)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(n) => CellValue::Number(*n),
            Data::Int(n) => CellValue::Number(*n as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_markers() {
        assert!(CellValue::Empty.is_missing());
        assert!(CellValue::Error("#N/A".to_string()).is_missing());
        assert!(CellValue::from("N/A").is_missing());
        assert!(CellValue::from("null").is_missing());
        assert!(!CellValue::from("pending").is_missing());
        assert!(!CellValue::from("  ").is_missing());
        assert!(!CellValue::from(0.0).is_missing());
    }

    #[test]
    fn test_integral_number_renders_without_fraction() {
        assert_eq!(CellValue::Number(12345.0).to_text(), "12345");
        assert_eq!(CellValue::Number(25.5).to_text(), "25.5");
    }

    #[test]
    fn test_as_truncated_int() {
        assert_eq!(CellValue::Number(25.9).as_truncated_int(), Some(25));
        assert_eq!(CellValue::Number(-3.7).as_truncated_int(), Some(-3));
        assert_eq!(CellValue::from(" 30 ").as_truncated_int(), Some(30));
        assert_eq!(CellValue::from("12.75").as_truncated_int(), Some(12));
        assert_eq!(CellValue::from("N/A").as_truncated_int(), None);
        assert_eq!(CellValue::from("nan").as_truncated_int(), None);
        assert_eq!(CellValue::from("inf").as_truncated_int(), None);
        assert_eq!(CellValue::Empty.as_truncated_int(), None);
        assert_eq!(CellValue::Error("#DIV/0!".into()).as_truncated_int(), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::from("").is_empty());
        assert!(!CellValue::from("  ").is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_from_calamine_data() {
        assert_eq!(CellValue::from(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(
            CellValue::from(&Data::String("SPTH290".to_string())),
            CellValue::Text("SPTH290".to_string())
        );
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
    }
}

// ==========================================
// 学生实习数据汇总 - 领域类型定义
// ==========================================
// 职责: 学号 / 实习代码记录等值对象
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 学号 (Student Identifier)
// ==========================================
// 不变量: 已去除首尾空白, 非空
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// 从原始文本构造学号
    ///
    /// # 返回
    /// - Some(StudentId): 去除空白后非空
    /// - None: 空串或全空白
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ==========================================
// 实习代码记录 (Category Record)
// ==========================================
// 实习代码 → 已完成学时
// 键区分大小写且唯一; 保留首次插入顺序, 重复写入覆盖值但不改变位置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    entries: Vec<(String, i64)>,
}

impl CategoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一条实习代码记录, 已存在则覆盖
    pub fn insert(&mut self, code: impl Into<String>, count: i64) {
        let code = code.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == code) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((code, count)),
        }
    }

    pub fn get(&self, code: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, count)| *count)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序遍历实习代码
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for CategoryRecord {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut record = CategoryRecord::new();
        for (code, count) in iter {
            record.insert(code, count);
        }
        record
    }
}

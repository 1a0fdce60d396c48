//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::BookError;

/// 图书唯一标识（由服务端分配，创建后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for BookId {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| BookError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 类型选择器与编辑表单中可选的图书类型
pub const GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Thriller",
    "Romance",
    "Horror",
    "Dystopian",
    "Political Satire",
    "Biography",
    "History",
    "Poetry",
    "Young Adult",
];

/// 解析阅读进度百分比字符串
///
/// 仅接受 `^\d+%$` 形式，返回整数部分；空串或格式错误返回 0
pub fn progress_percentage(progress: &str) -> u32 {
    progress
        .strip_suffix('%')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// 规范化表单输入的阅读进度
///
/// 接受 `N` 或 `N%`（0 <= N <= 100），统一输出 `N%`；空输入视为 `0%`
pub fn normalize_progress(input: &str) -> Result<String, BookError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok("0%".to_string());
    }

    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BookError::InvalidProgress(input.to_string()));
    }

    match digits.parse::<u32>() {
        Ok(value) if value <= 100 => Ok(format!("{}%", value)),
        _ => Err(BookError::InvalidProgress(input.to_string())),
    }
}

/// 解析逗号分隔的章节编号列表（如 `1, 2, 3`）
pub fn parse_chapters(input: &str) -> Result<Vec<u32>, BookError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(BookError::InvalidChapters(input.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage("74%"), 74);
        assert_eq!(progress_percentage("0%"), 0);
        assert_eq!(progress_percentage("100%"), 100);
        assert_eq!(progress_percentage("007%"), 7);
    }

    #[test]
    fn test_progress_percentage_malformed() {
        assert_eq!(progress_percentage(""), 0);
        assert_eq!(progress_percentage("%"), 0);
        assert_eq!(progress_percentage("74"), 0);
        assert_eq!(progress_percentage("74 %"), 0);
        assert_eq!(progress_percentage("-5%"), 0);
        assert_eq!(progress_percentage("abc%"), 0);
        assert_eq!(progress_percentage("99999999999999999999%"), 0);
    }

    #[test]
    fn test_normalize_progress() {
        assert_eq!(normalize_progress("").unwrap(), "0%");
        assert_eq!(normalize_progress("42").unwrap(), "42%");
        assert_eq!(normalize_progress(" 42% ").unwrap(), "42%");
        assert_eq!(normalize_progress("100%").unwrap(), "100%");
        assert!(normalize_progress("101%").is_err());
        assert!(normalize_progress("half").is_err());
        assert!(normalize_progress("%").is_err());
    }

    #[test]
    fn test_parse_chapters() {
        assert_eq!(parse_chapters("1, 2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_chapters("").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_chapters("1,,2,").unwrap(), vec![1, 2]);
        assert!(parse_chapters("1, two").is_err());
        assert!(parse_chapters("0").is_err());
    }

    #[test]
    fn test_book_id_from_str() {
        assert_eq!("157".parse::<BookId>().unwrap(), BookId::new(157));
        assert!("abc".parse::<BookId>().is_err());
        assert!("".parse::<BookId>().is_err());
    }
}

//! SQL Flavor（方言）：控制标识符 Quote、占位符、行注释与建表列类型。

use std::fmt;
use std::str::FromStr;

/// 演示支持的方言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    SQLite,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown sql flavor `{0}` (expected `mysql` or `sqlite`)")]
pub struct UnknownFlavor(pub String);

impl Flavor {
    /// 为标识符加引号。
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::MySQL => format!("`{name}`"),
            Self::SQLite => format!("\"{name}\""),
        }
    }

    /// 绑定参数占位符；两种方言都用 `?`。
    pub fn placeholder(self) -> char {
        match self {
            Self::MySQL | Self::SQLite => '?',
        }
    }

    /// 该方言最短的行注释标记。SQLite 不认识 `#`。
    pub fn line_comment(self) -> &'static str {
        match self {
            Self::MySQL => "#",
            Self::SQLite => "--",
        }
    }

    /// 从连接 URL 推断方言。
    pub fn from_url(url: &str) -> Result<Self, UnknownFlavor> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "mysql" | "mariadb" => Ok(Self::MySQL),
            "sqlite" => Ok(Self::SQLite),
            _ => Err(UnknownFlavor(scheme.to_owned())),
        }
    }

    /// 自增主键列定义。
    pub fn auto_increment_pk(self) -> &'static str {
        match self {
            Self::MySQL => "INT AUTO_INCREMENT PRIMARY KEY",
            Self::SQLite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }

    /// 短文本列类型。MySQL 的 UNIQUE 不能建在无长度的 TEXT 上。
    pub fn text_type(self) -> &'static str {
        match self {
            Self::MySQL => "VARCHAR(255)",
            Self::SQLite => "TEXT",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::SQLite => "SQLite",
        };
        f.write_str(s)
    }
}

impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySQL),
            "sqlite" => Ok(Self::SQLite),
            _ => Err(UnknownFlavor(s.to_owned())),
        }
    }
}

//! SQL 参数值类型。

use std::borrow::Cow;
use std::fmt;

/// SQL 参数值。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    I64(i64),
    String(Cow<'static, str>),
}

impl fmt::Display for SqlValue {
    /// 仅用于日志，不是 SQL 字面量。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::I64(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::String(Cow::Owned(v.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::SqlValue;

    #[test]
    fn from_str_keeps_quotes_verbatim() {
        let v: SqlValue = "x' OR 1=1 -- ".into();
        assert_eq!(v, SqlValue::String("x' OR 1=1 -- ".into()));
    }

    #[test]
    fn display_for_logs() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::I64(7).to_string(), "7");
        assert_eq!(SqlValue::from("a'b").to_string(), "\"a'b\"");
    }
}

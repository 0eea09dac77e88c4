//! 两种查询形态：参数化查询与拼接查询。
//!
//! 两者刻意是不同的类型，各自有独立的构造方式与执行路径（见 `QueryRunner`）。
//! `ParameterizedQuery` 的文本只包含占位符；`ConcatenatedQuery` 的文本里原样拼进了
//! 调用方给的片段，不做任何转义。

use crate::flavor::Flavor;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 参数化查询：值与 SQL 文本分开交给驱动。
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedQuery {
    sql: String,
    args: Vec<SqlValue>,
}

impl ParameterizedQuery {
    pub(crate) fn new(sql: String, args: Vec<SqlValue>) -> Self {
        Self { sql, args }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }
}

/// 拼接查询：片段在提交前已经写进 SQL 文本。
///
/// 可以同时携带绑定参数（部分绑定的情形），但拼进去的片段不受其保护。
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatenatedQuery {
    sql: String,
    args: Vec<SqlValue>,
    fragments: Vec<String>,
}

impl ConcatenatedQuery {
    /// 从一段已经拼好的 SQL 文本构造。
    pub fn from_text(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
            fragments: Vec::new(),
        }
    }

    pub fn builder(flavor: Flavor) -> ConcatenationBuilder {
        ConcatenationBuilder::new(flavor)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// 被原样拼进文本的片段，按出现顺序。
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

/// 逐段拼出 `ConcatenatedQuery`。
///
/// `text` 写入可信的 SQL 文本，`splice` 原样写入不可信片段，`bind` 写入一个占位符并
/// 记录绑定值。
#[derive(Debug, Clone)]
pub struct ConcatenationBuilder {
    flavor: Flavor,
    buf: StringBuilder,
    args: Vec<SqlValue>,
    fragments: Vec<String>,
}

impl ConcatenationBuilder {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            buf: StringBuilder::new(),
            args: Vec::new(),
            fragments: Vec::new(),
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn text(&mut self, sql: &str) -> &mut Self {
        self.buf.write_str(sql);
        self
    }

    /// 写入带 flavor 引号的标识符。
    pub fn ident(&mut self, name: &str) -> &mut Self {
        self.buf.write_str(&self.flavor.quote(name));
        self
    }

    pub fn splice(&mut self, fragment: &str) -> &mut Self {
        self.buf.write_str(fragment);
        self.fragments.push(fragment.to_owned());
        self
    }

    pub fn bind(&mut self, value: impl Into<SqlValue>) -> &mut Self {
        self.buf.write_char(self.flavor.placeholder());
        self.args.push(value.into());
        self
    }

    pub fn build(self) -> ConcatenatedQuery {
        ConcatenatedQuery {
            sql: self.buf.into_string(),
            args: self.args,
            fragments: self.fragments,
        }
    }
}

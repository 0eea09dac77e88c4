//! SelectBuilder：构建 SELECT 语句；WHERE 中的值全部走绑定参数。

use crate::args::{Args, CompileError};
use crate::builder::{Builder, quote_ident};
use crate::flavor::Flavor;
use crate::query::ParameterizedQuery;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq)]
struct EqualExpr {
    field: String,
    placeholder: String,
}

#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    args: Args,

    tables: Vec<String>,
    select_cols: Vec<String>,
    where_exprs: Vec<EqualExpr>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flavor(&self) -> Flavor {
        self.args.flavor
    }

    fn var(&mut self, v: impl Into<SqlValue>) -> String {
        self.args.add(v)
    }

    pub fn select<I, S>(&mut self, cols: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_cols = cols.into_iter().map(Into::into).collect();
        self
    }

    pub fn from<I, S>(&mut self, tables: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// 追加 `field = ?` 条件，多个条件以 AND 连接。
    pub fn where_equal(&mut self, field: &str, value: impl Into<SqlValue>) -> &mut Self {
        let placeholder = self.var(value);
        self.where_exprs.push(EqualExpr {
            field: field.to_owned(),
            placeholder,
        });
        self
    }
}

impl Builder for SelectBuilder {
    fn build_with_flavor(&self, flavor: Flavor) -> Result<ParameterizedQuery, CompileError> {
        let mut buf = StringBuilder::new();

        if !self.select_cols.is_empty() {
            let cols: Vec<String> = self
                .select_cols
                .iter()
                .map(|c| quote_ident(flavor, c))
                .collect();
            buf.write_leading("SELECT");
            buf.write_str(" ");
            buf.write_strings(&cols, ", ");
        }

        if !self.tables.is_empty() {
            let tables: Vec<String> = self.tables.iter().map(|t| quote_ident(flavor, t)).collect();
            buf.write_leading("FROM");
            buf.write_str(" ");
            buf.write_strings(&tables, ", ");
        }

        if !self.where_exprs.is_empty() {
            let exprs: Vec<String> = self
                .where_exprs
                .iter()
                .map(|e| format!("{}={}", quote_ident(flavor, &e.field), e.placeholder))
                .collect();
            buf.write_leading("WHERE");
            buf.write_str(" ");
            buf.write_strings(&exprs, " AND ");
        }

        let (sql, args) = self.args.compile_with_flavor(&buf.into_string(), flavor)?;
        Ok(ParameterizedQuery::new(sql, args))
    }

    fn flavor(&self) -> Flavor {
        self.flavor()
    }
}

pub fn select<I, S>(cols: I) -> SelectBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut builder = SelectBuilder::new();
    builder.select(cols);
    builder
}

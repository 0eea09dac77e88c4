//! InsertBuilder：构建 INSERT 语句，值全部走绑定参数。

use crate::args::{Args, CompileError};
use crate::builder::{Builder, quote_ident};
use crate::flavor::Flavor;
use crate::query::ParameterizedQuery;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    table: Option<String>,
    cols: Vec<String>,
    values: Vec<Vec<String>>,

    args: Args,
}

impl InsertBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flavor(&self) -> Flavor {
        self.args.flavor
    }

    fn var(&mut self, v: impl Into<SqlValue>) -> String {
        self.args.add(v)
    }

    pub fn insert_into(&mut self, table: &str) -> &mut Self {
        self.table = Some(table.to_owned());
        self
    }

    pub fn cols<I, S>(&mut self, cols: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cols = cols.into_iter().map(Into::into).collect();
        self
    }

    /// 追加一行值；每个值都会变成一个绑定参数。
    pub fn values(&mut self, values: impl IntoIterator<Item = impl Into<SqlValue>>) -> &mut Self {
        let placeholders: Vec<String> = values.into_iter().map(|v| self.var(v)).collect();
        self.values.push(placeholders);
        self
    }
}

impl Builder for InsertBuilder {
    fn build_with_flavor(&self, flavor: Flavor) -> Result<ParameterizedQuery, CompileError> {
        let mut buf = StringBuilder::new();

        if let Some(t) = &self.table {
            buf.write_leading("INSERT INTO");
            buf.write_str(" ");
            buf.write_str(&quote_ident(flavor, t));
        }

        if !self.cols.is_empty() {
            let cols: Vec<String> = self.cols.iter().map(|c| quote_ident(flavor, c)).collect();
            buf.write_str(" (");
            buf.write_strings(&cols, ", ");
            buf.write_str(")");
        }

        if !self.values.is_empty() {
            buf.write_leading("VALUES");
            buf.write_str(" ");
            let rows: Vec<String> = self
                .values
                .iter()
                .map(|r| format!("({})", r.join(", ")))
                .collect();
            buf.write_str(&rows.join(", "));
        }

        let (sql, args) = self.args.compile_with_flavor(&buf.into_string(), flavor)?;
        Ok(ParameterizedQuery::new(sql, args))
    }

    fn flavor(&self) -> Flavor {
        self.flavor()
    }
}

pub fn insert_into(table: &str) -> InsertBuilder {
    let mut builder = InsertBuilder::new();
    builder.insert_into(table);
    builder
}

//! CreateTableBuilder：构建 CREATE TABLE。

use crate::args::{Args, CompileError};
use crate::builder::{Builder, escape, quote_ident};
use crate::flavor::Flavor;
use crate::query::ParameterizedQuery;
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
struct ColumnDef {
    name: String,
    definition: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateTableBuilder {
    if_not_exists: bool,
    table: Option<String>,
    defs: Vec<ColumnDef>,

    args: Args,
}

impl CreateTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flavor(&self) -> Flavor {
        self.args.flavor
    }

    pub fn create_table(&mut self, table: &str) -> &mut Self {
        self.table = Some(table.to_owned());
        self
    }

    pub fn if_not_exists(&mut self) -> &mut Self {
        self.if_not_exists = true;
        self
    }

    /// 定义一列：列名会按 flavor 加引号，其余部分原样输出。
    pub fn define<I, S>(&mut self, column: &str, definition: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defs.push(ColumnDef {
            name: column.to_owned(),
            definition: definition.into_iter().map(Into::into).collect(),
        });
        self
    }
}

impl Builder for CreateTableBuilder {
    fn build_with_flavor(&self, flavor: Flavor) -> Result<ParameterizedQuery, CompileError> {
        let mut buf = StringBuilder::new();

        buf.write_leading("CREATE TABLE");
        if self.if_not_exists {
            buf.write_leading("IF NOT EXISTS");
        }
        if let Some(t) = &self.table {
            buf.write_leading(&quote_ident(flavor, t));
        }

        if !self.defs.is_empty() {
            let defs: Vec<String> = self
                .defs
                .iter()
                .map(|d| {
                    let mut parts = vec![quote_ident(flavor, &d.name)];
                    parts.extend(d.definition.iter().map(|s| escape(s)));
                    parts.join(" ")
                })
                .collect();
            buf.write_leading("(");
            buf.write_strings(&defs, ", ");
            buf.write_str(")");
        }

        // DDL 不产生占位符，但仍走 compile 以统一 `$$` 的处理。
        let (sql, args) = self.args.compile_with_flavor(&buf.into_string(), flavor)?;
        Ok(ParameterizedQuery::new(sql, args))
    }

    fn flavor(&self) -> Flavor {
        self.flavor()
    }
}

pub fn create_table(table: &str) -> CreateTableBuilder {
    let mut builder = CreateTableBuilder::new();
    builder.create_table(table);
    builder
}

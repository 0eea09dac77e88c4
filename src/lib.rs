//! halo-sqli：参数绑定与字符串拼接两种查询构造方式的对照演示。

pub mod args;
#[cfg(test)]
mod args_tests;
pub mod builder;
pub mod config;
pub mod create_table;
pub mod demo;
pub mod error;
pub mod flavor;
pub mod insert;
#[cfg(test)]
mod insert_tests;
pub mod query;
pub mod runner;
pub mod select;
mod string_builder;
pub mod users;
pub mod value;

pub use crate::args::{Args, CompileError};
pub use crate::builder::Builder;
pub use crate::config::DemoConfig;
pub use crate::create_table::{CreateTableBuilder, create_table};
pub use crate::error::DemoError;
pub use crate::flavor::{Flavor, UnknownFlavor};
pub use crate::insert::{InsertBuilder, insert_into};
pub use crate::query::{ConcatenatedQuery, ConcatenationBuilder, ParameterizedQuery};
pub use crate::runner::QueryRunner;
pub use crate::select::{SelectBuilder, select};
pub use crate::users::UserRecord;
pub use crate::value::SqlValue;

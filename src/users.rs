//! 固定的 `users` 表：记录类型，以及每条演示路径各自的查询构造函数。
//!
//! 参数化的构造走 builder；拼接的构造走 `ConcatenationBuilder`。两类函数分开命名，
//! 不经过同一个入口。

use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::any::AnyRow;

use crate::args::CompileError;
use crate::builder::Builder;
use crate::create_table::create_table;
use crate::flavor::Flavor;
use crate::insert::insert_into;
use crate::query::{ConcatenatedQuery, ParameterizedQuery};
use crate::select::select;

pub const USERS_TABLE: &str = "users";
pub const COL_ID: &str = "id";
pub const COL_EMAIL: &str = "email";
pub const COL_PASSWORD: &str = "password";

/// 读取结果：`id` 与明文 `password`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub password: String,
}

impl<'r> sqlx::FromRow<'r, AnyRow> for UserRecord {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(COL_ID)?,
            password: row.try_get(COL_PASSWORD)?,
        })
    }
}

/// `CREATE TABLE IF NOT EXISTS users (...)`。
pub fn create_users_table(flavor: Flavor) -> Result<ParameterizedQuery, CompileError> {
    let text = flavor.text_type();
    let mut ctb = create_table(USERS_TABLE);
    ctb.if_not_exists()
        .define(COL_ID, [flavor.auto_increment_pk()])
        .define(COL_EMAIL, [text, "UNIQUE"])
        .define(COL_PASSWORD, [text]);
    ctb.build_with_flavor(flavor)
}

/// `INSERT INTO users (email, password) VALUES (?, ?)`。
pub fn insert_user(
    flavor: Flavor,
    email: &str,
    password: &str,
) -> Result<ParameterizedQuery, CompileError> {
    let mut ib = insert_into(USERS_TABLE);
    ib.cols([COL_EMAIL, COL_PASSWORD]).values([email, password]);
    ib.build_with_flavor(flavor)
}

/// `SELECT id, password FROM users WHERE email=?`。
pub fn select_user_by_email(
    flavor: Flavor,
    email: &str,
) -> Result<ParameterizedQuery, CompileError> {
    let mut sb = select([COL_ID, COL_PASSWORD]);
    sb.from([USERS_TABLE]).where_equal(COL_EMAIL, email);
    sb.build_with_flavor(flavor)
}

fn select_user_prefix(flavor: Flavor) -> crate::query::ConcatenationBuilder {
    let mut qb = ConcatenatedQuery::builder(flavor);
    qb.text("SELECT ")
        .ident(COL_ID)
        .text(", ")
        .ident(COL_PASSWORD)
        .text(" FROM ")
        .ident(USERS_TABLE)
        .text(" WHERE ");
    qb
}

/// `... WHERE email='<email_fragment>' AND password='<password_fragment>'`，单行，片段原样拼接。
pub fn select_user_by_credentials_concatenated(
    flavor: Flavor,
    email_fragment: &str,
    password_fragment: &str,
) -> ConcatenatedQuery {
    let mut qb = select_user_prefix(flavor);
    qb.ident(COL_EMAIL)
        .text("='")
        .splice(email_fragment)
        .text("' AND ")
        .ident(COL_PASSWORD)
        .text("='")
        .splice(password_fragment)
        .text("'");
    qb.build()
}

/// 与上面相同，但密码条件在第二行；注入到邮箱里的行注释只能吃掉第一行。
pub fn select_user_by_credentials_multiline(
    flavor: Flavor,
    email_fragment: &str,
    password_fragment: &str,
) -> ConcatenatedQuery {
    let mut qb = select_user_prefix(flavor);
    qb.ident(COL_EMAIL)
        .text("='")
        .splice(email_fragment)
        .text("'\n AND ")
        .ident(COL_PASSWORD)
        .text("='")
        .splice(password_fragment)
        .text("'");
    qb.build()
}

/// 邮箱绑定、密码拼接：`... WHERE email=? AND password='<password_fragment>'`。
pub fn select_user_partially_bound(
    flavor: Flavor,
    email: &str,
    password_fragment: &str,
) -> ConcatenatedQuery {
    let mut qb = select_user_prefix(flavor);
    qb.ident(COL_EMAIL)
        .text("=")
        .bind(email)
        .text(" AND ")
        .ident(COL_PASSWORD)
        .text("='")
        .splice(password_fragment)
        .text("'");
    qb.build()
}

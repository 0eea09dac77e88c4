//! QueryRunner：持有唯一一条数据库连接，对 `users` 表执行一次写入与若干次读取。
//!
//! 参数化查询与拼接查询各有独立的执行入口：`execute_parameterized` 与
//! `execute_concatenated`。拼接读取在执行前把实际提交的 SQL 写到调用方给的 `echo`。
//! 连接随 runner 一起释放；`close` 是显式的优雅关闭。

use std::io::Write;

use sqlx::any::{Any, AnyArguments};
use sqlx::query::Query;
use sqlx::{AnyConnection, Connection, FromRow};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::flavor::Flavor;
use crate::query::{ConcatenatedQuery, ParameterizedQuery};
use crate::users::{self, UserRecord};
use crate::value::SqlValue;

pub struct QueryRunner {
    conn: AnyConnection,
    flavor: Flavor,
}

impl QueryRunner {
    /// 打开连接。任何失败都归为 `DemoError::Connection`。
    pub async fn connect(config: &DemoConfig) -> Result<Self, DemoError> {
        sqlx::any::install_default_drivers();

        let options = config.connect_options()?;
        let conn = AnyConnection::connect_with(&options)
            .await
            .map_err(DemoError::from_connect)?;

        tracing::info!(target_db = %config.describe(), flavor = %config.flavor, "Connected");
        Ok(Self {
            conn,
            flavor: config.flavor,
        })
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// 建表（若不存在）。
    pub async fn create_schema(&mut self) -> Result<(), DemoError> {
        let ddl = users::create_users_table(self.flavor)?;
        tracing::debug!(sql = ddl.sql(), "Creating users table");
        sqlx::query(ddl.sql())
            .execute(&mut self.conn)
            .await
            .map_err(DemoError::from_write)?;
        Ok(())
    }

    /// 在事务中插入一行并提交。
    pub async fn insert(&mut self, email: &str, password: &str) -> Result<(), DemoError> {
        let q = users::insert_user(self.flavor, email, password)?;
        tracing::debug!(sql = q.sql(), args = q.args().len(), "Inserting user");

        let mut tx = self.conn.begin().await.map_err(DemoError::from_write)?;
        let result = bind_values(sqlx::query(q.sql()), q.args())
            .execute(&mut *tx)
            .await
            .map_err(DemoError::from_write)?;
        tx.commit().await.map_err(DemoError::from_write)?;

        tracing::info!(email, rows = result.rows_affected(), "User inserted");
        Ok(())
    }

    /// 按邮箱查找，邮箱作为绑定参数传输。
    pub async fn read_safe(&mut self, email: &str) -> Result<Option<UserRecord>, DemoError> {
        let q = users::select_user_by_email(self.flavor, email)?;
        self.execute_parameterized(&q).await
    }

    /// 邮箱与密码片段都原样拼进单行 SQL；先把 SQL 写到 `echo` 再执行。
    pub async fn read_unsafe<W: Write>(
        &mut self,
        email_fragment: &str,
        password_fragment: &str,
        echo: &mut W,
    ) -> Result<Option<UserRecord>, DemoError> {
        let q = users::select_user_by_credentials_concatenated(
            self.flavor,
            email_fragment,
            password_fragment,
        );
        self.execute_echoed(&q, echo).await
    }

    /// 同 `read_unsafe`，但密码条件在第二行。
    pub async fn read_unsafe_multiline<W: Write>(
        &mut self,
        email_fragment: &str,
        password_fragment: &str,
        echo: &mut W,
    ) -> Result<Option<UserRecord>, DemoError> {
        let q = users::select_user_by_credentials_multiline(
            self.flavor,
            email_fragment,
            password_fragment,
        );
        self.execute_echoed(&q, echo).await
    }

    /// 邮箱绑定，密码片段拼接。
    pub async fn read_partially_bound<W: Write>(
        &mut self,
        email: &str,
        password_fragment: &str,
        echo: &mut W,
    ) -> Result<Option<UserRecord>, DemoError> {
        let q = users::select_user_partially_bound(self.flavor, email, password_fragment);
        self.execute_echoed(&q, echo).await
    }

    async fn execute_echoed<W: Write>(
        &mut self,
        q: &ConcatenatedQuery,
        echo: &mut W,
    ) -> Result<Option<UserRecord>, DemoError> {
        writeln!(echo, "{}", q.sql())?;
        self.execute_concatenated(q).await
    }

    /// 执行参数化查询，返回第一行。
    pub async fn execute_parameterized(
        &mut self,
        q: &ParameterizedQuery,
    ) -> Result<Option<UserRecord>, DemoError> {
        tracing::debug!(sql = q.sql(), args = q.args().len(), "Executing parameterized query");
        self.fetch_first(q.sql(), q.args()).await
    }

    /// 执行拼接查询，返回第一行。SQL 文本按原样提交。
    pub async fn execute_concatenated(
        &mut self,
        q: &ConcatenatedQuery,
    ) -> Result<Option<UserRecord>, DemoError> {
        tracing::debug!(
            sql = q.sql(),
            fragments = ?q.fragments(),
            args = q.args().len(),
            "Executing concatenated query"
        );
        self.fetch_first(q.sql(), q.args()).await
    }

    async fn fetch_first(
        &mut self,
        sql: &str,
        args: &[SqlValue],
    ) -> Result<Option<UserRecord>, DemoError> {
        let row = bind_values(sqlx::query(sql), args)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(DemoError::from_read)?;

        match row {
            Some(row) => UserRecord::from_row(&row)
                .map(Some)
                .map_err(DemoError::from_read),
            None => Ok(None),
        }
    }

    /// 显式关闭连接。
    pub async fn close(self) -> Result<(), DemoError> {
        self.conn.close().await.map_err(DemoError::from_connect)?;
        tracing::info!("Connection closed");
        Ok(())
    }
}

fn bind_values<'q>(
    mut query: Query<'q, Any, AnyArguments<'q>>,
    values: &'q [SqlValue],
) -> Query<'q, Any, AnyArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::I64(n) => query.bind(*n),
            SqlValue::String(s) => query.bind(&**s),
        };
    }
    query
}

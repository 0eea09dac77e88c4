//! DemoError：连接、约束、查询三类数据库错误，加上配置与输出错误。

use crate::args::CompileError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to build query: {0}")]
    Build(#[from] CompileError),

    #[error("failed to write demo output: {0}")]
    Output(#[from] std::io::Error),
}

impl DemoError {
    /// 建立连接阶段的错误一律视为连接错误。
    pub(crate) fn from_connect(err: sqlx::Error) -> Self {
        Self::Connection(driver_message(&err))
    }

    /// 写入阶段：唯一键冲突单独归类，其余为查询错误。
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::ConstraintViolation(db.message().to_owned())
            }
            _ => Self::from_read(err),
        }
    }

    pub(crate) fn from_read(err: sqlx::Error) -> Self {
        Self::Query(driver_message(&err))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

fn driver_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_owned(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DemoError::ConstraintViolation("UNIQUE constraint failed: users.email".into());
        assert_eq!(
            err.to_string(),
            "constraint violation: UNIQUE constraint failed: users.email"
        );
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_non_database_errors_classify_by_phase() {
        assert!(DemoError::from_connect(sqlx::Error::PoolTimedOut).is_connection());
        assert!(DemoError::from_write(sqlx::Error::RowNotFound).is_query());
        assert!(DemoError::from_read(sqlx::Error::RowNotFound).is_query());
    }

    #[test]
    fn test_compile_error_converts() {
        let err: DemoError = CompileError::InvalidArgRef(2).into();
        assert_eq!(
            err.to_string(),
            "failed to build query: builder invalid arg reference $2"
        );
    }
}

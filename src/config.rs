//! 运行配置：从带前缀的环境变量读取（`main` 会先用 dotenvy 加载 `.env`）。

use std::str::FromStr;

use sqlx::ConnectOptions;
use sqlx::any::AnyConnectOptions;
use sqlx::mysql::MySqlConnectOptions;

use crate::error::DemoError;
use crate::flavor::Flavor;

pub const ENV_FLAVOR: &str = "SQLI_DEMO_FLAVOR";
pub const ENV_HOST: &str = "SQLI_DEMO_HOST";
pub const ENV_PORT: &str = "SQLI_DEMO_PORT";
pub const ENV_USER: &str = "SQLI_DEMO_USER";
pub const ENV_PASSWORD: &str = "SQLI_DEMO_PASSWORD";
pub const ENV_DATABASE: &str = "SQLI_DEMO_DATABASE";
pub const ENV_DATABASE_URL: &str = "SQLI_DEMO_DATABASE_URL";
pub const ENV_CREATE_SCHEMA: &str = "SQLI_DEMO_CREATE_SCHEMA";
pub const ENV_LOG: &str = "SQLI_DEMO_LOG";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_PASSWORD: &str = "my-secret-pw";
pub const DEFAULT_MYSQL_DATABASE: &str = "web_test";
pub const DEFAULT_SQLITE_DATABASE: &str = "web_test.db";

/// SQLite 内存库的文件名写法。
pub const SQLITE_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub flavor: Flavor,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// MySQL 库名，或 SQLite 文件路径（可为 `:memory:`）。
    pub database: String,
    /// 完整连接 URL；设置后覆盖上面的字段，flavor 由 scheme 推断。
    pub url: Option<String>,
    pub create_schema: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::MySQL,
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_owned(),
            password: DEFAULT_PASSWORD.to_owned(),
            database: DEFAULT_MYSQL_DATABASE.to_owned(),
            url: None,
            create_schema: false,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意 key 查找函数构造配置；空字符串视为未设置。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DemoError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = get(ENV_DATABASE_URL);
        let flavor = match (&url, get(ENV_FLAVOR)) {
            (Some(url), _) => Flavor::from_url(url),
            (None, Some(name)) => name.parse(),
            (None, None) => Ok(Flavor::default()),
        }
        .map_err(|e| DemoError::Config(e.to_string()))?;

        let port = match get(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| DemoError::Config(format!("{ENV_PORT}={raw}: {e}")))?,
            None => DEFAULT_PORT,
        };

        let create_schema = match get(ENV_CREATE_SCHEMA) {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| DemoError::Config(format!("{ENV_CREATE_SCHEMA}={raw}: expected a boolean")))?,
            None => false,
        };

        let default_database = match flavor {
            Flavor::MySQL => DEFAULT_MYSQL_DATABASE,
            Flavor::SQLite => DEFAULT_SQLITE_DATABASE,
        };

        Ok(Self {
            flavor,
            host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            user: get(ENV_USER).unwrap_or_else(|| DEFAULT_USER.to_owned()),
            password: get(ENV_PASSWORD).unwrap_or_else(|| DEFAULT_PASSWORD.to_owned()),
            database: get(ENV_DATABASE).unwrap_or_else(|| default_database.to_owned()),
            url,
            create_schema,
        })
    }

    /// 私有的 SQLite 内存库，并在运行前建表。
    pub fn sqlite_memory() -> Self {
        Self {
            flavor: Flavor::SQLite,
            database: SQLITE_MEMORY.to_owned(),
            create_schema: true,
            ..Self::default()
        }
    }

    /// 构造 Any 驱动的连接参数。MySQL 走 `MySqlConnectOptions`，密码中的特殊字符由 sqlx 负责编码。
    pub fn connect_options(&self) -> Result<AnyConnectOptions, DemoError> {
        if let Some(url) = &self.url {
            return AnyConnectOptions::from_str(url)
                .map_err(|e| DemoError::Config(format!("{ENV_DATABASE_URL}: {e}")));
        }

        match self.flavor {
            Flavor::MySQL => {
                let mysql = MySqlConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .username(&self.user)
                    .password(&self.password)
                    .database(&self.database);
                AnyConnectOptions::from_url(&mysql.to_url_lossy())
                    .map_err(|e| DemoError::Config(e.to_string()))
            }
            Flavor::SQLite => AnyConnectOptions::from_str(&self.sqlite_url())
                .map_err(|e| DemoError::Config(e.to_string())),
        }
    }

    fn sqlite_url(&self) -> String {
        if self.database == SQLITE_MEMORY {
            "sqlite::memory:".to_owned()
        } else {
            format!("sqlite:{}?mode=rwc", self.database)
        }
    }

    /// 用于日志：不含密码的连接目标描述。
    pub fn describe(&self) -> String {
        if self.url.is_some() {
            return format!("{} (from {ENV_DATABASE_URL})", self.flavor);
        }
        match self.flavor {
            Flavor::MySQL => format!(
                "mysql://{}@{}:{}/{}",
                self.user, self.host, self.port, self.database
            ),
            Flavor::SQLite => self.sqlite_url(),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_demo_database() {
        let cfg = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, DemoConfig::default());
        assert_eq!(cfg.describe(), "mysql://root@localhost:3306/web_test");
    }

    #[test]
    fn test_overrides() {
        let cfg = DemoConfig::from_lookup(lookup(&[
            (ENV_HOST, "db.internal"),
            (ENV_PORT, "3307"),
            (ENV_USER, "demo"),
            (ENV_PASSWORD, "p@ss:word"),
            (ENV_DATABASE, "shop"),
            (ENV_CREATE_SCHEMA, "yes"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "db.internal");
        assert_eq!(cfg.port, 3307);
        assert_eq!(cfg.user, "demo");
        assert_eq!(cfg.password, "p@ss:word");
        assert_eq!(cfg.database, "shop");
        assert!(cfg.create_schema);
    }

    #[test]
    fn test_sqlite_flavor_default_database() {
        let cfg = DemoConfig::from_lookup(lookup(&[(ENV_FLAVOR, "sqlite")])).unwrap();
        assert_eq!(cfg.flavor, Flavor::SQLite);
        assert_eq!(cfg.database, DEFAULT_SQLITE_DATABASE);
        assert_eq!(cfg.describe(), "sqlite:web_test.db?mode=rwc");
    }

    #[test]
    fn test_url_decides_flavor() {
        let cfg = DemoConfig::from_lookup(lookup(&[
            (ENV_FLAVOR, "mysql"),
            (ENV_DATABASE_URL, "sqlite::memory:"),
        ]))
        .unwrap();
        assert_eq!(cfg.flavor, Flavor::SQLite);
        assert_eq!(cfg.url.as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let cfg = DemoConfig::from_lookup(lookup(&[(ENV_HOST, "  "), (ENV_PORT, "")])).unwrap();
        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = DemoConfig::from_lookup(lookup(&[(ENV_PORT, "not-a-port")])).unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));

        let err = DemoConfig::from_lookup(lookup(&[(ENV_FLAVOR, "oracle")])).unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));

        let err = DemoConfig::from_lookup(lookup(&[(ENV_CREATE_SCHEMA, "maybe")])).unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));
    }

    #[test]
    fn test_connect_options_build_for_each_flavor() {
        assert!(DemoConfig::default().connect_options().is_ok());
        assert!(DemoConfig::sqlite_memory().connect_options().is_ok());
    }
}

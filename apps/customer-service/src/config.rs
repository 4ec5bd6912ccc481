//! # Customer Service 設定
//!
//! 環境変数から Customer Service サーバーの設定を読み込む。

use std::{env, str::FromStr};

use customers_shared::observability::LogFormat;
use thiserror::Error;

/// ストレージバックエンドの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// プロセス内メモリ（再起動で消える）
    #[default]
    Memory,
    /// PostgreSQL
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Self::Memory),
            "postgres" => Ok(Self::Postgres),
            other => Err(ConfigError::Invalid {
                key:    "STORAGE_BACKEND",
                value:  other.to_string(),
                reason: "memory または postgres を指定してください",
            }),
        }
    }
}

/// `LOG_FORMAT` の値を解釈する
fn parse_log_format(raw: String) -> Result<LogFormat, ConfigError> {
    match raw.as_str() {
        "json" => Ok(LogFormat::Json),
        "pretty" => Ok(LogFormat::Pretty),
        _ => Err(ConfigError::Invalid {
            key:    "LOG_FORMAT",
            value:  raw,
            reason: "json または pretty を指定してください",
        }),
    }
}

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値が不正
    #[error("{key}={value:?} は不正です: {reason}")]
    Invalid {
        key:    &'static str,
        value:  String,
        reason: &'static str,
    },
}

/// Customer Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerConfig {
    /// バインドアドレス
    pub host:            String,
    /// ポート番号
    pub port:            u16,
    /// ストレージバックエンド
    pub storage_backend: StorageBackend,
    /// データベース接続 URL（`postgres` バックエンドでのみ必須）
    pub database_url:    Option<String>,
    /// ログ出力形式
    pub log_format:      LogFormat,
}

impl CustomerConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 変数名から値を引く関数で設定を組み立てる
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CUSTOMER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("CUSTOMER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key:    "CUSTOMER_PORT",
                value:  raw,
                reason: "有効なポート番号である必要があります",
            })?,
            None => 3000,
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::default(),
        };

        let database_url = lookup("DATABASE_URL");
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let log_format = lookup("LOG_FORMAT")
            .map(parse_log_format)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            storage_backend,
            database_url,
            log_format,
        })
    }
}

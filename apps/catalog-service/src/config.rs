//! # Catalog Service 設定
//!
//! 環境変数から Catalog Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// ドキュメント公開のデフォルト値
///
/// デバッグビルドでは有効、リリースビルドでは無効。
const DOCS_ENABLED_DEFAULT: bool = cfg!(debug_assertions);

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値のパースに失敗した
    #[error("{key} の値が不正です: {value:?}（{expected}）")]
    InvalidValue {
        key:      &'static str,
        value:    String,
        expected: &'static str,
    },
}

/// Catalog Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// OpenAPI ドキュメントと閲覧 UI を公開するか
    pub docs_enabled: bool,
}

impl CatalogConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// テストで環境変数を汚さずに検証するために分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CATALOG_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("CATALOG_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CATALOG_PORT",
                value,
                expected: "0〜65535 のポート番号",
            })?,
            None => 8080,
        };

        let docs_enabled = match lookup("CATALOG_DOCS_ENABLED") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue {
                key: "CATALOG_DOCS_ENABLED",
                value,
                expected: "true または false",
            })?,
            None => DOCS_ENABLED_DEFAULT,
        };

        Ok(Self {
            host,
            port,
            docs_enabled,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

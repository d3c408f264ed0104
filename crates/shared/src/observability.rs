//! # Observability 基盤
//!
//! Catalog Service のログ出力設定、トレーシング初期化、HTTP リクエストのスパン生成を提供する。
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|-----------|------|
//! | `LOG_FORMAT` | `pretty` | `json`（集約基盤向け）または `pretty`（ターミナル向け） |
//! | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] | `EnvFilter` のディレクティブ |

/// `RUST_LOG` 未設定時のフィルタ
///
/// `catalog` は `catalog_service` / `catalog_infra` などの全クレートに前方一致する。
pub const DEFAULT_LOG_FILTER: &str = "info,catalog=debug";

/// ログの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    /// ターミナル向けの整形出力
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 前後の空白と大文字小文字は無視する。未設定や未知の値は `Pretty` として扱い、
    /// 未知の値のときだけ stderr に警告を出す（subscriber 初期化前のため）。
    pub fn from_setting(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "" => Self::Pretty,
            _ => {
                eprintln!("WARNING: LOG_FORMAT={raw:?} は不明な値のため pretty で出力します");
                Self::Pretty
            }
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// 起動ログに出すサービス名
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    /// 環境変数 `LOG_FORMAT` から設定を組み立てる
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる
    pub fn from_lookup(
        service_name: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            log_format:   LogFormat::from_setting(lookup("LOG_FORMAT").as_deref()),
        }
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` が未設定または不正な場合は [`DEFAULT_LOG_FILTER`] を使う。
///
/// `tracing_error::ErrorLayer` を登録するため、
/// インフラ層エラーの `SpanTrace` に呼び出し経路が記録される。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::debug!(service = %config.service_name, "トレーシングを初期化しました");
}

/// Request ID ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v7 で Request ID を生成する
///
/// `tower_http::request_id::SetRequestIdLayer` に渡して使う。
/// クライアントが `x-request-id` を送ってきた場合はそちらが優先される。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

/// HTTP リクエストのスパンを生成する
///
/// `TraceLayer::make_span_with` に渡して使う。
/// method, uri, request_id をスパンフィールドとして記録する。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, LogFormat::Pretty)]
    #[case(Some("json"), LogFormat::Json)]
    #[case(Some(" JSON "), LogFormat::Json)]
    #[case(Some("pretty"), LogFormat::Pretty)]
    #[case(Some(""), LogFormat::Pretty)]
    #[case(Some("yaml"), LogFormat::Pretty)]
    fn test_log_formatの解釈(#[case] value: Option<&str>, #[case] expected: LogFormat) {
        assert_eq!(LogFormat::from_setting(value), expected);
    }

    #[test]
    fn test_from_lookupはlog_formatを読み取る() {
        let config = TracingConfig::from_lookup("catalog-service", |key| {
            (key == "LOG_FORMAT").then(|| "json".to_string())
        });

        assert_eq!(
            config,
            TracingConfig {
                service_name: "catalog-service".to_string(),
                log_format:   LogFormat::Json,
            }
        );
    }
}

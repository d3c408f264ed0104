//! # Catalog Service エラー定義
//!
//! Catalog Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス | ボディ |
//! |--------|----------------|--------|
//! | `NotFound` | 404 | なし |
//! | `InvalidRequest` | リジェクションのステータス（400 / 415 / 422 など） | Problem Details |
//! | `Database` | 500 | Problem Details（detail は固定） |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_infra::InfraError;
use catalog_shared::ErrorResponse;
use thiserror::Error;

/// Catalog Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// リクエストの形式が不正（パス、クエリ、ボディの抽出に失敗）
    #[error("不正なリクエスト: {detail}")]
    InvalidRequest { status: StatusCode, detail: String },

    /// ストアのエラー
    #[error("ストアエラー: {0}")]
    Database(#[from] InfraError),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound(msg) => {
                tracing::debug!("{}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            CoreError::InvalidRequest { status, detail } => {
                let body = if status == StatusCode::BAD_REQUEST {
                    ErrorResponse::bad_request(detail)
                } else {
                    ErrorResponse::new(
                        "invalid-request",
                        status.canonical_reason().unwrap_or("Invalid Request"),
                        status.as_u16(),
                        detail,
                    )
                };
                (status, Json(body)).into_response()
            }
            CoreError::Database(e) => {
                let (kind, span_trace) = e.into_parts();
                tracing::error!(error = %kind, span_trace = %span_trace, "ストアエラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal_error()),
                )
                    .into_response()
            }
        }
    }
}

macro_rules! impl_from_rejection {
    ($($rejection:ty),* $(,)?) => {
        $(
            impl From<$rejection> for CoreError {
                fn from(rejection: $rejection) -> Self {
                    CoreError::InvalidRequest {
                        status: rejection.status(),
                        detail: rejection.body_text(),
                    }
                }
            }
        )*
    };
}

impl_from_rejection!(JsonRejection, PathRejection, QueryRejection);

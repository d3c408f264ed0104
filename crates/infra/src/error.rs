//! # インフラ層エラー定義
//!
//! 商品ストアの操作で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（LockPoisoned, Domain）
//!
//! `From` 実装や convenience constructor でエラーを生成すると、
//! その時点のスパン情報が自動的にキャプチャされる。

use std::fmt;

use catalog_domain::DomainError;
use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別と [`SpanTrace`]（呼び出し経路）を保持する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// ストアのロックが poison 状態
    ///
    /// ロック保持中に別スレッドが panic した場合に発生する。
    /// 以降のストア内容は保証されないため、呼び出し元は 500 として扱う。
    #[error("ストアのロックが poison 状態です: {0}")]
    LockPoisoned(String),

    /// ストア操作中に検出されたドメインルール違反
    #[error("ドメインエラー: {0}")]
    Domain(#[source] DomainError),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// InfraError を分解して InfraErrorKind と SpanTrace を取り出す
    pub fn into_parts(self) -> (InfraErrorKind, SpanTrace) {
        (self.kind, self.span_trace)
    }

    /// ロック poison エラーを生成する
    pub fn lock_poisoned(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::LockPoisoned(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<DomainError> for InfraError {
    fn from(source: DomainError) -> Self {
        Self {
            kind:       InfraErrorKind::Domain(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

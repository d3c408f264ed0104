//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `IdExhausted` | 500 Internal Server Error | 採番できる ID が残っていない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// ID の採番上限に達した
    ///
    /// 既存の最大 ID が `i32::MAX` の場合に発生する。
    #[error("{entity_type} の ID を採番できません（上限到達）")]
    IdExhausted {
        /// エンティティの種類
        entity_type: &'static str,
    },
}

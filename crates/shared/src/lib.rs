//! # Catalog 共有ユーティリティ
//!
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は feature で必要な分だけ有効化する
//!   - `openapi`: utoipa の `ToSchema` 導出
//!   - `observability`: トレーシング初期化と Request ID

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;

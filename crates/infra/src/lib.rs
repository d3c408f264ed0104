//! # Catalog インフラ層
//!
//! 商品ストアの具体的な実装を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **リポジトリ実装**: プロセス内メモリに商品を保持するストア
//! - **エラー定義**: ストア操作の失敗を SpanTrace 付きで表現する
//!
//! ## 依存関係
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use catalog_infra::repository::{InMemoryProductRepository, ProductRepository};
//!
//! let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::with_seed_data());
//! ```

pub mod error;
pub mod repository;

pub use error::InfraError;

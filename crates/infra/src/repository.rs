//! # リポジトリ実装
//!
//! 商品ストアのトレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイト経由でストアを利用する
//! - **テスタビリティ**: トレイト経由でスタブに差し替え可能

pub mod product_repository;

pub use product_repository::{InMemoryProductRepository, ProductRepository};

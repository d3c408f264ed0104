//! # Catalog ドメイン層
//!
//! 商品カタログのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア実装、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`product`] - 商品エンティティと ID 採番規則
//!
//! ## 使用例
//!
//! ```rust
//! use catalog_domain::product::{ProductId, next_product_id, seed_products};
//!
//! let products = seed_products();
//! let next = next_product_id(&products).unwrap();
//! assert_eq!(next, ProductId::new(3));
//! ```

pub mod error;
pub mod product;

pub use error::DomainError;

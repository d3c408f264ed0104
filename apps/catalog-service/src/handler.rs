//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、判断はユースケース層に委譲

pub mod docs;
pub mod health;
pub mod product;

pub use docs::{OPENAPI_JSON_PATH, SWAGGER_UI_PATH, openapi_json, swagger_ui};
pub use health::health_check;
pub use product::{
    PRODUCTS_PATH,
    ProductState,
    create_product,
    delete_product,
    get_product,
    list_products,
    search_products,
    update_product,
};

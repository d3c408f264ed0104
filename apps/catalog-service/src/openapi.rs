//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Catalog Service の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, product};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "My API",
      version = "v1",
      description = "商品カタログを管理する CRUD API",
      contact(
         name = "Catalog Team",
         email = "catalog-team@example.com",
         url = "https://catalog.example.com"
      ),
      license(
         name = "GPL 3",
         url = "https://opensource.org/license/gpl-3-0"
      )
   ),
   paths(
      // health
      health::health_check,
      // products
      product::list_products,
      product::get_product,
      product::create_product,
      product::update_product,
      product::delete_product,
      product::search_products,
   ),
   components(schemas(
      catalog_shared::ErrorResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "products", description = "商品管理"),
   )
)]
pub struct ApiDoc;

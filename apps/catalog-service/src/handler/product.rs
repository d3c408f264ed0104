//! # 商品 API ハンドラ
//!
//! 商品の CRUD と名前検索のエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/products` - 商品一覧（挿入順）
//! - `GET /api/products/{id}` - 商品取得
//! - `POST /api/products` - 商品作成（ID はサーバーが採番）
//! - `PUT /api/products/{id}` - 商品更新（名前と価格のみ）
//! - `DELETE /api/products/{id}` - 商品削除
//! - `GET /api/products/search?name=...` - 名前検索（大文字小文字を区別しない部分一致）
//!
//! レスポンスはエンベロープなしの JSON。404 はボディなしで返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use catalog_domain::product::{Product, ProductDraft, ProductId};
use catalog_shared::ErrorResponse;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::CoreError, usecase::ProductUseCaseImpl};

/// 商品 API のベースパス
pub const PRODUCTS_PATH: &str = "/api/products";

/// 商品 API の共有状態
pub struct ProductState {
    pub usecase: ProductUseCaseImpl,
}

// --- リクエスト型 ---

/// 商品作成・更新リクエスト
///
/// `id` を含めても無視される（作成時はサーバーが採番し、更新時はパスの ID を使う）。
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductRequest {
    /// 商品名
    #[schema(example = "Product3")]
    pub name:  String,
    /// 価格
    #[schema(example = 5.0)]
    pub price: Decimal,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        ProductDraft::new(req.name, req.price)
    }
}

/// 名前検索クエリ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// 商品名に含まれる文字列（大文字小文字を区別しない）
    pub name: String,
}

// --- レスポンス型 ---

/// 商品データ
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductData {
    /// 商品 ID
    #[schema(example = 1)]
    pub id:    i32,
    /// 商品名
    #[schema(example = "Product1")]
    pub name:  String,
    /// 価格
    #[schema(example = 10.5)]
    pub price: Decimal,
}

impl From<Product> for ProductData {
    fn from(product: Product) -> Self {
        Self {
            id:    product.id().as_i32(),
            name:  product.name().to_string(),
            price: product.price(),
        }
    }
}

fn to_data(products: Vec<Product>) -> Vec<ProductData> {
    products.into_iter().map(ProductData::from).collect()
}

// --- ハンドラ ---

/// GET /api/products
///
/// 全商品の一覧を取得する。
#[utoipa::path(
   get,
   path = "/api/products",
   tag = "products",
   responses(
      (status = 200, description = "商品一覧", body = Vec<ProductData>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(
    State(state): State<Arc<ProductState>>,
) -> Result<impl IntoResponse, CoreError> {
    let products = state.usecase.list_products().await?;
    Ok((StatusCode::OK, Json(to_data(products))))
}

/// GET /api/products/{id}
///
/// ID を指定して商品を取得する。
#[utoipa::path(
   get,
   path = "/api/products/{id}",
   tag = "products",
   params(("id" = i32, Path, description = "商品 ID")),
   responses(
      (status = 200, description = "指定 ID の商品", body = ProductData),
      (status = 400, description = "ID が整数でない", body = ErrorResponse),
      (status = 404, description = "商品が見つからない")
   )
)]
#[tracing::instrument(skip_all)]
pub async fn get_product(
    State(state): State<Arc<ProductState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(id) = path?;

    let product = state.usecase.get_product(ProductId::new(id)).await?;

    Ok((StatusCode::OK, Json(ProductData::from(product))))
}

/// POST /api/products
///
/// 商品を作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された商品（`Location` ヘッダーに取得用 URL）
#[utoipa::path(
   post,
   path = "/api/products",
   tag = "products",
   request_body = ProductRequest,
   responses(
      (status = 201, description = "作成された商品", body = ProductData,
         headers(("Location" = String, description = "作成された商品の URL"))),
      (status = 400, description = "リクエストボディが不正", body = ErrorResponse),
      (status = 415, description = "Content-Type が JSON でない", body = ErrorResponse),
      (status = 422, description = "必須フィールドが欠けている", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<Arc<ProductState>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(req) = payload?;

    let product = state.usecase.create_product(req.into()).await?;

    let location = format!("{PRODUCTS_PATH}/{}", product.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductData::from(product)),
    ))
}

/// PUT /api/products/{id}
///
/// 既存の商品の名前と価格を更新する。ID は変更されない。
///
/// ## レスポンス
///
/// - `204 No Content`: 更新成功
/// - `404 Not Found`: 商品が見つからない
#[utoipa::path(
   put,
   path = "/api/products/{id}",
   tag = "products",
   params(("id" = i32, Path, description = "更新する商品の ID")),
   request_body = ProductRequest,
   responses(
      (status = 204, description = "更新成功"),
      (status = 400, description = "ID またはリクエストボディが不正", body = ErrorResponse),
      (status = 404, description = "商品が見つからない")
   )
)]
#[tracing::instrument(skip_all)]
pub async fn update_product(
    State(state): State<Arc<ProductState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(id) = path?;
    let Json(req) = payload?;

    state
        .usecase
        .update_product(ProductId::new(id), req.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/products/{id}
///
/// 商品を削除する。
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: 商品が見つからない
#[utoipa::path(
   delete,
   path = "/api/products/{id}",
   tag = "products",
   params(("id" = i32, Path, description = "削除する商品の ID")),
   responses(
      (status = 204, description = "削除成功"),
      (status = 400, description = "ID が整数でない", body = ErrorResponse),
      (status = 404, description = "商品が見つからない")
   )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(
    State(state): State<Arc<ProductState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(id) = path?;

    state.usecase.delete_product(ProductId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/search
///
/// 名前に指定文字列を含む商品を検索する。
/// 一致する商品がない場合は 404 を返す。
#[utoipa::path(
   get,
   path = "/api/products/search",
   tag = "products",
   params(SearchQuery),
   responses(
      (status = 200, description = "条件に一致する商品一覧", body = Vec<ProductData>),
      (status = 400, description = "name が指定されていない", body = ErrorResponse),
      (status = 404, description = "一致する商品がない")
   )
)]
#[tracing::instrument(skip_all)]
pub async fn search_products(
    State(state): State<Arc<ProductState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Query(query) = query?;

    let products = state.usecase.search_products(&query.name).await?;

    Ok((StatusCode::OK, Json(to_data(products))))
}

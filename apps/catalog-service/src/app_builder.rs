//! # Catalog Service アプリケーション構築
//!
//! DI（リポジトリ・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use catalog_infra::repository::ProductRepository;
use catalog_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        OPENAPI_JSON_PATH,
        PRODUCTS_PATH,
        ProductState,
        SWAGGER_UI_PATH,
        create_product,
        delete_product,
        get_product,
        health_check,
        list_products,
        openapi_json,
        search_products,
        swagger_ui,
        update_product,
    },
    usecase::ProductUseCaseImpl,
};

/// DI コンテナの構築とルーター定義を行う
///
/// `docs_enabled` が `false` の場合、API ドキュメントのルートは登録しない。
pub fn build_app(product_repository: Arc<dyn ProductRepository>, docs_enabled: bool) -> Router {
    let product_state = Arc::new(ProductState {
        usecase: ProductUseCaseImpl::new(product_repository),
    });

    // `/search` は静的セグメントのため `/{id}` より優先される
    let products = Router::new()
        .route(PRODUCTS_PATH, get(list_products).post(create_product))
        .route(&format!("{PRODUCTS_PATH}/search"), get(search_products))
        .route(
            &format!("{PRODUCTS_PATH}/{{id}}"),
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(product_state);

    let mut app = Router::new()
        .route("/health", get(health_check))
        .merge(products);

    if docs_enabled {
        app = app
            .route(OPENAPI_JSON_PATH, get(openapi_json))
            .route(SWAGGER_UI_PATH, get(swagger_ui));
    }

    // Request ID レイヤー（下に書いたものが外側）
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: カスタムスパンに request_id を含める
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    app.layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

//! # API ドキュメントハンドラ
//!
//! utoipa で生成した OpenAPI 仕様と、それを閲覧する Swagger UI を配信する。
//!
//! - `GET /swagger/v1/swagger.json` - OpenAPI 仕様（JSON）
//! - `GET /swagger` - Swagger UI
//!
//! どちらも設定 `CATALOG_DOCS_ENABLED` が有効な場合のみルーティングされる。

use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// OpenAPI 仕様の配信パス
pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

/// Swagger UI の配信パス
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Swagger UI ページ
///
/// アセットは swagger-ui-dist の CDN から読み込み、仕様は同一オリジンの JSON を参照する。
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Catalog API V1</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "/swagger/v1/swagger.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

/// OpenAPI 仕様を JSON で返す
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI を返す
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

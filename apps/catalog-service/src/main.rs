//! # Catalog Service サーバー
//!
//! 商品カタログをメモリ上で管理する HTTP API サーバー。
//!
//! ## 役割
//!
//! - **商品 CRUD**: `/api/products` 配下で一覧・取得・作成・更新・削除・名前検索
//! - **API ドキュメント**: OpenAPI 仕様と Swagger UI の配信（設定で有効化）
//!
//! データはプロセス内のみに保持され、再起動すると初期データ（2 件）に戻る。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CATALOG_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CATALOG_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `CATALOG_DOCS_ENABLED` | No | API ドキュメントの配信（デフォルト: debug ビルドで有効） |
//! | `LOG_FORMAT` | No | `json` で JSON ログ、それ以外は人間向けフォーマット |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,catalog=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p catalog-service
//!
//! # 本番環境（環境変数を直接指定）
//! CATALOG_PORT=3000 LOG_FORMAT=json cargo run -p catalog-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use catalog_infra::repository::InMemoryProductRepository;
use catalog_service::{app_builder::build_app, config::CatalogConfig};
use catalog_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Catalog Service のエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("catalog-service");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "catalog-service").entered();

    let config = CatalogConfig::from_env()?;

    tracing::info!(
        "Catalog Service を起動します: {}:{} (docs_enabled={})",
        config.host,
        config.port,
        config.docs_enabled
    );

    let product_repository = Arc::new(InMemoryProductRepository::with_seed_data());
    let app = build_app(product_repository, config.docs_enabled);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Catalog Service が起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Catalog Service を停止しました");
    Ok(())
}

/// Ctrl+C を受けたら完了する Future
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルハンドラの登録に失敗しました: {e}");
    }
    tracing::info!("シャットダウンシグナルを受信しました");
}

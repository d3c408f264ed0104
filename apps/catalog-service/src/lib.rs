//! # Catalog Service ライブラリ
//!
//! 商品カタログ API のコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP レスポンスへのエラー変換
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義
//! - `usecase`: アプリケーションロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;

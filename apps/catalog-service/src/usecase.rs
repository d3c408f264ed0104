//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジックを定義する。
//! ハンドラは HTTP の入出力変換のみを担い、判断はここに集約する。

pub mod product;

pub use product::ProductUseCaseImpl;

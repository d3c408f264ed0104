//! # ProductRepository
//!
//! 商品の保存・取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **プロセス内メモリ**: 永続化しない。再起動で初期データに戻る
//! - **単一ロック**: 全操作を 1 つの `Mutex` で直列化する。
//!   走査と更新を同じガード内で行うため、ID 採番が競合しない
//! - **挿入順の維持**: `Vec` で保持し、一覧は挿入順で返す
//!
//! ロック保持中に `.await` しない。全操作は同期的に完了する。

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use catalog_domain::product::{
    Product,
    ProductDraft,
    ProductId,
    next_product_id,
    seed_products,
};

use crate::error::InfraError;

/// 商品リポジトリトレイト
///
/// ユースケース層はこのトレイトに依存し、具体的な実装には依存しない。
/// 「存在しない」は `Option` / `bool` で返し、エラーにはしない。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 全商品を挿入順で取得する
    async fn find_all(&self) -> Result<Vec<Product>, InfraError>;

    /// ID で商品を取得する
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, InfraError>;

    /// 新しい ID を採番して商品を末尾に追加する
    ///
    /// 採番と追加は同一のクリティカルセクションで行う。
    async fn insert(&self, draft: ProductDraft) -> Result<Product, InfraError>;

    /// 名前と価格を更新する
    ///
    /// 対象が存在しない場合は `None` を返す。
    async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, InfraError>;

    /// 商品を削除する
    ///
    /// 削除した場合は `true`、対象が存在しない場合は `false` を返す。
    async fn delete(&self, id: ProductId) -> Result<bool, InfraError>;

    /// 名前に `keyword` を含む商品を挿入順で取得する（大文字小文字を区別しない）
    async fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>, InfraError>;
}

/// インメモリ実装
///
/// アプリケーション起動時に 1 つだけ生成し、`Arc` で共有する。
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// 空のストアを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ（2 件）を投入したストアを作成する
    pub fn with_seed_data() -> Self {
        Self::with_products(seed_products())
    }

    /// 任意の商品一覧でストアを作成する
    ///
    /// ID の一意性は呼び出し元が保証する。
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Product>>, InfraError> {
        self.products
            .lock()
            .map_err(|e| InfraError::lock_poisoned(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Product>, InfraError> {
        Ok(self.lock()?.clone())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, InfraError> {
        Ok(self.lock()?.iter().find(|p| p.id() == id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, draft: ProductDraft) -> Result<Product, InfraError> {
        let mut products = self.lock()?;
        let id = next_product_id(&products)?;
        let product = Product::from_draft(id, draft);
        products.push(product.clone());
        Ok(product)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, InfraError> {
        let mut products = self.lock()?;
        let Some(slot) = products.iter_mut().find(|p| p.id() == id) else {
            return Ok(None);
        };
        *slot = slot.clone().with_details(draft);
        Ok(Some(slot.clone()))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn delete(&self, id: ProductId) -> Result<bool, InfraError> {
        let mut products = self.lock()?;
        let Some(pos) = products.iter().position(|p| p.id() == id) else {
            return Ok(false);
        };
        products.remove(pos);
        Ok(true)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(keyword = %keyword))]
    async fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>, InfraError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|p| p.name_contains_ignore_case(keyword))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::error::InfraErrorKind;

    #[tokio::test]
    async fn test_poison状態のロックはエラーとして返る() {
        let sut = Arc::new(InMemoryProductRepository::with_seed_data());

        // ロック保持中に panic させて poison 状態にする
        let poisoner = Arc::clone(&sut);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.products.lock().unwrap();
            panic!("ロック保持中の panic");
        })
        .join();

        let result = sut.find_all().await;

        let err = result.expect_err("poison 状態ではエラーになること");
        assert!(matches!(err.kind(), InfraErrorKind::LockPoisoned(_)));

        let insert_result = sut
            .insert(ProductDraft::new("Product3", Decimal::ONE))
            .await;
        assert!(insert_result.is_err());
    }
}

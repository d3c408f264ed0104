//! 商品管理ユースケース

use std::sync::Arc;

use catalog_domain::product::{Product, ProductDraft, ProductId};
use catalog_infra::repository::ProductRepository;

use crate::error::CoreError;

/// 商品管理ユースケース
///
/// リポジトリの「存在しない」結果を [`CoreError::NotFound`] に変換する。
pub struct ProductUseCaseImpl {
    product_repository: Arc<dyn ProductRepository>,
}

impl ProductUseCaseImpl {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// 全商品を取得する
    ///
    /// 空でも成功として返す。
    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.product_repository.find_all().await?)
    }

    /// ID で商品を取得する
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CoreError> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 商品を作成する
    ///
    /// ID はストアが「最大 ID + 1」で採番する。
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, CoreError> {
        let product = self.product_repository.insert(draft).await?;
        tracing::info!(product_id = %product.id(), "商品を作成しました");
        Ok(product)
    }

    /// 商品の名前と価格を更新する
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, CoreError> {
        let product = self
            .product_repository
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(product_id = %id, "商品を更新しました");
        Ok(product)
    }

    /// 商品を削除する
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CoreError> {
        if !self.product_repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(product_id = %id, "商品を削除しました");
        Ok(())
    }

    /// 名前で商品を検索する（大文字小文字を区別しない部分一致）
    ///
    /// 一致する商品がない場合は [`CoreError::NotFound`] を返す。
    /// 一覧取得（空でも成功）とは扱いが異なる。
    pub async fn search_products(&self, keyword: &str) -> Result<Vec<Product>, CoreError> {
        let products = self.product_repository.search_by_name(keyword).await?;
        if products.is_empty() {
            return Err(CoreError::NotFound(format!(
                "名前に {keyword:?} を含む商品が見つかりません"
            )));
        }
        Ok(products)
    }
}

fn not_found(id: ProductId) -> CoreError {
    CoreError::NotFound(format!("商品が見つかりません: {id}"))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use catalog_domain::DomainError;
    use catalog_infra::{InfraError, repository::InMemoryProductRepository};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    fn sut() -> ProductUseCaseImpl {
        ProductUseCaseImpl::new(Arc::new(InMemoryProductRepository::with_seed_data()))
    }

    /// 常にエラーを返すスタブ
    struct FailingProductRepository;

    fn failure() -> InfraError {
        DomainError::IdExhausted {
            entity_type: "Product",
        }
        .into()
    }

    #[async_trait]
    impl ProductRepository for FailingProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, InfraError> {
            Err(failure())
        }

        async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, InfraError> {
            Err(failure())
        }

        async fn insert(&self, _draft: ProductDraft) -> Result<Product, InfraError> {
            Err(failure())
        }

        async fn update(
            &self,
            _id: ProductId,
            _draft: ProductDraft,
        ) -> Result<Option<Product>, InfraError> {
            Err(failure())
        }

        async fn delete(&self, _id: ProductId) -> Result<bool, InfraError> {
            Err(failure())
        }

        async fn search_by_name(&self, _keyword: &str) -> Result<Vec<Product>, InfraError> {
            Err(failure())
        }
    }

    #[tokio::test]
    async fn test_get_product_存在しないidはnot_found() {
        let result = sut().get_product(ProductId::new(99)).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_product_次のidが採番される() {
        let sut = sut();

        let created = sut
            .create_product(ProductDraft::new("Product3", Decimal::new(50, 1)))
            .await
            .unwrap();

        assert_eq!(created.id(), ProductId::new(3));
        assert_eq!(sut.list_products().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_product_存在しないidはnot_found() {
        let result = sut()
            .update_product(ProductId::new(99), ProductDraft::new("x", Decimal::ONE))
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_product_削除後の取得はnot_found() {
        let sut = sut();

        sut.delete_product(ProductId::new(2)).await.unwrap();
        let result = sut.get_product(ProductId::new(2)).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_product_存在しないidはnot_found() {
        let result = sut().delete_product(ProductId::new(99)).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_products_一致なしはnot_found() {
        let result = sut().search_products("zzz").await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_products_全件削除後は空で成功する() {
        let sut = sut();
        sut.delete_product(ProductId::new(1)).await.unwrap();
        sut.delete_product(ProductId::new(2)).await.unwrap();

        let products = sut.list_products().await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_リポジトリエラーはdatabaseエラーに変換される() {
        let sut = ProductUseCaseImpl::new(Arc::new(FailingProductRepository));

        assert!(matches!(
            sut.list_products().await,
            Err(CoreError::Database(_))
        ));
        assert!(matches!(
            sut.create_product(ProductDraft::new("x", Decimal::ONE)).await,
            Err(CoreError::Database(_))
        ));
        assert!(matches!(
            sut.search_products("x").await,
            Err(CoreError::Database(_))
        ));
    }
}

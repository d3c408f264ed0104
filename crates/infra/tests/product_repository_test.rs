//! InMemoryProductRepository 統合テスト
//!
//! 公開 API（`ProductRepository` トレイト）経由でストアの不変条件を検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p catalog-infra --test product_repository_test
//! ```

use std::{collections::HashSet, sync::Arc};

use catalog_domain::product::{Product, ProductDraft, ProductId};
use catalog_infra::repository::{InMemoryProductRepository, ProductRepository};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;

// =============================================================================
// ヘルパー
// =============================================================================

fn product(id: i32, name: &str, price: Decimal) -> Product {
    Product::new(ProductId::new(id), name, price)
}

fn seeded() -> InMemoryProductRepository {
    InMemoryProductRepository::with_seed_data()
}

fn ids(products: &[Product]) -> Vec<i32> {
    products.iter().map(|p| p.id().as_i32()).collect()
}

// =============================================================================
// find_all / find_by_id
// =============================================================================

#[tokio::test]
async fn test_find_all_初期データを挿入順で返す() {
    let sut = seeded();

    let products = sut.find_all().await.unwrap();

    assert_eq!(
        products,
        vec![
            product(1, "Product1", Decimal::new(105, 1)),
            product(2, "Product2", Decimal::new(200, 1)),
        ]
    );
}

#[tokio::test]
async fn test_find_all_更新がなければ同じ結果を返す() {
    let sut = seeded();

    let first = sut.find_all().await.unwrap();
    let second = sut.find_all().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_find_all_全件削除後は空を返す() {
    let sut = seeded();
    sut.delete(ProductId::new(1)).await.unwrap();
    sut.delete(ProductId::new(2)).await.unwrap();

    let products = sut.find_all().await.unwrap();

    assert!(products.is_empty());
}

#[rstest]
#[case(1, Some("Product1"))]
#[case(2, Some("Product2"))]
#[case(99, None)]
#[tokio::test]
async fn test_find_by_id_存在有無に応じた結果を返す(
    #[case] id: i32,
    #[case] expected_name: Option<&str>,
) {
    let sut = seeded();

    let found = sut.find_by_id(ProductId::new(id)).await.unwrap();

    assert_eq!(found.as_ref().map(Product::name), expected_name);
}

// =============================================================================
// insert
// =============================================================================

#[tokio::test]
async fn test_insert_最大id_plus_1が採番され末尾に追加される() {
    let sut = seeded();

    let created = sut
        .insert(ProductDraft::new("Product3", Decimal::new(50, 1)))
        .await
        .unwrap();

    assert_eq!(created, product(3, "Product3", Decimal::new(50, 1)));
    assert_eq!(ids(&sut.find_all().await.unwrap()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_insert_削除で歯抜けになっても最大idを基準に採番する() {
    let sut = InMemoryProductRepository::with_products(vec![
        product(7, "a", Decimal::ONE),
        product(3, "b", Decimal::ONE),
    ]);
    sut.delete(ProductId::new(3)).await.unwrap();

    let created = sut.insert(ProductDraft::new("c", Decimal::ONE)).await.unwrap();

    assert_eq!(created.id(), ProductId::new(8));
}

#[tokio::test]
async fn test_insert_空のストアでは1から採番する() {
    let sut = InMemoryProductRepository::new();

    let created = sut
        .insert(ProductDraft::new("first", Decimal::ZERO))
        .await
        .unwrap();

    assert_eq!(created.id(), ProductId::FIRST);
}

#[tokio::test]
async fn test_insert_最大idが上限の場合はエラーを返す() {
    let sut = InMemoryProductRepository::with_products(vec![product(
        i32::MAX,
        "max",
        Decimal::ONE,
    )]);

    let result = sut.insert(ProductDraft::new("overflow", Decimal::ONE)).await;

    assert!(result.is_err());
    assert_eq!(sut.find_all().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_insert_並行実行してもidが重複しない() {
    let sut: Arc<dyn ProductRepository> = Arc::new(seeded());

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let repo = Arc::clone(&sut);
            tokio::spawn(async move {
                repo.insert(ProductDraft::new(format!("concurrent-{i}"), Decimal::ONE))
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let all = sut.find_all().await.unwrap();
    let unique: HashSet<i32> = ids(&all).into_iter().collect();
    assert_eq!(all.len(), 66);
    assert_eq!(unique.len(), 66, "ID が一意であること");
    assert_eq!(unique, (1..=66).collect::<HashSet<i32>>());
}

// =============================================================================
// update
// =============================================================================

#[tokio::test]
async fn test_update_idを維持して名前と価格を更新する() {
    let sut = seeded();

    let updated = sut
        .update(
            ProductId::new(1),
            ProductDraft::new("Updated", Decimal::new(999, 1)),
        )
        .await
        .unwrap();

    let expected = product(1, "Updated", Decimal::new(999, 1));
    assert_eq!(updated, Some(expected.clone()));
    assert_eq!(sut.find_by_id(ProductId::new(1)).await.unwrap(), Some(expected));
    // 並び順は変わらない
    assert_eq!(ids(&sut.find_all().await.unwrap()), vec![1, 2]);
}

#[tokio::test]
async fn test_update_存在しないidはnoneを返しストアを変更しない() {
    let sut = seeded();
    let before = sut.find_all().await.unwrap();

    let updated = sut
        .update(ProductId::new(99), ProductDraft::new("x", Decimal::ONE))
        .await
        .unwrap();

    assert_eq!(updated, None);
    assert_eq!(sut.find_all().await.unwrap(), before);
}

// =============================================================================
// delete
// =============================================================================

#[tokio::test]
async fn test_delete_削除後は取得できない() {
    let sut = seeded();

    let deleted = sut.delete(ProductId::new(2)).await.unwrap();

    assert!(deleted);
    assert_eq!(sut.find_by_id(ProductId::new(2)).await.unwrap(), None);
    assert_eq!(ids(&sut.find_all().await.unwrap()), vec![1]);
}

#[tokio::test]
async fn test_delete_存在しないidはfalseを返す() {
    let sut = seeded();

    let deleted = sut.delete(ProductId::new(99)).await.unwrap();

    assert!(!deleted);
    assert_eq!(sut.find_all().await.unwrap().len(), 2);
}

// =============================================================================
// search_by_name
// =============================================================================

#[tokio::test]
async fn test_search_by_name_大文字小文字を区別しない() {
    let sut = seeded();

    let lower = sut.search_by_name("product").await.unwrap();
    let upper = sut.search_by_name("PRODUCT").await.unwrap();

    assert_eq!(lower, upper);
    assert_eq!(ids(&lower), vec![1, 2]);
}

#[tokio::test]
async fn test_search_by_name_部分一致で挿入順を維持する() {
    let sut = InMemoryProductRepository::with_products(vec![
        product(4, "Green Tea", Decimal::ONE),
        product(1, "Coffee", Decimal::ONE),
        product(9, "Black tea", Decimal::ONE),
    ]);

    let matched = sut.search_by_name("TEA").await.unwrap();

    assert_eq!(ids(&matched), vec![4, 9]);
}

#[tokio::test]
async fn test_search_by_name_一致しない場合は空を返す() {
    let sut = seeded();

    let matched = sut.search_by_name("zzz").await.unwrap();

    assert!(matched.is_empty());
}

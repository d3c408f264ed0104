//! # 商品
//!
//! カタログが管理する唯一のエンティティ。
//!
//! ## ID 採番規則
//!
//! 新しい商品の ID は「ストア内の最大 ID + 1」とする。
//! ストアが空の場合は [`ProductId::FIRST`]（= 1）から始める。
//! クライアントが指定した ID は常に無視される。
//!
//! ## 使用例
//!
//! ```rust
//! use catalog_domain::product::{Product, ProductDraft, ProductId};
//! use rust_decimal::Decimal;
//!
//! let product = Product::new(ProductId::new(1), "Product1", Decimal::new(105, 1));
//! let updated = product.with_details(ProductDraft::new("Updated", Decimal::new(999, 1)));
//!
//! assert_eq!(updated.id(), ProductId::new(1));
//! assert_eq!(updated.name(), "Updated");
//! ```

use derive_more::{Display, From};
use rust_decimal::Decimal;

use crate::DomainError;

/// 商品の一意識別子
///
/// ストアが採番する整数 ID。クライアントからは指定できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display("{_0}")]
pub struct ProductId(i32);

impl ProductId {
    /// 空のストアで最初に採番される ID
    pub const FIRST: Self = Self(1);

    /// 既存の整数値から ID を作成する
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// 次の ID を返す（上限到達時は `None`）
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

/// 商品の作成・更新に使う入力値
///
/// ID を持たない。作成時はストアが ID を採番し、
/// 更新時はパスで指定された既存の ID が維持される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name:  String,
    pub price: Decimal,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// 商品エンティティ
///
/// # 不変条件
///
/// - `id` は生成後に変更されない
/// - `name` と `price` には制約がない（空文字列、0 以下の価格も許容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id:    ProductId,
    name:  String,
    price: Decimal,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// 採番済みの ID と入力値から商品を作成する
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// 名前と価格を差し替えた商品を返す（ID は維持）
    pub fn with_details(self, draft: ProductDraft) -> Self {
        Self {
            id:    self.id,
            name:  draft.name,
            price: draft.price,
        }
    }

    /// 名前に `keyword` を大文字小文字を区別せずに含むかを判定する
    ///
    /// ロケール非依存の序数比較。1 文字ずつ単純小文字化（`fold_char`）してから部分一致を取る。
    pub fn name_contains_ignore_case(&self, keyword: &str) -> bool {
        let keyword: Vec<char> = keyword.chars().map(fold_char).collect();
        if keyword.is_empty() {
            return true;
        }
        let name: Vec<char> = self.name.chars().map(fold_char).collect();
        name.windows(keyword.len()).any(|window| window == keyword.as_slice())
    }
}

/// 1 文字を単純小文字化する
///
/// 前後の文字に依存せず、小文字化が 1 文字に収まる場合のみ変換する。
/// 末尾の `Σ` も `σ` になり、`İ` のように複数文字へ展開される文字はそのまま残す。
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// 既存の商品一覧から次に採番する ID を決定する
///
/// - 空の場合: [`ProductId::FIRST`]
/// - それ以外: 最大 ID + 1
pub fn next_product_id(products: &[Product]) -> Result<ProductId, DomainError> {
    match products.iter().map(Product::id).max() {
        None => Ok(ProductId::FIRST),
        Some(max) => max.checked_next().ok_or(DomainError::IdExhausted {
            entity_type: "Product",
        }),
    }
}

/// 起動時にストアへ投入する初期データ
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Product1", Decimal::new(105, 1)),
        Product::new(ProductId::new(2), "Product2", Decimal::new(200, 1)),
    ]
}

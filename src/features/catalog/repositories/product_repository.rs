use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::core::error::Result;
use crate::features::catalog::models::{Product, ProductFilter, ProductListResult, Variant};
use crate::features::categories::models::Category;

/// Storage capability for products.
///
/// Every returned [`Product`] carries its category and its complete variant
/// list, ordered by variant id. Callers never issue follow-up queries.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products matching `filter`, paged by its offset and limit, plus the
    /// total match count before paging. Pages follow insertion order.
    async fn find_with_filter(&self, filter: &ProductFilter) -> Result<ProductListResult>;

    /// The product with this exact code, if any
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>>;
}

const PRODUCT_COLUMNS: &str = "SELECT p.id, p.code, p.price, \
     c.id AS category_id, c.code AS category_code, c.name AS category_name";

const PRODUCT_SOURCE: &str = " FROM products p JOIN categories c ON c.id = p.category_id";

/// Product joined with its category, before variants are attached
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    code: String,
    price: Decimal,
    category_id: i64,
    category_code: String,
    category_name: String,
}

impl ProductRow {
    fn into_product(self, variants: Vec<Variant>) -> Product {
        Product {
            id: self.id,
            code: self.code,
            price: self.price,
            category: Category {
                id: self.category_id,
                code: self.category_code,
                name: self.category_name,
            },
            variants,
        }
    }
}

fn push_filter(qb: &mut QueryBuilder<'static, Postgres>, filter: &ProductFilter) {
    let category_code = filter.category_code();
    if let Some(code) = category_code {
        qb.push(" WHERE c.code = ").push_bind(code.to_string());
    }
    if let Some(bound) = filter.price_less_than {
        qb.push(if category_code.is_some() {
            " AND "
        } else {
            " WHERE "
        });
        qb.push("p.price < ").push_bind(bound);
    }
}

/// `COUNT(*)` over the filtered products
fn count_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*)");
    qb.push(PRODUCT_SOURCE);
    push_filter(&mut qb, filter);
    qb
}

/// One page of filtered products with their category columns
fn page_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(PRODUCT_COLUMNS);
    qb.push(PRODUCT_SOURCE);
    push_filter(&mut qb, filter);
    qb.push(" ORDER BY p.id OFFSET ")
        .push_bind(filter.offset.max(0))
        .push(" LIMIT ")
        .push_bind(filter.limit.max(0));
    qb
}

/// Give each row its own variants, keeping row order and the order variants
/// arrive in. Rows without variants get an empty list.
fn attach_variants(rows: Vec<ProductRow>, variants: Vec<Variant>) -> Vec<Product> {
    let mut by_product: HashMap<i64, Vec<Variant>> = HashMap::new();
    for variant in variants {
        by_product.entry(variant.product_id).or_default().push(variant);
    }

    rows.into_iter()
        .map(|row| {
            let variants = by_product.remove(&row.id).unwrap_or_default();
            row.into_product(variants)
        })
        .collect()
}

/// PostgreSQL-backed product storage
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the variants of all given products in one query and attach them
    async fn with_variants(&self, rows: Vec<ProductRow>) -> Result<Vec<Product>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let variants = sqlx::query_as::<_, Variant>(
            r#"
            SELECT id, product_id, name, sku, price
            FROM product_variants
            WHERE product_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&product_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(attach_variants(rows, variants))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_with_filter(&self, filter: &ProductFilter) -> Result<ProductListResult> {
        let mut count = count_query(filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        if total == 0 || filter.limit <= 0 {
            return Ok(ProductListResult {
                products: Vec::new(),
                total,
            });
        }

        let mut page = page_query(filter);
        let rows = page
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(ProductListResult {
            products: self.with_variants(rows).await?,
            total,
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>> {
        let sql = format!("{PRODUCT_COLUMNS}{PRODUCT_SOURCE} WHERE p.code = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.with_variants(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

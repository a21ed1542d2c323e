//! Repository for the `products` table.

use burnerhub_core::catalog::ProductQuery;
use burnerhub_core::search::like_pattern;
use burnerhub_core::types::ProductId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, image_url, category, features, \
                        created_at, updated_at";

/// Provides CRUD and catalog queries for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, image_url, category, features)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(&input.features)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: ProductId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products matching the catalog query.
    ///
    /// The sort expression comes from a closed enum, so interpolating it is safe;
    /// filter values are always bound.
    pub async fn list(pool: &PgPool, params: &ProductQuery) -> Result<Vec<Product>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${bind_idx} ESCAPE '\\' OR description ILIKE ${bind_idx} ESCAPE '\\')"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM products {where_clause} ORDER BY {order_by} {direction}",
            order_by = params.sort_by.order_by(),
            direction = params.sort_order.keyword(),
        );

        let mut q = sqlx::query_as::<_, Product>(&query);
        if let Some(ref category) = params.category {
            q = q.bind(category);
        }
        if let Some(ref search) = params.search {
            q = q.bind(like_pattern(search));
        }
        q.fetch_all(pool).await
    }

    /// Count all products.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                image_url = COALESCE($5, image_url),
                category = COALESCE($6, category),
                features = COALESCE($7, features),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(&input.features)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: ProductId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

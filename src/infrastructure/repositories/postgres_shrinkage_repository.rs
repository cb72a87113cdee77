use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use super::errors::map_sqlx_error;
use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::{ShrinkageRepository, PRODUCT_SEARCH_LIMIT};
use crate::domain::shrinkage::{
    BranchIds, NewShrinkageDetailLine, NewShrinkageHeader, Product, ShrinkageDetailLine,
    ShrinkageReason, ShrinkageSummary,
};

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    date: NaiveDate,
    host_name: String,
    branch_id: String,
    total_evaluated: Decimal,
    total_shrinkage: Decimal,
}

impl From<SummaryRow> for ShrinkageSummary {
    fn from(r: SummaryRow) -> Self {
        ShrinkageSummary {
            id: r.id,
            date: r.date,
            host_name: r.host_name,
            branch_id: r.branch_id,
            total_evaluated: r.total_evaluated,
            total_shrinkage: r.total_shrinkage,
        }
    }
}

#[derive(Debug, FromRow)]
struct DetailLineRow {
    header_id: i64,
    product_id: String,
    product_description: Option<String>,
    quantity: Decimal,
    unit_price: Decimal,
    reason_id: i32,
    reason_description: Option<String>,
}

impl From<DetailLineRow> for ShrinkageDetailLine {
    fn from(r: DetailLineRow) -> Self {
        ShrinkageDetailLine {
            header_id: r.header_id,
            product_id: r.product_id,
            product_description: r.product_description,
            quantity: r.quantity,
            unit_price: r.unit_price,
            reason_id: r.reason_id,
            reason_description: r.reason_description,
        }
    }
}

#[derive(Debug, FromRow)]
struct ReasonRow {
    id: i32,
    description: String,
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    description: String,
    sale_price: Decimal,
}

/// PostgreSQL implementation of ShrinkageRepository
///
/// Works against the `met_mame` (header), `met_detmame` (detail),
/// `met_motmerma` (reasons) and `catalogo` (products) tables. Column names
/// are mixed case and therefore quoted.
pub struct PostgresShrinkageRepository {
    pool: PgPool,
}

impl PostgresShrinkageRepository {
    /// Creates a new PostgresShrinkageRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShrinkageRepository for PostgresShrinkageRepository {
    async fn list_by_branches(
        &self,
        branches: &BranchIds,
    ) -> RepositoryResult<Vec<ShrinkageSummary>> {
        let rows: Vec<SummaryRow> = sqlx::query_as(
            r#"
            SELECT
                m."Id" AS id,
                m."Fecha" AS date,
                m."Anfitrion" AS host_name,
                m."Sucursal" AS branch_id,
                m."TotalEvaluado" AS total_evaluated,
                COALESCE(SUM(d."CantidadMerma" * d."PrecioUnitario"), 0) AS total_shrinkage
            FROM met_mame m
            LEFT JOIN met_detmame d ON d."IdMerma" = m."Id"
            WHERE m."Sucursal" = ANY($1)
            GROUP BY m."Id", m."Fecha", m."Anfitrion", m."Sucursal", m."TotalEvaluado"
            ORDER BY m."Fecha" DESC
            "#,
        )
        .bind(branches.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list shrinkage by branches", e))?;

        tracing::debug!(branches = %branches, count = rows.len(), "Fetched shrinkage headers");

        Ok(rows.into_iter().map(ShrinkageSummary::from).collect())
    }

    async fn create_header(&self, header: &NewShrinkageHeader) -> RepositoryResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO met_mame ("Fecha", "Anfitrion", "Sucursal", "TotalEvaluado")
            VALUES ($1, $2, $3, $4)
            RETURNING "Id"
            "#,
        )
        .bind(header.date())
        .bind(header.host_name())
        .bind(header.branch_id())
        .bind(header.total_evaluated())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create shrinkage header", e))?;

        tracing::info!(id, branch = header.branch_id(), "Created shrinkage header");

        Ok(id)
    }

    async fn add_detail_line(&self, line: &NewShrinkageDetailLine) -> RepositoryResult<()> {
        let result = match line.unit_price() {
            Some(unit_price) => sqlx::query(
                r#"
                INSERT INTO met_detmame ("IdMerma", "IdProducto", "CantidadMerma", "PrecioUnitario", "IdMotivo")
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(line.header_id())
            .bind(line.product_id())
            .bind(line.quantity())
            .bind(unit_price)
            .bind(line.reason_id())
            .execute(&self.pool)
            .await,
            // Price taken from the catalog; no row is inserted for an unknown product
            None => sqlx::query(
                r#"
                INSERT INTO met_detmame ("IdMerma", "IdProducto", "CantidadMerma", "PrecioUnitario", "IdMotivo")
                SELECT $1, c."Id", $3, c."PrecioVenta", $4
                FROM catalogo c
                WHERE c."Id" = $2
                "#,
            )
            .bind(line.header_id())
            .bind(line.product_id())
            .bind(line.quantity())
            .bind(line.reason_id())
            .execute(&self.pool)
            .await,
        }
        .map_err(|e| map_sqlx_error("Failed to add shrinkage detail line", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::InvalidInput(format!(
                "Unknown product: {}",
                line.product_id()
            )));
        }

        tracing::debug!(
            header_id = line.header_id(),
            product_id = line.product_id(),
            catalog_price = line.unit_price().is_none(),
            "Added shrinkage detail line"
        );

        Ok(())
    }

    async fn list_detail_lines(&self, header_id: i64) -> RepositoryResult<Vec<ShrinkageDetailLine>> {
        let rows: Vec<DetailLineRow> = sqlx::query_as(
            r#"
            SELECT
                d."IdMerma" AS header_id,
                d."IdProducto" AS product_id,
                c."Descripcion" AS product_description,
                d."CantidadMerma" AS quantity,
                d."PrecioUnitario" AS unit_price,
                d."IdMotivo" AS reason_id,
                r."Descripcion" AS reason_description
            FROM met_detmame d
            LEFT JOIN catalogo c ON c."Id" = d."IdProducto"
            LEFT JOIN met_motmerma r ON r."Id" = d."IdMotivo"
            WHERE d."IdMerma" = $1
            ORDER BY d."IdProducto"
            "#,
        )
        .bind(header_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list shrinkage detail lines", e))?;

        Ok(rows.into_iter().map(ShrinkageDetailLine::from).collect())
    }

    async fn list_reasons(&self) -> RepositoryResult<Vec<ShrinkageReason>> {
        let rows: Vec<ReasonRow> = sqlx::query_as(
            r#"
            SELECT "Id" AS id, "Descripcion" AS description
            FROM met_motmerma
            ORDER BY "Descripcion"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list shrinkage reasons", e))?;

        Ok(rows
            .into_iter()
            .map(|r| ShrinkageReason {
                id: r.id,
                description: r.description,
            })
            .collect())
    }

    async fn search_products(&self, term: &str) -> RepositoryResult<Vec<Product>> {
        let pattern = format!("%{}%", term);

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT "Id" AS id, "Descripcion" AS description, "PrecioVenta" AS sale_price
            FROM catalogo
            WHERE "Descripcion" LIKE $1 OR "Id" LIKE $1
            LIMIT $2
            "#,
        )
        .bind(&pattern)
        .bind(PRODUCT_SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to search products", e))?;

        tracing::debug!(term, count = rows.len(), "Product search");

        Ok(rows
            .into_iter()
            .map(|r| Product {
                id: r.id,
                description: r.description,
                sale_price: r.sale_price,
            })
            .collect())
    }
}

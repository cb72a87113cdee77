use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::middleware::AuthenticatedUser;
use crate::api::state::AppState;
use crate::domain::shrinkage::{
    BranchIds, NewShrinkageDetailLine, NewShrinkageHeader, Product, ShrinkageDetailLine,
    ShrinkageReason, ShrinkageSummary,
};

/// `estatus` value the front end checks for on success
const STATUS_OK: u8 = 1;

/// Request body for creating a shrinkage header
#[derive(Debug, Deserialize)]
pub struct CreateShrinkageRequest {
    /// Defaults to today's date (UTC) when omitted
    #[serde(rename = "Fecha", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Anfitrion")]
    pub host_name: String,
    #[serde(rename = "Sucursal", alias = "idCentro")]
    pub branch_id: String,
    #[serde(rename = "TotalEvaluado", default)]
    pub total_evaluated: Decimal,
}

/// Request body for attaching a product line to a header
#[derive(Debug, Deserialize)]
pub struct AddDetailLineRequest {
    #[serde(rename = "IdProducto", alias = "CodigoBarras")]
    pub product_id: String,
    #[serde(rename = "CantidadMerma", alias = "Cantidad")]
    pub quantity: Decimal,
    /// Catalog sale price applies when omitted
    #[serde(rename = "PrecioUnitario", alias = "Precio", default)]
    pub unit_price: Option<Decimal>,
    #[serde(rename = "IdMotivo", alias = "idMotMer")]
    pub reason_id: i32,
}

/// Query string for product search
#[derive(Debug, Deserialize)]
pub struct ProductSearchQuery {
    #[serde(default)]
    pub q: String,
}

/// One listed header; the id is also emitted as `idMaMe` and the branch as
/// `idCentro`, the names the front end reads
#[derive(Debug, Serialize)]
pub struct ShrinkageSummaryResponse {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "idMaMe")]
    pub legacy_id: i64,
    #[serde(rename = "Fecha")]
    pub date: NaiveDate,
    #[serde(rename = "Anfitrion")]
    pub host_name: String,
    #[serde(rename = "Sucursal")]
    pub branch_id: String,
    #[serde(rename = "idCentro")]
    pub legacy_branch_id: String,
    #[serde(rename = "TotalEvaluado", with = "rust_decimal::serde::float")]
    pub total_evaluated: Decimal,
    #[serde(rename = "TotalMerma", with = "rust_decimal::serde::float")]
    pub total_shrinkage: Decimal,
}

impl From<ShrinkageSummary> for ShrinkageSummaryResponse {
    fn from(summary: ShrinkageSummary) -> Self {
        Self {
            id: summary.id,
            legacy_id: summary.id,
            date: summary.date,
            host_name: summary.host_name,
            legacy_branch_id: summary.branch_id.clone(),
            branch_id: summary.branch_id,
            total_evaluated: summary.total_evaluated,
            total_shrinkage: summary.total_shrinkage,
        }
    }
}

/// One stored line; product, quantity and price are repeated under the
/// front end's names (`CodigoBarras`, `Cantidad`, `Precio`, `nombreProducto`,
/// `descripcionMotivo`)
#[derive(Debug, Serialize)]
pub struct DetailLineResponse {
    #[serde(rename = "IdMerma")]
    pub header_id: i64,
    #[serde(rename = "IdProducto")]
    pub product_id: String,
    #[serde(rename = "CodigoBarras")]
    pub barcode: String,
    #[serde(rename = "Descripcion")]
    pub product_description: Option<String>,
    #[serde(rename = "nombreProducto")]
    pub product_name: Option<String>,
    #[serde(rename = "CantidadMerma", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(rename = "Cantidad", with = "rust_decimal::serde::float")]
    pub legacy_quantity: Decimal,
    #[serde(rename = "PrecioUnitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(rename = "Precio", with = "rust_decimal::serde::float")]
    pub legacy_unit_price: Decimal,
    #[serde(rename = "IdMotivo")]
    pub reason_id: i32,
    #[serde(rename = "Motivo")]
    pub reason_description: Option<String>,
    #[serde(rename = "descripcionMotivo")]
    pub legacy_reason_description: Option<String>,
    #[serde(rename = "Total", with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

impl From<ShrinkageDetailLine> for DetailLineResponse {
    fn from(line: ShrinkageDetailLine) -> Self {
        let line_total = line.line_total();
        Self {
            header_id: line.header_id,
            barcode: line.product_id.clone(),
            product_id: line.product_id,
            product_name: line.product_description.clone(),
            product_description: line.product_description,
            quantity: line.quantity,
            legacy_quantity: line.quantity,
            unit_price: line.unit_price,
            legacy_unit_price: line.unit_price,
            reason_id: line.reason_id,
            legacy_reason_description: line.reason_description.clone(),
            reason_description: line.reason_description,
            line_total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReasonResponse {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Descripcion")]
    pub description: String,
}

impl From<ShrinkageReason> for ReasonResponse {
    fn from(reason: ShrinkageReason) -> Self {
        Self {
            id: reason.id,
            description: reason.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Descripcion")]
    pub description: String,
    #[serde(rename = "PrecioVenta", with = "rust_decimal::serde::float")]
    pub sale_price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            description: product.description,
            sale_price: product.sale_price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShrinkageListResponse {
    pub estatus: u8,
    pub mensaje: String,
    pub mermas: Vec<ShrinkageSummaryResponse>,
}

#[derive(Debug, Serialize)]
pub struct CreatedShrinkage {
    #[serde(rename = "idMaMe")]
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateShrinkageResponse {
    pub estatus: u8,
    pub mensaje: String,
    pub merma: CreatedShrinkage,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub estatus: u8,
    pub mensaje: String,
}

#[derive(Debug, Serialize)]
pub struct DetailLineListResponse {
    pub estatus: u8,
    pub mensaje: String,
    pub productos: Vec<DetailLineResponse>,
}

#[derive(Debug, Serialize)]
pub struct ReasonListResponse {
    pub estatus: u8,
    pub mensaje: String,
    pub motivos: Vec<ReasonResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub estatus: u8,
    pub mensaje: String,
    pub productos: Vec<ProductResponse>,
}

/// Shrinkage headers of the given branches with their aggregated totals
///
/// GET /mermas/sucursales/:ids (comma separated ids)
pub async fn list_by_branches(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ShrinkageListResponse>, ApiError> {
    let Path(ids) = path?;
    let branches = BranchIds::parse(&ids).map_err(ApiError::bad_request)?;

    let mermas: Vec<ShrinkageSummaryResponse> = state
        .shrinkage
        .list_by_branches(&branches)
        .await?
        .into_iter()
        .map(ShrinkageSummaryResponse::from)
        .collect();

    Ok(Json(ShrinkageListResponse {
        estatus: STATUS_OK,
        mensaje: format!("{} mermas encontradas", mermas.len()),
        mermas,
    }))
}

/// Register a new shrinkage header
///
/// POST /mermas
pub async fn create_header(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    payload: Result<Json<CreateShrinkageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShrinkageResponse>), ApiError> {
    let Json(req) = payload?;
    let date = req.date.unwrap_or_else(|| Utc::now().date_naive());
    let header = NewShrinkageHeader::new(date, req.host_name, req.branch_id, req.total_evaluated)
        .map_err(ApiError::bad_request)?;

    let id = state.shrinkage.create_header(&header).await?;

    tracing::info!(id, subject = %caller.subject, "Shrinkage registered");

    Ok((
        StatusCode::CREATED,
        Json(CreateShrinkageResponse {
            estatus: STATUS_OK,
            mensaje: format!("Merma creada exitosamente con ID: {}", id),
            merma: CreatedShrinkage { id },
        }),
    ))
}

/// Attach a product line to an existing header
///
/// POST /mermas/:id/productos
pub async fn add_detail_line(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AddDetailLineRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let Path(header_id) = path?;
    let Json(req) = payload?;
    let line = NewShrinkageDetailLine::new(
        header_id,
        req.product_id,
        req.quantity,
        req.unit_price,
        req.reason_id,
    )
    .map_err(ApiError::bad_request)?;

    state.shrinkage.add_detail_line(&line).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            estatus: STATUS_OK,
            mensaje: format!("Producto agregado a la merma {}", header_id),
        }),
    ))
}

/// Product lines of one header
///
/// GET /mermas/:id/productos
pub async fn list_detail_lines(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DetailLineListResponse>, ApiError> {
    let Path(header_id) = path?;
    let productos: Vec<DetailLineResponse> = state
        .shrinkage
        .list_detail_lines(header_id)
        .await?
        .into_iter()
        .map(DetailLineResponse::from)
        .collect();

    Ok(Json(DetailLineListResponse {
        estatus: STATUS_OK,
        mensaje: format!("{} productos en la merma {}", productos.len(), header_id),
        productos,
    }))
}

/// All shrinkage reasons ordered by description
///
/// GET /motivos-merma
pub async fn list_reasons(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
) -> Result<Json<ReasonListResponse>, ApiError> {
    let motivos: Vec<ReasonResponse> = state
        .shrinkage
        .list_reasons()
        .await?
        .into_iter()
        .map(ReasonResponse::from)
        .collect();

    Ok(Json(ReasonListResponse {
        estatus: STATUS_OK,
        mensaje: format!("{} motivos encontrados", motivos.len()),
        motivos,
    }))
}

/// Catalog search by description or product id
///
/// GET /productos/buscar?q=
pub async fn search_products(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    query: Result<Query<ProductSearchQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let Query(query) = query?;
    let productos: Vec<ProductResponse> = state
        .shrinkage
        .search_products(query.q.trim())
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(Json(ProductListResponse {
        estatus: STATUS_OK,
        mensaje: format!("{} productos encontrados", productos.len()),
        productos,
    }))
}

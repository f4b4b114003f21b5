//! Report handlers.
//!
//! - `GET /buyers/report-purchase-orders[?id=N]`
//! - `GET /localities/report-sellers[?id=N]`
//! - `GET /localities/report-carriers[?id=N]`

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};

use crate::api::dto::{
    BuyerPurchaseOrdersResponse, DataResponse, LocalityCarriersResponse, LocalitySellersResponse,
    ReportQuery,
};
use crate::error::AppResult;
use crate::state::AppState;

/// Report routes merged into the `/buyers` router.
pub fn buyer_report_routes() -> Router<AppState> {
    Router::new().route("/report-purchase-orders", get(buyers_purchase_orders))
}

/// Report routes merged into the `/localities` router.
pub fn locality_report_routes() -> Router<AppState> {
    Router::new()
        .route("/report-sellers", get(locality_sellers))
        .route("/report-carriers", get(locality_carriers))
}

async fn buyers_purchase_orders(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> AppResult<Json<DataResponse<BuyerPurchaseOrdersResponse>>> {
    let Query(query) = query?;
    let rows = state.services.reports.buyers_purchase_orders(query.id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

async fn locality_sellers(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> AppResult<Json<DataResponse<LocalitySellersResponse>>> {
    let Query(query) = query?;
    let rows = state.services.reports.locality_sellers(query.id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

async fn locality_carriers(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> AppResult<Json<DataResponse<LocalityCarriersResponse>>> {
    let Query(query) = query?;
    let rows = state.services.reports.locality_carriers(query.id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

//! Report query parameters and rows.

use serde::{Deserialize, Serialize};

use crate::models::{BuyerPurchaseOrdersReport, LocalityCarriersReport, LocalitySellersReport};

/// `?id=N` restricts a report to one parent row.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct BuyerPurchaseOrdersResponse {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}

impl From<BuyerPurchaseOrdersReport> for BuyerPurchaseOrdersResponse {
    fn from(row: BuyerPurchaseOrdersReport) -> Self {
        Self {
            id: row.id,
            card_number_id: row.card_number_id,
            first_name: row.first_name,
            last_name: row.last_name,
            purchase_orders_count: row.purchase_orders_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocalitySellersResponse {
    pub locality_id: i32,
    pub locality_name: String,
    pub sellers_count: i64,
}

impl From<LocalitySellersReport> for LocalitySellersResponse {
    fn from(row: LocalitySellersReport) -> Self {
        Self {
            locality_id: row.locality_id,
            locality_name: row.locality_name,
            sellers_count: row.sellers_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocalityCarriersResponse {
    pub locality_id: i32,
    pub locality_name: String,
    pub carriers_count: i64,
}

impl From<LocalityCarriersReport> for LocalityCarriersResponse {
    fn from(row: LocalityCarriersReport) -> Self {
        Self {
            locality_id: row.locality_id,
            locality_name: row.locality_name,
            carriers_count: row.carriers_count,
        }
    }
}

//! Aggregated rows produced by the report queries.

use diesel::prelude::*;

/// A buyer with the number of purchase orders referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct BuyerPurchaseOrdersReport {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}

/// A locality with the number of sellers located in it.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct LocalitySellersReport {
    pub locality_id: i32,
    pub locality_name: String,
    pub sellers_count: i64,
}

/// A locality with the number of carriers located in it.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct LocalityCarriersReport {
    pub locality_id: i32,
    pub locality_name: String,
    pub carriers_count: i64,
}

//! Purchase order DTOs.
//!
//! `order_date` travels as an ISO 8601 calendar date (`2021-04-04`).

use jiff::civil::Date;
use jiff_diesel::ToDiesel;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderPatch};
use crate::utils::validate::not_blank;

/// Request body for creating a purchase order. Every field is required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseOrderRequest {
    #[validate(custom(function = "not_blank"))]
    pub order_number: String,
    pub order_date: Date,
    #[validate(custom(function = "not_blank"))]
    pub tracking_code: String,
    pub buyer_id: i32,
    pub product_record_id: i32,
    pub order_status_id: i32,
}

impl From<CreatePurchaseOrderRequest> for NewPurchaseOrder {
    fn from(request: CreatePurchaseOrderRequest) -> Self {
        Self {
            order_number: request.order_number,
            order_date: request.order_date.to_diesel(),
            tracking_code: request.tracking_code,
            buyer_id: request.buyer_id,
            product_record_id: request.product_record_id,
            order_status_id: request.order_status_id,
        }
    }
}

/// Request body for a sparse update.
///
/// Absent or `null` fields keep their stored value; supplied values,
/// including `0` and `""`, are applied and validated.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePurchaseOrderRequest {
    #[validate(custom(function = "not_blank"))]
    pub order_number: Option<String>,
    pub order_date: Option<Date>,
    #[validate(custom(function = "not_blank"))]
    pub tracking_code: Option<String>,
    pub buyer_id: Option<i32>,
    pub product_record_id: Option<i32>,
    pub order_status_id: Option<i32>,
}

impl From<UpdatePurchaseOrderRequest> for PurchaseOrderPatch {
    fn from(request: UpdatePurchaseOrderRequest) -> Self {
        Self {
            order_number: request.order_number,
            order_date: request.order_date.map(|date| date.to_diesel()),
            tracking_code: request.tracking_code,
            buyer_id: request.buyer_id,
            product_record_id: request.product_record_id,
            order_status_id: request.order_status_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PurchaseOrderResponse {
    pub id: i32,
    pub order_number: String,
    pub order_date: Date,
    pub tracking_code: String,
    pub buyer_id: i32,
    pub product_record_id: i32,
    pub order_status_id: i32,
}

impl From<PurchaseOrder> for PurchaseOrderResponse {
    fn from(order: PurchaseOrder) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            order_date: order.order_date.to_jiff(),
            tracking_code: order.tracking_code,
            buyer_id: order.buyer_id,
            product_record_id: order.product_record_id,
            order_status_id: order.order_status_id,
        }
    }
}

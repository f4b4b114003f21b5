//! Buyer request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Buyer, BuyerPatch, NewBuyer};
use crate::utils::validate::not_blank;

/// Request body for creating a buyer. Every field is required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBuyerRequest {
    #[validate(custom(function = "not_blank"))]
    pub card_number_id: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
}

impl From<CreateBuyerRequest> for NewBuyer {
    fn from(request: CreateBuyerRequest) -> Self {
        Self {
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

/// Request body for a sparse update.
///
/// Absent or `null` fields keep their stored value; supplied values,
/// including `0` and `""`, are applied and validated.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBuyerRequest {
    #[validate(custom(function = "not_blank"))]
    pub card_number_id: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub last_name: Option<String>,
}

impl From<UpdateBuyerRequest> for BuyerPatch {
    fn from(request: UpdateBuyerRequest) -> Self {
        Self {
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BuyerResponse {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Buyer> for BuyerResponse {
    fn from(buyer: Buyer) -> Self {
        Self {
            id: buyer.id,
            card_number_id: buyer.card_number_id,
            first_name: buyer.first_name,
            last_name: buyer.last_name,
        }
    }
}

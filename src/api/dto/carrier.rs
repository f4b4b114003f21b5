//! Carrier DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Carrier, CarrierPatch, NewCarrier};
use crate::utils::validate::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarrierRequest {
    #[validate(custom(function = "not_blank"))]
    pub cid: String,
    #[validate(custom(function = "not_blank"))]
    pub company_name: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(custom(function = "not_blank"))]
    pub telephone: String,
    pub locality_id: i32,
}

impl From<CreateCarrierRequest> for NewCarrier {
    fn from(request: CreateCarrierRequest) -> Self {
        Self {
            cid: request.cid,
            company_name: request.company_name,
            address: request.address,
            telephone: request.telephone,
            locality_id: request.locality_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCarrierRequest {
    #[validate(custom(function = "not_blank"))]
    pub cid: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub company_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}

impl From<UpdateCarrierRequest> for CarrierPatch {
    fn from(request: UpdateCarrierRequest) -> Self {
        Self {
            cid: request.cid,
            company_name: request.company_name,
            address: request.address,
            telephone: request.telephone,
            locality_id: request.locality_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarrierResponse {
    pub id: i32,
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

impl From<Carrier> for CarrierResponse {
    fn from(carrier: Carrier) -> Self {
        Self {
            id: carrier.id,
            cid: carrier.cid,
            company_name: carrier.company_name,
            address: carrier.address,
            telephone: carrier.telephone,
            locality_id: carrier.locality_id,
        }
    }
}

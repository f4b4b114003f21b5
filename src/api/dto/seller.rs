//! Seller DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewSeller, Seller, SellerPatch};
use crate::utils::validate::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSellerRequest {
    pub cid: i32,
    #[validate(custom(function = "not_blank"))]
    pub company_name: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(custom(function = "not_blank"))]
    pub telephone: String,
    pub locality_id: i32,
}

impl From<CreateSellerRequest> for NewSeller {
    fn from(request: CreateSellerRequest) -> Self {
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
pub struct UpdateSellerRequest {
    pub cid: Option<i32>,
    #[validate(custom(function = "not_blank"))]
    pub company_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}

impl From<UpdateSellerRequest> for SellerPatch {
    fn from(request: UpdateSellerRequest) -> Self {
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
pub struct SellerResponse {
    pub id: i32,
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

impl From<Seller> for SellerResponse {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id,
            cid: seller.cid,
            company_name: seller.company_name,
            address: seller.address,
            telephone: seller.telephone,
            locality_id: seller.locality_id,
        }
    }
}

//! Product DTOs. Dimensions, weights and rates are plain floats.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewProduct, Product, ProductPatch};
use crate::utils::validate::not_blank;

/// Request body for creating a product. Every field is required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(custom(function = "not_blank"))]
    pub product_code: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            product_code: request.product_code,
            description: request.description,
            width: request.width,
            height: request.height,
            length: request.length,
            net_weight: request.net_weight,
            expiration_rate: request.expiration_rate,
            recommended_freezing_temperature: request.recommended_freezing_temperature,
            freezing_rate: request.freezing_rate,
            product_type_id: request.product_type_id,
            seller_id: request.seller_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(custom(function = "not_blank"))]
    pub product_code: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<i32>,
    pub seller_id: Option<i32>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            product_code: request.product_code,
            description: request.description,
            width: request.width,
            height: request.height,
            length: request.length,
            net_weight: request.net_weight,
            expiration_rate: request.expiration_rate,
            recommended_freezing_temperature: request.recommended_freezing_temperature,
            freezing_rate: request.freezing_rate,
            product_type_id: request.product_type_id,
            seller_id: request.seller_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_code: product.product_code,
            description: product.description,
            width: product.width,
            height: product.height,
            length: product.length,
            net_weight: product.net_weight,
            expiration_rate: product.expiration_rate,
            recommended_freezing_temperature: product.recommended_freezing_temperature,
            freezing_rate: product.freezing_rate,
            product_type_id: product.product_type_id,
            seller_id: product.seller_id,
        }
    }
}

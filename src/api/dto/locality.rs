//! Locality request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Locality, LocalityPatch, NewLocality};
use crate::utils::validate::not_blank;

/// Request body for creating a locality. Every field is required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocalityRequest {
    #[validate(custom(function = "not_blank"))]
    pub zip_code: String,
    #[validate(custom(function = "not_blank"))]
    pub locality_name: String,
    #[validate(custom(function = "not_blank"))]
    pub province_name: String,
    #[validate(custom(function = "not_blank"))]
    pub country_name: String,
}

impl From<CreateLocalityRequest> for NewLocality {
    fn from(request: CreateLocalityRequest) -> Self {
        Self {
            zip_code: request.zip_code,
            locality_name: request.locality_name,
            province_name: request.province_name,
            country_name: request.country_name,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLocalityRequest {
    #[validate(custom(function = "not_blank"))]
    pub zip_code: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub locality_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub province_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub country_name: Option<String>,
}

impl From<UpdateLocalityRequest> for LocalityPatch {
    fn from(request: UpdateLocalityRequest) -> Self {
        Self {
            zip_code: request.zip_code,
            locality_name: request.locality_name,
            province_name: request.province_name,
            country_name: request.country_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocalityResponse {
    pub id: i32,
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

impl From<Locality> for LocalityResponse {
    fn from(locality: Locality) -> Self {
        Self {
            id: locality.id,
            zip_code: locality.zip_code,
            locality_name: locality.locality_name,
            province_name: locality.province_name,
            country_name: locality.country_name,
        }
    }
}

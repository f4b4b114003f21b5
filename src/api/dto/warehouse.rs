//! Warehouse request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewWarehouse, Warehouse, WarehousePatch};
use crate::utils::validate::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWarehouseRequest {
    #[validate(custom(function = "not_blank"))]
    pub warehouse_code: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(custom(function = "not_blank"))]
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: i32,
}

impl From<CreateWarehouseRequest> for NewWarehouse {
    fn from(request: CreateWarehouseRequest) -> Self {
        Self {
            warehouse_code: request.warehouse_code,
            address: request.address,
            telephone: request.telephone,
            minimum_capacity: request.minimum_capacity,
            minimum_temperature: request.minimum_temperature,
            locality_id: request.locality_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateWarehouseRequest {
    #[validate(custom(function = "not_blank"))]
    pub warehouse_code: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub telephone: Option<String>,
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
    pub locality_id: Option<i32>,
}

impl From<UpdateWarehouseRequest> for WarehousePatch {
    fn from(request: UpdateWarehouseRequest) -> Self {
        Self {
            warehouse_code: request.warehouse_code,
            address: request.address,
            telephone: request.telephone,
            minimum_capacity: request.minimum_capacity,
            minimum_temperature: request.minimum_temperature,
            locality_id: request.locality_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WarehouseResponse {
    pub id: i32,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: i32,
}

impl From<Warehouse> for WarehouseResponse {
    fn from(warehouse: Warehouse) -> Self {
        Self {
            id: warehouse.id,
            warehouse_code: warehouse.warehouse_code,
            address: warehouse.address,
            telephone: warehouse.telephone,
            minimum_capacity: warehouse.minimum_capacity,
            minimum_temperature: warehouse.minimum_temperature,
            locality_id: warehouse.locality_id,
        }
    }
}

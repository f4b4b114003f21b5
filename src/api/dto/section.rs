//! Section DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewSection, Section, SectionPatch};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSectionRequest {
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

impl From<CreateSectionRequest> for NewSection {
    fn from(request: CreateSectionRequest) -> Self {
        Self {
            section_number: request.section_number,
            current_temperature: request.current_temperature,
            minimum_temperature: request.minimum_temperature,
            current_capacity: request.current_capacity,
            minimum_capacity: request.minimum_capacity,
            maximum_capacity: request.maximum_capacity,
            warehouse_id: request.warehouse_id,
            product_type_id: request.product_type_id,
        }
    }
}

/// Request body for a sparse update.
///
/// Absent or `null` fields keep their stored value; supplied values,
/// including `0` and `""`, are applied and validated.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSectionRequest {
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub current_capacity: Option<i32>,
    pub minimum_capacity: Option<i32>,
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<i32>,
    pub product_type_id: Option<i32>,
}

impl From<UpdateSectionRequest> for SectionPatch {
    fn from(request: UpdateSectionRequest) -> Self {
        Self {
            section_number: request.section_number,
            current_temperature: request.current_temperature,
            minimum_temperature: request.minimum_temperature,
            current_capacity: request.current_capacity,
            minimum_capacity: request.minimum_capacity,
            maximum_capacity: request.maximum_capacity,
            warehouse_id: request.warehouse_id,
            product_type_id: request.product_type_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub id: i32,
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            id: section.id,
            section_number: section.section_number,
            current_temperature: section.current_temperature,
            minimum_temperature: section.minimum_temperature,
            current_capacity: section.current_capacity,
            minimum_capacity: section.minimum_capacity,
            maximum_capacity: section.maximum_capacity,
            warehouse_id: section.warehouse_id,
            product_type_id: section.product_type_id,
        }
    }
}

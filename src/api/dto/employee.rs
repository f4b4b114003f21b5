//! Employee request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Employee, EmployeePatch, NewEmployee};
use crate::utils::validate::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(custom(function = "not_blank"))]
    pub card_number_id: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    pub warehouse_id: i32,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Self {
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
            warehouse_id: request.warehouse_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(custom(function = "not_blank"))]
    pub card_number_id: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub last_name: Option<String>,
    pub warehouse_id: Option<i32>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(request: UpdateEmployeeRequest) -> Self {
        Self {
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
            warehouse_id: request.warehouse_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            card_number_id: employee.card_number_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            warehouse_id: employee.warehouse_id,
        }
    }
}

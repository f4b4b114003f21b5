//! Data Transfer Objects for API requests and responses.
//!
//! One module per resource holds its create/update requests and its
//! response shape; `data`, `error`, `health` and `report` are shared.

mod buyer;
mod carrier;
mod data;
mod employee;
mod error;
mod health;
mod locality;
mod product;
mod purchase_order;
mod report;
mod section;
mod seller;
mod warehouse;

pub use buyer::{BuyerResponse, CreateBuyerRequest, UpdateBuyerRequest};
pub use carrier::{CarrierResponse, CreateCarrierRequest, UpdateCarrierRequest};
pub use data::DataResponse;
pub use employee::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use locality::{CreateLocalityRequest, LocalityResponse, UpdateLocalityRequest};
pub use product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
pub use purchase_order::{
    CreatePurchaseOrderRequest, PurchaseOrderResponse, UpdatePurchaseOrderRequest,
};
pub use report::{
    BuyerPurchaseOrdersResponse, LocalityCarriersResponse, LocalitySellersResponse, ReportQuery,
};
pub use section::{CreateSectionRequest, SectionResponse, UpdateSectionRequest};
pub use seller::{CreateSellerRequest, SellerResponse, UpdateSellerRequest};
pub use warehouse::{CreateWarehouseRequest, UpdateWarehouseRequest, WarehouseResponse};

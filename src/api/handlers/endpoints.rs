//! HTTP bindings for each concrete resource.

use crate::api::dto::*;
use crate::api::handlers::resource::ResourceEndpoint;
use crate::models::{
    Buyer, Carrier, Employee, Locality, Product, PurchaseOrder, Section, Seller, Warehouse,
};
use crate::services::ResourceService;
use crate::state::AppState;

macro_rules! resource_endpoint {
    ($entity:ty, $create:ty, $update:ty, $response:ty, $service:ident) => {
        impl ResourceEndpoint for $entity {
            type CreateRequest = $create;
            type UpdateRequest = $update;
            type Response = $response;

            fn service(state: &AppState) -> &ResourceService<Self> {
                &state.services.$service
            }
        }
    };
}

resource_endpoint!(Buyer, CreateBuyerRequest, UpdateBuyerRequest, BuyerResponse, buyers);
resource_endpoint!(Seller, CreateSellerRequest, UpdateSellerRequest, SellerResponse, sellers);
resource_endpoint!(
    Employee,
    CreateEmployeeRequest,
    UpdateEmployeeRequest,
    EmployeeResponse,
    employees
);
resource_endpoint!(Product, CreateProductRequest, UpdateProductRequest, ProductResponse, products);
resource_endpoint!(Section, CreateSectionRequest, UpdateSectionRequest, SectionResponse, sections);
resource_endpoint!(
    Warehouse,
    CreateWarehouseRequest,
    UpdateWarehouseRequest,
    WarehouseResponse,
    warehouses
);
resource_endpoint!(Carrier, CreateCarrierRequest, UpdateCarrierRequest, CarrierResponse, carriers);
resource_endpoint!(
    Locality,
    CreateLocalityRequest,
    UpdateLocalityRequest,
    LocalityResponse,
    localities
);
resource_endpoint!(
    PurchaseOrder,
    CreatePurchaseOrderRequest,
    UpdatePurchaseOrderRequest,
    PurchaseOrderResponse,
    purchase_orders
);

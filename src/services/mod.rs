//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between
//! repositories and handlers.

mod report_service;
mod resource_service;

pub use report_service::ReportService;
pub use resource_service::ResourceService;

use crate::models::{
    Buyer, Carrier, Employee, Locality, Product, PurchaseOrder, Section, Seller, Warehouse,
};
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct Services {
    pub buyers: ResourceService<Buyer>,
    pub sellers: ResourceService<Seller>,
    pub employees: ResourceService<Employee>,
    pub products: ResourceService<Product>,
    pub sections: ResourceService<Section>,
    pub warehouses: ResourceService<Warehouse>,
    pub carriers: ResourceService<Carrier>,
    pub localities: ResourceService<Locality>,
    pub purchase_orders: ResourceService<PurchaseOrder>,
    pub reports: ReportService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            buyers: ResourceService::new(repos.buyers),
            sellers: ResourceService::new(repos.sellers),
            employees: ResourceService::new(repos.employees),
            products: ResourceService::new(repos.products),
            sections: ResourceService::new(repos.sections),
            warehouses: ResourceService::new(repos.warehouses),
            carriers: ResourceService::new(repos.carriers),
            localities: ResourceService::new(repos.localities),
            purchase_orders: ResourceService::new(repos.purchase_orders),
            reports: ReportService::new(repos.reports),
        }
    }
}

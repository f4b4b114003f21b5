//! Repository layer for data access operations.
//!
//! Every resource is stored behind [`ResourceRepository`]; the PostgreSQL
//! implementations live in `pg`, in-memory ones back the tests.

#[cfg(test)]
pub(crate) mod memory;
mod pg;
mod report_repo;
mod resource_repo;

pub use pg::{
    BuyerRepository, CarrierRepository, EmployeeRepository, LocalityRepository,
    ProductRepository, PurchaseOrderRepository, SectionRepository, SellerRepository,
    WarehouseRepository,
};
pub use report_repo::{PgReportRepository, ReportRepository};
pub use resource_repo::ResourceRepository;

use std::sync::Arc;

use crate::db::AsyncDbPool;
use crate::models::{
    Buyer, Carrier, Employee, Locality, Product, PurchaseOrder, Section, Seller, Warehouse,
};

/// Aggregates all repositories for convenient access.
///
/// Repositories are shared trait objects so that the storage backend can be
/// swapped without touching the services.
#[derive(Clone)]
pub struct Repositories {
    pub buyers: Arc<dyn ResourceRepository<Buyer>>,
    pub sellers: Arc<dyn ResourceRepository<Seller>>,
    pub employees: Arc<dyn ResourceRepository<Employee>>,
    pub products: Arc<dyn ResourceRepository<Product>>,
    pub sections: Arc<dyn ResourceRepository<Section>>,
    pub warehouses: Arc<dyn ResourceRepository<Warehouse>>,
    pub carriers: Arc<dyn ResourceRepository<Carrier>>,
    pub localities: Arc<dyn ResourceRepository<Locality>>,
    pub purchase_orders: Arc<dyn ResourceRepository<PurchaseOrder>>,
    pub reports: Arc<dyn ReportRepository>,
}

impl Repositories {
    /// Creates PostgreSQL repositories sharing one connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            buyers: Arc::new(BuyerRepository::new(pool.clone())),
            sellers: Arc::new(SellerRepository::new(pool.clone())),
            employees: Arc::new(EmployeeRepository::new(pool.clone())),
            products: Arc::new(ProductRepository::new(pool.clone())),
            sections: Arc::new(SectionRepository::new(pool.clone())),
            warehouses: Arc::new(WarehouseRepository::new(pool.clone())),
            carriers: Arc::new(CarrierRepository::new(pool.clone())),
            localities: Arc::new(LocalityRepository::new(pool.clone())),
            purchase_orders: Arc::new(PurchaseOrderRepository::new(pool.clone())),
            reports: Arc::new(PgReportRepository::new(pool)),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        use memory::InMemoryRepository;
        use report_repo::InMemoryReportRepository;

        let buyers = Arc::new(InMemoryRepository::<Buyer>::new());
        let sellers = Arc::new(InMemoryRepository::<Seller>::new());
        let carriers = Arc::new(InMemoryRepository::<Carrier>::new());
        let localities = Arc::new(InMemoryRepository::<Locality>::new());
        let purchase_orders = Arc::new(InMemoryRepository::<PurchaseOrder>::new());

        let reports = InMemoryReportRepository {
            buyers: buyers.clone(),
            purchase_orders: purchase_orders.clone(),
            localities: localities.clone(),
            sellers: sellers.clone(),
            carriers: carriers.clone(),
        };

        Self {
            buyers,
            sellers,
            employees: Arc::new(InMemoryRepository::<Employee>::new()),
            products: Arc::new(InMemoryRepository::<Product>::new()),
            sections: Arc::new(InMemoryRepository::<Section>::new()),
            warehouses: Arc::new(InMemoryRepository::<Warehouse>::new()),
            carriers,
            localities,
            purchase_orders,
            reports: Arc::new(reports),
        }
    }
}

//! Domain models and the generic resource contract they implement.

mod buyer;
mod carrier;
mod employee;
mod locality;
mod product;
mod purchase_order;
mod report;
mod resource;
mod section;
mod seller;
mod warehouse;

pub use buyer::{Buyer, BuyerPatch, NewBuyer};
pub use carrier::{Carrier, CarrierPatch, NewCarrier};
pub use employee::{Employee, EmployeePatch, NewEmployee};
pub use locality::{Locality, LocalityPatch, NewLocality};
pub use product::{NewProduct, Product, ProductPatch};
pub use purchase_order::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderPatch};
pub use report::{BuyerPurchaseOrdersReport, LocalityCarriersReport, LocalitySellersReport};
pub use resource::{Patch, Resource};
pub use section::{NewSection, Section, SectionPatch};
pub use seller::{NewSeller, Seller, SellerPatch};
pub use warehouse::{NewWarehouse, Warehouse, WarehousePatch};

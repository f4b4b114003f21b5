use diesel::prelude::*;
use jiff_diesel::Date;

use crate::models::resource::{Patch, Resource, merge};

/// Purchase order placed by a buyer. `order_date` is a calendar date with no
/// time zone attached.
#[derive(Debug, Clone, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::purchase_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PurchaseOrder {
    pub id: i32,
    pub order_number: String,
    pub order_date: Date,
    pub tracking_code: String,
    pub buyer_id: i32,
    pub product_record_id: i32,
    pub order_status_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::purchase_orders)]
pub struct NewPurchaseOrder {
    pub order_number: String,
    pub order_date: Date,
    pub tracking_code: String,
    pub buyer_id: i32,
    pub product_record_id: i32,
    pub order_status_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PurchaseOrderPatch {
    pub order_number: Option<String>,
    pub order_date: Option<Date>,
    pub tracking_code: Option<String>,
    pub buyer_id: Option<i32>,
    pub product_record_id: Option<i32>,
    pub order_status_id: Option<i32>,
}

impl Resource for PurchaseOrder {
    type New = NewPurchaseOrder;
    type Patch = PurchaseOrderPatch;
    type Key = String;

    const NAME: &'static str = "purchase_order";
    const KEY_FIELD: &'static str = "order_number";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &String {
        &self.order_number
    }

    fn new_key(new: &NewPurchaseOrder) -> &String {
        &new.order_number
    }

    fn from_new(id: i32, new: NewPurchaseOrder) -> Self {
        Self {
            id,
            order_number: new.order_number,
            order_date: new.order_date,
            tracking_code: new.tracking_code,
            buyer_id: new.buyer_id,
            product_record_id: new.product_record_id,
            order_status_id: new.order_status_id,
        }
    }
}

impl Patch<PurchaseOrder> for PurchaseOrderPatch {
    fn apply_to(self, target: &mut PurchaseOrder) {
        merge(&mut target.order_number, self.order_number);
        merge(&mut target.order_date, self.order_date);
        merge(&mut target.tracking_code, self.tracking_code);
        merge(&mut target.buyer_id, self.buyer_id);
        merge(&mut target.product_record_id, self.product_record_id);
        merge(&mut target.order_status_id, self.order_status_id);
    }
}

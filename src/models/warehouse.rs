use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::warehouses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Warehouse {
    pub id: i32,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::warehouses)]
pub struct NewWarehouse {
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct WarehousePatch {
    pub warehouse_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
    pub locality_id: Option<i32>,
}

impl Resource for Warehouse {
    type New = NewWarehouse;
    type Patch = WarehousePatch;
    type Key = String;

    const NAME: &'static str = "warehouse";
    const KEY_FIELD: &'static str = "warehouse_code";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &String {
        &self.warehouse_code
    }

    fn new_key(new: &NewWarehouse) -> &String {
        &new.warehouse_code
    }

    fn from_new(id: i32, new: NewWarehouse) -> Self {
        Self {
            id,
            warehouse_code: new.warehouse_code,
            address: new.address,
            telephone: new.telephone,
            minimum_capacity: new.minimum_capacity,
            minimum_temperature: new.minimum_temperature,
            locality_id: new.locality_id,
        }
    }
}

impl Patch<Warehouse> for WarehousePatch {
    fn apply_to(self, target: &mut Warehouse) {
        merge(&mut target.warehouse_code, self.warehouse_code);
        merge(&mut target.address, self.address);
        merge(&mut target.telephone, self.telephone);
        merge(&mut target.minimum_capacity, self.minimum_capacity);
        merge(&mut target.minimum_temperature, self.minimum_temperature);
        merge(&mut target.locality_id, self.locality_id);
    }
}

use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i32>,
}

impl Resource for Employee {
    type New = NewEmployee;
    type Patch = EmployeePatch;
    type Key = String;

    const NAME: &'static str = "employee";
    const KEY_FIELD: &'static str = "card_number_id";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &String {
        &self.card_number_id
    }

    fn new_key(new: &NewEmployee) -> &String {
        &new.card_number_id
    }

    fn from_new(id: i32, new: NewEmployee) -> Self {
        Self {
            id,
            card_number_id: new.card_number_id,
            first_name: new.first_name,
            last_name: new.last_name,
            warehouse_id: new.warehouse_id,
        }
    }
}

impl Patch<Employee> for EmployeePatch {
    fn apply_to(self, target: &mut Employee) {
        merge(&mut target.card_number_id, self.card_number_id);
        merge(&mut target.first_name, self.first_name);
        merge(&mut target.last_name, self.last_name);
        merge(&mut target.warehouse_id, self.warehouse_id);
    }
}

use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::sections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Section {
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

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::sections)]
pub struct NewSection {
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub current_capacity: Option<i32>,
    pub minimum_capacity: Option<i32>,
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<i32>,
    pub product_type_id: Option<i32>,
}

impl Resource for Section {
    type New = NewSection;
    type Patch = SectionPatch;
    type Key = i32;

    const NAME: &'static str = "section";
    const KEY_FIELD: &'static str = "section_number";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &i32 {
        &self.section_number
    }

    fn new_key(new: &NewSection) -> &i32 {
        &new.section_number
    }

    fn from_new(id: i32, new: NewSection) -> Self {
        Self {
            id,
            section_number: new.section_number,
            current_temperature: new.current_temperature,
            minimum_temperature: new.minimum_temperature,
            current_capacity: new.current_capacity,
            minimum_capacity: new.minimum_capacity,
            maximum_capacity: new.maximum_capacity,
            warehouse_id: new.warehouse_id,
            product_type_id: new.product_type_id,
        }
    }
}

impl Patch<Section> for SectionPatch {
    fn apply_to(self, target: &mut Section) {
        merge(&mut target.section_number, self.section_number);
        merge(&mut target.current_temperature, self.current_temperature);
        merge(&mut target.minimum_temperature, self.minimum_temperature);
        merge(&mut target.current_capacity, self.current_capacity);
        merge(&mut target.minimum_capacity, self.minimum_capacity);
        merge(&mut target.maximum_capacity, self.maximum_capacity);
        merge(&mut target.warehouse_id, self.warehouse_id);
        merge(&mut target.product_type_id, self.product_type_id);
    }
}

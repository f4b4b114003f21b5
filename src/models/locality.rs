use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::localities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Locality {
    pub id: i32,
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::localities)]
pub struct NewLocality {
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct LocalityPatch {
    pub zip_code: Option<String>,
    pub locality_name: Option<String>,
    pub province_name: Option<String>,
    pub country_name: Option<String>,
}

impl Resource for Locality {
    type New = NewLocality;
    type Patch = LocalityPatch;
    type Key = String;

    const NAME: &'static str = "locality";
    const KEY_FIELD: &'static str = "zip_code";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &String {
        &self.zip_code
    }

    fn new_key(new: &NewLocality) -> &String {
        &new.zip_code
    }

    fn from_new(id: i32, new: NewLocality) -> Self {
        Self {
            id,
            zip_code: new.zip_code,
            locality_name: new.locality_name,
            province_name: new.province_name,
            country_name: new.country_name,
        }
    }
}

impl Patch<Locality> for LocalityPatch {
    fn apply_to(self, target: &mut Locality) {
        merge(&mut target.zip_code, self.zip_code);
        merge(&mut target.locality_name, self.locality_name);
        merge(&mut target.province_name, self.province_name);
        merge(&mut target.country_name, self.country_name);
    }
}

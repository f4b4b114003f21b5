use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::carriers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Carrier {
    pub id: i32,
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::carriers)]
pub struct NewCarrier {
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct CarrierPatch {
    pub cid: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}

impl Resource for Carrier {
    type New = NewCarrier;
    type Patch = CarrierPatch;
    type Key = String;

    const NAME: &'static str = "carrier";
    const KEY_FIELD: &'static str = "cid";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &String {
        &self.cid
    }

    fn new_key(new: &NewCarrier) -> &String {
        &new.cid
    }

    fn from_new(id: i32, new: NewCarrier) -> Self {
        Self {
            id,
            cid: new.cid,
            company_name: new.company_name,
            address: new.address,
            telephone: new.telephone,
            locality_id: new.locality_id,
        }
    }
}

impl Patch<Carrier> for CarrierPatch {
    fn apply_to(self, target: &mut Carrier) {
        merge(&mut target.cid, self.cid);
        merge(&mut target.company_name, self.company_name);
        merge(&mut target.address, self.address);
        merge(&mut target.telephone, self.telephone);
        merge(&mut target.locality_id, self.locality_id);
    }
}

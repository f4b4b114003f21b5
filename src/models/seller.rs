use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::sellers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Seller {
    pub id: i32,
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::sellers)]
pub struct NewSeller {
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SellerPatch {
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}

impl Resource for Seller {
    type New = NewSeller;
    type Patch = SellerPatch;
    type Key = i32;

    const NAME: &'static str = "seller";
    const KEY_FIELD: &'static str = "cid";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &i32 {
        &self.cid
    }

    fn new_key(new: &NewSeller) -> &i32 {
        &new.cid
    }

    fn from_new(id: i32, new: NewSeller) -> Self {
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

impl Patch<Seller> for SellerPatch {
    fn apply_to(self, target: &mut Seller) {
        merge(&mut target.cid, self.cid);
        merge(&mut target.company_name, self.company_name);
        merge(&mut target.address, self.address);
        merge(&mut target.telephone, self.telephone);
        merge(&mut target.locality_id, self.locality_id);
    }
}

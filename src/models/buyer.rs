use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

/// Buyer model for reading from database
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::buyers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Buyer {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::buyers)]
pub struct NewBuyer {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct BuyerPatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Resource for Buyer {
    type New = NewBuyer;
    type Patch = BuyerPatch;
    type Key = String;

    const NAME: &'static str = "buyer";
    const KEY_FIELD: &'static str = "card_number_id";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &String {
        &self.card_number_id
    }

    fn new_key(new: &NewBuyer) -> &String {
        &new.card_number_id
    }

    fn from_new(id: i32, new: NewBuyer) -> Self {
        Self {
            id,
            card_number_id: new.card_number_id,
            first_name: new.first_name,
            last_name: new.last_name,
        }
    }
}

impl Patch<Buyer> for BuyerPatch {
    fn apply_to(self, target: &mut Buyer) {
        merge(&mut target.card_number_id, self.card_number_id);
        merge(&mut target.first_name, self.first_name);
        merge(&mut target.last_name, self.last_name);
    }
}

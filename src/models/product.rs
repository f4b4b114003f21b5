use diesel::prelude::*;

use crate::models::resource::{Patch, Resource, merge};

/// Product catalogue entry. Dimensions, weight and rates are stored as
/// double precision values.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i32,
    pub seller_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<i32>,
    pub seller_id: Option<i32>,
}

impl Resource for Product {
    type New = NewProduct;
    type Patch = ProductPatch;
    type Key = String;

    const NAME: &'static str = "product";
    const KEY_FIELD: &'static str = "product_code";

    fn id(&self) -> i32 {
        self.id
    }

    fn key(&self) -> &String {
        &self.product_code
    }

    fn new_key(new: &NewProduct) -> &String {
        &new.product_code
    }

    fn from_new(id: i32, new: NewProduct) -> Self {
        Self {
            id,
            product_code: new.product_code,
            description: new.description,
            width: new.width,
            height: new.height,
            length: new.length,
            net_weight: new.net_weight,
            expiration_rate: new.expiration_rate,
            recommended_freezing_temperature: new.recommended_freezing_temperature,
            freezing_rate: new.freezing_rate,
            product_type_id: new.product_type_id,
            seller_id: new.seller_id,
        }
    }
}

impl Patch<Product> for ProductPatch {
    fn apply_to(self, target: &mut Product) {
        merge(&mut target.product_code, self.product_code);
        merge(&mut target.description, self.description);
        merge(&mut target.width, self.width);
        merge(&mut target.height, self.height);
        merge(&mut target.length, self.length);
        merge(&mut target.net_weight, self.net_weight);
        merge(&mut target.expiration_rate, self.expiration_rate);
        merge(
            &mut target.recommended_freezing_temperature,
            self.recommended_freezing_temperature,
        );
        merge(&mut target.freezing_rate, self.freezing_rate);
        merge(&mut target.product_type_id, self.product_type_id);
        merge(&mut target.seller_id, self.seller_id);
    }
}

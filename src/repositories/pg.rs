//! PostgreSQL repositories built on diesel_async.
//!
//! Every resource table has the same shape: a serial `id` primary key and one
//! UNIQUE key column. The queries are therefore generated once per table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{
    Buyer, Carrier, Employee, Locality, Product, PurchaseOrder, Resource, Section, Seller,
    Warehouse,
};
use crate::repositories::ResourceRepository;

/// Reports a unique violation under the resource name rather than the table
/// name parsed from the constraint, matching the service's own key check.
fn with_resource_name(error: AppError, resource: &str) -> AppError {
    match error {
        AppError::Duplicate { field, value, .. } => AppError::Duplicate {
            entity: resource.to_string(),
            field,
            value,
        },
        other => other,
    }
}

macro_rules! pg_resource_repository {
    ($repo:ident, $entity:ty, $table:ident, $key:ident) => {
        /// PostgreSQL backed repository holding an async connection pool.
        ///
        /// `AsyncDbPool` uses `Arc` internally, so cloning only bumps a
        /// reference count.
        #[derive(Clone)]
        pub struct $repo {
            pool: AsyncDbPool,
        }

        impl $repo {
            pub fn new(pool: AsyncDbPool) -> Self {
                Self { pool }
            }
        }

        #[async_trait]
        impl ResourceRepository<$entity> for $repo {
            async fn get_all(&self) -> AppResult<Vec<$entity>> {
                use crate::schema::$table::dsl;
                let mut conn = self.pool.get().await?;

                dsl::$table
                    .select(<$entity>::as_select())
                    .order(dsl::id.asc())
                    .load(&mut conn)
                    .await
                    .map_err(|e| {
                        DatabaseErrorConverter::convert_diesel_error(
                            e,
                            concat!("list ", stringify!($table)),
                        )
                    })
            }

            async fn get_by_id(&self, id: i32) -> AppResult<$entity> {
                use crate::schema::$table::dsl;
                let mut conn = self.pool.get().await?;

                dsl::$table
                    .find(id)
                    .select(<$entity>::as_select())
                    .first(&mut conn)
                    .await
                    .optional()
                    .map_err(|e| {
                        DatabaseErrorConverter::convert_diesel_error(
                            e,
                            concat!("find ", stringify!($table)),
                        )
                    })?
                    .ok_or_else(|| AppError::not_found(<$entity>::NAME, "id", id))
            }

            async fn get_by_key(
                &self,
                key: &<$entity as Resource>::Key,
            ) -> AppResult<Option<$entity>> {
                use crate::schema::$table::dsl;
                let mut conn = self.pool.get().await?;

                dsl::$table
                    .filter(dsl::$key.eq(key))
                    .select(<$entity>::as_select())
                    .first(&mut conn)
                    .await
                    .optional()
                    .map_err(|e| {
                        DatabaseErrorConverter::convert_diesel_error(
                            e,
                            concat!("find ", stringify!($table), " by ", stringify!($key)),
                        )
                    })
            }

            async fn create(&self, new: <$entity as Resource>::New) -> AppResult<$entity> {
                use crate::schema::$table::dsl;
                let mut conn = self.pool.get().await?;

                tracing::debug!(table = stringify!($table), "Inserting row");
                diesel::insert_into(dsl::$table)
                    .values(&new)
                    .returning(<$entity>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(|e| {
                        with_resource_name(
                            DatabaseErrorConverter::convert_diesel_error(
                                e,
                                concat!("insert ", stringify!($table)),
                            ),
                            <$entity>::NAME,
                        )
                    })
            }

            async fn update(&self, entity: $entity) -> AppResult<$entity> {
                use crate::schema::$table::dsl;
                let mut conn = self.pool.get().await?;
                let id = entity.id;
                tracing::debug!(table = stringify!($table), id, "Updating row");

                diesel::update(dsl::$table.find(id))
                    .set(&entity)
                    .returning(<$entity>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .optional()
                    .map_err(|e| {
                        with_resource_name(
                            DatabaseErrorConverter::convert_diesel_error(
                                e,
                                concat!("update ", stringify!($table)),
                            ),
                            <$entity>::NAME,
                        )
                    })?
                    .ok_or_else(|| AppError::not_found(<$entity>::NAME, "id", id))
            }

            async fn delete(&self, id: i32) -> AppResult<()> {
                use crate::schema::$table::dsl;
                let mut conn = self.pool.get().await?;

                tracing::debug!(table = stringify!($table), id, "Deleting row");
                let affected = diesel::delete(dsl::$table.find(id))
                    .execute(&mut conn)
                    .await
                    .map_err(|e| {
                        DatabaseErrorConverter::convert_diesel_error(
                            e,
                            concat!("delete ", stringify!($table)),
                        )
                    })?;

                if affected == 0 {
                    return Err(AppError::not_found(<$entity>::NAME, "id", id));
                }
                Ok(())
            }
        }
    };
}

pg_resource_repository!(BuyerRepository, Buyer, buyers, card_number_id);
pg_resource_repository!(SellerRepository, Seller, sellers, cid);
pg_resource_repository!(EmployeeRepository, Employee, employees, card_number_id);
pg_resource_repository!(ProductRepository, Product, products, product_code);
pg_resource_repository!(SectionRepository, Section, sections, section_number);
pg_resource_repository!(WarehouseRepository, Warehouse, warehouses, warehouse_code);
pg_resource_repository!(CarrierRepository, Carrier, carriers, cid);
pg_resource_repository!(LocalityRepository, Locality, localities, zip_code);
pg_resource_repository!(PurchaseOrderRepository, PurchaseOrder, purchase_orders, order_number);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_is_renamed_to_resource() {
        let error = with_resource_name(
            AppError::duplicate("buyers", "card_number_id", "402323"),
            Buyer::NAME,
        );
        match error {
            AppError::Duplicate { entity, field, value } => {
                assert_eq!(entity, "buyer");
                assert_eq!(field, "card_number_id");
                assert_eq!(value, "402323");
            }
            other => panic!("Expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_other_errors_pass_through() {
        let error = with_resource_name(AppError::not_found("buyer", "id", 1), Buyer::NAME);
        assert!(matches!(error, AppError::NotFound { .. }));
    }
}

//! Aggregate queries joining a parent resource with the rows referencing it.

use async_trait::async_trait;
use diesel::dsl::count;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{BuyerPurchaseOrdersReport, LocalityCarriersReport, LocalitySellersReport};
use crate::schema::{buyers, carriers, localities, purchase_orders, sellers};

/// Read-only report queries.
///
/// Each query returns one row per parent (restricted to `id` when given),
/// including parents nothing references, which report a count of zero.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn buyers_purchase_orders(
        &self,
        buyer_id: Option<i32>,
    ) -> AppResult<Vec<BuyerPurchaseOrdersReport>>;

    async fn locality_sellers(&self, locality_id: Option<i32>)
    -> AppResult<Vec<LocalitySellersReport>>;

    async fn locality_carriers(
        &self,
        locality_id: Option<i32>,
    ) -> AppResult<Vec<LocalityCarriersReport>>;
}

#[derive(Clone)]
pub struct PgReportRepository {
    pool: AsyncDbPool,
}

impl PgReportRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn buyers_purchase_orders(
        &self,
        buyer_id: Option<i32>,
    ) -> AppResult<Vec<BuyerPurchaseOrdersReport>> {
        let mut conn = self.pool.get().await?;
        let columns = (
            buyers::id,
            buyers::card_number_id,
            buyers::first_name,
            buyers::last_name,
        );
        let selection = (
            buyers::id,
            buyers::card_number_id,
            buyers::first_name,
            buyers::last_name,
            count(purchase_orders::id.nullable()),
        );

        let result = match buyer_id {
            Some(buyer_id) => {
                buyers::table
                    .left_join(purchase_orders::table)
                    .filter(buyers::id.eq(buyer_id))
                    .group_by(columns)
                    .select(selection)
                    .order(buyers::id.asc())
                    .load::<BuyerPurchaseOrdersReport>(&mut conn)
                    .await
            }
            None => {
                buyers::table
                    .left_join(purchase_orders::table)
                    .group_by(columns)
                    .select(selection)
                    .order(buyers::id.asc())
                    .load::<BuyerPurchaseOrdersReport>(&mut conn)
                    .await
            }
        };

        result.map_err(|e| {
            DatabaseErrorConverter::convert_diesel_error(e, "report buyers purchase orders")
        })
    }

    async fn locality_sellers(
        &self,
        locality_id: Option<i32>,
    ) -> AppResult<Vec<LocalitySellersReport>> {
        let mut conn = self.pool.get().await?;
        let columns = (localities::id, localities::locality_name);
        let selection = (
            localities::id,
            localities::locality_name,
            count(sellers::id.nullable()),
        );

        let result = match locality_id {
            Some(locality_id) => {
                localities::table
                    .left_join(sellers::table)
                    .filter(localities::id.eq(locality_id))
                    .group_by(columns)
                    .select(selection)
                    .order(localities::id.asc())
                    .load::<LocalitySellersReport>(&mut conn)
                    .await
            }
            None => {
                localities::table
                    .left_join(sellers::table)
                    .group_by(columns)
                    .select(selection)
                    .order(localities::id.asc())
                    .load::<LocalitySellersReport>(&mut conn)
                    .await
            }
        };

        result.map_err(|e| {
            DatabaseErrorConverter::convert_diesel_error(e, "report locality sellers")
        })
    }

    async fn locality_carriers(
        &self,
        locality_id: Option<i32>,
    ) -> AppResult<Vec<LocalityCarriersReport>> {
        let mut conn = self.pool.get().await?;
        let columns = (localities::id, localities::locality_name);
        let selection = (
            localities::id,
            localities::locality_name,
            count(carriers::id.nullable()),
        );

        let result = match locality_id {
            Some(locality_id) => {
                localities::table
                    .left_join(carriers::table)
                    .filter(localities::id.eq(locality_id))
                    .group_by(columns)
                    .select(selection)
                    .order(localities::id.asc())
                    .load::<LocalityCarriersReport>(&mut conn)
                    .await
            }
            None => {
                localities::table
                    .left_join(carriers::table)
                    .group_by(columns)
                    .select(selection)
                    .order(localities::id.asc())
                    .load::<LocalityCarriersReport>(&mut conn)
                    .await
            }
        };

        result.map_err(|e| {
            DatabaseErrorConverter::convert_diesel_error(e, "report locality carriers")
        })
    }
}

#[cfg(test)]
pub use memory::InMemoryReportRepository;

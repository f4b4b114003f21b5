//! Report service: counts of rows referencing buyers and localities.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::repositories::ReportRepository;
use crate::models::{BuyerPurchaseOrdersReport, LocalityCarriersReport, LocalitySellersReport};

#[derive(Clone)]
pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self {
        Self { repo }
    }

    /// Purchase order counts per buyer, or for one buyer when `id` is given.
    ///
    /// An id that matches no buyer yields `NotFound`.
    pub async fn buyers_purchase_orders(
        &self,
        id: Option<i32>,
    ) -> AppResult<Vec<BuyerPurchaseOrdersReport>> {
        let rows = self.repo.buyers_purchase_orders(id).await?;
        require_rows(rows, "buyer", id)
    }

    pub async fn locality_sellers(&self, id: Option<i32>) -> AppResult<Vec<LocalitySellersReport>> {
        let rows = self.repo.locality_sellers(id).await?;
        require_rows(rows, "locality", id)
    }

    pub async fn locality_carriers(
        &self,
        id: Option<i32>,
    ) -> AppResult<Vec<LocalityCarriersReport>> {
        let rows = self.repo.locality_carriers(id).await?;
        require_rows(rows, "locality", id)
    }
}

fn require_rows<T>(rows: Vec<T>, entity: &str, id: Option<i32>) -> AppResult<Vec<T>> {
    match id {
        Some(id) if rows.is_empty() => Err(AppError::not_found(entity, "id", id)),
        _ => Ok(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewBuyer, NewLocality, NewPurchaseOrder, NewSeller};
    use crate::repositories::Repositories;
    use jiff_diesel::ToDiesel;

    fn new_order(number: &str, buyer_id: i32) -> NewPurchaseOrder {
        NewPurchaseOrder {
            order_number: number.to_string(),
            order_date: jiff::civil::date(2021, 4, 4).to_diesel(),
            tracking_code: "abscf123".to_string(),
            buyer_id,
            product_record_id: 1,
            order_status_id: 1,
        }
    }

    #[tokio::test]
    async fn test_buyer_report_counts_orders_and_includes_zero() {
        let repos = Repositories::in_memory();
        for card in ["1", "2"] {
            repos
                .buyers
                .create(NewBuyer {
                    card_number_id: card.to_string(),
                    first_name: "Jhon".to_string(),
                    last_name: "Doe".to_string(),
                })
                .await
                .unwrap();
        }
        repos.purchase_orders.create(new_order("a", 1)).await.unwrap();
        repos.purchase_orders.create(new_order("b", 1)).await.unwrap();

        let service = ReportService::new(repos.reports.clone());
        let rows = service.buyers_purchase_orders(None).await.unwrap();
        let counts: Vec<(i32, i64)> = rows.iter().map(|r| (r.id, r.purchase_orders_count)).collect();
        assert_eq!(counts, vec![(1, 2), (2, 0)]);

        let single = service.buyers_purchase_orders(Some(2)).await.unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].purchase_orders_count, 0);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repos = Repositories::in_memory();
        let service = ReportService::new(repos.reports.clone());

        assert!(matches!(
            service.locality_sellers(Some(3)).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(service.locality_carriers(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_locality_sellers_counts() {
        let repos = Repositories::in_memory();
        repos
            .localities
            .create(NewLocality {
                zip_code: "6700".to_string(),
                locality_name: "Lujan".to_string(),
                province_name: "Buenos Aires".to_string(),
                country_name: "Argentina".to_string(),
            })
            .await
            .unwrap();
        repos
            .sellers
            .create(NewSeller {
                cid: 1,
                company_name: "Meli".to_string(),
                address: "Rua 1".to_string(),
                telephone: "1199999999".to_string(),
                locality_id: 1,
            })
            .await
            .unwrap();

        let service = ReportService::new(repos.reports.clone());
        let rows = service.locality_sellers(Some(1)).await.unwrap();
        assert_eq!(rows[0].locality_name, "Lujan");
        assert_eq!(rows[0].sellers_count, 1);
    }
}

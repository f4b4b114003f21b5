//! Generic CRUD service shared by every resource.
//!
//! Enforces the rules all resources have in common: unique keys on create
//! and update, not-found on unknown ids, and sparse patching.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Patch, Resource};
use crate::repositories::ResourceRepository;

/// Business operations over one kind of resource.
///
/// Cloning shares the underlying repository.
pub struct ResourceService<E: Resource> {
    repo: Arc<dyn ResourceRepository<E>>,
}

impl<E: Resource> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Resource> ResourceService<E> {
    pub fn new(repo: Arc<dyn ResourceRepository<E>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.repo.get_all().await
    }

    /// Gets a resource by id, or `NotFound`.
    pub async fn get(&self, id: i32) -> AppResult<E> {
        self.repo.get_by_id(id).await
    }

    /// Creates a resource after checking its key is free.
    ///
    /// The repository still reports `Duplicate` when a concurrent insert
    /// claims the key between the check and the write.
    pub async fn create(&self, new: E::New) -> AppResult<E> {
        let key = E::new_key(&new);
        if self.repo.get_by_key(key).await?.is_some() {
            tracing::warn!(resource = E::NAME, key = %key, "Rejected create with taken key");
            return Err(AppError::duplicate(E::NAME, E::KEY_FIELD, key));
        }

        let created = self.repo.create(new).await?;
        tracing::info!(resource = E::NAME, id = created.id(), "Created resource");
        Ok(created)
    }

    /// Applies a sparse patch to an existing resource.
    ///
    /// Fields absent from the patch keep their stored values. Changing the
    /// key to one held by another resource yields `Duplicate`.
    pub async fn update(&self, id: i32, patch: E::Patch) -> AppResult<E> {
        let mut entity = self.repo.get_by_id(id).await?;
        let previous_key = entity.key().clone();
        patch.apply_to(&mut entity);

        if *entity.key() != previous_key
            && let Some(holder) = self.repo.get_by_key(entity.key()).await?
            && holder.id() != id
        {
            tracing::warn!(
                resource = E::NAME,
                id,
                key = %entity.key(),
                held_by = holder.id(),
                "Rejected update to taken key"
            );
            return Err(AppError::duplicate(E::NAME, E::KEY_FIELD, entity.key()));
        }

        let updated = self.repo.update(entity).await?;
        tracing::info!(resource = E::NAME, id, "Updated resource");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(resource = E::NAME, id, "Deleted resource");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Buyer, BuyerPatch, NewBuyer, NewSection, Section, SectionPatch};
    use crate::repositories::memory::InMemoryRepository;
    use proptest::prelude::*;

    fn buyer_service() -> ResourceService<Buyer> {
        ResourceService::new(Arc::new(InMemoryRepository::<Buyer>::new()))
    }

    fn new_buyer(card: &str, first: &str, last: &str) -> NewBuyer {
        NewBuyer {
            card_number_id: card.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn new_section(number: i32) -> NewSection {
        NewSection {
            section_number: number,
            current_temperature: 1.0,
            minimum_temperature: -5.0,
            current_capacity: 10,
            minimum_capacity: 5,
            maximum_capacity: 20,
            warehouse_id: 1,
            product_type_id: 1,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let service = buyer_service();
        let first = service.create(new_buyer("1", "Jhon", "Doe")).await.unwrap();
        let second = service.create(new_buyer("2", "Maria", "Silva")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(service.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_with_taken_key_is_duplicate() {
        let service = buyer_service();
        service.create(new_buyer("402323", "Jhon", "Doe")).await.unwrap();

        let err = service
            .create(new_buyer("402323", "Other", "Person"))
            .await
            .unwrap_err();
        match err {
            AppError::Duplicate { entity, field, value } => {
                assert_eq!(entity, "buyer");
                assert_eq!(field, "card_number_id");
                assert_eq!(value, "402323");
            }
            other => panic!("Expected Duplicate, got {:?}", other),
        }
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_only_touches_supplied_fields() {
        let service = buyer_service();
        let buyer = service.create(new_buyer("402323", "Jhon", "Doe")).await.unwrap();

        let patch = BuyerPatch {
            last_name: Some("Smith".to_string()),
            ..Default::default()
        };
        let updated = service.update(buyer.id, patch).await.unwrap();

        assert_eq!(updated.card_number_id, "402323");
        assert_eq!(updated.first_name, "Jhon");
        assert_eq!(updated.last_name, "Smith");
        assert_eq!(service.get(buyer.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_applies_zero_values() {
        let service = ResourceService::new(Arc::new(InMemoryRepository::<Section>::new()));
        let section = service.create(new_section(7)).await.unwrap();

        let patch = SectionPatch {
            current_capacity: Some(0),
            ..Default::default()
        };
        let updated = service.update(section.id, patch).await.unwrap();
        assert_eq!(updated.current_capacity, 0);
        assert_eq!(updated.section_number, 7);
    }

    #[tokio::test]
    async fn test_update_to_key_of_other_resource_is_duplicate() {
        let service = buyer_service();
        service.create(new_buyer("1", "Jhon", "Doe")).await.unwrap();
        let second = service.create(new_buyer("2", "Maria", "Silva")).await.unwrap();

        let patch = BuyerPatch {
            card_number_id: Some("1".to_string()),
            ..Default::default()
        };
        let err = service.update(second.id, patch).await.unwrap_err();
        assert!(matches!(err, AppError::Duplicate { .. }));
        assert_eq!(service.get(second.id).await.unwrap().card_number_id, "2");
    }

    #[tokio::test]
    async fn test_update_keeping_own_key_succeeds() {
        let service = buyer_service();
        let buyer = service.create(new_buyer("1", "Jhon", "Doe")).await.unwrap();

        let patch = BuyerPatch {
            card_number_id: Some("1".to_string()),
            first_name: Some("Jonathan".to_string()),
            ..Default::default()
        };
        let updated = service.update(buyer.id, patch).await.unwrap();
        assert_eq!(updated.first_name, "Jonathan");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let service = buyer_service();

        assert!(matches!(service.get(42).await, Err(AppError::NotFound { .. })));
        assert!(matches!(
            service.update(42, BuyerPatch::default()).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(service.delete(42).await, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = buyer_service();
        let buyer = service.create(new_buyer("1", "Jhon", "Doe")).await.unwrap();

        service.delete(buyer.id).await.unwrap();
        assert!(matches!(service.get(buyer.id).await, Err(AppError::NotFound { .. })));
        assert!(matches!(service.delete(buyer.id).await, Err(AppError::NotFound { .. })));
    }

    fn arb_patch() -> impl Strategy<Value = BuyerPatch> {
        (
            proptest::option::of("[a-z]{1,8}"),
            proptest::option::of("[A-Z][a-z]{0,8}"),
            proptest::option::of("[A-Z][a-z]{0,8}"),
        )
            .prop_map(|(card_number_id, first_name, last_name)| BuyerPatch {
                card_number_id,
                first_name,
                last_name,
            })
    }

    proptest! {
        #[test]
        fn prop_patch_is_idempotent(patch in arb_patch()) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let service = buyer_service();
                let buyer = service.create(new_buyer("seed", "Jhon", "Doe")).await.unwrap();

                let once = service.update(buyer.id, patch.clone()).await.unwrap();
                let twice = service.update(buyer.id, patch.clone()).await.unwrap();
                prop_assert_eq!(&once, &twice);

                let mut expected = buyer.clone();
                patch.apply_to(&mut expected);
                prop_assert_eq!(once, expected);
                Ok(())
            })?;
        }
    }
}

//! In-memory repositories backing unit and HTTP tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::Resource;
use crate::repositories::ResourceRepository;

struct Store<E> {
    rows: BTreeMap<i32, E>,
    next_id: i32,
}

/// Keeps records in an ordered map and enforces the unique key the same way
/// the database constraint does.
pub struct InMemoryRepository<E: Resource> {
    store: RwLock<Store<E>>,
}

impl<E: Resource> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<E: Resource> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored rows, used by the in-memory report queries.
    pub async fn snapshot(&self) -> Vec<E> {
        self.store.read().await.rows.values().cloned().collect()
    }
}

#[async_trait]
impl<E: Resource> ResourceRepository<E> for InMemoryRepository<E> {
    async fn get_all(&self) -> AppResult<Vec<E>> {
        Ok(self.snapshot().await)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<E> {
        self.store
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(E::NAME, "id", id))
    }

    async fn get_by_key(&self, key: &E::Key) -> AppResult<Option<E>> {
        Ok(self
            .store
            .read()
            .await
            .rows
            .values()
            .find(|row| row.key() == key)
            .cloned())
    }

    async fn create(&self, new: E::New) -> AppResult<E> {
        let mut store = self.store.write().await;
        let key = E::new_key(&new);
        if store.rows.values().any(|row| row.key() == key) {
            return Err(AppError::duplicate(E::NAME, E::KEY_FIELD, key));
        }

        let id = store.next_id;
        store.next_id += 1;
        let entity = E::from_new(id, new);
        store.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> AppResult<E> {
        let mut store = self.store.write().await;
        let id = entity.id();
        if !store.rows.contains_key(&id) {
            return Err(AppError::not_found(E::NAME, "id", id));
        }
        if store
            .rows
            .values()
            .any(|row| row.id() != id && row.key() == entity.key())
        {
            return Err(AppError::duplicate(E::NAME, E::KEY_FIELD, entity.key()));
        }

        store.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.store
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(E::NAME, "id", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Buyer, NewBuyer};

    fn new_buyer(card: &str) -> NewBuyer {
        NewBuyer {
            card_number_id: card.to_string(),
            first_name: "Jhon".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::<Buyer>::new();
        let first = repo.create(new_buyer("1")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(new_buyer("1")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_taken_key() {
        let repo = InMemoryRepository::<Buyer>::new();
        repo.create(new_buyer("402323")).await.unwrap();

        let err = repo.create(new_buyer("402323")).await.unwrap_err();
        assert!(matches!(err, AppError::Duplicate { ref field, .. } if field == "card_number_id"));
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let repo = InMemoryRepository::<Buyer>::new();
        assert!(matches!(repo.get_by_id(9).await, Err(AppError::NotFound { .. })));
        assert!(matches!(repo.delete(9).await, Err(AppError::NotFound { .. })));
        assert!(repo.get_by_key(&"9".to_string()).await.unwrap().is_none());
    }
}

//! An in-memory [`Repository`] for substituting storage in tests.

use std::cmp::Ordering;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::warn;

use crate::db::repository::{Direction, Repository, RepositoryError, SortOrder, new_document_id};
use crate::models::Document;

/// Documents kept in a concurrent map keyed by id. Listing without sort
/// orders returns documents by ascending id.
#[derive(Debug)]
pub struct MemoryRepository<T: Document> {
    documents: DashMap<String, T>,
}

impl<T: Document> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }
}

impl<T: Document> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_key<T: Document>(document: &T, property: &str) -> Option<String> {
    match serde_json::to_value(document).ok()?.get(property)? {
        Value::String(value) => Some(value.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn compare<T: Document>(a: &T, b: &T, sort: &[SortOrder]) -> Ordering {
    for order in sort {
        let ordering = sort_key(a, &order.property).cmp(&sort_key(b, &order.property));
        let ordering = match order.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[async_trait]
impl<T: Document> Repository<T> for MemoryRepository<T> {
    async fn save(&self, mut document: T) -> Result<T, RepositoryError> {
        let id = match document.id() {
            Some(id) => id.to_owned(),
            None => {
                let id = new_document_id();
                document.set_id(id.clone());
                id
            }
        };
        self.documents.insert(id, document.clone());
        Ok(document)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<T>, RepositoryError> {
        let sort: Vec<SortOrder> = sort
            .iter()
            .filter(|order| {
                let known = T::FIELDS.contains(&order.property.as_str());
                if !known {
                    warn!(property = %order.property, "Ignoring unknown sort property.");
                }
                known
            })
            .cloned()
            .collect();

        let mut documents: Vec<(String, T)> = self
            .documents
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        documents.sort_by(|(a_id, a), (b_id, b)| {
            if sort.is_empty() {
                a_id.cmp(b_id)
            } else {
                compare(a, b, &sort)
            }
        });
        Ok(documents.into_iter().map(|(_, document)| document).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.documents.remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.documents.clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.documents.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Album, Tag};

    fn album(name: &str) -> Album {
        Album {
            id: None,
            name: Some(name.to_string()),
            description: Some("AAAAA".to_string()),
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_replaces_existing() {
        let repository = MemoryRepository::<Album>::new();

        let saved = repository.save(album("first")).await.unwrap();
        let id = saved.id.clone().unwrap();
        assert!(!id.is_empty());

        let mut replacement = album("second");
        replacement.id = Some(id.clone());
        repository.save(replacement).await.unwrap();

        assert_eq!(repository.count().await.unwrap(), 1);
        let stored = repository.find_one(&id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_under_that_id() {
        let repository = MemoryRepository::<Tag>::new();
        repository.save(Tag { id: Some("custom".into()) }).await.unwrap();
        assert!(repository.find_one("custom").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn find_all_honours_sort_orders() {
        let repository = MemoryRepository::<Album>::new();
        for name in ["b", "c", "a"] {
            repository.save(album(name)).await.unwrap();
        }

        let names = |albums: Vec<Album>| -> Vec<String> {
            albums.into_iter().filter_map(|album| album.name).collect()
        };

        let ascending = repository.find_all(&[SortOrder::asc("name")]).await.unwrap();
        assert_eq!(names(ascending), ["a", "b", "c"]);

        let descending = repository.find_all(&[SortOrder::desc("name")]).await.unwrap();
        assert_eq!(names(descending), ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn find_all_skips_unknown_sort_property() {
        let repository = MemoryRepository::<Album>::new();
        for name in ["b", "a"] {
            repository.save(album(name)).await.unwrap();
        }

        let albums = repository
            .find_all(&[SortOrder::asc("caption"), SortOrder::asc("name")])
            .await
            .unwrap();
        let names: Vec<String> = albums.into_iter().filter_map(|album| album.name).collect();
        assert_eq!(names, ["a", "b"]);

        let unsorted = repository.find_all(&[SortOrder::desc("bogus")]).await.unwrap();
        assert_eq!(unsorted.len(), 2);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repository = MemoryRepository::<Album>::new();
        let saved = repository.save(album("x")).await.unwrap();
        let id = saved.id.unwrap();

        repository.delete(&id).await.unwrap();
        repository.delete(&id).await.unwrap();
        repository.delete("never-assigned").await.unwrap();

        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_all_clears_collection() {
        let repository = MemoryRepository::<Album>::new();
        repository.save(album("x")).await.unwrap();
        repository.save(album("y")).await.unwrap();
        repository.delete_all().await.unwrap();
        assert!(repository.find_all(&[]).await.unwrap().is_empty());
    }
}

//! The persistence gateway shared by every collection.
//!
//! A [`Repository`] is the only way handlers reach storage. It stores whole
//! documents keyed by a string id and adds no behaviour of its own on top of
//! the underlying store.

use async_trait::async_trait;
use sea_orm::{DbErr, Order};
use uuid::Uuid;

use crate::models::Document;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

#[async_trait]
pub trait Repository<T: Document>: Send + Sync {
    /// Inserts the document when it has no id or an unknown one, otherwise
    /// replaces the stored document. Returns the document with its id set.
    async fn save(&self, document: T) -> Result<T, RepositoryError>;

    /// Sort orders naming a property the document does not have are ignored.
    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<T>, RepositoryError>;

    async fn find_one(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    /// Removing an id that is not stored is not an error.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    async fn delete_all(&self) -> Result<(), RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;
}

/// Identifier assigned to a document on its first save.
pub fn new_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(property: impl Into<String>) -> Self {
        Self { property: property.into(), direction: Direction::Asc }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self { property: property.into(), direction: Direction::Desc }
    }

    /// Parses `sort` query values such as `id,desc`, `name` or
    /// `caption,location,asc`. A trailing direction applies to every
    /// property listed before it; repeated values accumulate in order.
    pub fn parse_all<S: AsRef<str>>(expressions: &[S]) -> Vec<SortOrder> {
        let mut orders = Vec::new();
        for expression in expressions {
            let tokens: Vec<&str> = expression
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect();

            let (properties, direction) = match tokens.split_last() {
                Some((last, rest)) if !rest.is_empty() => match Direction::parse(last) {
                    Some(direction) => (rest, direction),
                    None => (tokens.as_slice(), Direction::Asc),
                },
                _ => (tokens.as_slice(), Direction::Asc),
            };

            orders.extend(properties.iter().map(|property| SortOrder {
                property: (*property).to_string(),
                direction,
            }));
        }
        orders
    }
}

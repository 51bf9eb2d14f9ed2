//! Domain documents exchanged over HTTP and persisted through a repository.
//!
//! Each document carries an optional string identifier: it is absent on
//! creation and assigned by the storage layer on first save.

use serde::{Serialize, de::DeserializeOwned};

pub mod album;
pub mod media;
pub mod tag;

pub use album::Album;
pub use media::Media;
pub use tag::Tag;

/// A document stored in its own collection, keyed by a string id.
pub trait Document:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    /// Singular name used in alert headers and log lines (`album`).
    const ENTITY_NAME: &'static str;
    /// Path segment under `/api` (`albums`).
    const COLLECTION: &'static str;
    /// Field names as they appear in JSON, usable as sort keys.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}

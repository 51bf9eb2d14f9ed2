//! SeaORM Entity Crate
//!
//! Defines the SeaORM entities that map to the gallery collections.
//! Each collection is a single table keyed by a text `id`.

pub mod album;
pub mod media;
pub mod tag;

pub mod prelude {
    pub use super::album::Entity as Album;
    pub use super::album::Model as AlbumModel;
    pub use super::album::ActiveModel as AlbumActiveModel;
    pub use super::album::Column as AlbumColumn;

    pub use super::media::Entity as Media;
    pub use super::media::Model as MediaModel;
    pub use super::media::ActiveModel as MediaActiveModel;
    pub use super::media::Column as MediaColumn;

    pub use super::tag::Entity as Tag;
    pub use super::tag::Model as TagModel;
    pub use super::tag::ActiveModel as TagActiveModel;
    pub use super::tag::Column as TagColumn;
}

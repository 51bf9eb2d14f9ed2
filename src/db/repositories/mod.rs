//! sea-orm backed repositories, one per collection.

pub mod album_repository;
pub mod media_repository;
pub mod tag_repository;
pub mod memory;

pub use album_repository::AlbumRepository;
pub use media_repository::MediaRepository;
pub use memory::MemoryRepository;
pub use tag_repository::TagRepository;

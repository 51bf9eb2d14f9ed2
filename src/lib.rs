//! REST backend for a media gallery: albums, media and tags, each stored as
//! an independent collection and exposed through the same five CRUD routes.

pub mod db;
pub mod models;
pub mod server;
pub mod web;

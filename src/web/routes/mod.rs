pub mod resource;

pub use resource::resource_router;

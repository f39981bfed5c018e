pub mod collections;
pub mod manager;
pub mod repository;
pub mod schema;
pub mod users;

pub use collections::Collection;
pub use manager::StoreError;
pub use repository::{Page, Repository};

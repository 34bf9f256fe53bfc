pub mod config;
pub mod customer;
pub mod db;
pub mod errors;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod routes;
pub mod traits;

pub use errors::ApiError;
pub use models::Customer;
pub use pagination::Page;
pub use routes::router;
pub use traits::CRUDResource;

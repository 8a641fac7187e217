pub mod error;
pub mod handlers;
pub mod hateoas;
pub mod routes;

pub use hateoas::{HalResource, Link, LinkBuilder, Links};
pub use routes::{router, AppState};

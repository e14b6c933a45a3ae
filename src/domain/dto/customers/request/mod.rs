pub mod customer_request;
pub mod page_query;

pub use customer_request::*;
pub use page_query::*;

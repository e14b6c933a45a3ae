pub mod customer_response;

pub use customer_response::*;

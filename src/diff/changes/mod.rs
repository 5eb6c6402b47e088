//! Per-level change computers.
//!
//! Each computer compares one level of two documents and produces the
//! matching record from [`super::result`]. The endpoint computer drives the
//! others.

mod endpoints;
mod parameters;
mod responses;
mod schema;

pub use endpoints::EndpointChangeComputer;
pub use parameters::diff_parameters;
pub use responses::diff_responses;
pub use schema::diff_schemas;

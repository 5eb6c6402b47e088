//! Normalized representation of an API document.
//!
//! Both OpenAPI 3.x and Swagger 2.0 documents are parsed into these
//! structures before the diff engine compares them, so neither the
//! differencer nor the scoring engine needs to know which format a
//! document was written in.

mod operation;
mod schema;
mod spec;

pub use operation::*;
pub use schema::*;
pub use spec::*;
